//! Five-in-a-row GUI
//!
//! Hotseat play on a configurable grid.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gomoku::ui::{GameState, MatchApp};
use gomoku::MatchConfig;

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Five-in-a-row on an N x M grid")]
struct Args {
    /// Path to a TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Override the number of rows
    #[arg(long)]
    rows: Option<i32>,

    /// Override the number of columns
    #[arg(long)]
    cols: Option<i32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = MatchConfig::load_or_default(&args.config)?;
    if let Some(rows) = args.rows {
        config.grid.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.grid.cols = cols;
    }
    let state = GameState::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(MatchApp::new(cc, state)))),
    )?;
    Ok(())
}
