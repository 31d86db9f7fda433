//! Turn rotation

/// Cyclic index over a fixed length.
///
/// Yields 0 on the first call and advances by one (wrapping) on each later
/// call.
#[derive(Debug, Clone)]
pub struct Counter {
    length: usize,
    current: Option<usize>,
}

impl Counter {
    pub fn new(length: usize) -> Self {
        debug_assert!(length > 0, "counter over an empty cycle");
        Self { length, current: None }
    }

    /// Advance and return the new index
    pub fn get(&mut self) -> usize {
        let next = match self.current {
            None => 0,
            Some(i) => (i + 1) % self.length,
        };
        self.current = Some(next);
        next
    }

    /// Index the next call to [`Counter::get`] will return
    pub fn peek(&self) -> usize {
        self.current.map_or(0, |i| (i + 1) % self.length)
    }
}

/// Yields whose turn it is, in a fixed rotation
#[derive(Debug, Clone)]
pub struct TurnQueue<T> {
    players: Vec<T>,
    counter: Counter,
}

impl<T: Clone> TurnQueue<T> {
    pub fn new(players: Vec<T>) -> Self {
        let counter = Counter::new(players.len());
        Self { players, counter }
    }

    /// Take the turn: returns the active player and advances the rotation
    pub fn next_player(&mut self) -> T {
        self.players[self.counter.get()].clone()
    }

    /// Player the next call to [`TurnQueue::next_player`] will return
    pub fn peek(&self) -> &T {
        &self.players[self.counter.peek()]
    }

    pub fn players(&self) -> &[T] {
        &self.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero_and_wraps() {
        let mut counter = Counter::new(3);
        let seen: Vec<_> = (0..7).map(|_| counter.get()).collect();
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_counter_of_one() {
        let mut counter = Counter::new(1);
        assert_eq!(counter.get(), 0);
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut counter = Counter::new(2);
        assert_eq!(counter.peek(), 0);
        assert_eq!(counter.peek(), 0);
        assert_eq!(counter.get(), 0);
        assert_eq!(counter.peek(), 1);
        assert_eq!(counter.get(), 1);
        assert_eq!(counter.peek(), 0);
    }

    #[test]
    fn test_queue_alternates() {
        let mut queue = TurnQueue::new(vec!["gamer1", "gamer2"]);
        assert_eq!(*queue.peek(), "gamer1");
        assert_eq!(queue.next_player(), "gamer1");
        assert_eq!(queue.next_player(), "gamer2");
        assert_eq!(queue.next_player(), "gamer1");
        assert_eq!(*queue.peek(), "gamer2");
    }
}
