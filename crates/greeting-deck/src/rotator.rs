//! Free-running highlight index.
//!
//! Nothing on the page renders the highlighted card yet; the index is kept so
//! the timer behaves like the rest of the page and can be picked up later.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightRotator {
    current: usize,
    len: usize,
}

impl HighlightRotator {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Moves to the next card, wrapping after the last one.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_after_k_ticks() {
        for k in 0..23 {
            let mut rotator = HighlightRotator::new(5);
            for _ in 0..k {
                rotator.advance();
            }
            assert_eq!(rotator.current(), k % 5);
        }
    }

    #[test]
    fn test_empty_deck_stays_at_zero() {
        let mut rotator = HighlightRotator::new(0);
        assert_eq!(rotator.advance(), 0);
    }
}
