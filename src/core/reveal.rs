//! One-shot reveal latch for viewport entrance animations

/// Flips to revealed on the first visible observation and stays there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one visibility observation.
    ///
    /// Returns `true` only for the observation that triggers the reveal.
    pub fn observe(&mut self, is_visible: bool) -> bool {
        if self.revealed || !is_visible {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_observations_do_not_reveal() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_reveals_once() {
        let mut latch = RevealLatch::new();
        assert!(latch.observe(true));
        assert!(latch.is_revealed());

        // leaving and re-entering the viewport must not fire again
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }
}
