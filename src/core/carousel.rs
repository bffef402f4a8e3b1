//! Index arithmetic for the project carousel

/// Cursor over a fixed, ordered sequence of `len` items.
///
/// Every move wraps around; an empty carousel ignores all moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance to `(i + 1) mod len`
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step back to `(i - 1 + len) mod len`
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump straight to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}
