// Mon Oct 19 2026 - Alex

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Size {
    value: usize,
}

impl Size {
    pub const fn new(value: usize) -> Self {
        Self { value }
    }

    pub const fn of<T>() -> Self {
        Self::new(std::mem::size_of::<T>())
    }

    pub const fn as_usize(&self) -> usize {
        self.value
    }

    pub fn as_i64(&self) -> i64 {
        self.value as i64
    }

    /// Number of 64-bit words needed to hold this many bytes.
    pub const fn in_words(&self) -> usize {
        (self.value + 7) / 8
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_round_up() {
        assert_eq!(Size::new(0).in_words(), 0);
        assert_eq!(Size::new(1).in_words(), 1);
        assert_eq!(Size::new(8).in_words(), 1);
        assert_eq!(Size::new(144).in_words(), 18);
        assert_eq!(Size::new(145).in_words(), 19);
    }

    #[test]
    fn test_size_of_type() {
        assert_eq!(Size::of::<u32>().as_usize(), 4);
    }
}
