// Mon Oct 19 2026 - Alex

use serde::Serialize;
use std::fmt;

/// Byte distance from the start of a native structure to one of its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Offset {
    value: usize,
}

impl Offset {
    pub const fn new(value: usize) -> Self {
        Self { value }
    }

    pub const fn as_usize(&self) -> usize {
        self.value
    }

    pub fn as_i64(&self) -> i64 {
        self.value as i64
    }

    pub fn is_aligned(&self, alignment: usize) -> bool {
        self.value % alignment == 0
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
