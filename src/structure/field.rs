// Mon Oct 19 2026 - Alex

use crate::structure::{Offset, Size};
use serde::Serialize;
use std::fmt;

/// Measured position and width of one field of a native structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldLayout {
    name: &'static str,
    offset: Offset,
    size: Size,
}

impl FieldLayout {
    pub const fn new(name: &'static str, offset: Offset, size: Size) -> Self {
        Self { name, offset, size }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// First byte past the field.
    pub fn end(&self) -> usize {
        self.offset.as_usize() + self.size.as_usize()
    }
}

impl fmt::Display for FieldLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} ({} bytes)", self.name, self.offset, self.size)
    }
}
