// Mon Oct 19 2026 - Alex

use crate::report::Label;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub label: Label,
    pub value: i64,
}

impl Fact {
    pub fn new(label: Label, value: impl Into<i64>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// One output line, without the newline.
impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.label, self.value)
    }
}
