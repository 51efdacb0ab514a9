// Mon Oct 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StructureError {
    #[error("Field not found: {structure}.{field}")]
    FieldNotFound {
        structure: &'static str,
        field: &'static str,
    },
    #[error("Field {field} ends at {end}, past the {size} bytes of {structure}")]
    FieldOutOfBounds {
        structure: &'static str,
        field: &'static str,
        end: usize,
        size: usize,
    },
}
