// Mon Oct 19 2026 - Alex

pub mod error;
pub mod field;
pub mod layout;
pub mod measure;
pub mod offset;
pub mod size;

pub use error::StructureError;
pub use field::FieldLayout;
pub use layout::StructureLayout;
pub use offset::Offset;
pub use size::Size;
