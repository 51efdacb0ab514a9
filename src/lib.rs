// Mon Oct 19 2026 - Alex

//! Reports native structure layouts (`stat`, `timespec`, `fuse_file_info`)
//! as `<Label> = <value>` lines for binding generators.

pub mod abi;
pub mod native;
pub mod report;
pub mod structure;
pub mod utils;

pub use abi::AbiProfile;
pub use report::{Fact, Label, LayoutReport, LayoutReporter, ReportError};
pub use structure::{FieldLayout, Offset, Size, StructureLayout};
