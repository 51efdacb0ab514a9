// Mon Oct 19 2026 - Alex

pub mod error;
pub mod fact;
pub mod label;
pub mod reporter;

pub use error::{ReportError, ReportResult};
pub use fact::Fact;
pub use label::Label;
pub use reporter::{LayoutReport, LayoutReporter};
