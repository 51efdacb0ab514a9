// Mon Oct 19 2026 - Alex

//! Native structures whose layout is reported. Field widths are checked
//! against [`crate::abi::AbiProfile::CURRENT`] when this module compiles.

pub mod fuse;
pub mod stat;
pub mod timespec;

pub use fuse::{direct_io_field_mask, fuse_file_info, FileInfoView};
pub use stat::{stat_layout, STAT_SIZE};
pub use timespec::{timespec_layout, utime_now, utime_omit, TIMESPEC_SIZE, TIME_T_SIZE};
