// Mon Oct 19 2026 - Alex

use crate::abi::AbiProfile;
use crate::structure::{Size, StructureLayout};
use crate::{assert_field_size, field_layout};
use libc::timespec;

assert_field_size!(timespec, tv_sec, AbiProfile::CURRENT.seconds_width);
assert_field_size!(timespec, tv_nsec, AbiProfile::CURRENT.nanoseconds_width);

pub const TIMESPEC_SIZE: Size = Size::of::<timespec>();
pub const TIME_T_SIZE: Size = Size::of::<libc::time_t>();

pub fn timespec_layout() -> StructureLayout {
    StructureLayout::new("timespec", TIMESPEC_SIZE)
        .with_field(field_layout!(timespec, tv_sec))
        .with_field(field_layout!(timespec, tv_nsec))
}

/// Marker placed in `tv_nsec` asking `utimensat` to leave a timestamp alone.
pub fn utime_omit() -> i64 {
    i64::from(libc::UTIME_OMIT)
}

/// Marker placed in `tv_nsec` asking `utimensat` to use the current time.
pub fn utime_now() -> i64 {
    i64::from(libc::UTIME_NOW)
}
