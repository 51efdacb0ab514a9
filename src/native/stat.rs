// Mon Oct 19 2026 - Alex

use crate::abi::AbiProfile;
use crate::structure::{Size, StructureLayout};
use crate::{assert_field_size, field_layout};
use libc::stat;

const PROFILE: AbiProfile = AbiProfile::CURRENT;

assert_field_size!(stat, st_mode, PROFILE.mode_width);
assert_field_size!(stat, st_size, PROFILE.size_width);
assert_field_size!(stat, st_nlink, PROFILE.nlink_width);
assert_field_size!(stat, st_atime, PROFILE.seconds_width);
assert_field_size!(stat, st_mtime, PROFILE.seconds_width);
assert_field_size!(stat, st_atime_nsec, PROFILE.nanoseconds_width);
assert_field_size!(stat, st_mtime_nsec, PROFILE.nanoseconds_width);

pub const STAT_SIZE: Size = Size::of::<stat>();

/// The `struct stat` fields the generated bindings touch, in report order.
pub fn stat_layout() -> StructureLayout {
    StructureLayout::new("stat", STAT_SIZE)
        .with_field(field_layout!(stat, st_mode))
        .with_field(field_layout!(stat, st_size))
        .with_field(field_layout!(stat, st_nlink))
        .with_field(field_layout!(stat, st_atime))
        .with_field(field_layout!(stat, st_mtime))
        .with_field(field_layout!(stat, st_atime_nsec))
        .with_field(field_layout!(stat, st_mtime_nsec))
}
