// Mon Oct 19 2026 - Alex

//! libfuse 3 `struct fuse_file_info`, generated from `<fuse3/fuse.h>` by the
//! build script. Rust has no C bit-fields; bindgen's accessors place each
//! flag where the C compiler would, and [`FileInfoView`] reads the packed
//! flag word back as a plain integer.

use crate::field_size;
use std::mem::{offset_of, size_of};

#[allow(non_camel_case_types, non_upper_case_globals, non_snake_case, dead_code)]
mod sys {
    include!(concat!(env!("OUT_DIR"), "/fuse_bindings.rs"));
}

pub use sys::fuse_file_info;

/// The bit-fields start in the word right after `int32_t flags`.
pub const PACKED_WORD: usize = 1;

const _: () = assert!(offset_of!(fuse_file_info, flags) == 0, "fuse_file_info flags offset");
const _: () = assert!(
    field_size!(fuse_file_info, flags) == size_of::<u32>(),
    "fuse_file_info flags size"
);
const _: () = assert!(
    size_of::<fuse_file_info>() % size_of::<u32>() == 0,
    "fuse_file_info is not a whole number of words"
);

const WORDS: usize = size_of::<fuse_file_info>() / size_of::<u32>();

const _: () = assert!(WORDS > PACKED_WORD, "fuse_file_info has no bit-field word");

/// Raw word view over a [`fuse_file_info`].
///
/// This is the one place the crate steps outside type safety: the packed
/// flag word is read back as a plain integer, the same way generated
/// bindings will see it.
#[repr(C)]
pub union FileInfoView {
    info: fuse_file_info,
    words: [u32; WORDS],
}

impl FileInfoView {
    pub fn new(info: fuse_file_info) -> Self {
        Self { info }
    }

    pub fn packed_word(&self) -> u32 {
        // SAFETY: `words` covers the same bytes as `info`. Word 1 lies in
        // bindgen's bit-field byte array, which has no padding.
        unsafe { self.words[PACKED_WORD] }
    }
}

/// Integer value of the packed word when only `direct_io` is set.
pub fn direct_io_field_mask() -> u32 {
    let mut info = fuse_file_info::default();
    info.set_direct_io(1);
    let mask = FileInfoView::new(info).packed_word();
    info.set_direct_io(0);
    log::trace!("direct_io cleared, flag reads {}", info.direct_io());
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_io_mask_is_single_bit() {
        let mask = direct_io_field_mask();
        assert_ne!(mask, 0);
        assert!(mask.is_power_of_two());
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn test_direct_io_follows_writepage() {
        let mut info = fuse_file_info::default();
        info.set_writepage(1);
        let writepage = FileInfoView::new(info).packed_word();
        assert_eq!(writepage, 1);
        assert_eq!(direct_io_field_mask(), writepage << 1);
    }

    #[test]
    fn test_distinct_flags_use_distinct_bits() {
        let mut info = fuse_file_info::default();
        info.set_keep_cache(1);
        let keep_cache = FileInfoView::new(info).packed_word();
        assert!(keep_cache.is_power_of_two());
        assert_ne!(keep_cache, direct_io_field_mask());
    }

    #[test]
    fn test_clearing_direct_io_restores_zero_word() {
        let mut info = fuse_file_info::default();
        info.set_direct_io(1);
        assert_eq!(info.direct_io(), 1);
        info.set_direct_io(0);
        assert_eq!(info.direct_io(), 0);
        assert_eq!(FileInfoView::new(info).packed_word(), 0);
    }

    #[test]
    fn test_open_flags_stay_out_of_packed_word() {
        let mut info = fuse_file_info::default();
        info.flags = libc::O_RDWR;
        info.set_direct_io(1);
        assert_eq!(FileInfoView::new(info).packed_word(), direct_io_field_mask());
    }
}
