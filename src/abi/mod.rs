// Mon Oct 19 2026 - Alex

//! Expected field widths for the targets whose `struct stat` we know.
//!
//! The widths here are the assumptions the binding generator is allowed to
//! make. The `native` module checks every measured field against them at
//! compile time, so a target that drifts away from its profile stops
//! building instead of printing wrong numbers.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AbiProfile {
    pub name: &'static str,
    /// `st_mode`
    pub mode_width: usize,
    /// `st_size`
    pub size_width: usize,
    /// `st_nlink`
    pub nlink_width: usize,
    /// `st_atime`, `st_mtime`, `tv_sec`
    pub seconds_width: usize,
    /// `st_atime_nsec`, `st_mtime_nsec`, `tv_nsec`
    pub nanoseconds_width: usize,
}

const POINTER_WIDTH: usize = std::mem::size_of::<*const libc::c_void>();
const TIME_WIDTH: usize = std::mem::size_of::<libc::time_t>();

impl AbiProfile {
    /// glibc and musl on x86_64: link count and nanoseconds are both
    /// pointer sized.
    pub const LINUX_X86_64: AbiProfile = AbiProfile {
        name: "linux-x86_64",
        mode_width: 4,
        size_width: 8,
        nlink_width: POINTER_WIDTH,
        seconds_width: TIME_WIDTH,
        nanoseconds_width: POINTER_WIDTH,
    };

    /// The asm-generic `stat` layout narrows `st_nlink` to 32 bits.
    pub const LINUX_AARCH64: AbiProfile = AbiProfile {
        name: "linux-aarch64",
        mode_width: 4,
        size_width: 8,
        nlink_width: 4,
        seconds_width: TIME_WIDTH,
        nanoseconds_width: POINTER_WIDTH,
    };

    pub const MACOS: AbiProfile = AbiProfile {
        name: "macos",
        mode_width: 2,
        size_width: 8,
        nlink_width: 2,
        seconds_width: TIME_WIDTH,
        nanoseconds_width: POINTER_WIDTH,
    };

    #[cfg(all(target_os = "linux", target_arch = "x86_64", target_pointer_width = "64"))]
    pub const CURRENT: AbiProfile = AbiProfile::LINUX_X86_64;

    #[cfg(all(target_os = "linux", target_arch = "aarch64"))]
    pub const CURRENT: AbiProfile = AbiProfile::LINUX_AARCH64;

    #[cfg(all(target_os = "macos", any(target_arch = "x86_64", target_arch = "aarch64")))]
    pub const CURRENT: AbiProfile = AbiProfile::MACOS;

    pub fn current() -> &'static AbiProfile {
        &Self::CURRENT
    }
}

#[cfg(not(any(
    all(target_os = "linux", target_arch = "x86_64", target_pointer_width = "64"),
    all(target_os = "linux", target_arch = "aarch64"),
    all(target_os = "macos", any(target_arch = "x86_64", target_arch = "aarch64")),
)))]
compile_error!("no ABI profile for this target: add one to abi/mod.rs before generating bindings for it");

impl fmt::Display for AbiProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (mode {}, size {}, nlink {}, sec {}, nsec {})",
            self.name,
            self.mode_width,
            self.size_width,
            self.nlink_width,
            self.seconds_width,
            self.nanoseconds_width
        )
    }
}
