// Mon Oct 19 2026 - Alex

//! Compile-time field measurement.
//!
//! `offset_of!` covers offsets; the width of a field is taken from the type
//! of a projection closure, which is never called.

/// Size of the field selected by `project`.
pub const fn size_of_field<S, F>(_project: fn(&S) -> &F) -> usize {
    std::mem::size_of::<F>()
}

#[macro_export]
macro_rules! field_size {
    ($ty:ty, $field:ident) => {
        $crate::structure::measure::size_of_field(|value: &$ty| &value.$field)
    };
}

/// Rejects the build when a field's width differs from `$expected`.
///
/// ```
/// #[repr(C)]
/// struct Pair {
///     first: u32,
///     second: u64,
/// }
///
/// platform_constants::assert_field_size!(Pair, second, 8);
/// ```
///
/// A wrong width stops compilation:
///
/// ```compile_fail
/// #[repr(C)]
/// struct Pair {
///     first: u32,
///     second: u64,
/// }
///
/// platform_constants::assert_field_size!(Pair, second, 4);
/// ```
///
/// ```compile_fail
/// platform_constants::assert_field_size!(libc::timespec, tv_sec, 3);
/// ```
#[macro_export]
macro_rules! assert_field_size {
    ($ty:ty, $field:ident, $expected:expr) => {
        const _: () = assert!(
            $crate::field_size!($ty, $field) == $expected,
            concat!(stringify!($field), " size")
        );
    };
}

#[macro_export]
macro_rules! field_layout {
    ($ty:ty, $field:ident) => {
        $crate::structure::FieldLayout::new(
            stringify!($field),
            $crate::structure::Offset::new(std::mem::offset_of!($ty, $field)),
            $crate::structure::Size::new($crate::field_size!($ty, $field)),
        )
    };
}
