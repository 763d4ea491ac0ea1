//! The size and alignment of types, as unary numbers.
//!
//! These are what [`SizeOf`](crate::op::SizeOf) and [`AlignOf`](crate::op::AlignOf) compute with.
//! With the `layout` feature (on by default) the primitive types and `String` implement
//! [`Layout`]; any other type with a size and alignment of at most 256 bytes can be given an impl
//! with [`layout!`](crate::layout!).

use crate::unary::Unary;

/// The size and alignment of `Self`, in bytes.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
///
/// #[repr(C, align(8))]
/// struct Header {
///     tag: u8,
///     len: u32,
/// }
///
/// typelist::layout!(Header);
///
/// assert_eq!(<<Header as Layout>::Size as Unary>::VALUE, 8);
/// assert_eq!(<<Header as Layout>::Align as Unary>::VALUE, 8);
/// ```
#[diagnostic::on_unimplemented(
    message = "the layout of `{Self}` is not known at the type level",
    label = "no `Layout` impl",
    note = "implement it with `typelist::layout!({Self})`"
)]
pub trait Layout {
    /// `size_of::<Self>()`.
    type Size: Unary;
    /// `align_of::<Self>()`.
    type Align: Unary;
}

/// Implement [`Layout`] for each of the given types, computing their sizes and alignments with
/// [`core::mem::size_of`] and [`core::mem::align_of`].
///
/// Sizes and alignments above 256 bytes are not supported, and fail to compile.
#[macro_export]
macro_rules! layout {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::layout::Layout for $ty {
                type Size = $crate::unary::UnaryOf<{ ::core::mem::size_of::<$ty>() }>;
                type Align = $crate::unary::UnaryOf<{ ::core::mem::align_of::<$ty>() }>;
            }
        )*
    };
}

#[cfg(feature = "layout")]
crate::layout! {
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
}

#[cfg(all(test, feature = "layout"))]
mod tests {
    use super::*;
    use std::mem;

    fn check<T: Layout>() {
        assert_eq!(<T::Size as Unary>::VALUE, mem::size_of::<T>());
        assert_eq!(<T::Align as Unary>::VALUE, mem::align_of::<T>());
    }

    #[test]
    fn primitive_layouts_match_the_compiler() {
        check::<()>();
        check::<bool>();
        check::<char>();
        check::<u8>();
        check::<i64>();
        check::<u128>();
        check::<usize>();
        check::<f32>();
        check::<String>();
    }
}
