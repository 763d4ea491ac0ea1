use crate::{list::*, unary::*};

/// The number of elements in a list, as a unary number.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::{assert_type_eq_all, const_assert_eq};
///
/// assert_type_eq_all!(LengthOf<List![u8, u16, u32]>, UnaryOf<3>);
/// const_assert_eq!(size::<List![]>(), 0);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a type-level list",
    label = "cannot take the length of this",
    note = "build lists with `List![...]`, or convert a tuple with `ListOf<(...)>`"
)]
pub trait Length: List {
    /// The length.
    type Output: Unary;
}

impl Length for Nil {
    type Output = Z;
}

impl<H: 'static, T: Length> Length for Cons<H, T> {
    type Output = S<T::Output>;
}

/// The length of `L` as a unary number.
pub type LengthOf<L> = <L as Length>::Output;

/// The length of `L`.
pub const fn size<L: Length>() -> usize {
    <L::Output as Unary>::VALUE
}
