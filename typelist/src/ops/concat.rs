use crate::list::*;

/// Append the list `B` to the end of a list.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ConcatOf<List![u8, u16], List![u32]>, List![u8, u16, u32]);
/// assert_type_eq_all!(ConcatOf<Nil, List![u32]>, List![u32]);
/// ```
#[diagnostic::on_unimplemented(
    message = "cannot append `{B}` to `{Self}`",
    label = "both sides must be type-level lists"
)]
pub trait Concat<B: List>: List {
    /// The concatenated list.
    type Output: List;
}

impl<B: List> Concat<B> for Nil {
    type Output = B;
}

impl<H: 'static, T: Concat<B>, B: List> Concat<B> for Cons<H, T> {
    type Output = Cons<H, T::Output>;
}

/// The elements of `A` followed by the elements of `B`.
pub type ConcatOf<A, B> = <A as Concat<B>>::Output;

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use static_assertions::const_assert_eq;

    const_assert_eq!(size::<ConcatOf<List![u8, u8], List![u8, u8, u8]>>(), 5);
    const_assert_eq!(size::<ConcatOf<Nil, Nil>>(), 0);
}
