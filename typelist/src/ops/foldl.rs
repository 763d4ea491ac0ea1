use crate::{list::*, op::*};

/// Combine the elements of a list from left to right, starting from the accumulator `Init`.
///
/// Each step computes `F`'s [`BinaryOp<Element, Accumulator>`](BinaryOp) output, so for a list
/// `[a, b, c]` the result is `F(c, F(b, F(a, Init)))`. Folding the empty list gives `Init`.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// type Numbers = List![UnaryOf<4>, UnaryOf<9>, UnaryOf<2>];
/// assert_type_eq_all!(FoldLOf<Numbers, Max, Z>, UnaryOf<9>);
/// assert_type_eq_all!(FoldLOf<Numbers, Sum, Z>, UnaryOf<15>);
/// assert_type_eq_all!(FoldLOf<Nil, Max, u8>, u8);
/// ```
///
/// The operation must be an [`Operation`], even when the list is empty:
///
/// ```compile_fail
/// use typelist::prelude::*;
///
/// fn take(_: FoldLOf<Nil, u8, Z>) {}
/// ```
///
/// and it must accept every element in turn:
///
/// ```compile_fail
/// use typelist::prelude::*;
///
/// fn take(_: FoldLOf<List![char], Max, Z>) {}
/// ```
#[diagnostic::on_unimplemented(
    message = "cannot fold `{Self}` with `{F}` starting from `{Init}`",
    label = "`{Self}` must be a type-level list and `{F}` an operation accepting each step",
    note = "operations implement `Operation` and `BinaryOp<Element, Accumulator>`"
)]
pub trait FoldL<F: Operation, Init>: List {
    /// The final accumulator.
    type Output;
}

impl<F: Operation, Init> FoldL<F, Init> for Nil {
    type Output = Init;
}

impl<H, T, F, Init> FoldL<F, Init> for Cons<H, T>
where
    H: 'static,
    F: BinaryOp<H, Init>,
    T: FoldL<F, F::Output>,
{
    type Output = <T as FoldL<F, F::Output>>::Output;
}

/// The result of folding `L` with `F` from the left, starting from `Init`.
pub type FoldLOf<L, F, Init> = <L as FoldL<F, Init>>::Output;

/// The list `L` in reverse order: a left fold pushing each element onto the front of the result.
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ReverseOf<List![u8, u16, u32]>, List![u32, u16, u8]);
/// ```
pub type ReverseOf<L> = FoldLOf<L, Prepend, Nil>;
