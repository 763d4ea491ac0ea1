//! Operations: type-level functions that [`Transform`](crate::ops::Transform) applies to each
//! element of a list and that [`FoldL`](crate::ops::FoldL) uses to combine elements.
//!
//! An operation is a type implementing [`Operation`], plus [`UnaryOp`] or [`BinaryOp`] for each
//! argument type it accepts. Operations hold no state; they are named only so that they can be
//! passed as type parameters.
//!
//! # Defining an operation
//!
//! ```
//! use typelist::prelude::*;
//! use static_assertions::assert_type_eq_all;
//!
//! /// Wraps each element in an `Option`.
//! struct Optional;
//!
//! impl Operation for Optional {}
//!
//! impl<T> UnaryOp<T> for Optional {
//!     type Output = Option<T>;
//! }
//!
//! assert_type_eq_all!(
//!     TransformOf<List![u8, char], Optional>,
//!     List![Option<u8>, Option<char>],
//! );
//! ```

use crate::{layout::Layout, list::*, unary::*};

/// A type-level operation. Implementing this trait is what makes a type usable as the operation
/// parameter of [`Transform`](crate::ops::Transform) and [`FoldL`](crate::ops::FoldL), even on
/// the empty list:
///
/// ```compile_fail
/// use typelist::prelude::*;
///
/// type Oops = TransformOf<Nil, u8>;
/// fn use_it(_: Oops) {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a type-level operation",
    label = "expected an operation",
    note = "operations implement `Operation`, and `UnaryOp<T>` or `BinaryOp<Element, Accumulator>`"
)]
pub trait Operation {}

/// An operation of one argument, mapping `T` to [`Output`](UnaryOp::Output).
#[diagnostic::on_unimplemented(
    message = "the operation `{Self}` is not defined for the element type `{T}`",
    label = "no `UnaryOp<{T}>` impl",
    note = "every element of the list must be accepted by the operation"
)]
pub trait UnaryOp<T>: Operation {
    /// The result of applying the operation to `T`.
    type Output;
}

/// An operation of two arguments: an element `E` and an accumulator `Acc`, in that order.
#[diagnostic::on_unimplemented(
    message = "the operation `{Self}` cannot combine the element `{E}` with the accumulator `{Acc}`",
    label = "no `BinaryOp<{E}, {Acc}>` impl",
    note = "`FoldL` calls the operation with the element first and the accumulator second"
)]
pub trait BinaryOp<E, Acc>: Operation {
    /// The new accumulator.
    type Output;
}

/// The result of applying the unary operation `F` to `T`.
pub type Apply<F, T> = <F as UnaryOp<T>>::Output;

/// The result of applying the binary operation `F` to the element `E` and accumulator `Acc`.
pub type Combine<F, E, Acc> = <F as BinaryOp<E, Acc>>::Output;

/// Add one to a unary number.
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Apply<Succ, UnaryOf<4>>, UnaryOf<5>);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Succ;

impl Operation for Succ {}

impl<N: Unary> UnaryOp<N> for Succ {
    type Output = S<N>;
}

/// The size of a type in bytes, as a unary number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SizeOf;

impl Operation for SizeOf {}

impl<T: Layout> UnaryOp<T> for SizeOf {
    type Output = T::Size;
}

/// The alignment of a type in bytes, as a unary number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AlignOf;

impl Operation for AlignOf {}

impl<T: Layout> UnaryOp<T> for AlignOf {
    type Output = T::Align;
}

/// The larger of two unary numbers.
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Combine<Max, UnaryOf<2>, UnaryOf<7>>, UnaryOf<7>);
/// assert_type_eq_all!(Combine<Max, UnaryOf<7>, UnaryOf<2>>, UnaryOf<7>);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Max;

impl Operation for Max {}

impl<E: Unary, Acc: Unary> BinaryOp<E, Acc> for Max
where
    (E, Acc): Compare<Acc, Acc, E>,
{
    type Output = <(E, Acc) as Compare<Acc, Acc, E>>::Result;
}

/// The smaller of two unary numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Min;

impl Operation for Min {}

impl<E: Unary, Acc: Unary> BinaryOp<E, Acc> for Min
where
    (E, Acc): Compare<E, Acc, Acc>,
{
    type Output = <(E, Acc) as Compare<E, Acc, Acc>>::Result;
}

/// The sum of two unary numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum;

impl Operation for Sum {}

impl<E: Unary, Acc: Unary> BinaryOp<E, Acc> for Sum
where
    (Acc, E): Add,
{
    type Output = <(Acc, E) as Add>::Result;
}

/// Push the element onto the front of a list accumulator. Unlike [`Max`] or [`Sum`], the order of
/// its arguments shows in the result.
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Combine<Prepend, u8, List![u16]>, List![u8, u16]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Prepend;

impl Operation for Prepend {}

impl<E: 'static, Acc: List> BinaryOp<E, Acc> for Prepend {
    type Output = Cons<E, Acc>;
}
