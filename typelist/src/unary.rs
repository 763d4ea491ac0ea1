//! Natural numbers at the type level: [`Z`] is zero and [`S<N>`](S) is one more than `N`.
//!
//! The length of a list is one of these (`LengthOf<List![u8, u16]>` is `S<S<Z>>`), and so are the
//! sizes and alignments computed by [`SizeOf`](crate::op::SizeOf) and
//! [`AlignOf`](crate::op::AlignOf). A number written as nested successors is the same type wherever
//! it is written, so two lists have equal lengths exactly when their [`LengthOf`] types are equal.
//!
//! Writing `S<S<S<Z>>>` by hand is tedious; [`UnaryOf<N>`](UnaryOf) converts a `usize` constant of
//! at most 256, and [`Unary::VALUE`] converts back.
//!
//! [`LengthOf`]: crate::ops::LengthOf

/// Zero: the length of [`Nil`](crate::Nil).
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(LengthOf<List![]>, Z);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// One more than `N`: the length of a list whose tail has length `N`.
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(LengthOf<List![char]>, S<Z>);
/// let one: S<Z> = S(Z);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// The unary number equal to the constant `N`, for `N` up to 256.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// A unary number, whose value as a `usize` is [`VALUE`](Unary::VALUE).
///
/// Reading the value of a number recurs once per successor, so numbers near the top of the range
/// need a `recursion_limit` of 512 in the crate that reads them:
///
/// ```
/// # #![recursion_limit = "512"]
/// use typelist::prelude::*;
///
/// assert_eq!(<LengthOf<List![u8, u16, u32]> as Unary>::VALUE, 3);
/// assert_eq!(<UnaryOf<0> as Unary>::VALUE, 0);
/// assert_eq!(<UnaryOf<256> as Unary>::VALUE, 256);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a unary number",
    label = "expected `Z` or `S<N>`",
    note = "write numbers as `UnaryOf<N>` to convert from a `usize` constant"
)]
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// This number as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Choose between three types by how the first number of a pair compares to the second.
///
/// This is what [`Max`](crate::op::Max) and [`Min`](crate::op::Min) pick their answer with, and
/// how [identity keys](crate::ident) are compared digit by digit.
///
/// ```
/// use typelist::prelude::*;
/// use typelist::unary::Compare;
/// use static_assertions::assert_type_eq_all;
///
/// type Longer<A, B> = <(LengthOf<A>, LengthOf<B>) as Compare<B, A, A>>::Result;
///
/// assert_type_eq_all!(Longer<List![u8], List![u8, u8]>, List![u8, u8]);
/// assert_type_eq_all!(Longer<List![char, char], List![u8]>, List![char, char]);
/// ```
pub trait Compare<IfLess, IfEqual, IfGreater>: sealed::Compare {
    /// `IfLess`, `IfEqual` or `IfGreater`.
    type Result;
}

impl<IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, Z) {
    type Result = IfEqual;
}

impl<M: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, S<M>) {
    type Result = IfLess;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (S<N>, Z) {
    type Result = IfGreater;
}

// Peel one successor off each side until one of them reaches zero.
impl<N: Unary, M: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater>
    for (S<N>, S<M>)
where
    (N, M): Compare<IfLess, IfEqual, IfGreater>,
{
    type Result = <(N, M) as Compare<IfLess, IfEqual, IfGreater>>::Result;
}

/// The sum of a pair of numbers, as used by [`Sum`](crate::op::Sum).
///
/// ```
/// use typelist::prelude::*;
/// use typelist::unary::Add;
/// use static_assertions::assert_type_eq_all;
///
/// type Joined = ConcatOf<List![u8, u8], List![u8, u8, u8]>;
/// assert_type_eq_all!(
///     <(LengthOf<List![u8, u8]>, LengthOf<List![u8, u8, u8]>) as Add>::Result,
///     LengthOf<Joined>,
/// );
/// ```
pub trait Add: sealed::Add {
    /// The sum.
    type Result: Unary;
}

impl<N: Unary> Add for (N, Z) {
    type Result = N;
}

impl<N: Unary, M: Unary> Add for (N, S<M>)
where
    (N, M): Add,
{
    type Result = S<<(N, M) as Add>::Result>;
}

/// Implemented only by [`Number<N>`](Number).
pub trait Constant: sealed::Constant {}

/// The constant `N` as a type, so that it can be converted to a unary number.
#[allow(missing_debug_implementations)]
pub struct Number<const N: usize>;

impl<const N: usize> Constant for Number<N> {}

/// Conversion from [`Number<N>`](Number) to the unary number `N`.
pub trait ToUnary {
    /// `N` as nested successors of zero.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// Conversion from a unary number back to its [`Number`].
pub trait ToConstant: Unary {
    /// The number as a constant.
    type AsConstant: Constant + ToUnary<AsUnary = Self>;
}

typelist_macro::generate_unary_conversion_impls!(256);

mod sealed {
    use super::*;
    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Constant: 'static {}
    impl<const N: usize> Constant for Number<N> {}

    pub trait Compare {}
    impl<N: Unary, M: Unary> Compare for (N, M) {}

    pub trait Add {}
    impl<N: Unary, M: Unary> Add for (N, M) {}
}
