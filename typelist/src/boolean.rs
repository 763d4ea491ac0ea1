//! Type-level booleans, [`True`] and [`False`].
//!
//! Membership and equality tests produce one of these two types, so their answers can themselves
//! be fed into further type-level computation; [`Bool::VALUE`] brings the answer down to a `bool`
//! constant.

/// The type-level boolean true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct True;

/// The type-level boolean false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct False;

/// A type-level boolean: either [`True`] or [`False`].
///
/// # Examples
///
/// ```
/// use typelist::boolean::*;
///
/// assert!(True::VALUE);
/// assert!(!<<True as Bool>::Not as Bool>::VALUE);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a type-level boolean",
    label = "expected `True` or `False`"
)]
pub trait Bool: sealed::Bool + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level boolean.
    const VALUE: bool;

    /// The negation of this boolean.
    type Not: Bool<Not = Self>;
}

impl Bool for True {
    const VALUE: bool = true;
    type Not = False;
}

impl Bool for False {
    const VALUE: bool = false;
    type Not = True;
}

/// Conjunction of a pair of booleans.
///
/// # Examples
///
/// ```
/// use typelist::boolean::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(True, True) as And>::Result, True);
/// assert_type_eq_all!(<(True, False) as And>::Result, False);
/// ```
pub trait And: sealed::Pair {
    /// `True` if both are `True`.
    type Result: Bool;
}

impl<B: Bool> And for (True, B) {
    type Result = B;
}

impl<B: Bool> And for (False, B) {
    type Result = False;
}

/// Disjunction of a pair of booleans.
///
/// # Examples
///
/// ```
/// use typelist::boolean::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(False, True) as Or>::Result, True);
/// assert_type_eq_all!(<(False, False) as Or>::Result, False);
/// ```
pub trait Or: sealed::Pair {
    /// `True` if either is `True`.
    type Result: Bool;
}

impl<B: Bool> Or for (True, B) {
    type Result = True;
}

impl<B: Bool> Or for (False, B) {
    type Result = B;
}

mod sealed {
    use super::*;
    pub trait Bool: 'static {}
    impl Bool for True {}
    impl Bool for False {}

    pub trait Pair {}
    impl<A: Bool, B: Bool> Pair for (A, B) {}
}
