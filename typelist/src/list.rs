//! The shape of a type-level list: the empty list [`Nil`] and the cell [`Cons`].
//!
//! A list is formed by chaining `Cons` cells together, each holding one element type in its head
//! and the rest of the list in its tail, and ending in `Nil`. Lists are written most conveniently
//! with the [`List!`](macro@crate::List) macro:
//!
//! ```
//! use typelist::prelude::*;
//! use static_assertions::assert_type_eq_all;
//!
//! assert_type_eq_all!(List![char, i64], Cons<char, Cons<i64, Nil>>);
//! ```
//!
//! Neither `Nil` nor `Cons` hold any data: they exist so that the trait solver can compute with
//! them, and every value of either is a zero-sized marker.

use std::{any, fmt, marker::PhantomData};

/// The empty list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nil;

/// A list whose first element is `H` and whose remaining elements are the list `T`.
///
/// The tail must itself be a list, so a malformed chain is rejected where it is written:
///
/// ```compile_fail
/// use typelist::prelude::*;
///
/// type Broken = Cons<u8, u16>;
/// fn use_it(_: Broken) {}
/// ```
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = "")
)]
pub struct Cons<H, T: List>(PhantomData<fn() -> (H, T)>);

static_assertions::assert_eq_size!(Cons<[u64; 64], Nil>, Nil, ());

impl<H, T: List> Cons<H, T> {
    /// The (only) value of this list type.
    pub const fn new() -> Self {
        Cons(PhantomData)
    }
}

/// A well-formed type-level list: either [`Nil`] or a [`Cons`] whose tail is a `List`.
///
/// Every operation in [`ops`](crate::ops) requires its list arguments to be `List`s, so passing
/// something else fails at the use site with this trait's message:
///
/// ```compile_fail
/// use typelist::prelude::*;
///
/// const N: usize = size::<(u8, u16)>();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a type-level list",
    label = "expected `Nil` or `Cons<Head, Tail>`",
    note = "build lists with `List![...]`, or convert a tuple with `ListOf<(...)>`"
)]
pub trait List: sealed::List + Sized + 'static {
    #[doc(hidden)]
    fn fmt_elements(f: &mut fmt::Formatter<'_>, first: bool) -> fmt::Result;
}

impl List for Nil {
    fn fmt_elements(_: &mut fmt::Formatter<'_>, _: bool) -> fmt::Result {
        Ok(())
    }
}

impl<H: 'static, T: List> List for Cons<H, T> {
    fn fmt_elements(f: &mut fmt::Formatter<'_>, first: bool) -> fmt::Result {
        if !first {
            write!(f, ", ")?;
        }
        write!(f, "{}", any::type_name::<H>())?;
        T::fmt_elements(f, false)
    }
}

impl fmt::Debug for Nil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List![]")
    }
}

impl<H: 'static, T: List> fmt::Debug for Cons<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List![")?;
        Self::fmt_elements(f, true)?;
        write!(f, "]")
    }
}

/// A list with at least one element, which therefore has a head and a tail.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// type Numbers = List![u8, u16, u32];
/// assert_type_eq_all!(HeadOf<Numbers>, u8);
/// assert_type_eq_all!(HeadOf<TailOf<TailOf<Numbers>>>, u32);
/// assert_type_eq_all!(TailOf<TailOf<TailOf<Numbers>>>, Nil);
/// ```
///
/// The empty list has no head:
///
/// ```compile_fail
/// use typelist::prelude::*;
///
/// fn head(_: HeadOf<Nil>) {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no head or tail",
    label = "expected a non-empty list",
    note = "only `Cons<Head, Tail>` has a first element"
)]
pub trait NonEmpty: List {
    /// The first element.
    type Head;
    /// Every element after the first.
    type Tail: List;
}

impl<H: 'static, T: List> NonEmpty for Cons<H, T> {
    type Head = H;
    type Tail = T;
}

/// The first element of a non-empty list.
pub type HeadOf<L> = <L as NonEmpty>::Head;

/// Every element of a non-empty list after the first.
pub type TailOf<L> = <L as NonEmpty>::Tail;

mod sealed {
    use super::*;
    pub trait List {}
    impl List for Nil {}
    impl<H, T: super::List> List for Cons<H, T> {}
}
