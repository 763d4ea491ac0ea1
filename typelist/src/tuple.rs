//! Conversions back and forth between flat tuples and their corresponding lists.
//!
//! Lists are built from nested [`Cons`](crate::Cons) cells, but a flat tuple is often the more
//! readable way to write a sequence of types. The traits here convert between the two equivalent
//! representations: `(A, B, C)` corresponds to `List![A, B, C]`, and `()` to `Nil`.
//!
//! At present, tuples up to size 64 are supported.
//!
//! # Examples
//!
//! ```
//! use typelist::prelude::*;
//! use static_assertions::assert_type_eq_all;
//!
//! assert_type_eq_all!(ListOf<(u8, char)>, List![u8, char]);
//! assert_type_eq_all!(TupleOf<List![u8, char]>, (u8, char));
//! assert_type_eq_all!(ListOf<()>, Nil);
//! ```

use crate::list::List;

/// Convert a tuple into its corresponding list.
pub trait Tuple: Sized {
    /// The corresponding list.
    type AsList: ToTuple<AsTuple = Self>;
}

/// Convert a list into its corresponding tuple.
pub trait ToTuple: List {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;
}

/// The list with the same elements as the tuple `T`.
pub type ListOf<T> = <T as Tuple>::AsList;

/// The tuple with the same elements as the list `L`.
pub type TupleOf<L> = <L as ToTuple>::AsTuple;

typelist_macro::impl_tuples!(64);
