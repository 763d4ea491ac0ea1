/*!
> **typelist (crate):** Lists of types, computed entirely at compile time.

A *type-level list* is an ordered sequence of types, such as `List![char, i64, i32, u32]`, which
exists only for the trait solver to compute with. Such a list:

- has **no runtime representation**: its values are zero-sized markers, and nothing is allocated,
  iterated or branched on when the program runs;
- can be **queried** for its [length](ops::Length), for whether it
  [contains](ops::Contains) a type, and for whether it is [equal](ops::Equal) to another list;
- can be **transformed** element by element with any [operation](op), and **folded** from the
  left into a single type.

Together these compute derived properties over a closed set of types. For example, the largest
size and the strictest alignment among several candidate types:

```
use typelist::prelude::*;

type Candidates = List![char, i64, i32, u32];

type Largest = FoldLOf<TransformOf<Candidates, SizeOf>, Max, Z>;
type MostAligned = FoldLOf<TransformOf<Candidates, AlignOf>, Max, Z>;

assert_eq!(<Largest as Unary>::VALUE, std::mem::size_of::<i64>());
assert_eq!(<MostAligned as Unary>::VALUE, std::mem::align_of::<i64>());
```

## Quick reference

The **[`prelude`]** module exports everything needed to build and compute with lists. Most
programs should `use typelist::prelude::*;`.

| Written as | Meaning |
| :--------- | :------ |
| [`List![A, B, C]`](macro@List), [`ListOf<(A, B, C)>`](tuple::ListOf) | The list of `A`, `B` and `C` |
| [`LengthOf<L>`](ops::LengthOf), [`size::<L>()`](ops::size) | The number of elements of `L` |
| [`ContainsOf<L, E>`](ops::ContainsOf), [`contains::<L, E>()`](ops::contains) | Whether `E` is an element of `L` |
| [`EqualOf<A, B>`](ops::EqualOf), [`equal::<A, B>()`](ops::equal) | Whether `A` and `B` have the same elements in the same order |
| [`TransformOf<L, F>`](ops::TransformOf) | `L` with the operation `F` applied to each element |
| [`FoldLOf<L, F, Init>`](ops::FoldLOf) | `L` combined left to right with `F`, starting from `Init` |
| [`HeadOf<L>`](list::HeadOf), [`TailOf<L>`](list::TailOf) | The first element of `L`, and the rest |

Membership and equality compare element types by *identity*, which every element type taking part
must declare through [`Ident`](ident::Ident). The primitive types, common standard library types
and this crate's own types already do; others use [`identify!`](macro@identify).

## Errors

Every misuse is a compile error, reported where the list or operation is used: a type that is not
a list, an operation that does not accept some element, a type that is not an operation at all,
or an element type without an identity each produce a message naming the problem.

## Limits

Every operation recurs once per element, and reading a unary number recurs once per successor. The
trait solver bounds how deep it will recur. This crate raises its own `recursion_limit` to 512;
crates computing with long lists, or with numbers near the largest [`UnaryOf`](unary::UnaryOf)
supports (256), need to do the same.
*/

#![recursion_limit = "512"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

// Lets the paths emitted by `typelist-macro` resolve inside this crate too.
extern crate self as typelist;

pub mod boolean;
pub mod ident;
pub mod layout;
pub mod list;
pub mod op;
pub mod ops;
pub mod tuple;
pub mod unary;

pub use list::{Cons, Nil};
pub use typelist_macro::{identify, List};

/// The prelude module for quickly getting started with typelist.
///
/// This module is designed to be imported as `use typelist::prelude::*;`, which brings into scope
/// all the bits and pieces you need to start computing with lists.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::boolean::{Bool, False, True};
    #[doc(no_inline)]
    pub use crate::ident::{same, Ident, Same, SameOf};
    #[doc(no_inline)]
    pub use crate::layout::Layout;
    #[doc(no_inline)]
    pub use crate::list::{Cons, HeadOf, List, NonEmpty, Nil, TailOf};
    #[doc(no_inline)]
    pub use crate::op::{
        AlignOf, Apply, BinaryOp, Combine, Max, Min, Operation, Prepend, SizeOf, Succ, Sum,
        UnaryOp,
    };
    #[doc(no_inline)]
    pub use crate::ops::*;
    #[doc(no_inline)]
    pub use crate::tuple::{ListOf, ToTuple, Tuple, TupleOf};
    #[doc(no_inline)]
    pub use crate::unary::{Number, Unary, UnaryOf, S, Z};
    #[doc(no_inline)]
    pub use typelist_macro::{identify, List};
}
