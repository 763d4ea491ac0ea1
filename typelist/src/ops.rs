//! The operations on type-level lists.
//!
//! Each operation is a trait implemented by every list it applies to, with the answer in an
//! associated type. For each there is also a type synonym naming the answer directly, and for the
//! queries whose answer is a number or a boolean, a `const fn` bringing it down to a value:
//!
//! | Operation | Trait | Answer | Value |
//! | :-------- | :---- | :----- | :---- |
//! | length | [`Length`] | [`LengthOf<L>`] | [`size::<L>()`](size) |
//! | membership | [`Contains<E>`] | [`ContainsOf<L, E>`] | [`contains::<L, E>()`](contains) |
//! | equality | [`Equal<B>`] | [`EqualOf<A, B>`] | [`equal::<A, B>()`](equal) |
//! | map | [`Transform<F>`] | [`TransformOf<L, F>`] | |
//! | left fold | [`FoldL<F, Init>`] | [`FoldLOf<L, F, Init>`] | |
//! | concatenation | [`Concat<B>`] | [`ConcatOf<A, B>`] | |
//! | reversal | | [`ReverseOf<L>`] | |
//!
//! All of them recur once per element, so the trait solver's work is linear in the length of the
//! lists involved, and long lists need a correspondingly higher `#![recursion_limit]`.

mod concat;
mod contains;
mod equal;
mod foldl;
mod length;
mod transform;

pub use concat::*;
pub use contains::*;
pub use equal::*;
pub use foldl::*;
pub use length::*;
pub use transform::*;
