//! Procedural macros used by and exported from the `typelist` crate.
//!
//! Most users want the re-exports in `typelist` itself rather than this crate.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    syn::{parse_macro_input, LitInt},
};

mod error;
mod generate;
mod identify;
mod list;
mod path;

/// Construct a type-level list from a sequence of types.
///
/// `List![A, B, C]` is `Cons<A, Cons<B, Cons<C, Nil>>>`, and `List![]` is `Nil`. A final `..Tail`
/// item splices the preceding elements onto the front of the list `Tail`: `List![A, ..Tail]` is
/// `Cons<A, Tail>`.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(List![u8, u16], Cons<u8, Cons<u16, Nil>>);
/// assert_type_eq_all!(List![u8, ..List![u16]], List![u8, u16]);
/// assert_type_eq_all!(List![], Nil);
/// ```
#[allow(non_snake_case)]
#[proc_macro]
pub fn List(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as list::ListInput).expand().into()
}

/// Give each listed type an identity, so that it can be compared by
/// [`Contains`](../typelist/ops/trait.Contains.html) and
/// [`Equal`](../typelist/ops/trait.Equal.html).
///
/// Each entry is either `Type = id`, with an explicit `u32` id, or just `Type`, in which case the id
/// is a hash of the type as written together with the module and source location of the
/// invocation. Two types given the same explicit id are considered identical.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
///
/// struct Apple;
/// struct Pear;
/// identify!(Apple = 1, Pear = 2);
///
/// assert!(contains::<List![Apple, Pear], Pear>());
/// assert!(!equal::<List![Apple], List![Pear]>());
///
/// mod east {
///     pub struct Depot;
///     typelist::identify!(Depot);
/// }
///
/// mod west {
///     pub struct Depot;
///     typelist::identify!(Depot);
/// }
///
/// assert!(!same::<east::Depot, west::Depot>());
/// ```
///
/// Identities are only for concrete types:
///
/// ```compile_fail
/// use typelist::prelude::*;
///
/// identify!(_ = 3);
/// ```
#[proc_macro]
pub fn identify(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as identify::IdentifyInput);
    input
        .expand()
        .unwrap_or_else(|error| error.to_compile_error())
        .into()
}

/// Generate the conversions between tuples of each arity up to the given one and their lists.
#[doc(hidden)]
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitInt);
    match generate::parse_count(&lit) {
        Ok(max) => generate::tuples(max).into(),
        Err(error) => error.to_compile_error().into(),
    }
}

/// Generate the conversions between `Number<N>` and unary numbers for each `N` up to the given one.
#[doc(hidden)]
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitInt);
    match generate::parse_count(&lit) {
        Ok(max) => generate::unary_conversions(max).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
