//! Type identity, which [`Contains`](crate::ops::Contains) and [`Equal`](crate::ops::Equal) use to
//! decide whether two element types are the same.
//!
//! Rust has no way to ask "are `A` and `B` the same type?" and get a `false` back, so each type
//! taking part in a comparison carries a [`Key`](Ident::Key): a list of unary numbers that names
//! it. Keys are a prefix code: the first number is a tag saying what kind of type this is, and any
//! type parameters follow with their own keys, so two keys are equal exactly when the types they
//! describe are.
//!
//! Keys are provided here for the primitive types, `String`, `&'static str`, `Option`, `Vec`,
//! `Box`, and the types of this crate (unary numbers, booleans and lists themselves). Other types
//! get one from the [`identify!`](macro@crate::identify) macro, either from an explicit `u32` id or
//! from a hash of the type's name qualified by where it was identified.

use crate::{
    boolean::*,
    list::*,
    ops::{Concat, ConcatOf},
    unary::*,
};

/// A type with a canonical identity key.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
///
/// struct Widget;
/// identify!(Widget = 0x57);
///
/// assert!(same::<Widget, Widget>());
/// assert!(!same::<Widget, u8>());
/// assert!(same::<Option<Vec<Widget>>, Option<Vec<Widget>>>());
/// assert!(!same::<Option<Vec<Widget>>, Option<Box<Widget>>>());
/// ```
///
/// A type without a key cannot be compared:
///
/// ```compile_fail
/// use typelist::prelude::*;
///
/// struct Anonymous;
/// const _: bool = contains::<List![u8], Anonymous>();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no type identity",
    label = "cannot be compared with other types",
    note = "give it one with `typelist::identify!({Self})`"
)]
pub trait Ident {
    /// The key naming this type: a list of unary numbers.
    type Key: List;
}

/// The tags which begin each key.
pub mod tag {
    use crate::unary::UnaryOf;

    /// A type identified with [`identify!`](macro@crate::identify), followed by eight hexadecimal
    /// digits.
    pub type User = UnaryOf<0>;
    /// `()`
    pub type Unit = UnaryOf<1>;
    /// `bool`
    pub type Bool = UnaryOf<2>;
    /// `char`
    pub type Char = UnaryOf<3>;
    /// `String`
    pub type String = UnaryOf<4>;
    /// `&'static str`
    pub type Str = UnaryOf<5>;
    /// `u8`
    pub type U8 = UnaryOf<6>;
    /// `u16`
    pub type U16 = UnaryOf<7>;
    /// `u32`
    pub type U32 = UnaryOf<8>;
    /// `u64`
    pub type U64 = UnaryOf<9>;
    /// `u128`
    pub type U128 = UnaryOf<10>;
    /// `usize`
    pub type Usize = UnaryOf<11>;
    /// `i8`
    pub type I8 = UnaryOf<12>;
    /// `i16`
    pub type I16 = UnaryOf<13>;
    /// `i32`
    pub type I32 = UnaryOf<14>;
    /// `i64`
    pub type I64 = UnaryOf<15>;
    /// `i128`
    pub type I128 = UnaryOf<16>;
    /// `isize`
    pub type Isize = UnaryOf<17>;
    /// `f32`
    pub type F32 = UnaryOf<18>;
    /// `f64`
    pub type F64 = UnaryOf<19>;
    /// A unary number, followed by the number itself.
    pub type Nat = UnaryOf<20>;
    /// A `Number<N>`, followed by `N` as a unary number.
    pub type Number = UnaryOf<21>;
    /// [`True`](crate::boolean::True)
    pub type True = UnaryOf<22>;
    /// [`False`](crate::boolean::False)
    pub type False = UnaryOf<23>;
    /// [`Nil`](crate::Nil)
    pub type Nil = UnaryOf<24>;
    /// [`Cons`](crate::Cons), followed by the keys of its head and tail.
    pub type Cons = UnaryOf<25>;
    /// `Option`, followed by the key of its parameter.
    pub type Option = UnaryOf<26>;
    /// `Vec`, followed by the key of its parameter.
    pub type Vec = UnaryOf<27>;
    /// `Box`, followed by the key of its parameter.
    pub type Box = UnaryOf<28>;
}

macro_rules! builtin {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl Ident for $ty {
                type Key = Cons<tag::$tag, Nil>;
            }
        )*
    };
}

builtin! {
    () => Unit,
    bool => Bool,
    char => Char,
    String => String,
    &'static str => Str,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    f32 => F32,
    f64 => F64,
    True => True,
    False => False,
    Nil => Nil,
}

impl Ident for Z {
    type Key = Cons<tag::Nat, Cons<Z, Nil>>;
}

impl<N: Unary> Ident for S<N> {
    type Key = Cons<tag::Nat, Cons<S<N>, Nil>>;
}

impl<const N: usize> Ident for Number<N>
where
    Number<N>: ToUnary,
{
    type Key = Cons<tag::Number, Cons<<Number<N> as ToUnary>::AsUnary, Nil>>;
}

impl<H: Ident, T: List + Ident> Ident for Cons<H, T>
where
    H::Key: Concat<T::Key>,
{
    type Key = Cons<tag::Cons, ConcatOf<H::Key, T::Key>>;
}

impl<T: Ident> Ident for Option<T> {
    type Key = Cons<tag::Option, T::Key>;
}

impl<T: Ident> Ident for Vec<T> {
    type Key = Cons<tag::Vec, T::Key>;
}

impl<T: Ident> Ident for Box<T> {
    type Key = Cons<tag::Box, T::Key>;
}

/// The 32-bit FNV-1a hash of `name`. [`identify!`](macro@crate::identify) keys a type given
/// without an explicit id by this hash of its name, module path and invocation site.
#[doc(hidden)]
pub const fn hash_name(name: &str) -> u32 {
    let bytes = name.as_bytes();
    let mut hash: u32 = 0x811c_9dc5;
    let mut i = 0;
    while i < bytes.len() {
        hash = (hash ^ bytes[i] as u32).wrapping_mul(0x0100_0193);
        i += 1;
    }
    hash
}

/// Pointwise equality of two keys.
pub trait KeyEq<K: List>: List {
    /// `True` if the keys are the same.
    type Result: Bool;
}

impl KeyEq<Nil> for Nil {
    type Result = True;
}

impl<G: Unary, U: List> KeyEq<Cons<G, U>> for Nil {
    type Result = False;
}

impl<H: Unary, T: List> KeyEq<Nil> for Cons<H, T> {
    type Result = False;
}

impl<H: Unary, T: KeyEq<U>, G: Unary, U: List> KeyEq<Cons<G, U>> for Cons<H, T>
where
    (H, G): Compare<False, True, False>,
    (
        <(H, G) as Compare<False, True, False>>::Result,
        <T as KeyEq<U>>::Result,
    ): And,
{
    type Result = <(
        <(H, G) as Compare<False, True, False>>::Result,
        <T as KeyEq<U>>::Result,
    ) as And>::Result;
}

/// Whether `Self` and `B` are the same type, as decided by their keys.
pub trait Same<B: Ident>: Ident {
    /// `True` if the types are identical.
    type Result: Bool;
}

impl<A: Ident, B: Ident> Same<B> for A
where
    A::Key: KeyEq<B::Key>,
{
    type Result = <A::Key as KeyEq<B::Key>>::Result;
}

/// Whether `A` and `B` are the same type, as a type-level boolean.
pub type SameOf<A, B> = <A as Same<B>>::Result;

/// Whether `A` and `B` are the same type.
pub const fn same<A: Same<B>, B: Ident>() -> bool {
    <A::Result as Bool>::VALUE
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use super::hash_name;
    use static_assertions::{assert_type_eq_all, const_assert, const_assert_eq};

    struct Meters;
    struct Feet;
    identify!(Meters = 1, Feet = 2);

    assert_type_eq_all!(SameOf<u32, u32>, True);
    assert_type_eq_all!(SameOf<u32, i32>, False);
    assert_type_eq_all!(SameOf<UnaryOf<3>, UnaryOf<3>>, True);
    assert_type_eq_all!(SameOf<UnaryOf<3>, UnaryOf<4>>, False);
    assert_type_eq_all!(SameOf<UnaryOf<3>, Number<3>>, False);

    const_assert!(same::<Meters, Meters>());
    const_assert!(!same::<Meters, Feet>());
    const_assert!(!same::<Meters, u8>());

    #[test]
    fn lists_are_compared_by_their_elements() {
        assert!(same::<List![u8, char], List![u8, char]>());
        assert!(!same::<List![u8, char], List![char, u8]>());
        assert!(!same::<List![u8], List![u8, u8]>());
        assert!(!same::<List![List![u8], u8], List![u8, List![u8]]>());
    }

    #[test]
    fn wrappers_are_not_their_contents() {
        assert!(!same::<Option<u8>, u8>());
        assert!(!same::<Option<u8>, Vec<u8>>());
        assert!(same::<Box<Option<String>>, Box<Option<String>>>());
    }

    const_assert_eq!(hash_name(""), 0x811c_9dc5);
    const_assert_eq!(hash_name("a"), 0xe40c_292c);
    const_assert_eq!(hash_name("foobar"), 0xbf9c_f968);

    mod upstream {
        pub struct Gauge;
        crate::identify!(Gauge);
    }

    mod downstream {
        pub struct Gauge;
        crate::identify!(Gauge);
    }

    const_assert!(same::<upstream::Gauge, upstream::Gauge>());
    const_assert!(!same::<upstream::Gauge, downstream::Gauge>());

    #[test]
    fn same_named_types_in_sibling_modules_are_distinct() {
        assert!(!contains::<List![upstream::Gauge], downstream::Gauge>());
        assert!(!equal::<List![upstream::Gauge], List![downstream::Gauge]>());
        assert!(contains::<List![upstream::Gauge, downstream::Gauge], downstream::Gauge>());
    }

    #[test]
    fn hashed_identities_are_stable() {
        struct Hashed;
        identify!(Hashed);
        assert!(same::<Hashed, Hashed>());
        assert!(!same::<Hashed, Meters>());
    }
}
