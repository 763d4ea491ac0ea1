use crate::{boolean::*, ident::*, list::*};

/// Whether two lists have the same length and the same element at every position.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::const_assert;
///
/// type Three = List![u8, u16, u32];
/// const_assert!(equal::<Three, List![u8, u16, u32]>());
/// const_assert!(!equal::<Three, List![u8, u16]>());
/// const_assert!(!equal::<Three, List![u8, u16, u32, u64]>());
/// const_assert!(!equal::<Three, List![u16, u8, u32]>());
/// ```
#[diagnostic::on_unimplemented(
    message = "cannot compare `{Self}` with `{B}`",
    label = "both sides must be type-level lists whose elements have identities",
    note = "build lists with `List![...]` and give other types identities with `identify!`"
)]
pub trait Equal<B: List>: List {
    /// `True` if the lists are equal.
    type Output: Bool;
}

impl Equal<Nil> for Nil {
    type Output = True;
}

impl<G: 'static, U: List> Equal<Cons<G, U>> for Nil {
    type Output = False;
}

impl<H: 'static, T: List> Equal<Nil> for Cons<H, T> {
    type Output = False;
}

impl<H, T, G, U> Equal<Cons<G, U>> for Cons<H, T>
where
    H: Same<G> + 'static,
    G: Ident + 'static,
    T: Equal<U>,
    U: List,
    (SameOf<H, G>, <T as Equal<U>>::Output): And,
{
    type Output = <(SameOf<H, G>, <T as Equal<U>>::Output) as And>::Result;
}

/// Whether `A` and `B` are equal, as a type-level boolean.
pub type EqualOf<A, B> = <A as Equal<B>>::Output;

/// Whether `A` and `B` are equal.
pub const fn equal<A: Equal<B>, B: List>() -> bool {
    <A::Output as Bool>::VALUE
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use static_assertions::{assert_type_eq_all, const_assert};

    assert_type_eq_all!(EqualOf<Nil, Nil>, True);
    assert_type_eq_all!(EqualOf<Nil, List![u8]>, False);
    assert_type_eq_all!(EqualOf<List![u8], Nil>, False);

    // The elements of `Nil`-vs-`Cons` comparisons are never inspected.
    struct Opaque;
    const_assert!(!equal::<Nil, List![Opaque]>());
    const_assert!(!equal::<List![Opaque], Nil>());

    const_assert!(equal::<List![u8, List![char]], List![u8, List![char]]>());
    const_assert!(!equal::<List![u8, List![char]], List![u8, List![bool]]>());
}
