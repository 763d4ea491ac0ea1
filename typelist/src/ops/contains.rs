use crate::{boolean::*, ident::*, list::*};

/// Whether some element of a list is the type `E`.
///
/// The comparison is by identity ([`Same`]): no conversions or subtyping are considered, so
/// `u32` is not found in a list of `u64`s.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::{assert_type_eq_all, const_assert};
///
/// type Words = List![u16, u32, u64];
/// assert_type_eq_all!(ContainsOf<Words, u32>, True);
/// const_assert!(!contains::<Words, u8>());
/// const_assert!(!contains::<List![], u8>());
/// ```
#[diagnostic::on_unimplemented(
    message = "cannot search `{Self}` for `{E}`",
    label = "`{Self}` must be a type-level list whose elements, like `{E}`, have identities",
    note = "build lists with `List![...]` and give other types identities with `identify!`"
)]
pub trait Contains<E: Ident>: List {
    /// `True` if `E` is an element.
    type Output: Bool;
}

impl<E: Ident> Contains<E> for Nil {
    type Output = False;
}

impl<H, T, E> Contains<E> for Cons<H, T>
where
    H: Same<E> + 'static,
    T: Contains<E>,
    E: Ident,
    (SameOf<H, E>, <T as Contains<E>>::Output): Or,
{
    type Output = <(SameOf<H, E>, <T as Contains<E>>::Output) as Or>::Result;
}

/// Whether `E` is an element of `L`, as a type-level boolean.
pub type ContainsOf<L, E> = <L as Contains<E>>::Output;

/// Whether `E` is an element of `L`.
pub const fn contains<L: Contains<E>, E: Ident>() -> bool {
    <L::Output as Bool>::VALUE
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use static_assertions::{assert_type_eq_all, const_assert};

    type Numbers = List![UnaryOf<1>, UnaryOf<2>, UnaryOf<3>];

    assert_type_eq_all!(ContainsOf<Nil, u8>, False);
    assert_type_eq_all!(ContainsOf<Numbers, UnaryOf<1>>, True);
    assert_type_eq_all!(ContainsOf<Numbers, UnaryOf<3>>, True);
    assert_type_eq_all!(ContainsOf<Numbers, UnaryOf<4>>, False);
    assert_type_eq_all!(ContainsOf<Numbers, Z>, False);

    const_assert!(!contains::<List![u64], u32>());
    const_assert!(!contains::<List![Option<u8>], u8>());
    const_assert!(contains::<List![u8, u8, u8], u8>());

    #[test]
    fn lists_can_be_elements() {
        assert!(contains::<List![List![u8], u8], List![u8]>());
        assert!(!contains::<List![List![u8], u8], List![]>());
    }
}
