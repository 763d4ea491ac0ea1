use crate::{list::*, op::*};

/// Apply the operation `F` to every element of a list, keeping their order.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// type Numbers = List![UnaryOf<1>, UnaryOf<2>, UnaryOf<3>];
/// assert_type_eq_all!(
///     TransformOf<Numbers, Succ>,
///     List![UnaryOf<2>, UnaryOf<3>, UnaryOf<4>],
/// );
/// ```
///
/// The operation must accept every element; otherwise the transform does not compile:
///
/// ```compile_fail
/// use typelist::prelude::*;
///
/// fn mixed(_: TransformOf<List![UnaryOf<1>, char], Succ>) {}
/// ```
#[diagnostic::on_unimplemented(
    message = "cannot apply `{F}` to each element of `{Self}`",
    label = "`{Self}` must be a type-level list and `{F}` an operation accepting each element",
    note = "operations implement `Operation` and `UnaryOp<T>` for each element type `T`"
)]
pub trait Transform<F: Operation>: List {
    /// The transformed list.
    type Output: List;
}

impl<F: Operation> Transform<F> for Nil {
    type Output = Nil;
}

impl<H, T, F> Transform<F> for Cons<H, T>
where
    H: 'static,
    T: Transform<F>,
    F: UnaryOp<H>,
    F::Output: 'static,
{
    type Output = Cons<F::Output, T::Output>;
}

/// The list `L` with `F` applied to each element.
pub type TransformOf<L, F> = <L as Transform<F>>::Output;

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all, const_assert};

    struct Doubled;

    impl Operation for Doubled {}

    impl<T: 'static> UnaryOp<T> for Doubled {
        type Output = List![T, T];
    }

    assert_type_eq_all!(TransformOf<Nil, Succ>, Nil);
    assert_type_eq_all!(
        TransformOf<List![u8, char], Doubled>,
        List![List![u8, u8], List![char, char]],
    );
    assert_impl_all!(Nil: Transform<SizeOf>);
    assert_not_impl_any!(List![String, Vec<u8>]: Transform<SizeOf>);

    type Numbers = List![UnaryOf<1>, UnaryOf<2>, UnaryOf<3>];

    const_assert!(size::<TransformOf<Numbers, Succ>>() == size::<Numbers>());
    const_assert!(!equal::<Numbers, TransformOf<Numbers, Succ>>());
    const_assert!(equal::<
        TransformOf<TransformOf<Numbers, Succ>, Succ>,
        List![UnaryOf<3>, UnaryOf<4>, UnaryOf<5>],
    >());
}
