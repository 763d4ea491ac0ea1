use static_assertions::{assert_type_eq_all, const_assert, const_assert_eq};
use typelist::prelude::*;

type One = UnaryOf<1>;
type Two = UnaryOf<2>;
type Three = UnaryOf<3>;
type Four = UnaryOf<4>;

type Numbers = List![One, Two, Three];
type PlusOne = TransformOf<Numbers, Succ>;

const_assert_eq!(size::<Numbers>(), 3);

const_assert!(contains::<Numbers, One>());
const_assert!(contains::<Numbers, Two>());
const_assert!(contains::<Numbers, Three>());
const_assert!(!contains::<Numbers, Four>());
const_assert!(!contains::<Numbers, char>());

const_assert!(!contains::<PlusOne, One>());
const_assert!(contains::<PlusOne, Two>());
const_assert!(contains::<PlusOne, Three>());
const_assert!(contains::<PlusOne, Four>());

const_assert!(equal::<Numbers, Numbers>());
const_assert!(equal::<Numbers, List![One, Two, Three]>());
const_assert!(!equal::<Numbers, List![One, Two]>());
const_assert!(!equal::<Numbers, List![One, Two, Three, Four]>());
const_assert!(!equal::<Numbers, PlusOne>());

assert_type_eq_all!(HeadOf<Numbers>, One);
assert_type_eq_all!(HeadOf<TailOf<PlusOne>>, Three);

#[test]
fn elements_read_back_as_values() {
    assert_eq!(<HeadOf<Numbers> as Unary>::VALUE, 1);
    assert_eq!(<HeadOf<TailOf<Numbers>> as Unary>::VALUE, 2);
    assert_eq!(<HeadOf<TailOf<TailOf<Numbers>>> as Unary>::VALUE, 3);

    assert_eq!(size::<PlusOne>(), 3);
    assert_eq!(<HeadOf<PlusOne> as Unary>::VALUE, 2);
    assert_eq!(<HeadOf<TailOf<PlusOne>> as Unary>::VALUE, 3);
    assert_eq!(<HeadOf<TailOf<TailOf<PlusOne>>> as Unary>::VALUE, 4);
}

#[test]
fn independently_built_lists_are_the_same_type() {
    fn accepts(_: Numbers) {}
    accepts(<List![UnaryOf<1>, UnaryOf<2>, UnaryOf<3>]>::new());
    accepts(<ListOf<(One, Two, Three)>>::default());
    accepts(Cons::<S<Z>, Cons<S<S<Z>>, Cons<S<S<S<Z>>>, Nil>>>::new());
}
