use static_assertions::{assert_type_eq_all, const_assert, const_assert_eq};
use typelist::prelude::*;

struct Alpha;
struct Beta;
struct Gamma;
struct Delta;
typelist::identify!(Alpha = 0xA, Beta = 0xB, Gamma = 0xC, Delta = 0xD);

type Abc = List![Alpha, Beta, Gamma];

// Size.
const_assert_eq!(size::<List![]>(), 0);
const_assert_eq!(size::<Abc>(), 3);
const_assert_eq!(size::<TransformOf<Abc, Tagged>>(), size::<Abc>());

// Membership.
const_assert!(contains::<Abc, Alpha>());
const_assert!(contains::<Abc, Beta>());
const_assert!(contains::<Abc, Gamma>());
const_assert!(!contains::<Abc, Delta>());
const_assert!(!contains::<Abc, u8>());
const_assert!(!contains::<List![], Alpha>());

// Equality.
const_assert!(equal::<Nil, Nil>());
const_assert!(equal::<Abc, Abc>());
const_assert!(equal::<Abc, ListOf<(Alpha, Beta, Gamma)>>());
const_assert!(!equal::<Abc, List![Alpha, Beta]>());
const_assert!(!equal::<Abc, List![Alpha, Beta, Gamma, Delta]>());
const_assert!(!equal::<Abc, List![Alpha, Gamma, Beta]>());
const_assert!(!equal::<Abc, TransformOf<Abc, Tagged>>());

/// Wraps each element in an `Option`, so that no element survives unchanged.
struct Tagged;

impl Operation for Tagged {}

impl<T: 'static> UnaryOp<T> for Tagged {
    type Output = Option<T>;
}

/// Builds the nested "call record" `(element, accumulator)` at each step.
struct Record;

impl Operation for Record {}

impl<E, Acc> BinaryOp<E, Acc> for Record {
    type Output = (E, Acc);
}

// Identity law: folding nothing gives back the initial accumulator.
assert_type_eq_all!(FoldLOf<List![], Record, Delta>, Delta);
assert_type_eq_all!(FoldLOf<List![], Max, UnaryOf<7>>, UnaryOf<7>);

// Left-to-right law: foldl([a, b, c], f, init) = f(c, f(b, f(a, init))).
assert_type_eq_all!(
    FoldLOf<Abc, Record, Delta>,
    Combine<Record, Gamma, Combine<Record, Beta, Combine<Record, Alpha, Delta>>>,
);
assert_type_eq_all!(FoldLOf<Abc, Prepend, Nil>, List![Gamma, Beta, Alpha]);
assert_type_eq_all!(FoldLOf<Abc, Prepend, List![Delta]>, List![Gamma, Beta, Alpha, Delta]);

#[test]
fn transform_then_fold_composes() {
    type Widths = List![u8, u16, u32, u64];
    type Total = FoldLOf<TransformOf<Widths, SizeOf>, Sum, Z>;
    type Smallest = FoldLOf<TransformOf<Widths, SizeOf>, Min, UnaryOf<64>>;
    assert_eq!(<Total as Unary>::VALUE, 1 + 2 + 4 + 8);
    assert_eq!(<Smallest as Unary>::VALUE, 1);
}

#[test]
fn transform_keeps_order() {
    assert_eq!(
        format!("{:?}", <TransformOf<List![u8, char], Tagged>>::new()),
        format!(
            "List![{}, {}]",
            std::any::type_name::<Option<u8>>(),
            std::any::type_name::<Option<char>>()
        ),
    );
}
