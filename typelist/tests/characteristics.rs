use std::mem;
use typelist::prelude::*;

/// The largest size and strictest alignment among the element types of a list.
trait Characteristics {
    type Largest: Unary;
    type MostAligned: Unary;
}

impl<L> Characteristics for L
where
    L: Transform<SizeOf> + Transform<AlignOf>,
    TransformOf<L, SizeOf>: FoldL<Max, Z>,
    TransformOf<L, AlignOf>: FoldL<Max, Z>,
    FoldLOf<TransformOf<L, SizeOf>, Max, Z>: Unary,
    FoldLOf<TransformOf<L, AlignOf>, Max, Z>: Unary,
{
    type Largest = FoldLOf<TransformOf<L, SizeOf>, Max, Z>;
    type MostAligned = FoldLOf<TransformOf<L, AlignOf>, Max, Z>;
}

fn largest<L: Characteristics>() -> usize {
    <L::Largest as Unary>::VALUE
}

fn most_aligned<L: Characteristics>() -> usize {
    <L::MostAligned as Unary>::VALUE
}

#[test]
fn widest_of_mixed_integers() {
    type Types = List![char, i64, i32, u32];
    assert_eq!(largest::<Types>(), mem::size_of::<i64>());
    assert_eq!(most_aligned::<Types>(), mem::align_of::<i64>());
}

#[test]
fn order_of_candidates_does_not_matter() {
    assert_eq!(
        largest::<List![u8, u128, u16]>(),
        largest::<List![u128, u16, u8]>()
    );
    assert_eq!(
        most_aligned::<ReverseOf<List![u8, u64, u16]>>(),
        mem::align_of::<u64>()
    );
}

#[test]
fn empty_list_has_no_size() {
    assert_eq!(largest::<Nil>(), 0);
    assert_eq!(most_aligned::<Nil>(), 0);
}

#[test]
fn user_types_join_in_with_a_layout() {
    #[allow(dead_code)]
    #[repr(C, align(32))]
    struct Aligned([u8; 40]);

    typelist::layout!(Aligned);

    assert_eq!(largest::<List![u8, Aligned]>(), 64);
    assert_eq!(most_aligned::<List![u8, Aligned]>(), 32);
}
