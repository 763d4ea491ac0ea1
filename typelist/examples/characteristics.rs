//! Prints what the type-level computations in this crate found, to compare against the compiler.

use typelist::prelude::*;

type Types = List![char, i64, i32, u32];

type Numbers = List![UnaryOf<1>, UnaryOf<2>, UnaryOf<3>];
type PlusOne = TransformOf<Numbers, Succ>;

fn print_numbers<L: NonEmpty>()
where
    L::Head: Unary,
    L::Tail: NonEmpty,
    HeadOf<L::Tail>: Unary,
    TailOf<L::Tail>: NonEmpty,
    HeadOf<TailOf<L::Tail>>: Unary,
{
    println!(
        "{} {} {}",
        <L::Head as Unary>::VALUE,
        <HeadOf<L::Tail> as Unary>::VALUE,
        <HeadOf<TailOf<L::Tail>> as Unary>::VALUE,
    );
}

fn main() {
    println!("types={:?}", Types::default());
    println!("length of numbers={}", size::<Numbers>());
    print_numbers::<Numbers>();
    println!("length of plus one={}", size::<PlusOne>());
    print_numbers::<PlusOne>();
    println!(
        "size={}, align={}",
        <FoldLOf<TransformOf<Types, SizeOf>, Max, Z> as Unary>::VALUE,
        <FoldLOf<TransformOf<Types, AlignOf>, Max, Z> as Unary>::VALUE,
    );
}
