use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate unit tests for every list of consecutive numbers up to a certain length.
    // This makes it much less likely that an error in a trait definition goes uncaught at some
    // particular length.

    // Open a file to write to it in the output directory for the build
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("generated_lists.rs");
    let mut f = File::create(&dest_path)?;

    // File header
    writeln!(f, "#[allow(unused_imports)] use crate::prelude::*;")?;
    writeln!(
        f,
        "use static_assertions::{{assert_type_eq_all, const_assert, const_assert_eq}};"
    )?;
    writeln!(f)?;

    for length in 0..=MAX_LENGTH {
        write_test(&mut f, &Counting(length))?;
    }
    Ok(())
}

/// The longest list to generate tests for.
const MAX_LENGTH: usize = 12;

/// The list of unary numbers `0, 1, ..., n - 1`.
#[derive(Clone, Copy, Debug)]
struct Counting(usize);

impl Counting {
    fn len(self) -> usize {
        self.0
    }

    fn shorter(self) -> Option<Counting> {
        self.0.checked_sub(1).map(Counting)
    }

    fn longer(self) -> Counting {
        Counting(self.0 + 1)
    }
}

impl Display for Counting {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "List![")?;
        for i in 0..self.0 {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "UnaryOf<{}>", i)?;
        }
        write!(f, "]")
    }
}

/// The list of the same numbers as `Counting`, in descending order.
struct Descending(Counting);

impl Display for Descending {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "List![")?;
        for i in (0..self.0.len()).rev() {
            write!(f, "UnaryOf<{}>", i)?;
            if i > 0 {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

fn write_test(f: &mut File, list: &Counting) -> Result<(), Box<dyn Error>> {
    let n = list.len();
    writeln!(f, "#[test]")?;
    writeln!(f, "fn counting_list_of_length_{}() {{", n)?;
    writeln!(f, "    type L = {};", list)?;
    writeln!(f, "    const_assert_eq!(size::<L>(), {});", n)?;
    writeln!(f, "    const_assert!(equal::<L, L>());")?;
    for i in 0..n {
        writeln!(f, "    const_assert!(contains::<L, UnaryOf<{}>>());", i)?;
    }
    writeln!(f, "    const_assert!(!contains::<L, UnaryOf<{}>>());", n)?;
    writeln!(f, "    const_assert!(!contains::<L, char>());")?;
    if let Some(shorter) = list.shorter() {
        writeln!(f, "    const_assert!(!equal::<L, {}>());", shorter)?;
        writeln!(f, "    const_assert!(!equal::<L, TransformOf<L, Succ>>());")?;
        writeln!(
            f,
            "    assert_type_eq_all!(FoldLOf<L, Max, Z>, UnaryOf<{}>);",
            n - 1
        )?;
    } else {
        writeln!(f, "    assert_type_eq_all!(FoldLOf<L, Max, Z>, Z);")?;
    }
    writeln!(f, "    const_assert!(!equal::<L, {}>());", list.longer())?;
    writeln!(f, "    const_assert_eq!(size::<TransformOf<L, Succ>>(), {});", n)?;
    writeln!(
        f,
        "    assert_type_eq_all!(ReverseOf<L>, {});",
        Descending(*list)
    )?;
    writeln!(f, "}}")?;
    writeln!(f)?;
    Ok(())
}
