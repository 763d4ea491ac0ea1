use {proc_macro2::Span, thiserror::Error};

/// The largest count accepted by the generator macros.
pub const MAX_GENERATED: usize = 256;

/// Errors in the input to one of the macros in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacroError {
    /// A generator was asked for more impls than the crate supports.
    #[error("cannot generate impls up to {found}: the maximum is {max}")]
    TooMany { found: usize, max: usize },
    /// A type identity was requested for something that does not name one concrete type.
    #[error("cannot declare an identity for `{0}`: identities belong to concrete types, so name each instantiation separately")]
    NotConcrete(String),
    /// The same type was listed twice in one `identify!` invocation.
    #[error("the type `{0}` is given an identity more than once")]
    DuplicateType(String),
}

impl MacroError {
    /// Attach a span to this error so it can be emitted as a compile error.
    pub fn at(self, span: Span) -> syn::Error {
        syn::Error::new(span, self)
    }
}
