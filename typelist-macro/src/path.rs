use {
    lazy_static::lazy_static,
    proc_macro2::{Span, TokenStream},
    proc_macro_crate::FoundCrate,
    quote::quote,
    syn::Ident,
};

lazy_static! {
    static ref CRATE_NAME: String = match proc_macro_crate::crate_name("typelist") {
        Ok(FoundCrate::Name(name)) => name,
        // Inside `typelist` itself, `extern crate self as typelist` makes the absolute path valid.
        Ok(FoundCrate::Itself) | Err(_) => "typelist".to_owned(),
    };
}

/// The absolute path to the `typelist` crate as seen from the invoking crate.
pub fn typelist() -> TokenStream {
    let name = Ident::new(&CRATE_NAME, Span::call_site());
    quote!(::#name)
}

/// The unary number `n`, written out as nested successors of zero.
pub fn unary(n: usize) -> TokenStream {
    let c = typelist();
    let mut tokens = quote!(#c::unary::Z);
    for _ in 0..n {
        tokens = quote!(#c::unary::S<#tokens>);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unary_nests_successors() {
        let three = unary(3).to_string();
        assert_eq!(three.matches("unary :: S").count(), 3);
        assert_eq!(three.matches("unary :: Z").count(), 1);
    }
}
