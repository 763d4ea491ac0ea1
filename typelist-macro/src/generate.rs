//! Generators for the families of impls that `typelist` cannot write generically.

use {
    crate::{
        error::{MacroError, MAX_GENERATED},
        path,
    },
    proc_macro2::TokenStream,
    quote::{format_ident, quote},
    syn::LitInt,
};

/// Parse the single integer argument of a generator, checking it against [`MAX_GENERATED`].
pub fn parse_count(lit: &LitInt) -> syn::Result<usize> {
    let found = lit.base10_parse::<usize>()?;
    if found > MAX_GENERATED {
        return Err(MacroError::TooMany {
            found,
            max: MAX_GENERATED,
        }
        .at(lit.span()));
    }
    Ok(found)
}

/// Conversions between flat tuples of every arity `0..=max` and their `Cons` lists. Elements are
/// `'static`, as every list's are.
pub fn tuples(max: usize) -> TokenStream {
    let c = path::typelist();
    let mut output = TokenStream::new();
    for arity in 0..=max {
        let params: Vec<_> = (0..arity).map(|i| format_ident!("T{}", i)).collect();
        let mut list = quote!(#c::Nil);
        for param in params.iter().rev() {
            list = quote!(#c::Cons<#param, #list>);
        }
        output.extend(quote! {
            impl<#(#params: 'static),*> #c::tuple::Tuple for (#(#params,)*) {
                type AsList = #list;
            }

            impl<#(#params: 'static),*> #c::tuple::ToTuple for #list {
                type AsTuple = (#(#params,)*);
            }
        });
    }
    output
}

/// Conversions between `Number<N>` and the unary number `N` for every `N` in `0..=max`.
pub fn unary_conversions(max: usize) -> TokenStream {
    let c = path::typelist();
    let mut output = TokenStream::new();
    for n in 0..=max {
        let unary = path::unary(n);
        output.extend(quote! {
            impl #c::unary::ToConstant for #unary {
                type AsConstant = #c::unary::Number<#n>;
            }

            impl #c::unary::ToUnary for #c::unary::Number<#n> {
                type AsUnary = #unary;
            }
        });
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(tokens: TokenStream) -> String {
        tokens
            .to_string()
            .replace(' ', "")
            .replace("::typelist::", "")
    }

    #[test]
    fn counts_above_the_maximum_are_rejected() {
        let lit: LitInt = syn::parse_str("257").unwrap();
        assert!(parse_count(&lit).is_err());
        let lit: LitInt = syn::parse_str("256").unwrap();
        assert_eq!(parse_count(&lit).unwrap(), 256);
    }

    #[test]
    fn empty_tuple_is_nil() {
        let generated = flat(tuples(0));
        assert!(generated.contains("impl<>tuple::Tuplefor(){typeAsList=Nil;}"));
        assert!(generated.contains("impl<>tuple::ToTupleforNil{typeAsTuple=();}"));
    }

    #[test]
    fn pairs_nest_in_order() {
        let generated = flat(tuples(2));
        assert!(generated.contains("for(T0,T1,){typeAsList=Cons<T0,Cons<T1,Nil>>;}"));
        assert_eq!(generated.matches("tuple::Tuplefor").count(), 3);
    }

    #[test]
    fn one_conversion_pair_per_number() {
        let generated = flat(unary_conversions(4));
        assert_eq!(generated.matches("unary::ToUnaryfor").count(), 5);
        assert!(generated.contains("unary::Number<2usize>{typeAsUnary=unary::S<unary::S<unary::Z>>;}"));
    }
}
