//! The `List!` type constructor.

use {
    crate::path,
    proc_macro2::TokenStream,
    quote::quote,
    syn::{
        parse::{Parse, ParseStream},
        Token, Type,
    },
};

/// The input to `List!`: a comma-separated sequence of element types, optionally ending in
/// `..Tail` to splice the elements onto the front of an existing list.
#[derive(Debug, Clone)]
pub struct ListInput {
    pub elements: Vec<Type>,
    pub tail: Option<Type>,
}

impl Parse for ListInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut elements = Vec::new();
        let mut tail = None;
        while !input.is_empty() {
            if input.peek(Token![..]) {
                let _: Token![..] = input.parse()?;
                tail = Some(input.parse()?);
                let _: Option<Token![,]> = input.parse()?;
                if !input.is_empty() {
                    return Err(input.error("the `..` tail must be the last item in a list"));
                }
                break;
            }
            elements.push(input.parse()?);
            if input.is_empty() {
                break;
            }
            let _: Token![,] = input.parse()?;
        }
        Ok(ListInput { elements, tail })
    }
}

impl ListInput {
    /// Expand into the nested `Cons` chain, innermost last.
    pub fn expand(&self) -> TokenStream {
        let c = path::typelist();
        let mut list = match &self.tail {
            Some(tail) => quote!(#tail),
            None => quote!(#c::Nil),
        };
        for element in self.elements.iter().rev() {
            list = quote!(#c::Cons<#element, #list>);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: &str) -> String {
        syn::parse_str::<ListInput>(input)
            .unwrap()
            .expand()
            .to_string()
            .replace(' ', "")
            .replace("::typelist::", "")
    }

    #[test]
    fn empty_list_is_nil() {
        assert_eq!(expand(""), "Nil");
    }

    #[test]
    fn elements_nest_in_order() {
        assert_eq!(expand("u8, u16"), "Cons<u8,Cons<u16,Nil>>");
    }

    #[test]
    fn trailing_comma_is_accepted() {
        assert_eq!(expand("u8,"), expand("u8"));
    }

    #[test]
    fn tail_is_spliced() {
        assert_eq!(expand("u8, ..Rest"), "Cons<u8,Rest>");
        assert_eq!(expand("..Rest"), "Rest");
    }

    #[test]
    fn tail_must_come_last() {
        assert!(syn::parse_str::<ListInput>("..Rest, u8").is_err());
    }
}
