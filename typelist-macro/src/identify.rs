//! The `identify!` macro, which gives user types an identity key.
//!
//! A user key is the `User` tag followed by the eight hexadecimal digits of a `u32` id, most
//! significant first. When no id is written, it is the FNV-1a hash of the type's tokens qualified
//! by the module path and source location of the invocation, computed by the compiler with
//! `typelist::ident::hash_name`.

use {
    crate::{error::MacroError, path},
    proc_macro2::{Literal, TokenStream},
    quote::{quote, ToTokens},
    syn::{
        parse::{Parse, ParseStream},
        punctuated::Punctuated,
        spanned::Spanned,
        LitInt, Token, Type,
    },
};

/// One `Type` or `Type = id` entry.
#[derive(Debug, Clone)]
pub struct Identity {
    pub ty: Type,
    pub id: Option<LitInt>,
}

impl Parse for Identity {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty = input.parse()?;
        let id = if input.peek(Token![=]) {
            let _: Token![=] = input.parse()?;
            Some(input.parse()?)
        } else {
            None
        };
        Ok(Identity { ty, id })
    }
}

/// The full input to `identify!`.
#[derive(Debug, Clone)]
pub struct IdentifyInput {
    pub identities: Punctuated<Identity, Token![,]>,
}

impl Parse for IdentifyInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(IdentifyInput {
            identities: Punctuated::parse_terminated(input)?,
        })
    }
}

impl Identity {
    /// The name of the type, as used for duplicate detection and in error messages.
    fn name(&self) -> String {
        self.ty.to_token_stream().to_string().replace(' ', "")
    }

    /// The explicit id of this type, if one was written.
    pub fn explicit_id(&self) -> syn::Result<Option<u32>> {
        self.id.as_ref().map(LitInt::base10_parse::<u32>).transpose()
    }

    fn check_concrete(&self) -> syn::Result<()> {
        match &self.ty {
            Type::Infer(_) | Type::ImplTrait(_) | Type::Never(_) | Type::Macro(_) => {
                Err(MacroError::NotConcrete(self.name()).at(self.ty.span()))
            }
            _ => Ok(()),
        }
    }

    /// The eight hexadecimal digits of the id as unary numbers, most significant first.
    ///
    /// An explicit id is split here. Otherwise each digit is a constant expression over the hash of
    /// the type's name, qualified by the module and location of the invocation, which the compiler
    /// evaluates where the impl is written.
    fn digits(&self) -> syn::Result<Vec<TokenStream>> {
        let c = path::typelist();
        if let Some(id) = self.explicit_id()? {
            return Ok(hex_digits(id)
                .iter()
                .map(|digit| path::unary(*digit as usize))
                .collect());
        }
        let ty = &self.ty;
        let name = quote! {
            ::core::concat!(
                module_path!(),
                "::",
                stringify!(#ty),
                "@",
                file!(),
                ":",
                line!(),
                ":",
                column!()
            )
        };
        Ok((0..8u32)
            .map(|i| {
                let shift = Literal::u32_unsuffixed(28 - 4 * i);
                quote! {
                    #c::unary::UnaryOf<{
                        ((#c::ident::hash_name(#name) >> #shift) & 0xf) as usize
                    }>
                }
            })
            .collect())
    }

    fn expand(&self) -> syn::Result<TokenStream> {
        self.check_concrete()?;
        let c = path::typelist();
        let ty = &self.ty;
        let mut key = quote!(#c::Nil);
        for digit in self.digits()?.into_iter().rev() {
            key = quote!(#c::Cons<#digit, #key>);
        }
        Ok(quote! {
            impl #c::ident::Ident for #ty {
                type Key = #c::Cons<#c::ident::tag::User, #key>;
            }
        })
    }
}

impl IdentifyInput {
    pub fn expand(&self) -> syn::Result<TokenStream> {
        let mut seen = Vec::new();
        let mut output = TokenStream::new();
        for identity in &self.identities {
            let name = identity.name();
            if seen.contains(&name) {
                return Err(MacroError::DuplicateType(name).at(identity.ty.span()));
            }
            output.extend(identity.expand()?);
            seen.push(name);
        }
        Ok(output)
    }
}

/// The eight hexadecimal digits of `id`, most significant first.
pub fn hex_digits(id: u32) -> [u8; 8] {
    let mut digits = [0; 8];
    for (i, digit) in digits.iter_mut().enumerate() {
        *digit = ((id >> (28 - 4 * i)) & 0xf) as u8;
    }
    digits
}
