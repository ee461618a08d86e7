//! `test!` macro for individual test cases
//!
//! Expands to a libtest `#[test]` whose body runs inside
//! `::assay::testing::run`, with the author-named parameter bound to the
//! running `TestCase`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{braced, parenthesized, Ident, LitStr, Token, Type};

use crate::utils::ident_from_name;

/// Arguments for the test! macro
/// Supports: test!("name", fn(t) { ... })
///           test!("name", fn(t: &mut TestCase) { ... })
///           test!("name", fn() { ... })
struct TestArgs {
    name: LitStr,
    param: Option<(Ident, Option<Type>)>,
    body: TokenStream2,
}

impl Parse for TestArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: LitStr = input.parse()?;
        input.parse::<Token![,]>()?;

        if input.peek(Token![async]) {
            return Err(input.error("test! bodies are synchronous"));
        }
        input.parse::<Token![fn]>()?;

        let content;
        parenthesized!(content in input);

        let param = if content.is_empty() {
            None
        } else {
            let param_name: Ident = content.parse()?;
            let param_type = if content.peek(Token![:]) {
                content.parse::<Token![:]>()?;
                Some(content.parse::<Type>()?)
            } else {
                None
            };
            if content.peek(Token![,]) {
                content.parse::<Token![,]>()?;
            }
            if !content.is_empty() {
                return Err(content.error("test! takes at most one parameter"));
            }
            Some((param_name, param_type))
        };

        let body_content;
        braced!(body_content in input);
        let body: TokenStream2 = body_content.parse()?;

        Ok(Self { name, param, body })
    }
}

fn expand(args: TestArgs) -> syn::Result<TokenStream2> {
    let fn_name = ident_from_name(&args.name)?;
    let name_str = args.name.value();
    let body = args.body;

    let binding = match args.param {
        Some((name, Some(ty))) => quote! { #name: #ty },
        Some((name, None)) => quote! { #name: &mut ::assay::TestCase },
        None => quote! { _: &mut ::assay::TestCase },
    };

    // The prelude path keeps `#[test]` resolvable when `assay::test` is imported
    Ok(quote! {
        #[::core::prelude::v1::test]
        fn #fn_name() {
            ::assay::testing::run(#name_str, |#binding| {
                #body
            });
        }
    })
}

pub fn test_impl(input: TokenStream) -> TokenStream {
    syn::parse::<TestArgs>(input)
        .and_then(expand)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
