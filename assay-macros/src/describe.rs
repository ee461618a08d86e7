//! `describe!` macro for grouping related tests
//!
//! Wraps its body in a module named after the group, so tests from different
//! groups can share names. `describe!("Type", { .. })` becomes `mod type_`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{braced, LitStr, Token};

use crate::utils::ident_from_name;

/// `describe!("Name", { items })`, with an optional trailing comma
struct DescribeArgs {
    name: LitStr,
    body: TokenStream2,
}

impl Parse for DescribeArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name = input.parse()?;
        input.parse::<Token![,]>()?;
        let content;
        braced!(content in input);
        let body = content.parse()?;
        input.parse::<Option<Token![,]>>()?;

        Ok(Self { name, body })
    }
}

fn expand(args: DescribeArgs) -> syn::Result<TokenStream2> {
    let mod_name = ident_from_name(&args.name)?;
    let body = args.body;

    Ok(quote! {
        mod #mod_name {
            #[allow(unused_imports)]
            use super::*;

            #body
        }
    })
}

pub fn describe_impl(input: TokenStream) -> TokenStream {
    syn::parse::<DescribeArgs>(input)
        .and_then(expand)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
