//! The `#[requires_permission]` macro.
//!
//! Rewrites the body of the annotated function so that it runs under a
//! guard. The signature, visibility and attributes (doc comments and routing
//! macros included) are emitted unchanged.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

use crate::args::PermissionArgs;
use crate::helpers::nameable_return_type;

pub fn requires_permission_impl(attrs: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attrs as PermissionArgs);
    let item_fn = parse_macro_input!(input as ItemFn);

    let authorizer = &args.authorizer;
    let requirement = &args.requirement;

    let attrs = &item_fn.attrs;
    let vis = &item_fn.vis;
    let sig = &item_fn.sig;
    let block = &item_fn.block;

    let return_type = nameable_return_type(&sig.output);

    let guarded_body = match (&sig.asyncness, return_type) {
        (Some(_), Some(ty)) => quote! {
            __guard.run_async(async {
                let __output: #ty = #block;
                __output
            }).await
        },
        (Some(_), None) => quote! {
            __guard.run_async(async #block).await
        },
        (None, Some(ty)) => quote! {
            __guard.run(|| -> #ty #block)
        },
        (None, None) => quote! {
            __guard.run(|| #block)
        },
    };

    let expanded = quote! {
        #(#attrs)*
        #vis #sig {
            #[allow(unused_parens)]
            let __guard = (#authorizer).requires_permission(#requirement);
            #guarded_body
        }
    };

    expanded.into()
}
