//! Signature helpers for the permission macro.

use proc_macro2::{TokenStream, TokenTree};
use quote::ToTokens;
use syn::{ReturnType, Type};

/// Returns the declared return type, if it can be spelled in a `let` or
/// closure annotation.
///
/// `impl Trait` types cannot, so they yield `None` and the guarded body is
/// left to inference.
pub fn nameable_return_type(output: &ReturnType) -> Option<TokenStream> {
    match output {
        ReturnType::Default => Some(quote::quote! { () }),
        ReturnType::Type(_, ty) if !contains_impl_trait(ty) => Some(ty.to_token_stream()),
        ReturnType::Type(..) => None,
    }
}

fn contains_impl_trait(ty: &Type) -> bool {
    if let Type::ImplTrait(_) = ty {
        return true;
    }
    contains_impl_keyword(ty.to_token_stream())
}

fn contains_impl_keyword(tokens: TokenStream) -> bool {
    tokens.into_iter().any(|tt| match tt {
        TokenTree::Ident(ident) => ident == "impl",
        TokenTree::Group(group) => contains_impl_keyword(group.stream()),
        _ => false,
    })
}
