use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Expr, Token};

/// Parsed arguments of `#[requires_permission(authorizer, requirement)]`.
pub struct PermissionArgs {
    pub authorizer: Expr,
    pub requirement: Expr,
}

/// Custom parser for the two comma-separated expressions.
/// Example: `#[requires_permission(AUTHORIZER, user_can_view)]`
impl Parse for PermissionArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let args: Punctuated<Expr, Token![,]> = Punctuated::parse_terminated(input)?;

        if args.len() != 2 {
            return Err(syn::Error::new(
                Span::call_site(),
                "expected an authorizer and a requirement, e.g. #[requires_permission(AUTHORIZER, user_can_view)]",
            ));
        }

        let mut args = args.into_iter();
        match (args.next(), args.next()) {
            (Some(authorizer), Some(requirement)) => Ok(PermissionArgs {
                authorizer,
                requirement,
            }),
            _ => Err(syn::Error::new(
                Span::call_site(),
                "expected an authorizer and a requirement",
            )),
        }
    }
}
