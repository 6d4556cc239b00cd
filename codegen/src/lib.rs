//! Procedural macros for method-level permission guards.
//!
//! # Usage
//!
//! ```ignore
//! use actix_authorizer::requires_permission;
//!
//! lazy_static! {
//!     static ref AUTHORIZER: Authorizer<fn() -> User, Reject<fn() -> AuthError>> =
//!         Authorizer::new(load_user as fn() -> User, reject(forbidden as fn() -> AuthError));
//! }
//!
//! #[requires_permission(AUTHORIZER, user_can_edit)]
//! fn edit_project(project_id: u32) -> Result<String, AuthError> {
//!     Ok(format!("Edited project {}", project_id))
//! }
//! ```

use proc_macro::TokenStream;

// Internal modules
mod args;
mod helpers;
mod requires_permission;

/// Guards a function with a permission requirement.
///
/// # Arguments
/// 1. An expression evaluating to an `Authorizer` (or a reference to one),
///    e.g. a `lazy_static` or a function call.
/// 2. The requirement, any `Fn(&Identity) -> bool`.
///
/// The function keeps its exact signature. On every call the authorizer loads
/// the identity and checks the requirement; the function body only runs when
/// it holds, otherwise the authorizer's forbidden handler provides the return
/// value.
///
/// # Usage
/// ```ignore
/// use actix_authorizer::requires_permission;
///
/// // Plain function
/// #[requires_permission(AUTHORIZER, user_can_view)]
/// fn view_project() -> Result<&'static str, PermissionError> {
///     Ok("Success")
/// }
///
/// // Actix Web handler (stack above the routing macro)
/// #[requires_permission(WEB_AUTHORIZER, user_can_delete_project)]
/// #[get("/delete_project/{project_id}/")]
/// async fn delete_project(project_id: web::Path<u32>) -> Result<String, AuthError> {
///     Ok(format!("<p>Deleted project {}</p>", project_id))
/// }
/// ```
///
/// # Note
/// Unlike `Guard::protect`, the macro guards the function in place, so the
/// function's name and documentation are its own.
#[proc_macro_attribute]
pub fn requires_permission(attrs: TokenStream, input: TokenStream) -> TokenStream {
    requires_permission::requires_permission_impl(attrs, input)
}
