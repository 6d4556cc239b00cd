//! # Actix Authorizer
//!
//! Permission guards for plain functions and Actix Web handlers.
//!
//! This crate provides a unified API combining:
//! - `actix-authorizer-core`: The authorizer, requirement combinators and the Actix Web integration
//! - `actix-authorizer-codegen`: The `#[requires_permission]` procedural macro
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! actix-web = "4"
//! actix-authorizer = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use actix_web::{get, web, App, HttpServer};
//! use actix_authorizer::requires_permission;
//! use actix_authorizer::http::error::AuthError;
//! use actix_authorizer::http::security::{
//!     AuthenticatedAuthorizer, AuthorizationManager, SecurityTransform,
//! };
//!
//! // 401 for anonymous callers, 403 for denied ones
//! lazy_static! {
//!     static ref AUTHORIZER: AuthenticatedAuthorizer<User> =
//!         AuthorizationManager::authenticated_authorizer(AuthError::forbidden);
//! }
//!
//! fn user_can_delete_project(user: &User) -> bool {
//!     user.has_permission(Permission::DeleteProject)
//! }
//!
//! #[requires_permission(AUTHORIZER, user_can_delete_project)]
//! #[get("/delete_project/{project_id}/")]
//! async fn delete_project(project_id: web::Path<u32>) -> Result<String, AuthError> {
//!     Ok(format!("<p>Deleted project {}</p>", project_id))
//! }
//!
//! App::new()
//!     .wrap(SecurityTransform::new().config_authenticator(authenticator))
//!     .service(delete_project)
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `macros` | Yes | The `#[requires_permission]` attribute macro |
//!
//! ## Modules
//!
//! - [`authorization`] - Authorizer, guards and requirements (framework independent)
//! - [`http::security`] - Middleware, security context and extractors
//! - [`http::error`] - Error types

// Re-export everything from actix-authorizer-core
pub use actix_authorizer_core::*;

// Re-export procedural macros when the "macros" feature is enabled
#[cfg(feature = "macros")]
pub use actix_authorizer_codegen::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use actix_authorizer_core::authorization::{
        all_of, any_of, deny_all, fallible, permit_all, reject, Authorizer, Fallible,
        ForbiddenHandler, Guard, Guarded, IdentityLoader, Reject, Requirement, RequirementExt,
        TryIdentityLoader,
    };
    pub use actix_authorizer_core::http::error::AuthError;
    pub use actix_authorizer_core::http::security::{
        AuthenticatedAuthorizer, AuthorizationManager, Authenticator, ContextAuthorizer, Identity,
        OptionalIdentity, SecurityContext, SecurityTransform,
    };

    #[cfg(feature = "macros")]
    pub use actix_authorizer_codegen::requires_permission;
}
