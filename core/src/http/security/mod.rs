//! Actix Web integration.
//!
//! # Module Structure
//!
//! - `config` - Core trait (Authenticator)
//! - `context` - Security context for accessing the current identity
//! - `extractor` - Actix Web extractors (Identity, OptionalIdentity)
//! - `handler` - `Guarded` operations as Actix Web handlers
//! - `manager` - Factory methods (AuthorizationManager)
//! - `middleware` - Security middleware (SecurityTransform)
//!
//! # Request Flow
//!
//! ```text
//! request -> SecurityTransform (Authenticator -> SecurityContext scope)
//!         -> route -> Guarded handler (SecurityContext::current -> requirement)
//!         -> handler | forbidden handler
//! ```

pub use config::Authenticator;
pub use context::SecurityContext;
pub use extractor::{Identity, OptionalIdentity};
pub use manager::{
    require_identity, AuthenticatedAuthorizer, AuthorizationManager, ContextAuthorizer,
    ContextLoader, ForbiddenError, RequiredLoader,
};
pub use middleware::SecurityTransform;

// Internal modules (private implementation details)
mod config;
mod extractor;
mod handler;

// Public modules
pub mod context;
pub mod manager;
pub mod middleware;
