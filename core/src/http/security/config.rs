//! Configuration traits for the HTTP integration.

use actix_web::dev::ServiceRequest;

/// Trait for extracting an identity from an HTTP request.
///
/// How the identity is established (headers, tokens, sessions) is up to the
/// application. The security middleware only stores what this returns.
///
/// # Implementation Note
/// Returns an owned identity so it can be stored in request extensions and
/// in the [`SecurityContext`](super::SecurityContext).
pub trait Authenticator {
    /// The identity produced for authenticated requests.
    type Identity: Clone + 'static;

    /// Attempts to authenticate the request and returns the identity if successful.
    fn authenticate(&self, req: &ServiceRequest) -> Option<Self::Identity>;
}
