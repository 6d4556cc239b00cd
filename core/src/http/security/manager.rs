//! Factory methods for authorizers.

use crate::authorization::{fallible, reject, Authorizer, Fallible, Reject, TryIdentityLoader};
use crate::http::error::AuthError;
use crate::http::security::context::SecurityContext;

/// Identity loader reading the [`SecurityContext`].
pub type ContextLoader<I> = fn() -> Option<I>;

/// Forbidden handler answering with `Err(AuthError::Forbidden)`.
pub type ForbiddenError = Reject<fn() -> AuthError>;

/// Authorizer for Actix Web handlers returning `Result<_, AuthError>`.
pub type ContextAuthorizer<I> = Authorizer<ContextLoader<I>, ForbiddenError>;

/// Identity loader failing with `AuthError::Unauthorized` outside an
/// authenticated request.
pub type RequiredLoader<I> = Fallible<fn() -> Result<I, AuthError>>;

/// Authorizer answering `401` to anonymous callers and `403` to denied ones.
pub type AuthenticatedAuthorizer<I> = Authorizer<RequiredLoader<I>, ForbiddenError>;

/// Reads the identity of the current request, `Unauthorized` if there is none.
pub fn require_identity<I>() -> Result<I, AuthError>
where
    I: Clone + 'static,
{
    SecurityContext::current::<I>().ok_or(AuthError::Unauthorized)
}

pub struct AuthorizationManager {}

impl AuthorizationManager {
    /// Creates an authorizer from any identity loader and forbidden handler.
    pub fn authorizer<L, D>(identity_loader: L, on_forbidden: D) -> Authorizer<L, D>
    where
        L: TryIdentityLoader,
    {
        Authorizer::new(identity_loader, on_forbidden)
    }

    /// Creates an authorizer for handlers served behind the security middleware.
    ///
    /// The identity is read from the [`SecurityContext`] (`None` for anonymous
    /// requests) and denied calls answer `403 Forbidden`.
    ///
    /// # Example
    /// ```ignore
    /// lazy_static! {
    ///     static ref AUTHORIZER: ContextAuthorizer<Employee> = AuthorizationManager::context_authorizer();
    /// }
    /// ```
    pub fn context_authorizer<I>() -> ContextAuthorizer<I>
    where
        I: Clone + 'static,
    {
        Authorizer::new(
            SecurityContext::current::<I> as ContextLoader<I>,
            reject(AuthError::forbidden as fn() -> AuthError),
        )
    }

    /// Like [`context_authorizer`](Self::context_authorizer), but requirements
    /// see the identity itself and anonymous requests answer
    /// `401 Unauthorized` without evaluating them.
    ///
    /// `on_forbidden` builds the error of denied calls.
    pub fn authenticated_authorizer<I>(
        on_forbidden: fn() -> AuthError,
    ) -> AuthenticatedAuthorizer<I>
    where
        I: Clone + 'static,
    {
        Authorizer::new(
            fallible(require_identity::<I> as fn() -> Result<I, AuthError>),
            reject(on_forbidden),
        )
    }
}
