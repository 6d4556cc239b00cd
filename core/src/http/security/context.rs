//! Security Context for accessing the current identity.
//!
//! # Spring Security Equivalent
//! `org.springframework.security.core.context.SecurityContextHolder`
//!
//! # Overview
//! The SecurityContext holds the identity of the request being served, so
//! that niladic identity loaders can reach it from anywhere in the request's
//! task, not just from request handlers. The identity type is whatever the
//! configured [`Authenticator`](super::Authenticator) produces; the context
//! never inspects it.
//!
//! # Usage
//! ```ignore
//! use actix_authorizer_core::authorization::{reject, Authorizer};
//! use actix_authorizer_core::http::error::AuthError;
//! use actix_authorizer_core::http::security::SecurityContext;
//!
//! // The context is the identity loader of web authorizers.
//! let authorizer = Authorizer::new(
//!     SecurityContext::current::<Employee>,
//!     reject(AuthError::forbidden),
//! );
//! ```
//!
//! # Scoping
//! The identity lives in task-local storage. A request's identity is visible
//! to every future polled inside its `run_with` scope and to nothing else;
//! spawned tasks start without one.

use std::any::Any;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

tokio::task_local! {
    static SECURITY_CONTEXT: RefCell<Option<Rc<dyn Any>>>;
}

/// Holder for the current security context.
pub struct SecurityContext;

impl SecurityContext {
    /// Gets the current identity.
    ///
    /// # Returns
    /// - `Some(identity)` if an identity of type `I` is set in the current context
    /// - `None` outside a context scope, when no identity is set, or when the
    ///   identity has another type
    pub fn current<I>() -> Option<I>
    where
        I: Clone + 'static,
    {
        SECURITY_CONTEXT
            .try_with(|ctx| {
                ctx.borrow()
                    .as_ref()
                    .and_then(|identity| identity.downcast_ref::<I>().cloned())
            })
            .ok()
            .flatten()
    }

    /// Checks if an identity is set in the current context.
    pub fn is_authenticated() -> bool {
        SECURITY_CONTEXT
            .try_with(|ctx| ctx.borrow().is_some())
            .unwrap_or(false)
    }

    /// Runs a future with the given identity set in the security context.
    ///
    /// This is primarily used internally by the security middleware.
    ///
    /// # Example
    /// ```ignore
    /// SecurityContext::run_with(Some(user), async {
    ///     // Code here can access SecurityContext::current::<User>()
    /// }).await;
    /// ```
    pub async fn run_with<I, F>(identity: Option<I>, f: F) -> F::Output
    where
        I: 'static,
        F: Future,
    {
        let identity = identity.map(|i| Rc::new(i) as Rc<dyn Any>);
        SECURITY_CONTEXT.scope(RefCell::new(identity), f).await
    }

    /// Sets the identity in the current security context.
    ///
    /// # Warning
    /// This should only be called from within a `run_with` scope.
    /// Calling it outside a scope will have no effect.
    pub fn set<I: 'static>(identity: Option<I>) {
        let _ = SECURITY_CONTEXT.try_with(|ctx| {
            *ctx.borrow_mut() = identity.map(|i| Rc::new(i) as Rc<dyn Any>);
        });
    }

    /// Clears the security context.
    pub fn clear() {
        let _ = SECURITY_CONTEXT.try_with(|ctx| {
            *ctx.borrow_mut() = None;
        });
    }
}
