//! Security middleware for Actix Web.

use actix_service::{Service, Transform};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use tracing::trace;

use crate::http::security::config::Authenticator;
use crate::http::security::context::SecurityContext;

/// Security middleware factory.
///
/// Authenticates every request, then serves it inside a
/// [`SecurityContext`] scope holding the identity, so that guarded handlers
/// can load it with `SecurityContext::current`. The identity is also stored
/// in the request extensions for the [`Identity`](super::Identity) extractor.
///
/// # Example
/// ```ignore
/// App::new().wrap(
///     SecurityTransform::new()
///         .config_authenticator(my_authenticator)
/// )
/// ```
pub struct SecurityTransform<Auth> {
    authenticator: Option<fn() -> Auth>,
}

impl<Auth> SecurityTransform<Auth> {
    pub fn new() -> Self {
        SecurityTransform {
            authenticator: None,
        }
    }

    pub fn config_authenticator(mut self, authenticator: fn() -> Auth) -> Self {
        self.authenticator = Some(authenticator);
        self
    }
}

impl<Auth> Default for SecurityTransform<Auth> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B, Auth> Transform<S, ServiceRequest> for SecurityTransform<Auth>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    Auth: Authenticator + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SecurityService<Auth, S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let authenticator = self.authenticator.map(|f| f());

        ok(SecurityService {
            authenticator,
            service,
        })
    }
}

/// Security middleware service.
pub struct SecurityService<Auth, S> {
    authenticator: Option<Auth>,
    service: S,
}

impl<Auth, S, B> Service<ServiceRequest> for SecurityService<Auth, S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    Auth: Authenticator,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Step 1: Authenticate - extract identity from request
        let identity = self
            .authenticator
            .as_ref()
            .and_then(|auth| auth.authenticate(&req));

        trace!(
            path = req.path(),
            authenticated = identity.is_some(),
            "security context established"
        );

        // Step 2: Store identity in request extensions (if authenticated)
        if let Some(ref i) = identity {
            req.extensions_mut().insert(i.clone());
        }

        // Step 3: Serve the request inside the security context
        let fut = self.service.call(req);
        Box::pin(SecurityContext::run_with(identity, fut))
    }
}
