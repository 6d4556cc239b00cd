//! Extractors for accessing the identity in handlers.

use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::http::error::AuthError;

/// Extractor for the authenticated identity.
///
/// Reads the identity stored in the request extensions by the
/// [`SecurityTransform`](super::middleware::SecurityTransform) middleware.
///
/// # Usage
/// ```ignore
/// async fn handler(employee: Identity<Employee>) -> impl Responder {
///     format!("Hello, {}!", employee.username)
/// }
/// ```
///
/// # Errors
/// Returns `401 Unauthorized` if the request is not authenticated.
#[derive(Debug, Clone)]
pub struct Identity<I>(I);

impl<I> Identity<I> {
    /// Returns the inner identity.
    pub fn into_inner(self) -> I {
        self.0
    }
}

impl<I> Deref for Identity<I> {
    type Target = I;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<I: Clone + 'static> FromRequest for Identity<I> {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<I>().cloned() {
            Some(identity) => ready(Ok(Identity(identity))),
            None => ready(Err(AuthError::Unauthorized)),
        }
    }
}

/// Optional extractor for the authenticated identity.
///
/// Returns `None` if not authenticated instead of an error.
#[derive(Debug, Clone)]
pub struct OptionalIdentity<I>(Option<I>);

impl<I> OptionalIdentity<I> {
    /// Returns the inner `Option`.
    pub fn into_inner(self) -> Option<I> {
        self.0
    }
}

impl<I> Deref for OptionalIdentity<I> {
    type Target = Option<I>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<I: Clone + 'static> FromRequest for OptionalIdentity<I> {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = req.extensions().get::<I>().cloned();
        ready(Ok(OptionalIdentity(identity)))
    }
}
