//! Common test utilities and configuration.
//!
//! This module provides shared test infrastructure including:
//! - Plain authorizers for the employee, manager and admin users
//! - The demo app builder

#![allow(dead_code)]

use actix_web::{test, App};

use actix_authorizer::authorization::{reject, Authorizer, Reject};
use actix_authorizer::http::error::AuthError;
use actix_authorizer_test::model::User;
use actix_authorizer_test::{configure, security};

// =============================================================================
// Plain Authorizers
// =============================================================================

pub const FORBIDDEN: &str = "403 Forbidden";

pub type PlainAuthorizer = Authorizer<fn() -> User, Reject<fn() -> AuthError>>;

/// Forbidden handler of the plain authorizers.
pub fn forbidden() -> AuthError {
    AuthError::forbidden_with(FORBIDDEN)
}

/// Authorizer loading the user returned by `loader` and rejecting with
/// `403 Forbidden`.
pub fn authorizer(loader: fn() -> User) -> PlainAuthorizer {
    Authorizer::new(loader, reject(forbidden as fn() -> AuthError))
}

// =============================================================================
// Demo App
// =============================================================================

pub async fn create_test_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(App::new().wrap(security()).configure(configure)).await
}
