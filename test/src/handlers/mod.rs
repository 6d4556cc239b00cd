//! Route handlers.
//!
//! Every guarded handler shares the web authorizer below: the identity comes
//! from the security context, anonymous calls answer `401 Unauthorized` and
//! denied calls answer `403 Forbidden`.

use actix_authorizer::http::error::AuthError;
use actix_authorizer::http::security::{AuthenticatedAuthorizer, AuthorizationManager};
use lazy_static::lazy_static;

use crate::model::User;

pub mod home;
pub mod projects;

pub const FORBIDDEN_MESSAGE: &str = "Forbidden: you do not have access to this resource";

fn forbidden() -> AuthError {
    AuthError::forbidden_with(FORBIDDEN_MESSAGE)
}

lazy_static! {
    pub static ref AUTHORIZER: AuthenticatedAuthorizer<User> =
        AuthorizationManager::authenticated_authorizer(forbidden);
}
