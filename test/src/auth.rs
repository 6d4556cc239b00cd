//! Header based authentication for the demo.
//!
//! The caller names itself in the `X-User` header (`employee`, `manager` or
//! `admin`). Anything else is anonymous.

use actix_authorizer::http::security::Authenticator;
use actix_web::dev::ServiceRequest;

use crate::model::{load_admin, load_employee, load_manager, User};

pub const USER_HEADER: &str = "X-User";

#[derive(Clone, Default)]
pub struct HeaderAuthenticator;

impl HeaderAuthenticator {
    pub fn new() -> Self {
        HeaderAuthenticator
    }
}

impl Authenticator for HeaderAuthenticator {
    type Identity = User;

    fn authenticate(&self, req: &ServiceRequest) -> Option<User> {
        let name = req.headers().get(USER_HEADER)?.to_str().ok()?;
        match name.to_ascii_lowercase().as_str() {
            "employee" => Some(load_employee()),
            "manager" => Some(load_manager()),
            "admin" => Some(load_admin()),
            _ => None,
        }
    }
}

/// Factory handed to the security middleware.
pub fn authenticator() -> HeaderAuthenticator {
    HeaderAuthenticator::new()
}
