//! Home routes.

use actix_authorizer::http::error::AuthError;
use actix_authorizer::http::security::OptionalIdentity;
use actix_authorizer::requires_permission;
use actix_web::{get, HttpResponse, Responder};

use super::AUTHORIZER;
use crate::model::{user_can_view, User};

/// Home page, open to anyone allowed to view projects.
#[requires_permission(AUTHORIZER, user_can_view)]
#[get("/")]
pub async fn index() -> Result<&'static str, AuthError> {
    Ok("<p>Hello World!</p>")
}

/// Shows who the caller is. Not guarded.
#[get("/whoami")]
pub async fn whoami(user: OptionalIdentity<User>) -> impl Responder {
    match user.into_inner() {
        Some(u) => {
            let mut permissions: Vec<String> =
                u.permissions().iter().map(|p| format!("{:?}", p)).collect();
            permissions.sort();
            HttpResponse::Ok().body(format!(
                "{}\nPermissions: {}",
                u.username,
                permissions.join(", ")
            ))
        }
        None => HttpResponse::Ok().body("anonymous"),
    }
}
