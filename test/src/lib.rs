//! Demo application for Actix Authorizer.
//!
//! A small project management service: employees view projects, managers
//! also edit them, admins edit and delete them.

pub mod auth;
pub mod handlers;
pub mod model;

use actix_web::web;

use actix_authorizer::http::security::SecurityTransform;

use crate::auth::{authenticator, HeaderAuthenticator};
use crate::handlers::AUTHORIZER;
use crate::model::user_can_view;

/// Registers every demo route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let can_view = AUTHORIZER.requires_permission(user_can_view);

    cfg.service(handlers::home::index)
        .service(handlers::home::whoami)
        .service(handlers::projects::edit_project)
        .service(handlers::projects::delete_project)
        .route(
            "/view_project/{project_id}/",
            web::get().to(can_view.protect(handlers::projects::view_project)),
        );
}

/// The security middleware authenticating demo requests.
pub fn security() -> SecurityTransform<HeaderAuthenticator> {
    SecurityTransform::new().config_authenticator(authenticator)
}
