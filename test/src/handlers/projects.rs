//! Project routes.

use actix_authorizer::http::error::AuthError;
use actix_authorizer::requires_permission;
use actix_web::{get, post, web};
use serde::Deserialize;

use super::AUTHORIZER;
use crate::model::{user_can_delete_project, user_can_edit};

#[derive(Debug, Deserialize)]
pub struct ProjectUpdate {
    pub name: String,
}

/// Read-only project page.
///
/// Routed with `Guard::protect` in [`configure`](crate::configure), so it
/// stays a plain function here.
pub async fn view_project(project_id: web::Path<u32>) -> Result<String, AuthError> {
    Ok(format!("<p>Project {}</p>", project_id.into_inner()))
}

/// Renames a project.
#[requires_permission(AUTHORIZER, user_can_edit)]
#[post("/projects/{project_id}")]
pub async fn edit_project(
    project_id: web::Path<u32>,
    update: web::Json<ProjectUpdate>,
) -> Result<String, AuthError> {
    Ok(format!(
        "<p>Renamed project {} to {}</p>",
        project_id.into_inner(),
        update.name
    ))
}

/// Deletes a project.
#[requires_permission(AUTHORIZER, user_can_delete_project)]
#[get("/delete_project/{project_id}/")]
pub async fn delete_project(project_id: web::Path<u32>) -> Result<String, AuthError> {
    Ok(format!("<p>Deleted project {}</p>", project_id.into_inner()))
}
