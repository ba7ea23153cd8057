use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::project::ProjectCategory, errors::AppError, utils::valid_uuid::valid_uuid, AppState,
};

#[instrument(skip(state))]
pub async fn get_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.get_projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_featured_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.get_featured_projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

/// Exact match on category; an unknown category matches nothing.
#[instrument(skip(state))]
pub async fn get_projects_by_category(
    category: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects = match category.parse::<ProjectCategory>() {
        Ok(category) => state.project_handler.get_projects_by_category(category).await?,
        Err(_) => {
            tracing::debug!("Unknown project category requested");
            Vec::new()
        }
    };

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_project_by_id(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&project_id, "project")?;

    let project = state
        .project_handler
        .get_project(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    Ok(HttpResponse::Ok().json(project))
}
