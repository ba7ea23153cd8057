use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::experience::ExperienceType, errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn get_experiences(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let experiences = state.experience_handler.get_experiences().await?;
    Ok(HttpResponse::Ok().json(experiences))
}

#[instrument(skip(state))]
pub async fn get_experiences_by_type(
    kind: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let experiences = match kind.parse::<ExperienceType>() {
        Ok(kind) => state.experience_handler.get_experiences_by_type(kind).await?,
        Err(_) => Vec::new(),
    };

    Ok(HttpResponse::Ok().json(experiences))
}
