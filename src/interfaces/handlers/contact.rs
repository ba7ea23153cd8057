use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    constants::CONTACT_RATE_LIMITED_MESSAGE,
    entities::contact::NewContactSubmission,
    errors::AppError,
    limiter::rate_limiter::ContactRateLimiter,
    AppState,
};

#[instrument(skip(state, form))]
pub async fn create_contact_submission(
    state: web::Data<AppState>,
    form: web::Json<NewContactSubmission>,
) -> Result<impl Responder, AppError> {
    if let Some(limiter) = &state.contact_limiter {
        let email_key = ContactRateLimiter::key_for(&form.email);

        if !limiter.check(&email_key) {
            tracing::warn!("Contact submission rejected by rate limiter");
            return Err(AppError::TooManyRequests(CONTACT_RATE_LIMITED_MESSAGE.to_string()));
        }
    }

    let submission = state
        .contact_handler
        .create_contact_submission(form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(submission))
}
