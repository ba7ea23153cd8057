use actix_cors::Cors;
use actix_web::http::{header, Method};

const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

/// Builds the CORS policy from the configured origins. A `*` entry allows any
/// origin; config validation rejects that in production.
pub fn build_cors(origins: &[String]) -> Cors {
    let cors = if origins.iter().any(|origin| origin == "*") {
        Cors::default().allow_any_origin()
    } else {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec![Method::GET, Method::POST])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(PREFLIGHT_MAX_AGE_SECS)
}
