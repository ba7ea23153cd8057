use actix_web::{get, web, HttpResponse, Responder};

use crate::AppState;

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    let counts = state.store.counts();

    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Portfolio Site API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "projects": counts.projects,
        "experiences": counts.experiences,
        "endpoints": ["/api/projects", "/api/experiences", "/api/contact", "/health"]
    }))
}
