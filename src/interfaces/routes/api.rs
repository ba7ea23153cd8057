use actix_web::web;

use crate::handlers::{contact, experiences, projects};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .service(
                web::resource("")
                    .route(web::get().to(projects::get_projects))
            )
            .service(
                web::resource("/featured")
                    .route(web::get().to(projects::get_featured_projects))
            )
            .service(
                web::resource("/category/{category}")
                    .route(web::get().to(projects::get_projects_by_category))
            )
            .service(
                web::resource("/{project_id}")
                    .route(web::get().to(projects::get_project_by_id))
            )
    );

    cfg.service(
        web::scope("/experiences")
            .service(
                web::resource("")
                    .route(web::get().to(experiences::get_experiences))
            )
            .service(
                web::resource("/type/{kind}")
                    .route(web::get().to(experiences::get_experiences_by_type))
            )
    );

    cfg.service(
        web::resource("/contact")
            .route(web::post().to(contact::create_contact_submission))
    );
}
