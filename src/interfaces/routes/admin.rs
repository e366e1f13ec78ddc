use actix_web::web;

use crate::handlers::{projects, system::admin_health_check};

/// Privileged write path; every route here is gated by the auth middleware
/// plus the `AdminClaims` extractor.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(admin_health_check)
            .service(
                web::scope("/projects")
                    .service(
                        web::resource("")
                            .route(web::post().to(projects::create_project))
                    )
                    .service(
                        web::resource("/{project_id}")
                            .route(web::put().to(projects::update_project))
                            .route(web::delete().to(projects::delete_project))
                    )
            )
    );
}
