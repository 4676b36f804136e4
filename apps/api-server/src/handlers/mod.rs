//! HTTP handlers and route configuration.

mod blog;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Generation and feedback share one endpoint; the payload picks the path
            .route("/blog", web::post().to(blog::blog))
            .route("/invoke", web::post().to(blog::invoke)),
    );
}
