//! HTTP handlers and route configuration.

mod calendar;
mod export;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Generation and regeneration
            .route(
                "/generate-calendar",
                web::post().to(calendar::generate_calendar),
            )
            .route(
                "/regenerate-post",
                web::post().to(calendar::regenerate_post),
            )
            .route(
                "/regenerate-week",
                web::post().to(calendar::regenerate_week),
            )
            // The held calendar
            .service(
                web::scope("/calendar")
                    .route("", web::get().to(calendar::current_calendar))
                    .route("/weeks", web::get().to(calendar::week_view))
                    .route("/posts/{id}", web::patch().to(calendar::edit_post)),
            )
            // Derived renderings
            .service(
                web::scope("/export")
                    .route("/csv", web::get().to(export::csv))
                    .route("/text", web::get().to(export::plain_text))
                    .route("/markdown", web::get().to(export::markdown)),
            ),
    );
}
