//! HTTP handlers and route configuration.

mod blog;
mod health;


use actix_web::{HttpRequest, error, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                // Blog routes
                .service(
                    web::scope("/v1/blogs")
                        .route("", web::get().to(blog::list_blogs))
                        .route("", web::post().to(blog::create_blog))
                        .route("/search", web::get().to(blog::search_blogs))
                        .route("/{id}", web::get().to(blog::get_blog))
                        .route("/{id}", web::put().to(blog::update_blog))
                        .route("/{id}", web::patch().to(blog::update_blog_tags))
                        .route("/{id}", web::delete().to(blog::delete_blog)),
                ),
        );
}

/// Bodies that decode but carry missing fields or unknown enum values are
/// validation failures; anything else unreadable is a bad request.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| match err {
        error::JsonPayloadError::Deserialize(e) if e.is_data() => {
            AppError::Validation(vec![e.to_string()]).into()
        }
        other => AppError::BadRequest(other.to_string()).into(),
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req: &HttpRequest| AppError::BadRequest(err.to_string()).into())
}

/// An id that does not parse cannot name a stored blog.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|_err, _req: &HttpRequest| {
        AppError::NotFound("Blog not found!".to_string()).into()
    })
}
