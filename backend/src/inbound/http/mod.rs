//! HTTP adapter: route table, request/response shapes, and error rendering.
//!
//! Routes are wired with explicit resources rather than macros so every
//! resource can carry its own method fallback: the router's built-in 405
//! answers with an empty body, and no bare-bodied response may reach a
//! client. Extractor failures are rewritten by the shared config error
//! handlers before they surface.

pub mod articles;
pub mod bodies;
pub mod comments;
pub mod error;
pub mod fallback;
pub mod index;
pub mod state;
pub mod topics;
pub mod users;

use actix_web::web;

use self::error::{json_error_handler, path_error_handler, query_error_handler};
use self::fallback::{method_not_allowed, route_not_found};

/// Mount the whole API under `/api`, plus the top-level unknown-route
/// fallback.
///
/// The caller supplies `HttpState` as app data; see
/// [`state::HttpState::in_memory`] for a store-free construction.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(
                web::resource("")
                    .route(web::get().to(index::api_index))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .service(
                web::resource("/topics")
                    .route(web::get().to(topics::list_topics))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .service(
                web::resource("/users/{username}")
                    .route(web::get().to(users::fetch_user))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .service(
                web::resource("/articles")
                    .route(web::get().to(articles::list_articles))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .service(
                web::resource("/articles/{article_id}")
                    .route(web::get().to(articles::fetch_article))
                    .route(web::patch().to(articles::patch_article_votes))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .service(
                web::resource("/articles/{article_id}/comments")
                    .route(web::get().to(comments::list_comments))
                    .route(web::post().to(comments::post_comment))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .service(
                web::resource("/comments/{comment_id}")
                    .route(web::patch().to(comments::patch_comment_votes))
                    .route(web::delete().to(comments::delete_comment))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .default_service(web::route().to(route_not_found)),
    );
    cfg.default_service(web::route().to(route_not_found));
}
