//! Server construction and state wiring.
//!
//! The HTTP state is built over the Diesel repositories when a database pool
//! is configured; without one the server serves the seeded in-memory store,
//! which is the mode integration tests and local demos run in.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use tracing::warn;

use crate::domain::ports::MemoryContentStore;
use crate::inbound::http;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::middleware::Trace;
use crate::outbound::persistence::{
    DieselArticleRepository, DieselCommentRepository, DieselTopicRepository, DieselUserRepository,
};

/// Build the HTTP state from the configured persistence backend.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => HttpState::new(HttpStatePorts {
            topics: Arc::new(DieselTopicRepository::new(pool.clone())),
            users: Arc::new(DieselUserRepository::new(pool.clone())),
            articles: Arc::new(DieselArticleRepository::new(pool.clone())),
            comments: Arc::new(DieselCommentRepository::new(pool.clone())),
        }),
        None => {
            warn!("no database pool configured, serving the seeded in-memory store");
            HttpState::in_memory(MemoryContentStore::seeded())
        }
    }
}

/// Assemble the application: trace middleware, shared state, and the `/api`
/// route table with its fallbacks.
fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Trace)
        .app_data(state)
        .configure(http::configure)
}

/// Construct the HTTP server from a prepared configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let state = web::Data::new(build_http_state(&config));
    let bind_addr = config.bind_addr();
    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(bind_addr)?
        .run();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn poolless_config_serves_the_seeded_store() {
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("valid address"));
        let state = web::Data::new(build_http_state(&config));
        let app = test::init_service(build_app(state)).await;

        let req = test::TestRequest::get().uri("/api/topics").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_success());
    }
}
