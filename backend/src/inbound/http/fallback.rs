//! Fallback handlers for unknown routes and unsupported methods.
//!
//! A path that matches no route is a 404 with its own message, distinct from
//! the entity-specific misses. A known path hit with an unsupported method is
//! a 405 — wired per resource, since the router's built-in method fallback
//! answers with an empty body.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use super::error::render;

/// Answer for any path outside the route table.
pub async fn route_not_found() -> HttpResponse {
    render(StatusCode::NOT_FOUND, "This route does not exist")
}

/// Answer for a known resource hit with a method it does not serve.
pub async fn method_not_allowed() -> HttpResponse {
    render(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn unknown_route_body_is_distinct_from_entity_misses() {
        let response = route_not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .expect("body bytes");
        let value: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(value["msg"], "This route does not exist");
    }

    #[actix_web::test]
    async fn method_fallback_carries_the_uniform_body() {
        let response = method_not_allowed().await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .expect("body bytes");
        let value: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(value["status"], 405);
        assert_eq!(value["msg"], "Method not allowed");
    }
}
