//! API index endpoint.

use actix_web::HttpResponse;
use serde_json::json;

use super::error::ApiResult;

/// `GET /api` — a static map of every route the API serves, keyed as
/// `"METHOD /path"` with a short description and the query parameters and
/// body shape each accepts.
pub async fn api_index() -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "endpoints": {
            "GET /api": {
                "description": "This index of available endpoints"
            },
            "GET /api/topics": {
                "description": "All topics",
                "exampleResponse": { "topics": [{ "slug": "rust", "description": "Fearless concurrency" }] }
            },
            "GET /api/users/:username": {
                "description": "A single user by username"
            },
            "GET /api/articles": {
                "description": "All articles, without bodies",
                "queries": ["sort_by", "order", "author", "topic"]
            },
            "GET /api/articles/:article_id": {
                "description": "A single article, with body and comment_count"
            },
            "PATCH /api/articles/:article_id": {
                "description": "Adjust an article's votes",
                "exampleRequest": { "inc_votes": 1 }
            },
            "GET /api/articles/:article_id/comments": {
                "description": "Comments on an article",
                "queries": ["sort_by", "order"]
            },
            "POST /api/articles/:article_id/comments": {
                "description": "Create a comment on an article",
                "exampleRequest": { "username": "paper_crane", "body": "A comment." }
            },
            "PATCH /api/comments/:comment_id": {
                "description": "Adjust a comment's votes",
                "exampleRequest": { "inc_votes": -1 }
            },
            "DELETE /api/comments/:comment_id": {
                "description": "Delete a comment"
            }
        }
    })))
}
