//! Topics endpoint.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use super::error::ApiResult;
use super::state::HttpState;
use crate::domain::Topic;

#[derive(Serialize)]
struct TopicDto {
    slug: String,
    description: String,
}

impl From<Topic> for TopicDto {
    fn from(topic: Topic) -> Self {
        Self {
            slug: topic.slug,
            description: topic.description,
        }
    }
}

#[derive(Serialize)]
struct TopicsEnvelope {
    topics: Vec<TopicDto>,
}

/// `GET /api/topics` — every topic, as `{"topics": [...]}`.
pub async fn list_topics(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let topics = state.topics.list_topics().await?;
    Ok(HttpResponse::Ok().json(TopicsEnvelope {
        topics: topics.into_iter().map(TopicDto::from).collect(),
    }))
}
