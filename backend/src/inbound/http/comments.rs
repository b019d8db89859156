//! Comments endpoints, on both the article-scoped and comment-scoped paths.

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bodies::{IncVotesBody, NewCommentBody};
use super::error::ApiResult;
use super::state::HttpState;
use crate::domain::{ArticleId, Comment, CommentId, CommentSort, NewComment};

/// Raw query parameters of the comment listing; validated by the clause
/// builder so off-whitelist values become the canonical 400.
#[derive(Debug, Default, Deserialize)]
pub struct ListCommentsQuery {
    sort_by: Option<String>,
    order: Option<String>,
}

#[derive(Serialize)]
struct CommentDto {
    comment_id: CommentId,
    article_id: ArticleId,
    author: String,
    body: String,
    votes: i32,
    created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            comment_id: comment.comment_id,
            article_id: comment.article_id,
            author: comment.author,
            body: comment.body,
            votes: comment.votes,
            created_at: comment.created_at,
        }
    }
}

#[derive(Serialize)]
struct CommentsEnvelope {
    comments: Vec<CommentDto>,
}

#[derive(Serialize)]
struct CommentEnvelope {
    comment: CommentDto,
}

/// `GET /api/articles/{article_id}/comments` — the article's comments, sorted,
/// as `{"comments": [...]}`.
pub async fn list_comments(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<ListCommentsQuery>,
) -> ApiResult<HttpResponse> {
    let id = ArticleId::parse(&path.into_inner())?;
    let sort = CommentSort::from_params(query.sort_by.as_deref(), query.order.as_deref())?;
    let comments = state.comments.list_for_article(id, sort).await?;
    Ok(HttpResponse::Ok().json(CommentsEnvelope {
        comments: comments.into_iter().map(CommentDto::from).collect(),
    }))
}

/// `POST /api/articles/{article_id}/comments` — create a comment, answering
/// 201 with `{"comment": {...}}` as stored.
pub async fn post_comment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Json<NewCommentBody>,
) -> ApiResult<HttpResponse> {
    let id = ArticleId::parse(&path.into_inner())?;
    let body = body.into_inner();
    let comment = state
        .comments
        .create(NewComment {
            article_id: id,
            author: body.username,
            body: body.body,
        })
        .await?;
    Ok(HttpResponse::Created().json(CommentEnvelope {
        comment: CommentDto::from(comment),
    }))
}

/// `PATCH /api/comments/{comment_id}` — apply `inc_votes` and return the
/// updated comment.
pub async fn patch_comment_votes(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Json<IncVotesBody>,
) -> ApiResult<HttpResponse> {
    let id = CommentId::parse(&path.into_inner())?;
    let comment = state.comments.adjust_votes(id, body.inc_votes).await?;
    Ok(HttpResponse::Ok().json(CommentEnvelope {
        comment: CommentDto::from(comment),
    }))
}

/// `DELETE /api/comments/{comment_id}` — remove the comment, answering 204
/// with no body.
pub async fn delete_comment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = CommentId::parse(&path.into_inner())?;
    state.comments.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[rstest::rstest]
    fn comment_payload_carries_every_column() {
        let dto = CommentDto::from(Comment {
            comment_id: CommentId::new(1),
            article_id: ArticleId::new(1),
            author: "quiet_heron".into(),
            body: "Strong agree.".into(),
            votes: 14,
            created_at: Utc.with_ymd_and_hms(2023, 6, 2, 9, 0, 0).single().expect("valid"),
        });
        let value = serde_json::to_value(&dto).expect("serialise");
        assert_eq!(value["comment_id"], 1);
        assert_eq!(value["article_id"], 1);
        assert_eq!(value["votes"], 14);
        assert_eq!(value["author"], "quiet_heron");
    }
}
