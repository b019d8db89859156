//! Articles endpoints.
//!
//! The listing payload omits `body`; the single-article payload carries it.
//! Both carry the derived `comment_count` as a JSON integer.

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bodies::IncVotesBody;
use super::error::ApiResult;
use super::state::HttpState;
use crate::domain::{Article, ArticleFilter, ArticleId, ArticleSort};

/// Raw query parameters of the article listing. Validation happens in the
/// clause builder, not in serde: an off-whitelist value must produce the
/// canonical 400, not an extraction error.
#[derive(Debug, Default, Deserialize)]
pub struct ListArticlesQuery {
    sort_by: Option<String>,
    order: Option<String>,
    author: Option<String>,
    topic: Option<String>,
}

#[derive(Serialize)]
struct ArticleListItemDto {
    article_id: ArticleId,
    title: String,
    topic: String,
    author: String,
    created_at: DateTime<Utc>,
    votes: i32,
    comment_count: i64,
}

impl From<Article> for ArticleListItemDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.article_id,
            title: article.title,
            topic: article.topic,
            author: article.author,
            created_at: article.created_at,
            votes: article.votes,
            comment_count: article.comment_count,
        }
    }
}

#[derive(Serialize)]
struct ArticleDto {
    article_id: ArticleId,
    title: String,
    body: String,
    topic: String,
    author: String,
    created_at: DateTime<Utc>,
    votes: i32,
    comment_count: i64,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.article_id,
            title: article.title,
            body: article.body,
            topic: article.topic,
            author: article.author,
            created_at: article.created_at,
            votes: article.votes,
            comment_count: article.comment_count,
        }
    }
}

#[derive(Serialize)]
struct ArticlesEnvelope {
    articles: Vec<ArticleListItemDto>,
}

#[derive(Serialize)]
struct ArticleEnvelope {
    article: ArticleDto,
}

/// `GET /api/articles` — sorted, optionally filtered listing, as
/// `{"articles": [...]}` without bodies.
pub async fn list_articles(
    state: web::Data<HttpState>,
    query: web::Query<ListArticlesQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let sort = ArticleSort::from_params(query.sort_by.as_deref(), query.order.as_deref())?;
    let filter = ArticleFilter {
        author: query.author,
        topic: query.topic,
    };
    let articles = state.articles.list_articles(sort, &filter).await?;
    Ok(HttpResponse::Ok().json(ArticlesEnvelope {
        articles: articles.into_iter().map(ArticleListItemDto::from).collect(),
    }))
}

/// `GET /api/articles/{article_id}` — one article with body, as
/// `{"article": {...}}`.
pub async fn fetch_article(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = ArticleId::parse(&path.into_inner())?;
    let article = state.articles.fetch_article(id).await?;
    Ok(HttpResponse::Ok().json(ArticleEnvelope {
        article: ArticleDto::from(article),
    }))
}

/// `PATCH /api/articles/{article_id}` — apply `inc_votes` and return the
/// updated article.
pub async fn patch_article_votes(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Json<IncVotesBody>,
) -> ApiResult<HttpResponse> {
    let id = ArticleId::parse(&path.into_inner())?;
    let article = state.articles.adjust_votes(id, body.inc_votes).await?;
    Ok(HttpResponse::Ok().json(ArticleEnvelope {
        article: ArticleDto::from(article),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_article() -> Article {
        Article {
            article_id: ArticleId::new(1),
            title: "Living with a borrow checker".into(),
            body: "It gets easier.".into(),
            topic: "rust".into(),
            author: "marmalade_sky".into(),
            created_at: Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).single().expect("valid"),
            votes: 100,
            comment_count: 3,
        }
    }

    #[rstest::rstest]
    fn listing_item_omits_body() {
        let value =
            serde_json::to_value(ArticleListItemDto::from(sample_article())).expect("serialise");
        assert!(value.get("body").is_none());
        assert_eq!(value["comment_count"], 3);
        assert_eq!(value["article_id"], 1);
    }

    #[rstest::rstest]
    fn single_article_carries_body_and_count() {
        let value = serde_json::to_value(ArticleDto::from(sample_article())).expect("serialise");
        assert_eq!(value["body"], "It gets easier.");
        assert_eq!(value["votes"], 100);
        assert_eq!(value["comment_count"], 3);
    }
}
