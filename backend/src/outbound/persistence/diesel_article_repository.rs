//! PostgreSQL-backed `ArticleRepository` implementation using Diesel.
//!
//! The derived `comment_count` is folded in here: listings merge a grouped
//! count query over `comments`, single-row reads issue a scoped count. Vote
//! adjustments are a single `UPDATE ... SET votes = votes + $1 RETURNING`
//! so concurrent deltas on one row serialise in the database.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::dsl::{count_star, exists};
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{ArticleRepository, RepositoryError};
use crate::domain::sorting::ArticleSortKey;
use crate::domain::{Article, ArticleFilter, ArticleId, ArticleSort};

use super::diesel_error::{map_diesel_error, map_pool_error};
use super::models::ArticleRow;
use super::pool::DbPool;
use super::schema::{articles, comments};

/// Diesel-backed implementation of the articles port.
#[derive(Clone)]
pub struct DieselArticleRepository {
    pool: DbPool,
}

impl DieselArticleRepository {
    /// Create a new repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Comment tallies for every article that has at least one comment.
/// Articles absent from the map have a count of zero.
async fn comment_counts(
    conn: &mut AsyncPgConnection,
) -> Result<HashMap<i32, i64>, RepositoryError> {
    let counts: Vec<(i32, i64)> = comments::table
        .group_by(comments::article_id)
        .select((comments::article_id, count_star()))
        .load(conn)
        .await
        .map_err(map_diesel_error)?;
    Ok(counts.into_iter().collect())
}

/// Comment tally for one article.
async fn comment_count_for(
    conn: &mut AsyncPgConnection,
    id: ArticleId,
) -> Result<i64, RepositoryError> {
    comments::table
        .filter(comments::article_id.eq(id.get()))
        .count()
        .get_result(conn)
        .await
        .map_err(map_diesel_error)
}

#[async_trait]
impl ArticleRepository for DieselArticleRepository {
    async fn list(
        &self,
        sort: ArticleSort,
        filter: &ArticleFilter,
    ) -> Result<Vec<Article>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = articles::table
            .select(ArticleRow::as_select())
            .into_boxed();
        if let Some(author) = filter.author.as_deref() {
            query = query.filter(articles::author.eq(author.to_owned()));
        }
        if let Some(topic) = filter.topic.as_deref() {
            query = query.filter(articles::topic.eq(topic.to_owned()));
        }

        // Stored columns sort in SQL. The derived count sorts after the
        // merge, over rows pre-ordered by recency so ties stay stable.
        let descending = sort.order.is_descending();
        query = match (sort.key, descending) {
            (ArticleSortKey::ArticleId, true) => query.order(articles::article_id.desc()),
            (ArticleSortKey::ArticleId, false) => query.order(articles::article_id.asc()),
            (ArticleSortKey::Title, true) => query.order(articles::title.desc()),
            (ArticleSortKey::Title, false) => query.order(articles::title.asc()),
            (ArticleSortKey::Author, true) => query.order(articles::author.desc()),
            (ArticleSortKey::Author, false) => query.order(articles::author.asc()),
            (ArticleSortKey::Topic, true) => query.order(articles::topic.desc()),
            (ArticleSortKey::Topic, false) => query.order(articles::topic.asc()),
            (ArticleSortKey::CreatedAt, true) => query.order(articles::created_at.desc()),
            (ArticleSortKey::CreatedAt, false) => query.order(articles::created_at.asc()),
            (ArticleSortKey::Votes, true) => query.order(articles::votes.desc()),
            (ArticleSortKey::Votes, false) => query.order(articles::votes.asc()),
            (ArticleSortKey::CommentCount, _) => query.order(articles::created_at.desc()),
        };

        let rows: Vec<ArticleRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        let counts = comment_counts(&mut conn).await?;

        let mut result: Vec<Article> = rows
            .into_iter()
            .map(|row| {
                let count = counts.get(&row.article_id).copied().unwrap_or(0);
                row.into_article(count)
            })
            .collect();

        if sort.key == ArticleSortKey::CommentCount {
            result.sort_by_key(|article| article.comment_count);
            if descending {
                result.reverse();
            }
        }
        Ok(result)
    }

    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ArticleRow> = articles::table
            .find(id.get())
            .select(ArticleRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        match row {
            Some(row) => {
                let count = comment_count_for(&mut conn, id).await?;
                Ok(Some(row.into_article(count)))
            }
            None => Ok(None),
        }
    }

    async fn exists(&self, id: ArticleId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(exists(articles::table.find(id.get())))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn adjust_votes(
        &self,
        id: ArticleId,
        delta: i32,
    ) -> Result<Option<Article>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ArticleRow> = diesel::update(articles::table.find(id.get()))
            .set(articles::votes.eq(articles::votes + delta))
            .returning(ArticleRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        match row {
            Some(row) => {
                let count = comment_count_for(&mut conn, id).await?;
                Ok(Some(row.into_article(count)))
            }
            None => Ok(None),
        }
    }
}
