//! PostgreSQL-backed `CommentRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CommentRepository, RepositoryError};
use crate::domain::sorting::CommentSortKey;
use crate::domain::{ArticleId, Comment, CommentId, CommentSort, NewComment};

use super::diesel_error::{map_diesel_error, map_pool_error};
use super::models::{CommentRow, NewCommentRow};
use super::pool::DbPool;
use super::schema::comments;

/// Diesel-backed implementation of the comments port.
#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    /// Create a new repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn list_for_article(
        &self,
        article_id: ArticleId,
        sort: CommentSort,
    ) -> Result<Vec<Comment>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = comments::table
            .filter(comments::article_id.eq(article_id.get()))
            .select(CommentRow::as_select())
            .into_boxed();

        let descending = sort.order.is_descending();
        query = match (sort.key, descending) {
            (CommentSortKey::CommentId, true) => query.order(comments::comment_id.desc()),
            (CommentSortKey::CommentId, false) => query.order(comments::comment_id.asc()),
            (CommentSortKey::Votes, true) => query.order(comments::votes.desc()),
            (CommentSortKey::Votes, false) => query.order(comments::votes.asc()),
            (CommentSortKey::CreatedAt, true) => query.order(comments::created_at.desc()),
            (CommentSortKey::CreatedAt, false) => query.order(comments::created_at.asc()),
            (CommentSortKey::Author, true) => query.order(comments::author.desc()),
            (CommentSortKey::Author, false) => query.order(comments::author.asc()),
            (CommentSortKey::Body, true) => query.order(comments::body.desc()),
            (CommentSortKey::Body, false) => query.order(comments::body.asc()),
        };

        let rows: Vec<CommentRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn insert(&self, new_comment: &NewComment) -> Result<Comment, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: CommentRow = diesel::insert_into(comments::table)
            .values(NewCommentRow::from_new_comment(new_comment))
            .returning(CommentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(Comment::from(row))
    }

    async fn adjust_votes(
        &self,
        id: CommentId,
        delta: i32,
    ) -> Result<Option<Comment>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<CommentRow> = diesel::update(comments::table.find(id.get()))
            .set(comments::votes.eq(comments::votes + delta))
            .returning(CommentRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Comment::from))
    }

    async fn delete(&self, id: CommentId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(comments::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
