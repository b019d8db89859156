//! Comments resource operations.
//!
//! Listing is scoped by the parent article (path, not filter), so a missing
//! article fails fast with 404 before any comment query. Creation is the one
//! operation where a well-formed request referencing nothing is 422 rather
//! than 404: the insert itself is fine, its references are not.

use std::sync::Arc;

use tracing::debug;

use super::comment::{Comment, NewComment};
use super::error::{Error, ErrorCode};
use super::existence::{map_store_error, EntityRef, ExistenceResolver};
use super::ids::{ArticleId, CommentId};
use super::ports::{CommentRepository, RepositoryError};
use super::sorting::CommentSort;

/// Message for comment-creation requests whose references resolve to nothing.
const UNPROCESSABLE_REFERENCE_MSG: &str = "Referenced article or user does not exist";

/// Operations over the comments table.
#[derive(Clone)]
pub struct CommentsService {
    comments: Arc<dyn CommentRepository>,
    resolver: ExistenceResolver,
}

impl CommentsService {
    /// Create the service over the comment port and the shared resolver.
    pub fn new(comments: Arc<dyn CommentRepository>, resolver: ExistenceResolver) -> Self {
        Self { comments, resolver }
    }

    /// List the comments of one article under a validated sort clause.
    ///
    /// # Errors
    /// 404 `"Article does not exist"` when the article itself is missing; an
    /// existing article with no comments is an empty set, not an error.
    pub async fn list_for_article(
        &self,
        article_id: ArticleId,
        sort: CommentSort,
    ) -> Result<Vec<Comment>, Error> {
        self.resolver.require(EntityRef::Article(article_id)).await?;
        self.comments
            .list_for_article(article_id, sort)
            .await
            .map_err(map_store_error)
    }

    /// Probe a reference, keeping store faults distinct from plain misses.
    async fn reference_exists(&self, entity: EntityRef<'_>) -> Result<bool, Error> {
        match self.resolver.require(entity).await {
            Ok(()) => Ok(true),
            Err(err) if err.code() == ErrorCode::NotFound => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Create a comment on an article.
    ///
    /// Shape validation already happened at the boundary; here the article
    /// and author references are probed, and a miss on either is the 422
    /// outcome — deliberately distinct from 404.
    ///
    /// # Errors
    /// 422 when the article or username does not exist.
    pub async fn create(&self, new_comment: NewComment) -> Result<Comment, Error> {
        let article_found = self
            .reference_exists(EntityRef::Article(new_comment.article_id))
            .await?;
        let author_found = self
            .reference_exists(EntityRef::User(&new_comment.author))
            .await?;
        if !article_found || !author_found {
            return Err(Error::unprocessable(UNPROCESSABLE_REFERENCE_MSG));
        }

        self.comments
            .insert(&new_comment)
            .await
            .map_err(|error| match error {
                // Race between the probe and the insert: the reference
                // vanished underneath us. Same outcome as the probe miss.
                RepositoryError::ForeignKeyViolation { ref constraint } => {
                    debug!(constraint, "comment insert lost reference race");
                    Error::unprocessable(UNPROCESSABLE_REFERENCE_MSG)
                }
                other => map_store_error(other),
            })
    }

    /// Apply a validated `inc_votes` delta atomically and return the updated
    /// comment.
    ///
    /// # Errors
    /// 404 `"Comment does not exist"` when the id matches nothing.
    pub async fn adjust_votes(&self, id: CommentId, delta: i32) -> Result<Comment, Error> {
        self.comments
            .adjust_votes(id, delta)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found("Comment does not exist"))
    }

    /// Delete a comment. Terminal: the row is gone and later reads miss.
    ///
    /// # Errors
    /// 404 `"Comment does not exist"` when the id matches nothing.
    pub async fn delete(&self, id: CommentId) -> Result<(), Error> {
        let deleted = self.comments.delete(id).await.map_err(map_store_error)?;
        if deleted {
            Ok(())
        } else {
            Err(Error::not_found("Comment does not exist"))
        }
    }
}
