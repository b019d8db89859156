//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with the persistence
//! adapters. Each trait exposes strongly typed errors so adapters map their
//! failures into predictable variants instead of raw driver errors. Services
//! in this crate only ever see these traits; whether the rows live in
//! PostgreSQL or the in-memory fixture store is invisible to them.

use async_trait::async_trait;
use thiserror::Error as ThisError;

use super::article::{Article, ArticleFilter};
use super::comment::{Comment, NewComment};
use super::ids::{ArticleId, CommentId};
use super::sorting::{ArticleSort, CommentSort};
use super::topic::Topic;
use super::user::User;

mod fixtures;

pub use fixtures::{MemoryContentStore, NEW_COMMENT_VOTES};

/// Errors surfaced by persistence adapters.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum RepositoryError {
    /// Connection could not be established or was lost mid-operation.
    #[error("repository connection failed: {message}")]
    Connection {
        /// Driver-level description, safe for logs only.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("repository query failed: {message}")]
    Query {
        /// Driver-level description, safe for logs only.
        message: String,
    },
    /// An insert or update violated a foreign key constraint.
    ///
    /// Services normally pre-check referenced entities, so this variant is a
    /// backstop for races between the check and the write.
    #[error("foreign key constraint violated: {constraint}")]
    ForeignKeyViolation {
        /// Name of the violated constraint as reported by the store.
        constraint: String,
    },
}

impl RepositoryError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Helper for foreign key violations.
    pub fn foreign_key(constraint: impl Into<String>) -> Self {
        Self::ForeignKeyViolation {
            constraint: constraint.into(),
        }
    }
}

/// Persistence port for topics.
#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Fetch every topic row. No sort or filter applies.
    async fn list(&self) -> Result<Vec<Topic>, RepositoryError>;

    /// Existence probe by slug, independent of any article query.
    async fn slug_exists(&self, slug: &str) -> Result<bool, RepositoryError>;
}

/// Persistence port for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Existence probe by username, independent of any article query.
    async fn username_exists(&self, username: &str) -> Result<bool, RepositoryError>;
}

/// Persistence port for articles.
///
/// Reads return [`Article`] with `comment_count` already folded in; the
/// aggregation is the adapter's concern.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// List articles under a validated sort clause and filter.
    ///
    /// An empty result is returned as-is; disambiguating empty-vs-missing is
    /// the caller's job.
    async fn list(
        &self,
        sort: ArticleSort,
        filter: &ArticleFilter,
    ) -> Result<Vec<Article>, RepositoryError>;

    /// Direct lookup by primary key.
    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, RepositoryError>;

    /// Existence probe by primary key.
    async fn exists(&self, id: ArticleId) -> Result<bool, RepositoryError>;

    /// Apply `votes += delta` as a single atomic store-side update and return
    /// the updated row, or `None` when the id matches nothing.
    ///
    /// Implementations must not read-modify-write in application code;
    /// concurrent increments on the same row are serialised by the store.
    async fn adjust_votes(
        &self,
        id: ArticleId,
        delta: i32,
    ) -> Result<Option<Article>, RepositoryError>;
}

/// Persistence port for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List the comments of one article under a validated sort clause.
    async fn list_for_article(
        &self,
        article_id: ArticleId,
        sort: CommentSort,
    ) -> Result<Vec<Comment>, RepositoryError>;

    /// Insert a new comment and return the stored row with its assigned key,
    /// timestamp, and default vote value.
    async fn insert(&self, new_comment: &NewComment) -> Result<Comment, RepositoryError>;

    /// Apply `votes += delta` atomically, as [`ArticleRepository::adjust_votes`].
    async fn adjust_votes(
        &self,
        id: CommentId,
        delta: i32,
    ) -> Result<Option<Comment>, RepositoryError>;

    /// Delete a comment by key. Returns `false` when the id matched nothing.
    async fn delete(&self, id: CommentId) -> Result<bool, RepositoryError>;
}
