//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Thin adapters only: each repository translates between Diesel rows and
//! domain types and maps driver failures onto [`RepositoryError`] variants.
//! Row structs (`models`) and table definitions (`schema`) stay internal to
//! this module. Connections come from a `bb8` pool via `diesel-async`.
//!
//! [`RepositoryError`]: crate::domain::ports::RepositoryError

mod diesel_article_repository;
mod diesel_comment_repository;
mod diesel_error;
mod diesel_topic_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_article_repository::DieselArticleRepository;
pub use diesel_comment_repository::DieselCommentRepository;
pub use diesel_topic_repository::DieselTopicRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
