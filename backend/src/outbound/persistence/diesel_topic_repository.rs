//! PostgreSQL-backed `TopicRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, TopicRepository};
use crate::domain::Topic;

use super::diesel_error::{map_diesel_error, map_pool_error};
use super::models::TopicRow;
use super::pool::DbPool;
use super::schema::topics;

/// Diesel-backed implementation of the topics port.
#[derive(Clone)]
pub struct DieselTopicRepository {
    pool: DbPool,
}

impl DieselTopicRepository {
    /// Create a new repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicRepository for DieselTopicRepository {
    async fn list(&self) -> Result<Vec<Topic>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<TopicRow> = topics::table
            .order(topics::slug.asc())
            .select(TopicRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Topic::from).collect())
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(exists(topics::table.filter(topics::slug.eq(slug))))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
