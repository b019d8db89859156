//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ArticleRepository, CommentRepository, MemoryContentStore, TopicRepository, UserRepository,
};
use crate::domain::{
    ArticlesService, CommentsService, ExistenceResolver, TopicsService, UsersService,
};

/// Parameter object bundling the persistence ports behind the HTTP surface.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Topics table port.
    pub topics: Arc<dyn TopicRepository>,
    /// Users table port.
    pub users: Arc<dyn UserRepository>,
    /// Articles table port (aggregation-aware).
    pub articles: Arc<dyn ArticleRepository>,
    /// Comments table port.
    pub comments: Arc<dyn CommentRepository>,
}

impl HttpStatePorts {
    /// Wire every port to one shared in-memory store.
    pub fn from_store(store: MemoryContentStore) -> Self {
        Self {
            topics: Arc::new(store.clone()),
            users: Arc::new(store.clone()),
            articles: Arc::new(store.clone()),
            comments: Arc::new(store),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Topics resource operations.
    pub topics: TopicsService,
    /// Users resource operations.
    pub users: UsersService,
    /// Articles resource operations.
    pub articles: ArticlesService,
    /// Comments resource operations.
    pub comments: CommentsService,
}

impl HttpState {
    /// Construct the services over a ports bundle, sharing one existence
    /// resolver between the article and comment surfaces.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            topics,
            users,
            articles,
            comments,
        } = ports;
        let resolver = ExistenceResolver::new(topics.clone(), users.clone(), articles.clone());
        Self {
            topics: TopicsService::new(topics),
            users: UsersService::new(users),
            articles: ArticlesService::new(articles, resolver.clone()),
            comments: CommentsService::new(comments, resolver),
        }
    }

    /// Construct state over an in-memory store.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::ports::MemoryContentStore;
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::in_memory(MemoryContentStore::seeded());
    /// let _topics = state.topics.clone();
    /// ```
    pub fn in_memory(store: MemoryContentStore) -> Self {
        Self::new(HttpStatePorts::from_store(store))
    }
}
