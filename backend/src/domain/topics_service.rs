//! Topics resource operations.

use std::sync::Arc;

use super::error::Error;
use super::existence::map_store_error;
use super::ports::TopicRepository;
use super::topic::Topic;

/// Read operations over the topics table. No client-controlled sort or
/// filter; listings come back slug-ascending.
#[derive(Clone)]
pub struct TopicsService {
    topics: Arc<dyn TopicRepository>,
}

impl TopicsService {
    /// Create the service over a topics port.
    pub fn new(topics: Arc<dyn TopicRepository>) -> Self {
        Self { topics }
    }

    /// Fetch all topics.
    ///
    /// # Errors
    /// Internal error when the store fails; there is no client-error path.
    pub async fn list_topics(&self) -> Result<Vec<Topic>, Error> {
        self.topics.list().await.map_err(map_store_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MemoryContentStore;

    #[actix_web::test]
    async fn lists_every_seeded_topic_slug_ascending() {
        let service = TopicsService::new(Arc::new(MemoryContentStore::seeded()));
        let topics = service.list_topics().await.expect("listing");
        let slugs: Vec<&str> = topics.iter().map(|topic| topic.slug.as_str()).collect();
        assert_eq!(slugs, ["origami", "rust", "sourdough"]);
    }

    #[actix_web::test]
    async fn empty_store_lists_nothing() {
        let service = TopicsService::new(Arc::new(MemoryContentStore::empty()));
        assert!(service.list_topics().await.expect("listing").is_empty());
    }
}
