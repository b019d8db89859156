//! Existence resolver: disambiguates empty results from missing entities.
//!
//! A filtered listing that comes back empty is ambiguous — either the
//! referenced entity has no children, or it does not exist at all. The
//! resolver issues a second, independent probe against the entity's own
//! table and turns a miss into the entity-specific 404. It is one reusable
//! step rather than ad-hoc empty-array checks in each handler.

use std::sync::Arc;

use super::error::Error;
use super::ids::ArticleId;
use super::ports::{ArticleRepository, RepositoryError, TopicRepository, UserRepository};

/// A reference whose existence must be confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef<'a> {
    /// An author username supplied as a listing filter.
    User(&'a str),
    /// A topic slug supplied as a listing filter.
    Topic(&'a str),
    /// An article key scoping a comment listing.
    Article(ArticleId),
}

impl EntityRef<'_> {
    /// The entity-specific message rendered when the probe misses.
    const fn missing_message(&self) -> &'static str {
        match self {
            Self::User(_) => "User does not exist",
            Self::Topic(_) => "Topic does not exist",
            Self::Article(_) => "Article does not exist",
        }
    }
}

/// Probes entity tables independently of the primary result set.
#[derive(Clone)]
pub struct ExistenceResolver {
    topics: Arc<dyn TopicRepository>,
    users: Arc<dyn UserRepository>,
    articles: Arc<dyn ArticleRepository>,
}

impl ExistenceResolver {
    /// Build a resolver over the three referencable entity tables.
    pub fn new(
        topics: Arc<dyn TopicRepository>,
        users: Arc<dyn UserRepository>,
        articles: Arc<dyn ArticleRepository>,
    ) -> Self {
        Self {
            topics,
            users,
            articles,
        }
    }

    /// Require that the referenced entity exists.
    ///
    /// # Errors
    /// The entity-specific 404 when the probe misses; an internal error when
    /// the probe itself fails at the store.
    pub async fn require(&self, entity: EntityRef<'_>) -> Result<(), Error> {
        let exists = match entity {
            EntityRef::User(username) => self.users.username_exists(username).await,
            EntityRef::Topic(slug) => self.topics.slug_exists(slug).await,
            EntityRef::Article(id) => self.articles.exists(id).await,
        }
        .map_err(map_store_error)?;

        if exists {
            Ok(())
        } else {
            Err(Error::not_found(entity.missing_message()))
        }
    }
}

/// Map adapter failures into the generic internal outcome.
///
/// The driver message goes to the log at the adapter edge; clients only ever
/// see the redacted 500 body.
pub(crate) fn map_store_error(error: RepositoryError) -> Error {
    Error::internal(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MemoryContentStore;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn resolver() -> ExistenceResolver {
        let store = MemoryContentStore::seeded();
        ExistenceResolver::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
        )
    }

    #[actix_web::test]
    async fn present_entities_resolve_silently() {
        let resolver = resolver();
        resolver
            .require(EntityRef::User("lurking_fox"))
            .await
            .expect("seeded user");
        resolver
            .require(EntityRef::Topic("origami"))
            .await
            .expect("seeded topic");
        resolver
            .require(EntityRef::Article(ArticleId::new(2)))
            .await
            .expect("seeded article");
    }

    #[rstest]
    #[case(EntityRef::User("nobody"), "User does not exist")]
    #[case(EntityRef::Topic("knitting"), "Topic does not exist")]
    #[case(EntityRef::Article(ArticleId::new(999)), "Article does not exist")]
    #[actix_web::test]
    async fn missing_entities_yield_specific_messages(
        #[case] entity: EntityRef<'static>,
        #[case] message: &str,
    ) {
        let err = resolver().require(entity).await.expect_err("missing");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), message);
    }
}
