//! Articles resource operations.
//!
//! Composes the clause builder, the aggregation-aware article port, and the
//! existence resolver into the list/fetch/vote operations of the articles
//! surface.

use std::sync::Arc;

use super::article::{Article, ArticleFilter};
use super::error::Error;
use super::existence::{map_store_error, EntityRef, ExistenceResolver};
use super::ids::ArticleId;
use super::ports::ArticleRepository;
use super::sorting::ArticleSort;

/// Operations over the articles table, with `comment_count` folded in.
#[derive(Clone)]
pub struct ArticlesService {
    articles: Arc<dyn ArticleRepository>,
    resolver: ExistenceResolver,
}

impl ArticlesService {
    /// Create the service over the article port and the shared resolver.
    pub fn new(articles: Arc<dyn ArticleRepository>, resolver: ExistenceResolver) -> Self {
        Self { articles, resolver }
    }

    /// List articles under a validated sort clause and filter.
    ///
    /// When a filtered listing comes back empty, the referenced author or
    /// topic is probed independently: missing → the entity-specific 404,
    /// present → the empty list with 200. The author probe runs first when
    /// both filters were supplied.
    ///
    /// # Errors
    /// 404 when a filter references a nonexistent entity; internal error on
    /// store failure.
    pub async fn list_articles(
        &self,
        sort: ArticleSort,
        filter: &ArticleFilter,
    ) -> Result<Vec<Article>, Error> {
        let articles = self
            .articles
            .list(sort, filter)
            .await
            .map_err(map_store_error)?;

        if articles.is_empty() && !filter.is_empty() {
            if let Some(author) = filter.author.as_deref() {
                self.resolver.require(EntityRef::User(author)).await?;
            }
            if let Some(topic) = filter.topic.as_deref() {
                self.resolver.require(EntityRef::Topic(topic)).await?;
            }
        }
        Ok(articles)
    }

    /// Fetch one article by validated id, with `comment_count`.
    ///
    /// # Errors
    /// 404 `"Article does not exist"` on a lookup miss.
    pub async fn fetch_article(&self, id: ArticleId) -> Result<Article, Error> {
        self.articles
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found("Article does not exist"))
    }

    /// Apply a validated `inc_votes` delta atomically and return the updated
    /// article.
    ///
    /// The increment happens store-side in a single update; two concurrent
    /// deltas on the same row both land.
    ///
    /// # Errors
    /// 404 `"Article does not exist"` when the id matches nothing.
    pub async fn adjust_votes(&self, id: ArticleId, delta: i32) -> Result<Article, Error> {
        self.articles
            .adjust_votes(id, delta)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found("Article does not exist"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MemoryContentStore;
    use crate::domain::sorting::{ArticleSortKey, SortOrder};
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn service_over(store: MemoryContentStore) -> ArticlesService {
        let resolver = ExistenceResolver::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
        );
        ArticlesService::new(Arc::new(store), resolver)
    }

    fn service() -> ArticlesService {
        service_over(MemoryContentStore::seeded())
    }

    #[actix_web::test]
    async fn unfiltered_listing_returns_everything() {
        let articles = service()
            .list_articles(ArticleSort::default(), &ArticleFilter::default())
            .await
            .expect("listing");
        assert_eq!(articles.len(), 4);
    }

    #[actix_web::test]
    async fn existing_author_with_no_articles_is_an_empty_set() {
        let filter = ArticleFilter {
            author: Some("lurking_fox".into()),
            ..ArticleFilter::default()
        };
        let articles = service()
            .list_articles(ArticleSort::default(), &filter)
            .await
            .expect("empty but legitimate");
        assert!(articles.is_empty());
    }

    #[rstest]
    #[case(
        ArticleFilter { author: Some("nobody".into()), topic: None },
        "User does not exist"
    )]
    #[case(
        ArticleFilter { author: None, topic: Some("knitting".into()) },
        "Topic does not exist"
    )]
    #[actix_web::test]
    async fn missing_filter_entity_is_not_found(
        #[case] filter: ArticleFilter,
        #[case] message: &str,
    ) {
        let err = service()
            .list_articles(ArticleSort::default(), &filter)
            .await
            .expect_err("missing entity");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), message);
    }

    #[actix_web::test]
    async fn empty_unfiltered_listing_is_not_an_error() {
        let service = service_over(MemoryContentStore::empty());
        let articles = service
            .list_articles(ArticleSort::default(), &ArticleFilter::default())
            .await
            .expect("empty store lists nothing");
        assert!(articles.is_empty());
    }

    #[actix_web::test]
    async fn comment_count_sort_uses_the_aggregation() {
        let sort = ArticleSort {
            key: ArticleSortKey::CommentCount,
            order: SortOrder::Desc,
        };
        let articles = service()
            .list_articles(sort, &ArticleFilter::default())
            .await
            .expect("listing");
        assert_eq!(
            articles.first().map(|a| a.article_id),
            Some(ArticleId::new(1))
        );
    }

    #[actix_web::test]
    async fn vote_adjustments_compose_without_floor() {
        let service = service();
        let updated = service
            .adjust_votes(ArticleId::new(1), 1)
            .await
            .expect("increment");
        assert_eq!(updated.votes, 101);
        let updated = service
            .adjust_votes(ArticleId::new(1), -200)
            .await
            .expect("decrement");
        assert_eq!(updated.votes, -99);
    }

    #[actix_web::test]
    async fn vote_adjustment_on_missing_article_is_not_found() {
        let err = service()
            .adjust_votes(ArticleId::new(999), 10)
            .await
            .expect_err("missing article");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "Article does not exist");
    }
}
