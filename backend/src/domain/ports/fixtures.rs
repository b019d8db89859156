//! Seeded in-memory implementation of the persistence ports.
//!
//! Serves two roles, mirroring each other deliberately:
//! - the server's fallback store when no database is configured, so the API
//!   is fully exercisable in development;
//! - the store behind unit and integration tests, seeded with the fixture
//!   constants the test suites rely on (article 1 at 100 votes, an author
//!   and a topic with no articles, an article with no comments).
//!
//! Filtering and sorting reproduce the SQL adapter's semantics exactly, so a
//! test passing here holds for the Diesel adapter modulo collation.

use std::cmp::Ordering;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::article::{Article, ArticleFilter};
use crate::domain::comment::{Comment, NewComment};
use crate::domain::ids::{ArticleId, CommentId};
use crate::domain::sorting::{ArticleSort, ArticleSortKey, CommentSort, CommentSortKey};
use crate::domain::topic::Topic;
use crate::domain::user::User;

use super::{
    ArticleRepository, CommentRepository, RepositoryError, TopicRepository, UserRepository,
};
use async_trait::async_trait;

/// Default vote value assigned to newly inserted comments.
pub const NEW_COMMENT_VOTES: i32 = 14;

/// Stored article row, without the derived count.
#[derive(Debug, Clone)]
struct ArticleRecord {
    article_id: ArticleId,
    title: String,
    body: String,
    topic: String,
    author: String,
    created_at: DateTime<Utc>,
    votes: i32,
}

#[derive(Debug, Default)]
struct StoreState {
    topics: Vec<Topic>,
    users: Vec<User>,
    articles: Vec<ArticleRecord>,
    comments: Vec<Comment>,
    next_comment_id: i32,
}

/// In-memory content store implementing every persistence port.
///
/// Cloning shares the underlying state, matching the pool-handle semantics
/// of the Diesel adapters.
#[derive(Clone)]
pub struct MemoryContentStore {
    state: Arc<Mutex<StoreState>>,
}

fn seed_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .earliest()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

impl MemoryContentStore {
    /// An empty store. Mostly useful for exercising empty-result paths.
    pub fn empty() -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState {
                next_comment_id: 1,
                ..StoreState::default()
            })),
        }
    }

    /// A store seeded with the development fixture set.
    pub fn seeded() -> Self {
        let topics = vec![
            Topic::new("rust", "Fearless systems programming"),
            Topic::new("sourdough", "Bread science and starter care"),
            Topic::new("origami", "Paper folding"),
        ];
        let users = vec![
            User::new(
                "marmalade_sky",
                "Maya Trent",
                "https://avatars.example.net/marmalade_sky.png",
            ),
            User::new(
                "quiet_heron",
                "Henry Osei",
                "https://avatars.example.net/quiet_heron.png",
            ),
            User::new(
                "paper_crane",
                "Ines Kovac",
                "https://avatars.example.net/paper_crane.png",
            ),
            // Registered reader with no articles and no comments.
            User::new(
                "lurking_fox",
                "Farah Idris",
                "https://avatars.example.net/lurking_fox.png",
            ),
        ];
        let articles = vec![
            ArticleRecord {
                article_id: ArticleId::new(1),
                title: "Living with a borrow checker".into(),
                body: "Notes from a year of fighting, then befriending, rustc.".into(),
                topic: "rust".into(),
                author: "marmalade_sky".into(),
                created_at: seed_time(2023, 6, 1, 10, 0),
                votes: 100,
            },
            ArticleRecord {
                article_id: ArticleId::new(2),
                title: "A starter named Clint".into(),
                body: "Feeding schedules for a rye starter that holds a grudge.".into(),
                topic: "sourdough".into(),
                author: "quiet_heron".into(),
                created_at: seed_time(2023, 5, 20, 8, 30),
                votes: 0,
            },
            ArticleRecord {
                article_id: ArticleId::new(3),
                title: "Async without tears".into(),
                body: "Executor internals explained with kitchen timers.".into(),
                topic: "rust".into(),
                author: "quiet_heron".into(),
                created_at: seed_time(2023, 4, 11, 16, 45),
                votes: 7,
            },
            ArticleRecord {
                article_id: ArticleId::new(4),
                title: "Crumb structure field notes".into(),
                body: "Open crumb is a lifestyle, not an accident.".into(),
                topic: "sourdough".into(),
                author: "marmalade_sky".into(),
                created_at: seed_time(2023, 3, 2, 12, 0),
                votes: 42,
            },
        ];
        let comments = vec![
            Comment {
                comment_id: CommentId::new(1),
                article_id: ArticleId::new(1),
                author: "quiet_heron".into(),
                body: "This article changed how I hold references.".into(),
                votes: NEW_COMMENT_VOTES,
                created_at: seed_time(2023, 6, 2, 9, 0),
            },
            Comment {
                comment_id: CommentId::new(2),
                article_id: ArticleId::new(1),
                author: "paper_crane".into(),
                body: "Lifetimes still haunt me.".into(),
                votes: 2,
                created_at: seed_time(2023, 6, 3, 11, 30),
            },
            Comment {
                comment_id: CommentId::new(3),
                article_id: ArticleId::new(1),
                author: "marmalade_sky".into(),
                body: "Replying to my own article, as is tradition.".into(),
                votes: -3,
                created_at: seed_time(2023, 6, 1, 22, 15),
            },
            Comment {
                comment_id: CommentId::new(4),
                article_id: ArticleId::new(3),
                author: "paper_crane".into(),
                body: "Kitchen timers finally made wakers click.".into(),
                votes: NEW_COMMENT_VOTES,
                created_at: seed_time(2023, 4, 12, 10, 5),
            },
            Comment {
                comment_id: CommentId::new(5),
                article_id: ArticleId::new(4),
                author: "quiet_heron".into(),
                body: "My crumb remains stubbornly closed.".into(),
                votes: 0,
                created_at: seed_time(2023, 3, 4, 19, 20),
            },
        ];
        Self {
            state: Arc::new(Mutex::new(StoreState {
                topics,
                users,
                articles,
                comments,
                next_comment_id: 6,
            })),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, StoreState>, RepositoryError> {
        self.state
            .lock()
            .map_err(|_| RepositoryError::query("fixture store lock poisoned"))
    }
}

fn comment_count(comments: &[Comment], article_id: ArticleId) -> i64 {
    comments
        .iter()
        .filter(|comment| comment.article_id == article_id)
        .count() as i64
}

fn to_article(record: &ArticleRecord, comments: &[Comment]) -> Article {
    Article {
        article_id: record.article_id,
        title: record.title.clone(),
        body: record.body.clone(),
        topic: record.topic.clone(),
        author: record.author.clone(),
        created_at: record.created_at,
        votes: record.votes,
        comment_count: comment_count(comments, record.article_id),
    }
}

fn compare_articles(a: &Article, b: &Article, key: ArticleSortKey) -> Ordering {
    match key {
        ArticleSortKey::ArticleId => a.article_id.cmp(&b.article_id),
        ArticleSortKey::Title => a.title.cmp(&b.title),
        ArticleSortKey::Author => a.author.cmp(&b.author),
        ArticleSortKey::Topic => a.topic.cmp(&b.topic),
        ArticleSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        ArticleSortKey::Votes => a.votes.cmp(&b.votes),
        ArticleSortKey::CommentCount => a.comment_count.cmp(&b.comment_count),
    }
}

fn compare_comments(a: &Comment, b: &Comment, key: CommentSortKey) -> Ordering {
    match key {
        CommentSortKey::CommentId => a.comment_id.cmp(&b.comment_id),
        CommentSortKey::Votes => a.votes.cmp(&b.votes),
        CommentSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        CommentSortKey::Author => a.author.cmp(&b.author),
        CommentSortKey::Body => a.body.cmp(&b.body),
    }
}

#[async_trait]
impl TopicRepository for MemoryContentStore {
    async fn list(&self) -> Result<Vec<Topic>, RepositoryError> {
        let mut topics = self.lock()?.topics.clone();
        // Same deterministic order as the SQL adapter.
        topics.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(topics)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, RepositoryError> {
        Ok(self.lock()?.topics.iter().any(|topic| topic.slug == slug))
    }
}

#[async_trait]
impl UserRepository for MemoryContentStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .lock()?
            .users
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn username_exists(&self, username: &str) -> Result<bool, RepositoryError> {
        Ok(self.lock()?.users.iter().any(|user| user.username == username))
    }
}

#[async_trait]
impl ArticleRepository for MemoryContentStore {
    async fn list(
        &self,
        sort: ArticleSort,
        filter: &ArticleFilter,
    ) -> Result<Vec<Article>, RepositoryError> {
        let state = self.lock()?;
        let mut articles: Vec<Article> = state
            .articles
            .iter()
            .filter(|record| {
                filter
                    .author
                    .as_deref()
                    .is_none_or(|author| record.author == author)
                    && filter
                        .topic
                        .as_deref()
                        .is_none_or(|topic| record.topic == topic)
            })
            .map(|record| to_article(record, &state.comments))
            .collect();
        articles.sort_by(|a, b| compare_articles(a, b, sort.key));
        if sort.order.is_descending() {
            articles.reverse();
        }
        Ok(articles)
    }

    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, RepositoryError> {
        let state = self.lock()?;
        Ok(state
            .articles
            .iter()
            .find(|record| record.article_id == id)
            .map(|record| to_article(record, &state.comments)))
    }

    async fn exists(&self, id: ArticleId) -> Result<bool, RepositoryError> {
        Ok(self
            .lock()?
            .articles
            .iter()
            .any(|record| record.article_id == id))
    }

    async fn adjust_votes(
        &self,
        id: ArticleId,
        delta: i32,
    ) -> Result<Option<Article>, RepositoryError> {
        let mut state = self.lock()?;
        let Some(index) = state
            .articles
            .iter()
            .position(|record| record.article_id == id)
        else {
            return Ok(None);
        };
        if let Some(record) = state.articles.get_mut(index) {
            record.votes = record
                .votes
                .checked_add(delta)
                .ok_or_else(|| RepositoryError::query("vote tally out of range"))?;
        }
        let StoreState {
            articles, comments, ..
        } = &*state;
        Ok(articles
            .get(index)
            .map(|record| to_article(record, comments)))
    }
}

#[async_trait]
impl CommentRepository for MemoryContentStore {
    async fn list_for_article(
        &self,
        article_id: ArticleId,
        sort: CommentSort,
    ) -> Result<Vec<Comment>, RepositoryError> {
        let state = self.lock()?;
        let mut comments: Vec<Comment> = state
            .comments
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| compare_comments(a, b, sort.key));
        if sort.order.is_descending() {
            comments.reverse();
        }
        Ok(comments)
    }

    async fn insert(&self, new_comment: &NewComment) -> Result<Comment, RepositoryError> {
        let mut state = self.lock()?;
        // The real store enforces these through foreign keys; reproduce the
        // backstop so the service-level pre-checks stay honest in tests.
        if !state
            .articles
            .iter()
            .any(|record| record.article_id == new_comment.article_id)
        {
            return Err(RepositoryError::foreign_key("comments_article_id_fkey"));
        }
        if !state
            .users
            .iter()
            .any(|user| user.username == new_comment.author)
        {
            return Err(RepositoryError::foreign_key("comments_author_fkey"));
        }
        let comment = Comment {
            comment_id: CommentId::new(state.next_comment_id),
            article_id: new_comment.article_id,
            author: new_comment.author.clone(),
            body: new_comment.body.clone(),
            votes: NEW_COMMENT_VOTES,
            created_at: Utc::now(),
        };
        state.next_comment_id += 1;
        state.comments.push(comment.clone());
        Ok(comment)
    }

    async fn adjust_votes(
        &self,
        id: CommentId,
        delta: i32,
    ) -> Result<Option<Comment>, RepositoryError> {
        let mut state = self.lock()?;
        let Some(comment) = state
            .comments
            .iter_mut()
            .find(|comment| comment.comment_id == id)
        else {
            return Ok(None);
        };
        comment.votes = comment
            .votes
            .checked_add(delta)
            .ok_or_else(|| RepositoryError::query("vote tally out of range"))?;
        Ok(Some(comment.clone()))
    }

    async fn delete(&self, id: CommentId) -> Result<bool, RepositoryError> {
        let mut state = self.lock()?;
        let before = state.comments.len();
        state.comments.retain(|comment| comment.comment_id != id);
        Ok(state.comments.len() < before)
    }
}
