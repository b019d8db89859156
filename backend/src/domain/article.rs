//! Article aggregate and listing filter.

use chrono::{DateTime, Utc};

use super::ids::ArticleId;

/// An article as read back from the store, including the derived
/// `comment_count` aggregation.
///
/// `comment_count` is never stored; it is the exact number of comment rows
/// currently referencing this article, computed at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Auto-assigned primary key.
    pub article_id: ArticleId,
    /// Title shown in listings.
    pub title: String,
    /// Full article text. Omitted from list payloads by the HTTP adapter.
    pub body: String,
    /// Foreign key to `Topic::slug`.
    pub topic: String,
    /// Foreign key to `User::username`.
    pub author: String,
    /// Creation timestamp; listings default to most recent first.
    pub created_at: DateTime<Utc>,
    /// Vote tally. May go negative; there is no floor or ceiling.
    pub votes: i32,
    /// Derived count of associated comments, including zero.
    pub comment_count: i64,
}

/// Equality predicates narrowing an article listing.
///
/// Values are passed through as written; existence of the referenced author
/// or topic is resolved separately when the result set comes back empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    /// Restrict to articles by this author username.
    pub author: Option<String>,
    /// Restrict to articles under this topic slug.
    pub topic: Option<String>,
}

impl ArticleFilter {
    /// True when no predicate was supplied.
    pub const fn is_empty(&self) -> bool {
        self.author.is_none() && self.topic.is_none()
    }
}
