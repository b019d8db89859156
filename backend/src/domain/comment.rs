//! Comment aggregate and the comment insert payload.

use chrono::{DateTime, Utc};

use super::ids::{ArticleId, CommentId};

/// A comment attached to an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Auto-assigned primary key.
    pub comment_id: CommentId,
    /// Foreign key to the parent article.
    pub article_id: ArticleId,
    /// Foreign key to `User::username`.
    pub author: String,
    /// Comment text.
    pub body: String,
    /// Vote tally. May go negative; there is no floor or ceiling.
    pub votes: i32,
    /// Creation timestamp; listings default to most recent first.
    pub created_at: DateTime<Utc>,
}

/// Validated insert payload for a new comment.
///
/// Shape validation (exactly `username` and `body`, nothing else) happens at
/// the HTTP boundary; referential validity of `article_id` and `author` is
/// checked by the comments service before the insert is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    /// Parent article key, already syntactically validated.
    pub article_id: ArticleId,
    /// Author username as supplied in the request body.
    pub author: String,
    /// Comment text as supplied in the request body.
    pub body: String,
}
