//! Diesel row structs, internal to the persistence adapters.
//!
//! Rows carry the stored columns only; derived values such as an article's
//! `comment_count` are folded in by the repositories when they build domain
//! types.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{articles, comments, topics, users};
use crate::domain::ports::NEW_COMMENT_VOTES;
use crate::domain::{Article, Comment, NewComment, Topic, User};
use crate::domain::{ArticleId, CommentId};

/// A `topics` row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = topics)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TopicRow {
    pub slug: String,
    pub description: String,
}

impl From<TopicRow> for Topic {
    fn from(row: TopicRow) -> Self {
        Topic::new(row.slug, row.description)
    }
}

/// A `users` row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.username, row.name, row.avatar_url)
    }
}

/// An `articles` row, without the derived comment count.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = articles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ArticleRow {
    pub article_id: i32,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

impl ArticleRow {
    /// Attach the derived comment count and lift into the domain type.
    pub fn into_article(self, comment_count: i64) -> Article {
        Article {
            article_id: ArticleId::new(self.article_id),
            title: self.title,
            body: self.body,
            topic: self.topic,
            author: self.author,
            created_at: self.created_at,
            votes: self.votes,
            comment_count,
        }
    }
}

/// A `comments` row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommentRow {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            comment_id: CommentId::new(row.comment_id),
            article_id: ArticleId::new(row.article_id),
            author: row.author,
            body: row.body,
            votes: row.votes,
            created_at: row.created_at,
        }
    }
}

/// Insert payload for a `comments` row. Key and timestamp come from database
/// defaults; votes are set explicitly so every backend starts new comments at
/// the same tally.
#[derive(Debug, Insertable)]
#[diesel(table_name = comments)]
pub struct NewCommentRow<'a> {
    pub article_id: i32,
    pub author: &'a str,
    pub body: &'a str,
    pub votes: i32,
}

impl<'a> NewCommentRow<'a> {
    /// Build the insert payload from the domain payload.
    pub fn from_new_comment(new_comment: &'a NewComment) -> Self {
        Self {
            article_id: new_comment.article_id.get(),
            author: &new_comment.author,
            body: &new_comment.body,
            votes: NEW_COMMENT_VOTES,
        }
    }
}
