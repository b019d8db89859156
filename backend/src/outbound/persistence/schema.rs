//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; `diesel
//! print-schema` can regenerate them from a live database.

diesel::table! {
    /// Topics table. `slug` is the human-readable primary key.
    topics (slug) {
        /// Primary key, referenced by `articles.topic`.
        slug -> Varchar,
        /// Short description shown in topic listings.
        description -> Varchar,
    }
}

diesel::table! {
    /// Users table. `username` is the primary key and the value of article
    /// and comment `author` foreign keys.
    users (username) {
        /// Primary key.
        username -> Varchar,
        /// Display name.
        name -> Varchar,
        /// Avatar image URL.
        avatar_url -> Varchar,
    }
}

diesel::table! {
    /// Articles table. `comment_count` is never stored; it is derived from
    /// `comments` at read time.
    articles (article_id) {
        /// Serial primary key.
        article_id -> Int4,
        /// Title shown in listings.
        title -> Varchar,
        /// Full article text.
        body -> Text,
        /// Foreign key to `topics.slug`.
        topic -> Varchar,
        /// Foreign key to `users.username`.
        author -> Varchar,
        /// Creation timestamp, defaulted by the database.
        created_at -> Timestamptz,
        /// Vote tally; no floor or ceiling.
        votes -> Int4,
    }
}

diesel::table! {
    /// Comments table. Rows cascade away with their parent article.
    comments (comment_id) {
        /// Serial primary key.
        comment_id -> Int4,
        /// Foreign key to `articles.article_id`, `ON DELETE CASCADE`.
        article_id -> Int4,
        /// Foreign key to `users.username`.
        author -> Varchar,
        /// Comment text.
        body -> Text,
        /// Vote tally; set explicitly on insert so every backend starts new
        /// rows at the same value.
        votes -> Int4,
        /// Creation timestamp, defaulted by the database.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(articles -> topics (topic));
diesel::joinable!(articles -> users (author));
diesel::joinable!(comments -> articles (article_id));
diesel::joinable!(comments -> users (author));

diesel::allow_tables_to_appear_in_same_query!(topics, users, articles, comments);
