//! Sort clause builder for listing endpoints.
//!
//! Query-string `sort_by` and `order` values are checked against fixed
//! per-entity whitelists before any query is constructed. The whitelists are
//! closed enums mapping to safe column references, so an unlisted value can
//! never reach the query builder — including values that happen to name a
//! real but disallowed column (`body` on articles, say).

use super::error::Error;

/// Sort direction. Defaults to descending ("most recent first" under the
/// default `created_at` key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending (default).
    #[default]
    Desc,
}

impl SortOrder {
    /// Parse an optional `order` query value, case-insensitively.
    ///
    /// # Errors
    /// Any literal other than `asc`/`desc` is the canonical 400 outcome.
    pub fn parse(raw: Option<&str>) -> Result<Self, Error> {
        match raw {
            None => Ok(Self::default()),
            Some(value) if value.eq_ignore_ascii_case("asc") => Ok(Self::Asc),
            Some(value) if value.eq_ignore_ascii_case("desc") => Ok(Self::Desc),
            Some(_) => Err(Error::invalid_input()),
        }
    }

    /// True for descending order.
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Desc)
    }
}

macro_rules! sort_key {
    (
        $(#[$doc:meta])* $name:ident {
            $($variant:ident => $column:literal),+ $(,)?
        }
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $(
                #[doc = concat!("Sort by the `", $column, "` column.")]
                $variant,
            )+
        }

        impl $name {
            /// Parse an optional `sort_by` query value against the whitelist.
            ///
            /// # Errors
            /// Any value outside the whitelist is the canonical 400 outcome.
            pub fn parse(raw: Option<&str>) -> Result<Self, Error> {
                match raw {
                    None => Ok(Self::default()),
                    $(Some($column) => Ok(Self::$variant),)+
                    Some(_) => Err(Error::invalid_input()),
                }
            }

            /// The whitelisted column name this key maps to.
            pub const fn column(self) -> &'static str {
                match self {
                    $(Self::$variant => $column,)+
                }
            }
        }
    };
}

sort_key! {
    /// Whitelisted sort keys for article listings. `comment_count` sorts by
    /// the derived aggregation, not a stored column.
    ArticleSortKey {
        ArticleId => "article_id",
        Title => "title",
        Author => "author",
        Topic => "topic",
        CreatedAt => "created_at",
        Votes => "votes",
        CommentCount => "comment_count",
    }
}

impl Default for ArticleSortKey {
    fn default() -> Self {
        Self::CreatedAt
    }
}

sort_key! {
    /// Whitelisted sort keys for comment listings.
    CommentSortKey {
        CommentId => "comment_id",
        Votes => "votes",
        CreatedAt => "created_at",
        Author => "author",
        Body => "body",
    }
}

impl Default for CommentSortKey {
    fn default() -> Self {
        Self::CreatedAt
    }
}

/// Validated (key, direction) clause for article listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArticleSort {
    /// Whitelisted sort column.
    pub key: ArticleSortKey,
    /// Direction; descending unless `order=asc` was supplied.
    pub order: SortOrder,
}

impl ArticleSort {
    /// Build a clause from the raw `sort_by`/`order` query values.
    ///
    /// # Errors
    /// Canonical 400 outcome when either value is outside its whitelist.
    pub fn from_params(sort_by: Option<&str>, order: Option<&str>) -> Result<Self, Error> {
        Ok(Self {
            key: ArticleSortKey::parse(sort_by)?,
            order: SortOrder::parse(order)?,
        })
    }
}

/// Validated (key, direction) clause for comment listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommentSort {
    /// Whitelisted sort column.
    pub key: CommentSortKey,
    /// Direction; descending unless `order=asc` was supplied.
    pub order: SortOrder,
}

impl CommentSort {
    /// Build a clause from the raw `sort_by`/`order` query values.
    ///
    /// # Errors
    /// Canonical 400 outcome when either value is outside its whitelist.
    pub fn from_params(sort_by: Option<&str>, order: Option<&str>) -> Result<Self, Error> {
        Ok(Self {
            key: CommentSortKey::parse(sort_by)?,
            order: SortOrder::parse(order)?,
        })
    }
}
