//! Strictly shaped request bodies.
//!
//! `deny_unknown_fields` makes the shape contract exhaustive: an extra key
//! rejects the whole request, it is never silently ignored, and a rejected
//! mutation leaves every row unchanged. Extraction failures are rendered by
//! the shared JSON error handler as the canonical 400.

use serde::Deserialize;

/// Body of the vote-mutation PATCH endpoints.
///
/// The only recognised key is `inc_votes`, a positive or negative integer.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IncVotesBody {
    /// Signed delta applied atomically to the row's vote tally.
    pub inc_votes: i32,
}

/// Body of the comment-creation POST endpoint.
///
/// Exactly `username` and `body`, both strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewCommentBody {
    /// Author username; must reference an existing user (checked by the
    /// service, a miss is 422).
    pub username: String,
    /// Comment text.
    pub body: String,
}
