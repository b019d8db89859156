//! User aggregate.

/// A registered author. Read-only in the observed scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique primary key; also the value of article and comment `author`
    /// foreign keys.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL.
    pub avatar_url: String,
}

impl User {
    /// Construct a user record.
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            avatar_url: avatar_url.into(),
        }
    }
}
