//! Topic aggregate.

/// A topic groups articles under a unique slug.
///
/// Topics are seeded and immutable in the observed scope: there is no create
/// or update path through the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    /// Unique, human-readable primary key.
    pub slug: String,
    /// Short description shown in topic listings.
    pub description: String,
}

impl Topic {
    /// Construct a topic from its slug and description.
    pub fn new(slug: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            description: description.into(),
        }
    }
}
