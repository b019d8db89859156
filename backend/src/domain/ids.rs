//! Typed resource identifiers and the path-segment validator.
//!
//! Numeric-keyed resources (articles, comments) are addressed by a positive
//! integer path segment. The segment is validated here, before any query is
//! issued: a malformed identifier is a 400 and must never turn into a 404 by
//! reaching the existence machinery. Username-keyed lookups skip this step —
//! any non-empty segment is syntactically valid.

use serde::Serialize;

use super::error::Error;

/// Parse a raw path segment into a positive integer key.
fn parse_segment(raw: &str) -> Result<i32, Error> {
    let value: i32 = raw.trim().parse().map_err(|_| Error::invalid_input())?;
    if value <= 0 {
        return Err(Error::invalid_input());
    }
    Ok(value)
}

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a known-good key, e.g. one read back from the store.
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Validate a raw path segment.
            ///
            /// # Errors
            /// Returns the canonical 400 outcome when the segment is not a
            /// positive integer literal.
            pub fn parse(raw: &str) -> Result<Self, Error> {
                parse_segment(raw).map(Self)
            }

            /// The underlying integer key.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id! {
    /// Primary key of an article row.
    ArticleId
}

numeric_id! {
    /// Primary key of a comment row.
    CommentId
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1)]
    #[case("42", 42)]
    #[case("007", 7)]
    fn accepts_positive_integer_literals(#[case] raw: &str, #[case] expected: i32) {
        let id = ArticleId::parse(raw).expect("valid id");
        assert_eq!(id.get(), expected);
    }

    #[rstest]
    #[case("gimme-an-article")]
    #[case("1.5")]
    #[case("-1")]
    #[case("0")]
    #[case("")]
    #[case("9999999999999999")]
    fn rejects_malformed_segments(#[case] raw: &str) {
        let err = CommentId::parse(raw).expect_err("malformed id rejected");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    fn serialises_as_bare_integer() {
        let json = serde_json::to_value(ArticleId::new(3)).expect("serialise");
        assert_eq!(json, serde_json::json!(3));
    }
}
