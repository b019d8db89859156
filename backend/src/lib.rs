//! Content API backend.
//!
//! A small news-style content service: topics, users, articles, and
//! threaded comments, with validated sorting and filtering, vote
//! adjustments, and a uniform `{status, msg}` error body across every
//! failure path.
//!
//! The crate follows a hexagonal layout: `domain` holds the decision logic
//! and ports, `inbound::http` adapts Actix requests onto it, and
//! `outbound::persistence` implements the ports over PostgreSQL via Diesel.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use middleware::Trace;
