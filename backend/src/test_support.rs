//! Shared helpers for integration tests.

use crate::domain::ports::MemoryContentStore;
use crate::inbound::http::state::HttpState;

/// HTTP state over the seeded in-memory store.
#[must_use]
pub fn seeded_state() -> HttpState {
    HttpState::in_memory(MemoryContentStore::seeded())
}

/// HTTP state over an empty in-memory store.
#[must_use]
pub fn empty_state() -> HttpState {
    HttpState::in_memory(MemoryContentStore::empty())
}
