//! Outbound adapters implementing the domain's persistence ports.

pub mod persistence;
