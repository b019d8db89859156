//! Server configuration read from the environment.

use std::net::SocketAddr;

use crate::outbound::persistence::DbPool;

/// Name of the bind-address environment variable.
const BIND_ADDR_VAR: &str = "BIND_ADDR";
/// Name of the database URL environment variable.
const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Address served when `BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration binding the given address, with no database
    /// pool attached.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Read the bind address from `BIND_ADDR`, falling back to
    /// `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns an error when `BIND_ADDR` is set but not a valid socket
    /// address.
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        let raw = std::env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        Ok(Self::new(raw.parse()?))
    }

    /// The database URL from `DATABASE_URL`, when set.
    #[must_use]
    pub fn database_url() -> Option<String> {
        std::env::var(DATABASE_URL_VAR).ok()
    }

    /// Attach a database connection pool for the persistence adapters.
    ///
    /// Without a pool the server falls back to the seeded in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn carries_the_given_address() {
        let addr: SocketAddr = "127.0.0.1:9090".parse().expect("valid address");
        let config = ServerConfig::new(addr);
        assert_eq!(config.bind_addr(), addr);
        assert!(config.db_pool.is_none());
    }
}
