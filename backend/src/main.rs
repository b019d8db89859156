//! Backend entry-point: wires tracing, configuration, and the HTTP server.

use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use backend::outbound::persistence::{DbPool, PoolConfig};
use backend::server::{create_server, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let mut config = ServerConfig::from_env()?;
    if let Some(database_url) = ServerConfig::database_url() {
        let pool = DbPool::new(PoolConfig::new(database_url)).await?;
        config = config.with_db_pool(pool);
    }

    create_server(config)?.await?;
    Ok(())
}
