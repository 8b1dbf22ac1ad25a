//! Backend entry-point: configuration, tracing, and server startup.

use std::env;
use std::net::SocketAddr;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use phonebook::outbound::persistence::{DbPool, PoolConfig};
use phonebook::server::{ServerConfig, create_server};

const DEFAULT_PORT: u16 = 3001;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let port = match env::var("PORT") {
        Ok(raw) => raw.parse().map_err(|e| {
            std::io::Error::other(format!("PORT must be a port number, got {raw:?}: {e}"))
        })?,
        Err(_) => {
            warn!(port = DEFAULT_PORT, "PORT not set, using default");
            DEFAULT_PORT
        }
    };
    let bind_addr = SocketAddr::from(([0, 0, 0, 0], port));

    let mut config = ServerConfig::new(bind_addr);
    match env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = DbPool::new(PoolConfig::new(url)).await.map_err(|e| {
                std::io::Error::other(format!("database pool initialisation failed: {e}"))
            })?;
            config = config.with_db_pool(pool);
        }
        Err(_) => {
            warn!("DATABASE_URL not set; falling back to the fixture store");
        }
    }

    create_server(config)?.await
}
