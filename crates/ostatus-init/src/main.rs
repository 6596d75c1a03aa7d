//! OStatus remote subscribe service
//!
//! Lets a visitor from another federated site subscribe to a local user,
//! group or list by sending them back to their home site to confirm.

mod config;
mod directory;
mod error;
mod ostatusinit;
mod server;
mod session;
mod state;
mod views;

use std::sync::Arc;
use std::time::Duration;

use ostatus_discovery::{CachedDiscovery, Discovery, WebfingerClient};
use ostatus_resolver::{CanonicalUrls, InMemoryDirectory, LocalDirectory, SubscriptionResolver};
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::Config;
use crate::directory::PgDirectory;
use crate::error::{InitError, Result};
use crate::server::start_server;
use crate::session::SessionKeys;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::from_default_env().add_directive("ostatus_init=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting OStatus remote subscribe service...");

    let config = Config::from_env();
    info!("Port: {}", config.port);
    info!("Site URL: {}", config.site_url);
    info!("Discovery timeout: {} seconds", config.discovery_timeout_secs);

    let directory = build_directory(&config).await?;
    let discovery = build_discovery(&config)?;
    let resolver =
        SubscriptionResolver::new(directory, discovery, CanonicalUrls::new(&config.site_url));

    let session = match &config.session_secret {
        Some(secret) => SessionKeys::new(secret),
        None => {
            warn!("SESSION_SECRET not set; form tokens will not survive a restart");
            SessionKeys::random()
        }
    };

    let state = AppState::new(resolver, session);

    // Start HTTP server (blocking)
    start_server(state, config.port)
        .await
        .map_err(|e| InitError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

async fn build_directory(config: &Config) -> Result<Arc<dyn LocalDirectory>> {
    if let Some(database_url) = &config.database_url {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        info!("Local directory: PostgreSQL");
        return Ok(Arc::new(PgDirectory::new(pool)));
    }

    if let Some(path) = &config.directory_file {
        let directory = InMemoryDirectory::load(path).await?;
        info!(
            "Local directory: {:?} ({} entries)",
            path,
            directory.len()
        );
        return Ok(Arc::new(directory));
    }

    warn!("Neither DATABASE_URL nor DIRECTORY_FILE set; every local lookup will miss");
    Ok(Arc::new(InMemoryDirectory::new()))
}

fn build_discovery(config: &Config) -> Result<Arc<dyn Discovery>> {
    let client =
        WebfingerClient::with_timeout(Duration::from_secs(config.discovery_timeout_secs))?;

    if config.discovery_cache_ttl_secs == 0 {
        info!("Discovery cache disabled");
        return Ok(Arc::new(client));
    }

    info!(
        "Discovery cache TTL: {} seconds",
        config.discovery_cache_ttl_secs
    );
    Ok(Arc::new(CachedDiscovery::new(
        client,
        Duration::from_secs(config.discovery_cache_ttl_secs),
    )))
}
