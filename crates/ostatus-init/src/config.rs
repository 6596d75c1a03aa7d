use std::env;
use std::path::PathBuf;

/// Service configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL that local canonical URLs are built on
    pub site_url: String,
    pub database_url: Option<String>,
    /// JSON seed for the in-memory directory, used when there is no database
    pub directory_file: Option<PathBuf>,
    pub session_secret: Option<String>,
    pub discovery_timeout_secs: u64,
    /// Zero disables the discovery cache
    pub discovery_cache_ttl_secs: u64,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let port = var("PORT").and_then(|p| p.parse().ok()).unwrap_or(3005);

        let site_url = var("SITE_URL").unwrap_or_else(|| format!("http://localhost:{port}"));

        let database_url = var("DATABASE_URL").filter(|s| !s.is_empty());

        let directory_file = var("DIRECTORY_FILE")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let session_secret = var("SESSION_SECRET").filter(|s| !s.is_empty());

        let discovery_timeout_secs = var("DISCOVERY_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let discovery_cache_ttl_secs = var("DISCOVERY_CACHE_TTL_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(300); // 5 minutes

        Self {
            port,
            site_url,
            database_url,
            directory_file,
            session_secret,
            discovery_timeout_secs,
            discovery_cache_ttl_secs,
        }
    }
}
