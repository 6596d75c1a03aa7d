use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::client::normalize_account;
use crate::discovery::Discovery;
use crate::error::Result;
use crate::types::DiscoveryResult;

const DEFAULT_CAPACITY: u64 = 10_000;

/// Caches successful lookups of an inner [`Discovery`] by account.
///
/// Failures are never cached, so a remote site that was briefly down is
/// retried on the next request.
pub struct CachedDiscovery<D> {
    inner: D,
    cache: Cache<String, Arc<DiscoveryResult>>,
}

impl<D: Discovery> CachedDiscovery<D> {
    pub fn new(inner: D, ttl: Duration) -> Self {
        Self::with_capacity(inner, ttl, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(inner: D, ttl: Duration, max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();

        Self { inner, cache }
    }
}

#[async_trait]
impl<D: Discovery> Discovery for CachedDiscovery<D> {
    async fn lookup(&self, account: &str) -> Result<DiscoveryResult> {
        let key = normalize_account(account)?;

        if let Some(cached) = self.cache.get(&key).await {
            debug!(account = %key, "Discovery cache hit");
            return Ok(cached.as_ref().clone());
        }

        let result = self.inner.lookup(&key).await?;
        self.cache.insert(key, Arc::new(result.clone())).await;
        Ok(result)
    }
}
