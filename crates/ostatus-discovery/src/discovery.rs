use async_trait::async_trait;

use crate::error::Result;
use crate::types::DiscoveryResult;

/// Looks up the link set a remote site publishes for an account.
///
/// Implementations own the network exchange, including timeouts. A timed-out
/// or cancelled lookup must come back as an error, never as an empty result.
#[async_trait]
pub trait Discovery: Send + Sync {
    async fn lookup(&self, account: &str) -> Result<DiscoveryResult>;
}

#[async_trait]
impl<T: Discovery + ?Sized> Discovery for std::sync::Arc<T> {
    async fn lookup(&self, account: &str) -> Result<DiscoveryResult> {
        (**self).lookup(account).await
    }
}
