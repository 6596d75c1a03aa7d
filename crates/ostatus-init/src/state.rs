use chrono::{DateTime, Utc};
use ostatus_resolver::SubscriptionResolver;

use crate::session::SessionKeys;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    pub resolver: SubscriptionResolver,
    pub session: SessionKeys,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(resolver: SubscriptionResolver, session: SessionKeys) -> Self {
        Self {
            resolver,
            session,
            started_at: Utc::now(),
        }
    }
}

#[cfg(test)]
pub(crate) use test_support::test_state;
