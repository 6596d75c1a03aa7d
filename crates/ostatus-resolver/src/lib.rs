//! Remote subscription resolver
//!
//! Given a local user, group or list and the identity a remote visitor typed
//! in, works out which URL on the visitor's home site should receive them so
//! the subscription can be confirmed there.

mod canonical;
mod classify;
mod directory;
mod error;
mod resolver;
mod target;

pub use canonical::CanonicalUrls;
pub use classify::ProfileReference;
pub use directory::{
    DirectoryError, GroupRecord, InMemoryDirectory, ListRecord, LocalDirectory, UserRecord,
};
pub use error::{MissingTarget, ResolutionError, Result};
pub use resolver::{RedirectTarget, SubscriptionResolver, SUBSCRIBE_PATH};
pub use target::LocalTarget;

pub use ostatus_discovery::{Discovery, DiscoveryError, DiscoveryResult, Link, SUBSCRIBE_REL};
