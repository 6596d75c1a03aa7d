//! OStatus discovery
//!
//! Resolves a webfinger account (`user@host`) to the set of links its home
//! site advertises, and finds the remote-subscribe link among them.
//! Lookups can optionally be cached using a moka async cache.

mod cache;
mod client;
mod discovery;
mod error;
mod template;
mod types;

pub use cache::CachedDiscovery;
pub use client::{normalize_account, WebfingerClient};
pub use discovery::Discovery;
pub use error::{DiscoveryError, Result};
pub use template::apply_template;
pub use types::{DiscoveryResult, Link, SUBSCRIBE_REL};
