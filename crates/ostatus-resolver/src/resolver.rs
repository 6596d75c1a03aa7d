use std::sync::Arc;

use ostatus_discovery::{apply_template, Discovery, SUBSCRIBE_REL};
use tracing::{debug, info};

use crate::canonical::CanonicalUrls;
use crate::classify::ProfileReference;
use crate::directory::LocalDirectory;
use crate::error::{MissingTarget, ResolutionError, Result};
use crate::target::LocalTarget;

/// Path segment appended to a remote profile URL when no discovery is done
pub const SUBSCRIBE_PATH: &str = "main/ostatussub";

/// HTTP 303 See Other: the remote site is re-fetched with GET
const SEE_OTHER: u16 = 303;

/// Where to send the remote visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    pub url: String,
    pub status: u16,
}

/// Resolves a local target plus a remote identity to a redirect.
///
/// Holds no per-request state; one instance serves concurrent requests.
#[derive(Clone)]
pub struct SubscriptionResolver {
    directory: Arc<dyn LocalDirectory>,
    discovery: Arc<dyn Discovery>,
    urls: CanonicalUrls,
}

impl SubscriptionResolver {
    pub fn new(
        directory: Arc<dyn LocalDirectory>,
        discovery: Arc<dyn Discovery>,
        urls: CanonicalUrls,
    ) -> Self {
        Self {
            directory,
            discovery,
            urls,
        }
    }

    pub async fn resolve(&self, target: &LocalTarget, remote: &str) -> Result<RedirectTarget> {
        let local_url = self.canonical_url(target).await?;

        let url = match ProfileReference::classify(remote)? {
            ProfileReference::AccountHandle(account) => {
                self.subscribe_url_for_account(&account, &local_url).await?
            }
            ProfileReference::ProfileUrl(profile) => subscribe_url_for_profile(&profile, &local_url),
        };

        info!(remote = %remote.trim(), redirect = %url, "Resolved remote subscriber");
        Ok(RedirectTarget {
            url,
            status: SEE_OTHER,
        })
    }

    /// Canonical URL of the local entity the visitor wants to follow
    pub async fn canonical_url(&self, target: &LocalTarget) -> Result<String> {
        match target {
            LocalTarget::User(nickname) => {
                let user = self
                    .directory
                    .find_user_by_nickname(nickname)
                    .await?
                    .ok_or(ResolutionError::NoSuchLocalTarget(MissingTarget::User))?;
                Ok(self.urls.user(user.id))
            }
            LocalTarget::Group(nickname) => {
                let group = self
                    .directory
                    .find_group_by_nickname(nickname)
                    .await?
                    .ok_or(ResolutionError::NoSuchLocalTarget(MissingTarget::Group))?;
                Ok(self.urls.group(group.id))
            }
            LocalTarget::List { tagger, name } => {
                let user = self
                    .directory
                    .find_user_by_nickname(tagger)
                    .await?
                    .ok_or(ResolutionError::NoSuchLocalTarget(MissingTarget::User))?;
                let list = self
                    .directory
                    .find_list_by_tagger_and_name(user.id, name)
                    .await?
                    .ok_or(ResolutionError::NoSuchLocalTarget(MissingTarget::List))?;
                Ok(self.urls.list(user.id, list.id))
            }
        }
    }

    async fn subscribe_url_for_account(&self, account: &str, local_url: &str) -> Result<String> {
        let doc = self.discovery.lookup(account).await?;

        let link = doc
            .get_link(SUBSCRIBE_REL)
            .ok_or(ResolutionError::SubscribeLinkNotFound)?;

        match (&link.template, &link.href) {
            (Some(template), _) if !template.is_empty() => Ok(apply_template(template, local_url)),
            (_, Some(href)) => Ok(href.clone()),
            _ => {
                debug!(account, "Subscribe link has neither template nor href");
                Err(ResolutionError::SubscribeLinkNotFound)
            }
        }
    }
}

/// Guess the remote subscribe endpoint from a profile URL by swapping its
/// last path segment for [`SUBSCRIBE_PATH`]. No discovery is performed.
fn subscribe_url_for_profile(profile: &str, local_url: &str) -> String {
    let endpoint = match profile.rsplit_once('/') {
        Some((prefix, _)) => format!("{prefix}/{SUBSCRIBE_PATH}"),
        None => profile.to_string(),
    };
    format!("{}?profile={}", endpoint, urlencoding::encode(local_url))
}
