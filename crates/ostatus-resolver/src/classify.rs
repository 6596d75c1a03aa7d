use tracing::debug;
use url::Url;

use crate::error::{ResolutionError, Result};

/// A remote identifier after classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileReference {
    /// Webfinger-style account, `user@host`
    AccountHandle(String),
    /// Absolute http(s) profile URL, kept exactly as supplied
    ProfileUrl(String),
}

impl ProfileReference {
    /// Classify what the visitor typed into the profile field
    pub fn classify(remote: &str) -> Result<Self> {
        let remote = remote.trim();

        // The URL parser silently drops or encodes these, but the raw string
        // is what ends up in the redirect.
        let parsed = if remote.chars().any(|c| c.is_whitespace() || c.is_control()) {
            None
        } else {
            Url::parse(remote).ok()
        };

        let reference = match parsed {
            Some(url) if matches!(url.scheme(), "http" | "https") => {
                Some(ProfileReference::ProfileUrl(remote.to_string()))
            }
            Some(url) if url.scheme() == "acct" && !url.path().is_empty() => {
                Some(ProfileReference::AccountHandle(url.path().to_string()))
            }
            _ if remote.contains('@') => Some(ProfileReference::AccountHandle(remote.to_string())),
            _ => None,
        };

        debug!(remote, reference = ?reference, "Classified remote identifier");
        reference.ok_or(ResolutionError::UnrecognizedIdentifierFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acct_uri() {
        assert_eq!(
            ProfileReference::classify("acct:bob@example.com").unwrap(),
            ProfileReference::AccountHandle("bob@example.com".to_string())
        );
    }

    #[test]
    fn test_profile_url() {
        assert_eq!(
            ProfileReference::classify("https://example.com/bob").unwrap(),
            ProfileReference::ProfileUrl("https://example.com/bob".to_string())
        );
        assert_eq!(
            ProfileReference::classify("http://example.com/user/7").unwrap(),
            ProfileReference::ProfileUrl("http://example.com/user/7".to_string())
        );
    }

    #[test]
    fn test_bare_account() {
        assert_eq!(
            ProfileReference::classify("bob@example.com").unwrap(),
            ProfileReference::AccountHandle("bob@example.com".to_string())
        );
    }

    #[test]
    fn test_other_scheme_with_at_sign_is_account() {
        assert_eq!(
            ProfileReference::classify("mailto:bob@example.com").unwrap(),
            ProfileReference::AccountHandle("mailto:bob@example.com".to_string())
        );
    }

    #[test]
    fn test_unrecognized() {
        for input in ["bob", "", "   ", "ftp://example.com/bob", "acct:"] {
            assert!(
                matches!(
                    ProfileReference::classify(input),
                    Err(ResolutionError::UnrecognizedIdentifierFormat)
                ),
                "expected {input:?} to be unrecognized"
            );
        }
    }

    #[test]
    fn test_url_with_inner_whitespace_is_unrecognized() {
        for input in [
            "https://remote.example/some path/bob",
            "https://remote.example/a\tb/bob",
            "https://remote.example/a\nb/bob",
        ] {
            assert!(
                matches!(
                    ProfileReference::classify(input),
                    Err(ResolutionError::UnrecognizedIdentifierFormat)
                ),
                "expected {input:?} to be unrecognized"
            );
        }
    }

    #[test]
    fn test_account_with_inner_whitespace_falls_back_to_at_sign() {
        assert_eq!(
            ProfileReference::classify("acct:bob smith@example.com").unwrap(),
            ProfileReference::AccountHandle("acct:bob smith@example.com".to_string())
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(
            ProfileReference::classify("  bob@example.com\n").unwrap(),
            ProfileReference::AccountHandle("bob@example.com".to_string())
        );
    }
}
