use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::{debug, warn};
use url::Url;

use crate::discovery::Discovery;
use crate::error::{DiscoveryError, Result};
use crate::types::DiscoveryResult;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const JRD_ACCEPT: &str = "application/jrd+json, application/json";

/// Reduce `acct:user@host` or `user@host` to `user@host`.
///
/// The host is whatever follows the last `@`, so local parts that themselves
/// contain `@` survive intact.
pub fn normalize_account(account: &str) -> Result<String> {
    let trimmed = account.trim();
    let acct = trimmed.strip_prefix("acct:").unwrap_or(trimmed);

    match acct.rsplit_once('@') {
        Some((user, host)) if !user.is_empty() && is_plain_host(host) => Ok(acct.to_string()),
        _ => Err(DiscoveryError::InvalidAccount(account.to_string())),
    }
}

/// A host (optionally with port) that cannot change the path or query of
/// the webfinger URL built from it
fn is_plain_host(host: &str) -> bool {
    !host.is_empty()
        && !host
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#' | '\\') || c.is_whitespace() || c.is_control())
}

/// Webfinger (RFC 7033) discovery over HTTP
pub struct WebfingerClient {
    client: Client,
    scheme: String,
}

impl WebfingerClient {
    /// Create a client with the default 30 second timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            scheme: "https".to_string(),
        })
    }

    /// Query hosts over a different scheme (plain `http` for local testing)
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    fn webfinger_url(&self, account: &str) -> Result<Url> {
        let host = account
            .rsplit_once('@')
            .map(|(_, host)| host)
            .ok_or_else(|| DiscoveryError::InvalidAccount(account.to_string()))?;

        let mut url = Url::parse(&format!("{}://{}/.well-known/webfinger", self.scheme, host))
            .map_err(|_| DiscoveryError::InvalidAccount(account.to_string()))?;
        url.query_pairs_mut()
            .append_pair("resource", &format!("acct:{account}"));
        Ok(url)
    }
}

#[async_trait]
impl Discovery for WebfingerClient {
    async fn lookup(&self, account: &str) -> Result<DiscoveryResult> {
        let account = normalize_account(account)?;
        let url = self.webfinger_url(&account)?;
        debug!(account = %account, url = %url, "Webfinger lookup");

        let response = self
            .client
            .get(url.clone())
            .header(header::ACCEPT, JRD_ACCEPT)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), url = %url, "Webfinger lookup failed");
            return Err(DiscoveryError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        let doc: DiscoveryResult = serde_json::from_slice(&body)?;

        debug!(account = %account, links = doc.links.len(), "Webfinger lookup complete");
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SUBSCRIBE_REL;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::Router;
    use std::collections::HashMap;

    async fn webfinger(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
        match params.get("resource").map(String::as_str) {
            Some(resource) if resource.starts_with("acct:bob@") => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/jrd+json")],
                format!(
                    r#"{{"subject":"{resource}","links":[{{"rel":"{SUBSCRIBE_REL}","template":"https://remote.example/main/ostatussub?profile={{uri}}"}}]}}"#
                ),
            )
                .into_response(),
            Some(resource) if resource.starts_with("acct:garbage@") => {
                (StatusCode::OK, "<XRD>not json</XRD>").into_response()
            }
            Some(resource) if resource.starts_with("acct:slow@") => {
                tokio::time::sleep(Duration::from_secs(2)).await;
                (StatusCode::OK, "{}").into_response()
            }
            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }

    async fn spawn_server() -> String {
        let app = Router::new().route("/.well-known/webfinger", get(webfinger));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr.to_string()
    }

    fn test_client() -> WebfingerClient {
        WebfingerClient::with_timeout(Duration::from_millis(500))
            .unwrap()
            .with_scheme("http")
    }

    #[test]
    fn test_normalize_account() {
        assert_eq!(
            normalize_account("acct:bob@example.com").unwrap(),
            "bob@example.com"
        );
        assert_eq!(
            normalize_account(" bob@example.com ").unwrap(),
            "bob@example.com"
        );
        assert_eq!(
            normalize_account("first@last@example.com").unwrap(),
            "first@last@example.com"
        );
    }

    #[test]
    fn test_normalize_account_invalid() {
        assert!(normalize_account("bob").is_err());
        assert!(normalize_account("@example.com").is_err());
        assert!(normalize_account("bob@").is_err());
        assert!(normalize_account("acct:").is_err());
    }

    #[test]
    fn test_normalize_account_rejects_host_with_url_syntax() {
        for input in [
            "bob@remote.example?x",
            "bob@remote.example#frag",
            "bob@remote.example/path",
            "bob@remote example",
            "bob@remote.example\tx",
        ] {
            assert!(
                matches!(
                    normalize_account(input),
                    Err(DiscoveryError::InvalidAccount(_))
                ),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_lookup_host_with_query_makes_no_request() {
        let err = test_client()
            .lookup("bob@remote.example?x")
            .await
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::InvalidAccount(_)));
    }

    #[test]
    fn test_webfinger_url() {
        let client = WebfingerClient::new().unwrap();
        let url = client.webfinger_url("bob@remote.example").unwrap();
        assert_eq!(
            url.as_str(),
            "https://remote.example/.well-known/webfinger?resource=acct%3Abob%40remote.example"
        );
    }

    #[tokio::test]
    async fn test_lookup_success() {
        let host = spawn_server().await;
        let doc = test_client()
            .lookup(&format!("acct:bob@{host}"))
            .await
            .unwrap();

        assert_eq!(doc.subject, Some(format!("acct:bob@{host}")));
        let link = doc.get_link(SUBSCRIBE_REL).unwrap();
        assert_eq!(
            link.template.as_deref(),
            Some("https://remote.example/main/ostatussub?profile={uri}")
        );
    }

    #[tokio::test]
    async fn test_lookup_not_found() {
        let host = spawn_server().await;
        let err = test_client()
            .lookup(&format!("nobody@{host}"))
            .await
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::Status(404)));
    }

    #[tokio::test]
    async fn test_lookup_malformed_document() {
        let host = spawn_server().await;
        let err = test_client()
            .lookup(&format!("garbage@{host}"))
            .await
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::Json(_)));
    }

    #[tokio::test]
    async fn test_lookup_timeout() {
        let host = spawn_server().await;
        let err = test_client()
            .lookup(&format!("slow@{host}"))
            .await
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::Timeout));
    }

    #[tokio::test]
    async fn test_lookup_invalid_account_makes_no_request() {
        let err = test_client().lookup("not-an-account").await.unwrap_err();
        assert!(matches!(err, DiscoveryError::InvalidAccount(_)));
    }
}
