use serde::{Deserialize, Serialize};

/// Link relation advertising where a remote site accepts subscribe requests
pub const SUBSCRIBE_REL: &str = "http://ostatus.org/schema/1.0/subscribe";

/// A typed link from a discovery document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// URL template with a `{uri}` placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl Link {
    pub fn with_href(rel: &str, href: &str) -> Self {
        Self {
            rel: rel.to_string(),
            media_type: None,
            href: Some(href.to_string()),
            template: None,
        }
    }

    pub fn with_template(rel: &str, template: &str) -> Self {
        Self {
            rel: rel.to_string(),
            media_type: None,
            href: None,
            template: Some(template.to_string()),
        }
    }
}

/// Result of a discovery lookup (the JRD form of an XRD document)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl DiscoveryResult {
    pub fn new(links: Vec<Link>) -> Self {
        Self {
            subject: None,
            aliases: Vec::new(),
            links,
        }
    }

    /// First link with the given relation, in document order
    pub fn get_link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.rel == rel)
    }
}
