/// Builds the canonical URLs of local entities from the site base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalUrls {
    base: String,
}

impl CanonicalUrls {
    pub fn new(site_url: &str) -> Self {
        Self {
            base: site_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn user(&self, id: i64) -> String {
        format!("{}/user/{}", self.base, id)
    }

    pub fn group(&self, id: i64) -> String {
        format!("{}/group/{}/id", self.base, id)
    }

    pub fn list(&self, tagger_id: i64, id: i64) -> String {
        format!("{}/user/{}/profiletag/{}", self.base, tagger_id, id)
    }
}
