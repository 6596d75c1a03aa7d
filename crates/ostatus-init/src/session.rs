//! Session cookie and the form token derived from it

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha256};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "ostatus_session";

/// Derives per-session form tokens from a server secret
#[derive(Clone)]
pub struct SessionKeys {
    secret: String,
}

impl SessionKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
        }
    }

    /// Keys from a secret generated for this process only
    pub fn random() -> Self {
        Self::new(&format!("{}{}", Uuid::new_v4(), Uuid::new_v4()))
    }

    /// Form token for a session: base64url(sha256(secret ":" session id))
    pub fn token_for(&self, session_id: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.secret.as_bytes());
        hasher.update(b":");
        hasher.update(session_id.as_bytes());
        URL_SAFE_NO_PAD.encode(hasher.finalize())
    }

    /// Return the session id, issuing a new session cookie if there is none
    pub fn ensure_session(&self, jar: CookieJar) -> (CookieJar, String) {
        if let Some(id) = session_id(&jar) {
            return (jar, id);
        }

        let id = Uuid::new_v4().to_string();
        let cookie = Cookie::build((SESSION_COOKIE, id.clone()))
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/");
        (jar.add(cookie), id)
    }

    /// A submitted token is valid only for the session cookie it was issued for
    pub fn verify(&self, jar: &CookieJar, token: Option<&str>) -> bool {
        match (session_id(jar), token.map(str::trim)) {
            (Some(id), Some(token)) if !token.is_empty() => {
                constant_time_eq(self.token_for(&id).as_bytes(), token.as_bytes())
            }
            _ => false,
        }
    }
}

/// Compare without short-circuiting on the first differing byte
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

fn session_id(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}
