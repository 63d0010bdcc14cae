use std::time::Duration;

use super::id_token::JwksIdTokenVerifier;
use super::jwks::JwksCache;

pub const GOOGLE_JWKS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";

/// Google issues ID tokens under either issuer spelling.
pub const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

pub fn google_verifier(client_id: &str, cache_ttl: Duration) -> anyhow::Result<JwksIdTokenVerifier> {
    Ok(JwksIdTokenVerifier::new(
        "google",
        JwksCache::new(GOOGLE_JWKS_URL, cache_ttl)?,
        client_id,
        GOOGLE_ISSUERS.iter().map(|s| s.to_string()).collect(),
    ))
}
