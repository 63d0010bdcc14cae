use std::time::Duration;

use super::id_token::JwksIdTokenVerifier;
use super::jwks::JwksCache;

pub const FIREBASE_JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

pub fn firebase_issuer(project_id: &str) -> String {
    format!("https://securetoken.google.com/{project_id}")
}

pub fn firebase_verifier(project_id: &str, cache_ttl: Duration) -> anyhow::Result<JwksIdTokenVerifier> {
    Ok(JwksIdTokenVerifier::new(
        "firebase",
        JwksCache::new(FIREBASE_JWKS_URL, cache_ttl)?,
        project_id,
        vec![firebase_issuer(project_id)],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issuer_is_scoped_to_project() {
        assert_eq!(
            firebase_issuer("selfhelp-prod"),
            "https://securetoken.google.com/selfhelp-prod"
        );
    }
}
