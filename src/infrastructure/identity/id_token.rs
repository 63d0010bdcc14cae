use async_trait::async_trait;
use jsonwebtoken::{Algorithm, Validation, decode, decode_header};
use serde::Deserialize;

use crate::application::ports::id_token_verifier::{IdTokenVerifier, VerifiedIdentity};

use super::jwks::JwksCache;

#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    sub: String,
    email: Option<String>,
    email_verified: Option<bool>,
    name: Option<String>,
    picture: Option<String>,
}

/// Verifies RS256 ID tokens against a provider's published keys and expected claims.
pub struct JwksIdTokenVerifier {
    provider: &'static str,
    keys: JwksCache,
    audience: String,
    issuers: Vec<String>,
}

impl JwksIdTokenVerifier {
    pub fn new(
        provider: &'static str,
        keys: JwksCache,
        audience: impl Into<String>,
        issuers: Vec<String>,
    ) -> Self {
        Self {
            provider,
            keys,
            audience: audience.into(),
            issuers,
        }
    }

    fn reject(&self, reason: &str) -> anyhow::Result<Option<VerifiedIdentity>> {
        tracing::debug!(provider = self.provider, reason, "id_token_rejected");
        Ok(None)
    }
}

#[async_trait]
impl IdTokenVerifier for JwksIdTokenVerifier {
    async fn verify(&self, id_token: &str) -> anyhow::Result<Option<VerifiedIdentity>> {
        let header = match decode_header(id_token) {
            Ok(h) => h,
            Err(_) => return self.reject("malformed header"),
        };
        if header.alg != Algorithm::RS256 {
            return self.reject("unexpected algorithm");
        }
        let Some(kid) = header.kid else {
            return self.reject("missing kid");
        };
        let Some(key) = self.keys.key_for(&kid).await? else {
            return self.reject("unknown kid");
        };

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.audience.as_str()]);
        validation.set_issuer(self.issuers.as_slice());
        validation.set_required_spec_claims(&["exp", "iat", "aud", "iss", "sub"]);

        let claims = match decode::<IdTokenClaims>(id_token, &key, &validation) {
            Ok(data) => data.claims,
            Err(e) => {
                tracing::debug!(provider = self.provider, error = %e, "id_token_invalid");
                return Ok(None);
            }
        };
        if claims.email_verified == Some(false) {
            return self.reject("email not verified");
        }
        let Some(email) = claims.email.filter(|e| !e.is_empty()) else {
            return self.reject("missing email");
        };
        if claims.sub.is_empty() {
            return self.reject("empty subject");
        }
        Ok(Some(VerifiedIdentity {
            subject: claims.sub,
            email,
            name: claims.name,
            picture: claims.picture,
        }))
    }
}
