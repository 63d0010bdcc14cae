use async_trait::async_trait;

/// Identity asserted by a third-party ID token after signature and claim checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub subject: String,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[async_trait]
pub trait IdTokenVerifier: Send + Sync {
    /// `Ok(None)` means the token was rejected; `Err` means it could not be checked.
    async fn verify(&self, id_token: &str) -> anyhow::Result<Option<VerifiedIdentity>>;
}
