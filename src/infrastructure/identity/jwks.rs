use std::time::{Duration, Instant};

use anyhow::Context;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::jwk::JwkSet;
use tokio::sync::{Mutex, RwLock};

/// Unknown key ids trigger at most one refetch per this interval.
const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(30);
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

struct CachedKeys {
    fetched_at: Instant,
    set: JwkSet,
}

#[derive(Default)]
struct KeyState {
    keys: Option<CachedKeys>,
    last_attempt: Option<Instant>,
}

/// Public signing keys of an identity provider, fetched lazily and kept for `ttl`.
///
/// The network call never runs under the state lock, so a stalled provider
/// delays only the caller doing the refresh. When a refresh fails the previous
/// key set keeps serving until a later attempt succeeds.
pub struct JwksCache {
    client: reqwest::Client,
    url: Option<String>,
    ttl: Duration,
    state: RwLock<KeyState>,
    refresh: Mutex<()>,
}

impl JwksCache {
    pub fn new(url: impl Into<String>, ttl: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("building jwks http client")?;
        Ok(Self {
            client,
            url: Some(url.into()),
            ttl,
            state: RwLock::new(KeyState::default()),
            refresh: Mutex::new(()),
        })
    }

    /// A cache that never goes to the network.
    pub fn fixed(set: JwkSet) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: None,
            ttl: Duration::MAX,
            state: RwLock::new(KeyState {
                keys: Some(CachedKeys {
                    fetched_at: Instant::now(),
                    set,
                }),
                last_attempt: None,
            }),
            refresh: Mutex::new(()),
        }
    }

    pub async fn key_for(&self, kid: &str) -> anyhow::Result<Option<DecodingKey>> {
        if let Some(key) = self.cached_key(kid, true).await? {
            return Ok(Some(key));
        }
        let Some(url) = self.url.as_deref() else {
            return Ok(None);
        };

        // One refresh in flight; later callers reuse its outcome.
        let _refreshing = self.refresh.lock().await;
        let attempted_recently = self
            .state
            .read()
            .await
            .last_attempt
            .map(|at| at.elapsed() < MIN_REFRESH_INTERVAL)
            .unwrap_or(false);
        if !attempted_recently {
            let fetched = self.fetch(url).await;
            let mut state = self.state.write().await;
            state.last_attempt = Some(Instant::now());
            match fetched {
                Ok(set) => {
                    tracing::debug!(url, keys = set.keys.len(), "jwks_refreshed");
                    state.keys = Some(CachedKeys {
                        fetched_at: Instant::now(),
                        set,
                    });
                }
                Err(e) if state.keys.is_some() => {
                    tracing::warn!(url, error = %e, "jwks_refresh_failed_serving_stale");
                }
                Err(e) => return Err(e),
            }
        }
        self.cached_key(kid, false).await
    }

    async fn cached_key(&self, kid: &str, fresh_only: bool) -> anyhow::Result<Option<DecodingKey>> {
        let state = self.state.read().await;
        let Some(cached) = state.keys.as_ref() else {
            return Ok(None);
        };
        if fresh_only && cached.fetched_at.elapsed() >= self.ttl {
            return Ok(None);
        }
        match cached.set.find(kid) {
            Some(jwk) => Ok(Some(DecodingKey::from_jwk(jwk)?)),
            None => Ok(None),
        }
    }

    async fn fetch(&self, url: &str) -> anyhow::Result<JwkSet> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("jwks request failed: {e}"))?;
        if !resp.status().is_success() {
            anyhow::bail!("jwks endpoint returned status {}", resp.status());
        }
        resp.json::<JwkSet>()
            .await
            .map_err(|e| anyhow::anyhow!("invalid jwks document: {e}"))
    }
}
