//! Process-wide cache of the issuer's signing keys

use jsonwebtoken::jwk::{AlgorithmParameters, JwkSet};
use jsonwebtoken::DecodingKey;
use log::{debug, info, warn};
use moka::future::Cache as MokaCache;
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use url::Url;

/// Errors that can occur while fetching the signing key set
#[derive(Debug, Error)]
pub enum KeySetError {
    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("Failed to fetch signing keys: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Signing key endpoint answered with status {0}")]
    Status(http::StatusCode),
}

/// One immutable copy of the key set. Readers keep their `Arc` while a
/// refresh swaps in a new snapshot.
#[derive(Debug)]
pub struct KeySetSnapshot {
    pub keys: JwkSet,
    pub fetched_at: Instant,
}

#[derive(Clone)]
pub struct KeySetCache {
    url: Url,
    client: Client,
    cache: MokaCache<String, Arc<KeySetSnapshot>>,
    refresh_cooldown: Duration,
}

impl KeySetCache {
    /// Initialize a new key set cache for the given JWKS endpoint
    pub fn new(
        url: Url,
        ttl: Duration,
        refresh_cooldown: Duration,
        fetch_timeout: Duration,
    ) -> Result<Self, KeySetError> {
        let client = Client::builder()
            .timeout(fetch_timeout)
            .connect_timeout(fetch_timeout)
            .build()
            .map_err(KeySetError::Client)?;

        let cache = MokaCache::builder()
            .max_capacity(1)
            .time_to_live(ttl)
            .build();

        Ok(Self {
            url,
            client,
            cache,
            refresh_cooldown,
        })
    }

    /// The current snapshot, fetching it if absent or expired. Concurrent
    /// callers share a single fetch.
    pub async fn snapshot(&self) -> Result<Arc<KeySetSnapshot>, Arc<KeySetError>> {
        self.cache
            .try_get_with(self.url.to_string(), self.fetch())
            .await
    }

    async fn fetch(&self) -> Result<Arc<KeySetSnapshot>, KeySetError> {
        debug!("Fetching signing keys from {}", self.url);
        let response = self.client.get(self.url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(KeySetError::Status(response.status()));
        }
        let keys: JwkSet = response.json().await?;
        info!("Loaded {} signing key(s) from {}", keys.keys.len(), self.url);

        Ok(Arc::new(KeySetSnapshot {
            keys,
            fetched_at: Instant::now(),
        }))
    }

    /// Looks up the RSA key identified by `kid`.
    ///
    /// An unknown key id refreshes the key set once, provided the cached
    /// snapshot is older than the refresh cool-down. Returns `Ok(None)` when
    /// the key is still unknown or is not an RSA key.
    pub async fn decoding_key(&self, kid: &str) -> Result<Option<DecodingKey>, Arc<KeySetError>> {
        let snapshot = self.snapshot().await?;
        if let Some(key) = find_rsa_key(&snapshot, kid) {
            return Ok(Some(key));
        }

        if snapshot.fetched_at.elapsed() < self.refresh_cooldown {
            debug!("Unknown key id '{}', key set refreshed too recently", kid);
            return Ok(None);
        }

        info!("Unknown key id '{}', refreshing signing keys", kid);
        self.cache.invalidate(self.url.as_str()).await;
        let snapshot = self.snapshot().await?;
        Ok(find_rsa_key(&snapshot, kid))
    }
}

fn find_rsa_key(snapshot: &KeySetSnapshot, kid: &str) -> Option<DecodingKey> {
    let jwk = snapshot.keys.find(kid)?;
    match &jwk.algorithm {
        AlgorithmParameters::RSA(rsa) => match DecodingKey::from_rsa_components(&rsa.n, &rsa.e) {
            Ok(key) => Some(key),
            Err(e) => {
                warn!("Signing key '{}' has invalid RSA components: {}", kid, e);
                None
            }
        },
        _ => {
            warn!("Signing key '{}' is not an RSA key", kid);
            None
        }
    }
}
