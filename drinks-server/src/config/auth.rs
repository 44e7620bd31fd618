//! Identity provider configuration

use super::ConfigError;
use confique::Config;
use jsonwebtoken::Algorithm;
use std::str::FromStr;
use url::Url;

/// Configuration for bearer token verification against the identity provider
#[derive(Debug, Config, Clone)]
pub struct AuthConfig {
    /// Issuer URL expected in the `iss` claim, e.g. `https://tenant.eu.auth0.com/`
    #[config(env = "DRINKS_AUTH_ISSUER")]
    pub issuer: String,

    /// API identifier expected in the `aud` claim
    #[config(env = "DRINKS_AUTH_AUDIENCE")]
    pub audience: String,

    /// Token signing algorithm (default: RS256)
    #[config(env = "DRINKS_AUTH_ALGORITHM", default = "RS256")]
    pub algorithm: String,

    /// JWKS endpoint (default: `<issuer>/.well-known/jwks.json`)
    #[config(env = "DRINKS_AUTH_JWKS_URL")]
    pub jwks_url: Option<String>,

    /// How long a fetched key set is reused, in seconds (default: 600)
    #[config(env = "DRINKS_AUTH_JWKS_CACHE_TTL", default = 600)]
    pub jwks_cache_ttl: u64,

    /// Minimum age of the cached key set before an unknown key id may
    /// trigger a refetch, in seconds (default: 30)
    #[config(env = "DRINKS_AUTH_JWKS_REFRESH_COOLDOWN", default = 30)]
    pub jwks_refresh_cooldown: u64,

    /// Timeout for JWKS requests in seconds (default: 5)
    #[config(env = "DRINKS_AUTH_JWKS_FETCH_TIMEOUT", default = 5)]
    pub jwks_fetch_timeout: u64,

    /// Clock skew tolerated when checking `exp`, in seconds (default: 0)
    #[config(env = "DRINKS_AUTH_LEEWAY", default = 0)]
    pub leeway: u64,
}

impl AuthConfig {
    /// Returns the URL the signing key set is fetched from
    pub fn jwks_url(&self) -> Result<Url, ConfigError> {
        if let Some(url) = &self.jwks_url {
            return Url::parse(url).map_err(|e| ConfigError::InvalidUrl(url.clone(), e));
        }

        let mut issuer = self.issuer.clone();
        if !issuer.ends_with('/') {
            issuer.push('/');
        }
        Url::parse(&issuer)
            .and_then(|base| base.join(".well-known/jwks.json"))
            .map_err(|e| ConfigError::InvalidUrl(self.issuer.clone(), e))
    }

    /// Parses the configured algorithm. Keys are built from RSA modulus and
    /// exponent, so only the RSA family is accepted.
    pub fn algorithm(&self) -> Result<Algorithm, ConfigError> {
        match Algorithm::from_str(&self.algorithm) {
            Ok(alg @ (Algorithm::RS256 | Algorithm::RS384 | Algorithm::RS512)) => Ok(alg),
            _ => Err(ConfigError::UnsupportedAlgorithm(self.algorithm.clone())),
        }
    }

    #[cfg(test)]
    pub fn for_test(issuer: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            audience: "drinks".to_string(),
            algorithm: "RS256".to_string(),
            jwks_url: None,
            jwks_cache_ttl: 600,
            jwks_refresh_cooldown: 0,
            jwks_fetch_timeout: 5,
            leeway: 0,
        }
    }
}
