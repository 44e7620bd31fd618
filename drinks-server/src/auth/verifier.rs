use super::jwks::KeySetCache;
use super::{AuthError, ClaimSet};
use crate::config::AuthConfig;
use http::HeaderValue;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::Validation;
use std::time::Duration;

const KEY_NOT_FOUND: &str = "Unable to find the appropriate key.";

/// Verifies bearer tokens issued by the configured identity provider
pub struct TokenVerifier {
    keys: KeySetCache,
    validation: Validation,
}

impl TokenVerifier {
    /// Build a verifier from the auth configuration
    pub fn new(config: &AuthConfig) -> Result<Self, String> {
        let jwks_url = config.jwks_url().map_err(|e| e.to_string())?;
        let algorithm = config.algorithm().map_err(|e| e.to_string())?;

        let keys = KeySetCache::new(
            jwks_url,
            Duration::from_secs(config.jwks_cache_ttl),
            Duration::from_secs(config.jwks_refresh_cooldown),
            Duration::from_secs(config.jwks_fetch_timeout),
        )
        .map_err(|e| e.to_string())?;

        let mut validation = Validation::new(algorithm);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);
        validation.leeway = config.leeway;

        Ok(Self { keys, validation })
    }

    /// Checks the `Authorization` header of a request and returns the
    /// verified claims
    pub async fn verify(&self, authorization: Option<&HeaderValue>) -> Result<ClaimSet, AuthError> {
        let token = bearer_token(authorization)?;

        let header = jsonwebtoken::decode_header(token)
            .map_err(|_| AuthError::InvalidHeader("Unable to parse authentication token."))?;
        let kid = header
            .kid
            .ok_or(AuthError::InvalidHeader("Authorization malformed."))?;

        let key = self
            .keys
            .decoding_key(&kid)
            .await
            .map_err(AuthError::KeySetUnavailable)?
            .ok_or(AuthError::InvalidHeader(KEY_NOT_FOUND))?;

        let data = jsonwebtoken::decode::<ClaimSet>(token, &key, &self.validation)
            .map_err(token_error)?;
        Ok(data.claims)
    }

    /// Makes sure the key set can be fetched
    pub async fn health_check(&self) -> Result<(), String> {
        self.keys
            .snapshot()
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(authorization: Option<&HeaderValue>) -> Result<&str, AuthError> {
    let value = authorization
        .ok_or(AuthError::MissingAuthorizationHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidHeader("Authorization header is not valid text."))?;

    match value.split(' ').collect::<Vec<_>>().as_slice() {
        ["Bearer", token] if !token.is_empty() => Ok(token),
        [scheme, ..] if *scheme != "Bearer" => Err(AuthError::InvalidHeader(
            "Authorization header must start with \"Bearer\".",
        )),
        [_] => Err(AuthError::InvalidHeader("Token not found.")),
        _ => Err(AuthError::InvalidHeader(
            "Authorization header must be bearer token.",
        )),
    }
}

fn token_error(error: JwtError) -> AuthError {
    match error.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => {
            AuthError::InvalidToken("Incorrect claims. Please, check the audience and issuer.")
        }
        ErrorKind::MissingRequiredClaim(_) => {
            AuthError::InvalidToken("Token is missing a required claim.")
        }
        ErrorKind::InvalidSignature => AuthError::InvalidToken("Token signature is invalid."),
        ErrorKind::InvalidAlgorithm => AuthError::InvalidToken("Token algorithm is not accepted."),
        ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
            AuthError::InvalidHeader("Unable to parse authentication token.")
        }
        _ => AuthError::InvalidToken("Unable to verify authentication token."),
    }
}
