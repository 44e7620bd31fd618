use super::AuthError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded token payload, attached to the request once verified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet(Map<String, Value>);

impl ClaimSet {
    /// Raw access to any claim
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// The `sub` claim, identifying who the token was issued to
    pub fn subject(&self) -> Option<&str> {
        self.get("sub").and_then(Value::as_str)
    }

    /// The `permissions` claim, as issued
    pub fn permissions(&self) -> Option<&Value> {
        self.get("permissions")
    }
}

impl From<Map<String, Value>> for ClaimSet {
    fn from(claims: Map<String, Value>) -> Self {
        Self(claims)
    }
}

/// Ensures the claim set grants `required`.
///
/// A token without a `permissions` claim is malformed for this API
/// (`invalid_claims`); one whose permissions do not list `required` is
/// simply not allowed (`unauthorized`).
pub fn check_permission(claims: &ClaimSet, required: &str) -> Result<(), AuthError> {
    let permissions = claims
        .permissions()
        .ok_or(AuthError::InvalidClaims("Permissions not included in JWT."))?;

    let granted = permissions
        .as_array()
        .is_some_and(|permissions| permissions.iter().any(|p| p.as_str() == Some(required)));

    if granted {
        Ok(())
    } else {
        Err(AuthError::Unauthorized)
    }
}
