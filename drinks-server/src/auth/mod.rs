//! Bearer token authorization
//!
//! Protected routes are wrapped with [`require_permission`], which verifies
//! the token with [`TokenVerifier`], checks the permission with
//! [`check_permission`] and only then lets the request through with the
//! [`ClaimSet`] in its extensions.

mod claims;
mod error;
pub mod guard;
pub mod jwks;
pub mod verifier;

pub use claims::{check_permission, ClaimSet};
pub use error::AuthError;
pub use guard::require_permission;
pub use verifier::TokenVerifier;

pub const GET_DRINKS_DETAIL: &str = "get:drinks-detail";
pub const POST_DRINKS: &str = "post:drinks";
pub const PATCH_DRINKS: &str = "patch:drinks";
pub const DELETE_DRINKS: &str = "delete:drinks";
