pub(crate) mod drinks;
pub(crate) mod health;

use crate::errors::ApiError;
use crate::state::AppState;
use axum::Router;

/// Combines all API routes into a single router
pub(super) fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(drinks::router(state))
        .fallback(|| async { ApiError::not_found() })
        // must come after every route, it is only applied to routes that already exist
        .method_not_allowed_fallback(|| async { ApiError::method_not_allowed() })
}
