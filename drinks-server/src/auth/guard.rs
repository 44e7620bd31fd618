use super::{check_permission, AuthError, TokenVerifier};
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};
use http::header::AUTHORIZATION;
use log::warn;
use std::sync::Arc;

/// Middleware state: the shared verifier and the permission one route needs
#[derive(Clone)]
pub struct PermissionGuard {
    verifier: Arc<TokenVerifier>,
    permission: &'static str,
}

/// Wraps `route` so it only runs for bearers holding `permission`.
///
/// Verification failures are answered directly with the matching
/// [`AuthError`]; the wrapped handler never sees them.
pub fn require_permission(
    state: &AppState,
    permission: &'static str,
    route: MethodRouter<AppState>,
) -> MethodRouter<AppState> {
    let guard = PermissionGuard {
        verifier: state.verifier.clone(),
        permission,
    };
    route.route_layer(middleware::from_fn_with_state(guard, authorize))
}

async fn authorize(
    State(guard): State<PermissionGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let outcome = guard
        .verifier
        .verify(request.headers().get(AUTHORIZATION))
        .await
        .and_then(|claims| check_permission(&claims, guard.permission).map(|()| claims));

    match outcome {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(err) => {
            warn!(
                "Refused {} {} (requires '{}'): {} [{}]",
                request.method(),
                request.uri().path(),
                guard.permission,
                err,
                err.code()
            );
            Err(err)
        }
    }
}
