use crate::openapi::HEALTH_TAG;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use log::warn;
use serde::Serialize;
use utoipa::ToSchema;

/// Basic health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct Health {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database_status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    signing_keys_status: Option<&'static str>,
    #[serde(skip)]
    status_code: StatusCode,
}

impl IntoResponse for Health {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}

fn component_status(component: &str, result: &Result<(), String>) -> &'static str {
    match result {
        Ok(()) => "healthy",
        Err(e) => {
            warn!("Readiness check failed for {}: {}", component, e);
            "unhealthy"
        }
    }
}

/// Liveness check handler
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is alive", body = Health)
    )
)]
pub(crate) async fn health_check() -> Health {
    Health {
        status: "ok",
        database_status: None,
        signing_keys_status: None,
        status_code: StatusCode::OK,
    }
}

/// Readiness check handler, verifies the database and the signing key set
#[utoipa::path(
    get,
    path = "/ready",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is ready", body = Health),
        (status = 503, description = "Service is not ready", body = Health)
    )
)]
pub(crate) async fn ready_check(State(state): State<AppState>) -> Health {
    let (database, signing_keys) =
        tokio::join!(state.store.health_check(), state.verifier.health_check());

    let (status, status_code) = if database.is_ok() && signing_keys.is_ok() {
        ("ok", StatusCode::OK)
    } else {
        ("error", StatusCode::SERVICE_UNAVAILABLE)
    };

    Health {
        status,
        database_status: Some(component_status("database", &database)),
        signing_keys_status: Some(component_status("signing keys", &signing_keys)),
        status_code,
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
}
