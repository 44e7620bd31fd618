use super::models::{DeletedDrink, DrinkDetails, DrinkSummaries};
use super::payload::{self, DrinkChanges};
use crate::auth::ClaimSet;
use crate::errors::{ApiError, ErrorBody};
use crate::openapi::DRINKS_TAG;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    Extension, Json,
};
use log::info;

/// Route ids are integers; anything else names no drink
fn drink_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::not_found())
}

fn actor(claims: &ClaimSet) -> &str {
    claims.subject().unwrap_or("unknown subject")
}

#[utoipa::path(
    get,
    path = "/drinks",
    tag = DRINKS_TAG,
    responses(
        (status = 200, description = "All drinks, without ingredient names", body = DrinkSummaries),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub(crate) async fn list_drinks(
    State(state): State<AppState>,
) -> Result<Json<DrinkSummaries>, ApiError> {
    let drinks = state.store.list().await?;
    Ok(Json(DrinkSummaries::new(
        drinks.iter().map(|drink| drink.short()).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/drinks-detail",
    tag = DRINKS_TAG,
    params(
        ("Authorization" = String, Header, description = "Bearer token with get:drinks-detail"),
    ),
    responses(
        (status = 200, description = "All drinks with full recipes", body = DrinkDetails),
        (status = 400, description = "Token has no permissions claim", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "Permission not granted", body = ErrorBody)
    )
)]
pub(crate) async fn list_drinks_detail(
    State(state): State<AppState>,
) -> Result<Json<DrinkDetails>, ApiError> {
    let drinks = state.store.list().await?;
    Ok(Json(DrinkDetails::new(
        drinks.iter().map(|drink| drink.long()).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/drinks",
    tag = DRINKS_TAG,
    request_body(content = serde_json::Value, description = "`title` and `recipe` of the new drink"),
    params(
        ("Authorization" = String, Header, description = "Bearer token with post:drinks"),
    ),
    responses(
        (status = 200, description = "The created drink", body = DrinkDetails),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "Permission not granted", body = ErrorBody),
        (status = 422, description = "Invalid title or recipe, or title already taken", body = ErrorBody),
        (status = 500, description = "Body is not a JSON object", body = ErrorBody)
    )
)]
pub(crate) async fn create_drink(
    State(state): State<AppState>,
    Extension(claims): Extension<ClaimSet>,
    body: Bytes,
) -> Result<Json<DrinkDetails>, ApiError> {
    let new_drink = payload::new_drink(&body)?;
    let drink = state.store.insert(new_drink).await?;
    info!("Drink {} '{}' created by {}", drink.id, drink.title, actor(&claims));

    Ok(Json(DrinkDetails::new(vec![drink.long()])))
}

#[utoipa::path(
    patch,
    path = "/drinks/{id}",
    tag = DRINKS_TAG,
    request_body(content = serde_json::Value, description = "Any of `title` and `recipe`"),
    params(
        ("id" = i64, Path, description = "Drink id"),
        ("Authorization" = String, Header, description = "Bearer token with patch:drinks"),
    ),
    responses(
        (status = 200, description = "The updated drink", body = DrinkDetails),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "Permission not granted", body = ErrorBody),
        (status = 404, description = "No such drink", body = ErrorBody),
        (status = 422, description = "Invalid changes", body = ErrorBody)
    )
)]
pub(crate) async fn update_drink(
    State(state): State<AppState>,
    Extension(claims): Extension<ClaimSet>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<DrinkDetails>, ApiError> {
    let id = drink_id(&id)?;
    let mut drink = state.store.get(id).await?.ok_or_else(ApiError::not_found)?;

    DrinkChanges::from_body(&body)?.apply(&mut drink);
    state.store.update(&drink).await?;
    info!("Drink {} updated by {}", drink.id, actor(&claims));

    Ok(Json(DrinkDetails::new(vec![drink.long()])))
}

#[utoipa::path(
    delete,
    path = "/drinks/{id}",
    tag = DRINKS_TAG,
    params(
        ("id" = i64, Path, description = "Drink id"),
        ("Authorization" = String, Header, description = "Bearer token with delete:drinks"),
    ),
    responses(
        (status = 200, description = "The drink was deleted", body = DeletedDrink),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "Permission not granted", body = ErrorBody),
        (status = 404, description = "No such drink", body = ErrorBody)
    )
)]
pub(crate) async fn delete_drink(
    State(state): State<AppState>,
    Extension(claims): Extension<ClaimSet>,
    Path(id): Path<String>,
) -> Result<Json<DeletedDrink>, ApiError> {
    let id = drink_id(&id)?;
    if !state.store.delete(id).await? {
        return Err(ApiError::not_found());
    }
    info!("Drink {} deleted by {}", id, actor(&claims));

    Ok(Json(DeletedDrink {
        success: true,
        delete: id,
    }))
}
