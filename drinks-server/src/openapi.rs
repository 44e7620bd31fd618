use crate::api::drinks::{handlers, models as views};
use crate::api::health;
use crate::errors::ErrorBody;
use crate::models::{DrinkDetail, DrinkSummary, Ingredient, IngredientSummary};
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

pub(crate) const HEALTH_TAG: &str = "Health API";
pub(crate) const DRINKS_TAG: &str = "Drinks API";

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::ready_check,
        handlers::list_drinks,
        handlers::list_drinks_detail,
        handlers::create_drink,
        handlers::update_drink,
        handlers::delete_drink,
    ),
    components(schemas(
        views::DrinkSummaries,
        views::DrinkDetails,
        views::DeletedDrink,
        DrinkSummary,
        DrinkDetail,
        Ingredient,
        IngredientSummary,
        ErrorBody,
    )),
    tags(
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = DRINKS_TAG, description = "Drink menu endpoints"),
    ),
    info(
        title = "Coffee Shop Drinks API",
        description = "Drink menu service with permission based access",
        version = "1.0.0"
    )
)]
pub(crate) struct ApiDoc;

async fn openapi_json_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Creates a router for OpenAPI documentation routes
pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json_handler))
}
