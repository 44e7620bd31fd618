pub(crate) mod handlers;
pub(crate) mod models;
mod payload;

use crate::auth::{
    require_permission, DELETE_DRINKS, GET_DRINKS_DETAIL, PATCH_DRINKS, POST_DRINKS,
};
use crate::state::AppState;
use axum::routing::{delete, get, patch, post};
use axum::Router;
use handlers::{create_drink, delete_drink, list_drinks, list_drinks_detail, update_drink};

/// Drink routes. Listing is public, every other route is wrapped in the
/// permission it requires.
pub(super) fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/drinks",
            get(list_drinks).merge(require_permission(state, POST_DRINKS, post(create_drink))),
        )
        .route(
            "/drinks-detail",
            require_permission(state, GET_DRINKS_DETAIL, get(list_drinks_detail)),
        )
        .route(
            "/drinks/{id}",
            require_permission(state, PATCH_DRINKS, patch(update_drink))
                .merge(require_permission(state, DELETE_DRINKS, delete(delete_drink))),
        )
}
