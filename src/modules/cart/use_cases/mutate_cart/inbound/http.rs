use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::cart::core::line_item::ProductSnapshot;
use crate::modules::cart::use_cases::mutate_cart::handler::CartError;
use crate::modules::cart::use_cases::view_cart::projection::CartView;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddItemBody {
    pub product_id: String,
    pub size: Option<String>,
    pub quantity: i64,
    pub product: ProductSnapshot,
}

#[derive(Deserialize)]
pub struct UpdateQuantityBody {
    pub quantity: i64,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn respond(result: Result<CartView, CartError>) -> Response {
    match result {
        Ok(view) => Json(view).into_response(),
        Err(error) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody {
                error: error.to_string(),
            }),
        )
            .into_response(),
    }
}

pub async fn add_item(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    body: Result<Json<AddItemBody>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    let store = state.carts.get_or_open(&session_id).await;
    respond(
        store
            .add_item(body.product_id, body.size, body.quantity, body.product)
            .await,
    )
}

pub async fn update_quantity(
    State(state): State<AppState>,
    Path((session_id, line_id)): Path<(String, String)>,
    body: Result<Json<UpdateQuantityBody>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    let store = state.carts.get_or_open(&session_id).await;
    respond(store.update_quantity(line_id, body.quantity).await)
}

pub async fn remove_item(
    State(state): State<AppState>,
    Path((session_id, line_id)): Path<(String, String)>,
) -> Response {
    let store = state.carts.get_or_open(&session_id).await;
    respond(store.remove_item(line_id).await)
}

pub async fn clear(State(state): State<AppState>, Path(session_id): Path<String>) -> Response {
    let store = state.carts.get_or_open(&session_id).await;
    respond(store.clear().await)
}

pub async fn open_drawer(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let store = state.carts.get_or_open(&session_id).await;
    respond(store.open_cart().await)
}

pub async fn close_drawer(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let store = state.carts.get_or_open(&session_id).await;
    respond(store.close_cart().await)
}
