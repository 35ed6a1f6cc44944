use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::shell::state::AppState;

/// Without a key, everything is marked read.
#[derive(Deserialize, Default)]
pub struct MarkReadBody {
    pub id: Option<String>,
    pub timestamp: Option<String>,
}

#[derive(Deserialize)]
pub struct PanelBody {
    pub open: Option<bool>,
}

pub async fn list(State(state): State<AppState>) -> Response {
    Json(state.notifications.view().await).into_response()
}

pub async fn mark_read(
    State(state): State<AppState>,
    body: Option<Json<MarkReadBody>>,
) -> Response {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    match (body.id, body.timestamp) {
        (Some(id), Some(timestamp)) => {
            if !state.notifications.mark_read(&id, &timestamp).await {
                return StatusCode::NOT_FOUND.into_response();
            }
        }
        (None, None) => state.notifications.mark_all_read().await,
        _ => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    }
    Json(state.notifications.view().await).into_response()
}

/// `{"open": bool}` sets the panel, an empty object toggles it.
pub async fn panel(
    State(state): State<AppState>,
    body: Result<Json<PanelBody>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    match body.open {
        Some(open) => state.notifications.set_panel_open(open).await,
        None => {
            state.notifications.toggle_panel().await;
        }
    }
    Json(state.notifications.view().await).into_response()
}

pub async fn clear(State(state): State<AppState>) -> Response {
    state.notifications.clear().await;
    Json(state.notifications.view().await).into_response()
}
