use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::payments::core::gateway::GatewayResponse;
use crate::modules::payments::use_cases::retry_payment::inbound::http::error_response;
use crate::modules::payments::use_cases::verify_return::handler::verify_return;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct VerifyReturnBody {
    pub order_id: String,
    #[serde(flatten)]
    pub response: GatewayResponse,
}

#[derive(Serialize)]
struct VerifiedBody {
    order_id: String,
    success: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<VerifyReturnBody>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    match verify_return(state.payments.backend(), &body.order_id, &body.response).await {
        Ok(()) => Json(VerifiedBody {
            order_id: body.order_id,
            success: true,
        })
        .into_response(),
        Err(error) => error_response(error),
    }
}
