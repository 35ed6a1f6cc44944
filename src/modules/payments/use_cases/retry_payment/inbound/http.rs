use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::payments::core::state::{Notice, RetryState, RetryStatus};
use crate::modules::payments::use_cases::retry_payment::command::RetryPayment;
use crate::modules::payments::use_cases::retry_payment::handler::RetryError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct OrderRef {
    pub order_id: String,
}

#[derive(Serialize)]
pub struct RetryStatusBody {
    pub order_id: String,
    pub state: RetryState,
    pub retrying: bool,
    pub verifying: bool,
    pub can_retry: bool,
    pub generation: u64,
    pub notice: Option<Notice>,
}

impl From<RetryStatus> for RetryStatusBody {
    fn from(status: RetryStatus) -> Self {
        Self {
            retrying: status.retrying(),
            verifying: status.verifying(),
            can_retry: status.can_retry(),
            order_id: status.order_id,
            state: status.state,
            generation: status.generation,
            notice: status.notice,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub fn status_code_for(error: &RetryError) -> StatusCode {
    match error {
        RetryError::AlreadyInProgress => StatusCode::CONFLICT,
        RetryError::GatewayNotReady(_) => StatusCode::SERVICE_UNAVAILABLE,
        RetryError::PaymentNotAllowed(_) => StatusCode::UNPROCESSABLE_ENTITY,
        RetryError::VerificationRejected(_) => StatusCode::PAYMENT_REQUIRED,
        RetryError::InvalidSession(_) | RetryError::Backend(_) | RetryError::Checkout { .. } => {
            StatusCode::BAD_GATEWAY
        }
    }
}

pub fn error_response(error: RetryError) -> Response {
    (
        status_code_for(&error),
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub async fn retry(
    State(state): State<AppState>,
    body: Result<Json<RetryPayment>, JsonRejection>,
) -> Response {
    let Ok(Json(command)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    match state.payments.retry(command).await {
        Ok(status) => Json(RetryStatusBody::from(status)).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn reset(
    State(state): State<AppState>,
    body: Result<Json<OrderRef>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    Json(RetryStatusBody::from(state.payments.reset(&body.order_id).await)).into_response()
}

pub async fn status(State(state): State<AppState>, Query(query): Query<OrderRef>) -> Response {
    Json(RetryStatusBody::from(state.payments.status(&query.order_id).await)).into_response()
}
