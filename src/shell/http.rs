use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::modules::cart::use_cases::mutate_cart::inbound::http as mutate_cart_http;
use crate::modules::cart::use_cases::view_cart::inbound::http as view_cart_http;
use crate::modules::notifications::use_cases::list_notifications::inbound::http as notifications_http;
use crate::modules::orders::use_cases::track_order::inbound::http as track_order_http;
use crate::modules::payments::use_cases::retry_payment::inbound::http as retry_payment_http;
use crate::modules::payments::use_cases::verify_return::inbound::http as verify_return_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cart/{session_id}", get(view_cart_http::handle))
        .route("/cart/{session_id}/items", post(mutate_cart_http::add_item))
        .route(
            "/cart/{session_id}/items/{line_id}",
            patch(mutate_cart_http::update_quantity).delete(mutate_cart_http::remove_item),
        )
        .route("/cart/{session_id}/open", post(mutate_cart_http::open_drawer))
        .route("/cart/{session_id}/close", post(mutate_cart_http::close_drawer))
        .route("/cart/{session_id}/clear", post(mutate_cart_http::clear))
        .route("/payments/retry", post(retry_payment_http::retry))
        .route("/payments/reset", post(retry_payment_http::reset))
        .route("/payments/status", get(retry_payment_http::status))
        .route("/payments/verify-return", post(verify_return_http::handle))
        .route("/admin/notifications", get(notifications_http::list))
        .route("/admin/notifications/read", post(notifications_http::mark_read))
        .route("/admin/notifications/panel", post(notifications_http::panel))
        .route("/admin/notifications/clear", post(notifications_http::clear))
        .route("/orders/{order_id}", get(track_order_http::handle))
        .with_state(state)
}
