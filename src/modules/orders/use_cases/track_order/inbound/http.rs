use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(order_id): Path<String>) -> Response {
    match state.orders.get_order_by_id(&order_id).await {
        Ok(Some(order)) => Json(order).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => {
            tracing::error!(%order_id, %error, "order lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod track_order_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::handle;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app_state::make_test_state;
    use crate::tests::fixtures::orders::OrderBuilder;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/orders/{order_id}", get(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_order() {
        let (state, handles) = make_test_state();
        handles
            .orders
            .place(OrderBuilder::new("o-1").order_number("JW-1001").build())
            .await;

        let response = app(state)
            .oneshot(Request::get("/orders/o-1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["order_number"], "JW-1001");
        assert_eq!(json["status"], "pending");
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_order() {
        let (state, _handles) = make_test_state();
        let response = app(state)
            .oneshot(Request::get("/orders/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
