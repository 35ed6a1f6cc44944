// Cart flows through the full router, then through the sync relay into the repository.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::json;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::app_state::make_test_state;

fn app(state: &AppState) -> Router {
    router(state.clone())
}

async fn json_of(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn send_json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn add_ring(size: &str, quantity: i64) -> Request<Body> {
    send_json(
        "POST",
        "/cart/s-1/items",
        json!({
            "product_id": "ring-01",
            "size": size,
            "quantity": quantity,
            "product": { "product_id": "ring-01", "name": "Solitaire ring", "unit_price": 1000 }
        }),
    )
}

#[tokio::test]
async fn adding_the_same_variant_twice_merges_into_one_line() {
    let (state, _handles) = make_test_state();

    let first = app(&state).oneshot(add_ring("M", 2)).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let second = app(&state).oneshot(add_ring("M", 3)).await.unwrap();
    let view = json_of(second).await;

    assert_eq!(view["items"].as_array().unwrap().len(), 1);
    assert_eq!(view["items"][0]["quantity"], 5);
    assert_eq!(view["cart_count"], 5);
    assert_eq!(view["subtotal"], 5_000);

    let fetched = app(&state)
        .oneshot(Request::get("/cart/s-1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(json_of(fetched).await["cart_count"], 5);
}

#[tokio::test]
async fn another_size_becomes_its_own_line() {
    let (state, _handles) = make_test_state();
    app(&state).oneshot(add_ring("M", 1)).await.unwrap();
    let view = json_of(app(&state).oneshot(add_ring("L", 1)).await.unwrap()).await;
    assert_eq!(view["items"].as_array().unwrap().len(), 2);
    assert_eq!(view["cart_count"], 2);
}

#[rstest]
#[case(0)]
#[case(-1)]
#[tokio::test]
async fn a_quantity_below_one_removes_the_line(#[case] quantity: i64) {
    let (state, _handles) = make_test_state();
    app(&state).oneshot(add_ring("L", 1)).await.unwrap();
    let added = json_of(app(&state).oneshot(add_ring("M", 4)).await.unwrap()).await;
    let line_id = added["items"][1]["id"].as_str().unwrap().to_string();

    let response = app(&state)
        .oneshot(send_json(
            "PATCH",
            &format!("/cart/s-1/items/{line_id}"),
            json!({ "quantity": quantity }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let view = json_of(response).await;
    assert_eq!(view["items"].as_array().unwrap().len(), 1);
    assert_eq!(view["items"][0]["size"], "L");
    assert_eq!(view["cart_count"], 1);
}

#[tokio::test]
async fn sessions_do_not_share_a_cart() {
    let (state, _handles) = make_test_state();
    app(&state).oneshot(add_ring("M", 2)).await.unwrap();
    let other = app(&state)
        .oneshot(Request::get("/cart/s-2").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let view = json_of(other).await;
    assert_eq!(view["cart_count"], 0);
    assert_eq!(view["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn mutations_reach_the_repository_in_order() {
    let (state, handles) = make_test_state();
    let added = json_of(app(&state).oneshot(add_ring("M", 2)).await.unwrap()).await;
    let line_id = added["items"][0]["id"].as_str().unwrap().to_string();
    app(&state).oneshot(add_ring("L", 1)).await.unwrap();
    app(&state)
        .oneshot(send_json(
            "PATCH",
            &format!("/cart/s-1/items/{line_id}"),
            json!({ "quantity": 7 }),
        ))
        .await
        .unwrap();
    app(&state)
        .oneshot(
            Request::delete(format!("/cart/s-1/items/{line_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // The relay finishes once every outbox handle is gone.
    drop(state);
    let background = handles.background;
    let dispatched = background.cart_relay.run(&background.cart_sync).await;
    assert_eq!(dispatched, 4);

    let lines = handles.cart_repository.lines("s-1").await;
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].size.as_deref(), Some("L"));
    assert_eq!(lines[0].quantity, 1);
}

#[tokio::test]
async fn closing_and_clearing_the_drawer() {
    let (state, _handles) = make_test_state();
    app(&state).oneshot(add_ring("M", 2)).await.unwrap();
    let opened = app(&state)
        .oneshot(Request::post("/cart/s-1/open").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(json_of(opened).await["is_open"], true);

    let closed = app(&state)
        .oneshot(Request::post("/cart/s-1/close").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(json_of(closed).await["is_open"], false);

    let cleared = app(&state)
        .oneshot(Request::post("/cart/s-1/clear").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let view = json_of(cleared).await;
    assert_eq!(view["cart_count"], 0);
    assert_eq!(view["subtotal"], 0);
}
