use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use storefront::modules::cart::adapters::outbound::cart_repository_in_memory::InMemoryCartRepository;
use storefront::modules::notifications::adapters::outbound::alert_sink::TracingAlertSink;
use storefront::modules::orders::adapters::outbound::orders_in_memory::InMemoryOrders;
use storefront::modules::orders::core::order::{Order, OrderItem, OrderStatus};
use storefront::modules::payments::adapters::outbound::checkout_sdk_in_memory::{
    RecordingCashfree, ScriptedRazorpay,
};
use storefront::modules::payments::adapters::outbound::payment_backend_in_memory::InMemoryPaymentBackend;
use storefront::shared::core::primitives::now_timestamp;
use storefront::shell::compose::{Dependencies, compose};
use storefront::shell::config::AppConfig;
use storefront::shell::graphql::{self, graphiql};
use storefront::shell::http::router;
use storefront::shell::workers::Workers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let orders = Arc::new(InMemoryOrders::new());
    let payment_backend = Arc::new(InMemoryPaymentBackend::new());
    seed(&orders, &payment_backend).await;

    let deps = Dependencies {
        cart_repository: Arc::new(InMemoryCartRepository::new()),
        order_queries: orders.clone(),
        orders_backend: orders.clone(),
        order_changes: orders,
        payment_backend,
        razorpay: Arc::new(ScriptedRazorpay::new()),
        cashfree: Arc::new(RecordingCashfree::new()),
        alerts: Arc::new(TracingAlertSink),
    };
    let (state, background) = compose(&config, deps);
    let workers = Workers::spawn(&state, background);

    let schema = graphql::schema(state.clone());
    let app = Router::new()
        .route("/gql", get(graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .merge(router(state))
        .layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    tracing::info!("HTTP API: http://{}", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(workers.token()))
        .await?;

    workers.shutdown().await;
    Ok(())
}

async fn shutdown_signal(token: tokio_util::sync::CancellationToken) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(error) = result {
                tracing::error!(%error, "could not listen for ctrl-c");
            }
        }
        _ = token.cancelled() => {}
    }
    tracing::info!("shutting down");
}

async fn seed(orders: &InMemoryOrders, payments: &InMemoryPaymentBackend) {
    let now = now_timestamp();
    let order = Order {
        id: "demo-order-1".to_string(),
        order_number: "JW-1001".to_string(),
        status: OrderStatus::Pending,
        total: 129_900,
        subtotal: 129_900,
        shipping: 0,
        items: vec![OrderItem {
            product_id: "ring-01".to_string(),
            product_name: "Solitaire ring".to_string(),
            size: Some("12".to_string()),
            quantity: 1,
            price: 129_900,
        }],
        customer_name: Some("Demo Customer".to_string()),
        created_at: now.clone(),
        updated_at: now,
    };
    payments.add_pending_order(&order.id, order.total).await;
    orders.place(order).await;
}
