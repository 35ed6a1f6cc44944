use std::sync::Arc;
use std::time::Duration;

use crate::modules::cart::adapters::outbound::cart_repository_in_memory::InMemoryCartRepository;
use crate::modules::notifications::adapters::outbound::alert_sink::RecordingAlertSink;
use crate::modules::orders::adapters::outbound::orders_in_memory::InMemoryOrders;
use crate::modules::payments::adapters::outbound::checkout_sdk_in_memory::{
    RecordingCashfree, ScriptedRazorpay,
};
use crate::modules::payments::adapters::outbound::payment_backend_in_memory::InMemoryPaymentBackend;
use crate::shell::compose::{Background, Dependencies, compose};
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;

/// Concrete adapters behind a test `AppState`, plus the not-yet-spawned workers.
pub struct TestHandles {
    pub cart_repository: Arc<InMemoryCartRepository>,
    pub orders: Arc<InMemoryOrders>,
    pub payment_backend: Arc<InMemoryPaymentBackend>,
    pub razorpay: Arc<ScriptedRazorpay>,
    pub cashfree: Arc<RecordingCashfree>,
    pub alerts: Arc<RecordingAlertSink>,
    pub background: Background,
}

pub fn test_config() -> AppConfig {
    AppConfig {
        poll_interval: Duration::from_secs(15),
        payment_return_url: "https://shop.test/payment/return".to_string(),
        ..AppConfig::default()
    }
}

pub fn make_test_state() -> (AppState, TestHandles) {
    make_test_state_with(InMemoryOrders::new())
}

pub fn make_test_state_with(orders: InMemoryOrders) -> (AppState, TestHandles) {
    let cart_repository = Arc::new(InMemoryCartRepository::new());
    let orders = Arc::new(orders);
    let payment_backend = Arc::new(InMemoryPaymentBackend::new());
    let razorpay = Arc::new(ScriptedRazorpay::new());
    let cashfree = Arc::new(RecordingCashfree::new());
    let alerts = Arc::new(RecordingAlertSink::new());

    let (state, background) = compose(
        &test_config(),
        Dependencies {
            cart_repository: cart_repository.clone(),
            order_queries: orders.clone(),
            orders_backend: orders.clone(),
            order_changes: orders.clone(),
            payment_backend: payment_backend.clone(),
            razorpay: razorpay.clone(),
            cashfree: cashfree.clone(),
            alerts: alerts.clone(),
        },
    );

    (
        state,
        TestHandles {
            cart_repository,
            orders,
            payment_backend,
            razorpay,
            cashfree,
            alerts,
            background,
        },
    )
}
