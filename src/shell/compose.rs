use std::sync::Arc;

use crate::modules::cart::adapters::outbound::cart_repository::CartRepository;
use crate::modules::cart::adapters::outbound::cart_sync::CartSyncWorker;
use crate::modules::cart::core::intents::CartIntent;
use crate::modules::cart::sessions::CartSessions;
use crate::modules::notifications::adapters::outbound::alert_sink::AlertSink;
use crate::modules::notifications::adapters::outbound::orders_backend::{
    OrderChangeFeed, OrdersBackend,
};
use crate::modules::notifications::core::notification::Notification;
use crate::modules::notifications::use_cases::deliver_notification::handler::NotificationCenter;
use crate::modules::notifications::use_cases::poll_channel::handler::PollChannel;
use crate::modules::notifications::use_cases::push_channel::handler::PushChannel;
use crate::modules::orders::use_cases::track_order::queries_port::OrderQueries;
use crate::modules::payments::adapters::outbound::checkout_sdk::{
    CashfreeCheckout, RazorpayCheckout,
};
use crate::modules::payments::adapters::outbound::payment_backend::PaymentBackend;
use crate::modules::payments::strategies::{CashfreeStrategy, GatewayStrategies, RazorpayStrategy};
use crate::modules::payments::use_cases::retry_payment::registry::PaymentRetries;
use crate::shared::infrastructure::event_bus::{self, EventSubscriber};
use crate::shared::infrastructure::intent_outbox::{self, IntentRelay};
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;

const NOTIFICATION_BUS_CAPACITY: usize = 256;

/// Outbound ports the composition root needs concrete implementations for.
pub struct Dependencies {
    pub cart_repository: Arc<dyn CartRepository>,
    pub order_queries: Arc<dyn OrderQueries>,
    pub orders_backend: Arc<dyn OrdersBackend>,
    pub order_changes: Arc<dyn OrderChangeFeed>,
    pub payment_backend: Arc<dyn PaymentBackend>,
    pub razorpay: Arc<dyn RazorpayCheckout>,
    pub cashfree: Arc<dyn CashfreeCheckout>,
    pub alerts: Arc<dyn AlertSink>,
}

/// Everything that has to run off the request path. Handed to `Workers::spawn`.
pub struct Background {
    pub cart_relay: IntentRelay<CartIntent>,
    pub cart_sync: CartSyncWorker,
    pub notification_bus: EventSubscriber<Notification>,
    pub push: PushChannel,
    pub poll: PollChannel,
}

pub fn compose(config: &AppConfig, deps: Dependencies) -> (AppState, Background) {
    let (outbox, cart_relay) = intent_outbox::channel::<CartIntent>();
    let carts = Arc::new(CartSessions::new(deps.cart_repository.clone(), outbox));

    let strategies = GatewayStrategies::new(
        RazorpayStrategy::new(
            deps.payment_backend.clone(),
            deps.razorpay,
            config.merchant_name.clone(),
        ),
        CashfreeStrategy::new(
            deps.payment_backend.clone(),
            deps.cashfree,
            config.payment_return_url.clone(),
        ),
    );
    let payments = Arc::new(PaymentRetries::new(strategies, deps.payment_backend));

    let (publisher, notification_bus) = event_bus::channel(NOTIFICATION_BUS_CAPACITY);
    let notifications = Arc::new(NotificationCenter::new(
        config.notification_capacity,
        deps.alerts,
    ));
    let push = PushChannel::new(
        deps.order_changes,
        deps.orders_backend.clone(),
        publisher.clone(),
    );
    let poll = PollChannel::new(deps.orders_backend, publisher, config.poll_interval);

    let state = AppState {
        carts,
        payments,
        notifications,
        orders: deps.order_queries,
    };
    let background = Background {
        cart_relay,
        cart_sync: CartSyncWorker::new(deps.cart_repository),
        notification_bus,
        push,
        poll,
    };
    (state, background)
}
