use std::sync::Arc;

use crate::modules::cart::sessions::CartSessions;
use crate::modules::notifications::use_cases::deliver_notification::handler::NotificationCenter;
use crate::modules::orders::use_cases::track_order::queries_port::OrderQueries;
use crate::modules::payments::use_cases::retry_payment::registry::PaymentRetries;

#[derive(Clone)]
pub struct AppState {
    pub carts: Arc<CartSessions>,
    pub payments: Arc<PaymentRetries>,
    pub notifications: Arc<NotificationCenter>,
    pub orders: Arc<dyn OrderQueries>,
}
