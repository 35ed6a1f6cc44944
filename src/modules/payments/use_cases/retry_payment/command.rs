use serde::Deserialize;

use crate::modules::payments::core::gateway::Gateway;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RetryPayment {
    pub order_id: String,
    pub gateway: Gateway,
}
