use async_trait::async_trait;

use crate::modules::orders::core::order::Order;

/// Absence is `Ok(None)`, never an error.
#[async_trait]
pub trait OrderQueries: Send + Sync {
    async fn get_order_by_id(&self, order_id: &str) -> anyhow::Result<Option<Order>>;
}
