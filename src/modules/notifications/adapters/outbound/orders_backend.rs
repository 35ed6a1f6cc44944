use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::modules::notifications::core::order_change::OrderChange;
use crate::modules::notifications::core::polling::PollingSummary;
use crate::modules::orders::core::order::OrderSnapshot;

/// Order reads the notification channels need from the hosted backend.
#[async_trait]
pub trait OrdersBackend: Send + Sync {
    async fn polling_data(&self) -> anyhow::Result<PollingSummary>;
    async fn single_order_for_notification(
        &self,
        order_id: &str,
    ) -> anyhow::Result<Option<OrderSnapshot>>;
}

/// Realtime change feed for the orders table.
///
/// The subscription ends when the returned receiver is dropped.
#[async_trait]
pub trait OrderChangeFeed: Send + Sync {
    async fn subscribe(&self) -> anyhow::Result<mpsc::Receiver<OrderChange>>;
}
