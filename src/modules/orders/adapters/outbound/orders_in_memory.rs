// In memory orders table with a realtime change feed.
//
// Purpose
// - Stand in for the hosted backend's orders table, its polling summary and its
//   realtime channel in tests and local runs.
//
// Responsibilities
// - Keep orders in insertion order.
// - Publish one change per write to every live subscriber, unless realtime is muted.

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock, mpsc};

use crate::modules::notifications::adapters::outbound::orders_backend::{
    OrderChangeFeed, OrdersBackend,
};
use crate::modules::notifications::core::order_change::{ChangeType, OrderChange, OrderRecord};
use crate::modules::notifications::core::polling::PollingSummary;
use crate::modules::orders::core::order::{Order, OrderSnapshot, OrderStatus};
use crate::modules::orders::use_cases::track_order::queries_port::OrderQueries;

const SUBSCRIPTION_BUFFER: usize = 64;

#[derive(Default)]
pub struct InMemoryOrders {
    orders: RwLock<Vec<Order>>,
    subscribers: Mutex<Vec<mpsc::Sender<OrderChange>>>,
    is_offline: bool,
    realtime_muted: bool,
}

impl InMemoryOrders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: RwLock::new(orders),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Writes still land, but nothing is pushed to subscribers.
    pub fn toggle_realtime(&mut self) {
        self.realtime_muted = !self.realtime_muted;
    }

    pub async fn place(&self, order: Order) {
        let record = OrderRecord::from(&order);
        self.orders.write().await.push(order);
        self.publish(OrderChange {
            event_type: ChangeType::Insert,
            old: None,
            new: Some(record),
        })
        .await;
    }

    pub async fn update_status(
        &self,
        order_id: &str,
        status: OrderStatus,
        updated_at: impl Into<String>,
    ) -> bool {
        let change = {
            let mut guard = self.orders.write().await;
            let Some(order) = guard.iter_mut().find(|o| o.id == order_id) else {
                return false;
            };
            let old = OrderRecord::from(&*order);
            order.status = status;
            order.updated_at = updated_at.into();
            OrderChange {
                event_type: ChangeType::Update,
                old: Some(old),
                new: Some(OrderRecord::from(&*order)),
            }
        };
        self.publish(change).await;
        true
    }

    pub async fn delete(&self, order_id: &str) -> bool {
        let removed = {
            let mut guard = self.orders.write().await;
            let before = guard.len();
            guard.retain(|o| o.id != order_id);
            guard.len() != before
        };
        if removed {
            self.publish(OrderChange {
                event_type: ChangeType::Delete,
                old: Some(OrderRecord::id_only(order_id)),
                new: None,
            })
            .await;
        }
        removed
    }

    pub async fn subscriber_count(&self) -> usize {
        let mut subscribers = self.subscribers.lock().await;
        subscribers.retain(|tx| !tx.is_closed());
        subscribers.len()
    }

    async fn publish(&self, change: OrderChange) {
        if self.realtime_muted {
            return;
        }
        let mut subscribers = self.subscribers.lock().await;
        subscribers.retain(|tx| !tx.is_closed());
        for tx in subscribers.iter() {
            if tx.send(change.clone()).await.is_err() {
                tracing::debug!("realtime subscriber went away");
            }
        }
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Orders backend offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderQueries for InMemoryOrders {
    async fn get_order_by_id(&self, order_id: &str) -> anyhow::Result<Option<Order>> {
        self.ensure_online()?;
        Ok(self
            .orders
            .read()
            .await
            .iter()
            .find(|o| o.id == order_id)
            .cloned())
    }
}

#[async_trait]
impl OrdersBackend for InMemoryOrders {
    async fn polling_data(&self) -> anyhow::Result<PollingSummary> {
        self.ensure_online()?;
        let guard = self.orders.read().await;
        let latest = guard.iter().max_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(PollingSummary {
            latest_id: latest.map(|o| o.id.clone()),
            latest_timestamp: latest.map(|o| o.updated_at.clone()),
            total_orders: guard.len() as u64,
            latest_order: latest.map(OrderSnapshot::from),
        })
    }

    async fn single_order_for_notification(
        &self,
        order_id: &str,
    ) -> anyhow::Result<Option<OrderSnapshot>> {
        self.ensure_online()?;
        Ok(self
            .orders
            .read()
            .await
            .iter()
            .find(|o| o.id == order_id)
            .map(OrderSnapshot::from))
    }
}

#[async_trait]
impl OrderChangeFeed for InMemoryOrders {
    async fn subscribe(&self) -> anyhow::Result<mpsc::Receiver<OrderChange>> {
        self.ensure_online()?;
        let (tx, rx) = mpsc::channel(SUBSCRIPTION_BUFFER);
        self.subscribers.lock().await.push(tx);
        Ok(rx)
    }
}
