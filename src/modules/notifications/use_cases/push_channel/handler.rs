use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::modules::notifications::adapters::outbound::orders_backend::{
    OrderChangeFeed, OrdersBackend,
};
use crate::modules::notifications::core::notification::{
    Notification, NotificationDraft, NotificationKind,
};
use crate::modules::notifications::core::order_change::OrderChange;
use crate::modules::notifications::use_cases::push_channel::translate::translate;
use crate::shared::core::primitives::now_timestamp;
use crate::shared::infrastructure::event_bus::EventPublisher;

/// Realtime producer: turns row changes into notifications on the bus.
pub struct PushChannel {
    feed: Arc<dyn OrderChangeFeed>,
    orders: Arc<dyn OrdersBackend>,
    publisher: EventPublisher<Notification>,
}

impl PushChannel {
    pub fn new(
        feed: Arc<dyn OrderChangeFeed>,
        orders: Arc<dyn OrdersBackend>,
        publisher: EventPublisher<Notification>,
    ) -> Self {
        Self {
            feed,
            orders,
            publisher,
        }
    }

    pub async fn handle_change(&self, change: OrderChange) -> Option<Notification> {
        let draft = translate(&change, &now_timestamp())?;
        let notification = Notification::from(self.enrich(draft).await);
        if let Err(error) = self.publisher.publish(notification.clone()).await {
            tracing::warn!(%error, id = %notification.id, "push notification not delivered");
            return None;
        }
        Some(notification)
    }

    async fn enrich(&self, mut draft: NotificationDraft) -> NotificationDraft {
        if draft.kind == NotificationKind::Deleted || draft.order.is_some() {
            return draft;
        }
        match self.orders.single_order_for_notification(&draft.id).await {
            Ok(order) => draft.order = order,
            Err(error) => {
                tracing::warn!(%error, id = %draft.id, "could not load order details for notification");
            }
        }
        draft
    }

    /// Subscribes and forwards changes until the feed ends or `token` is cancelled.
    /// Leaving the loop drops the receiver, which tears the subscription down.
    pub async fn run(&self, token: CancellationToken) -> anyhow::Result<()> {
        let mut changes = self.feed.subscribe().await?;
        tracing::info!("realtime order subscription open");
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                change = changes.recv() => match change {
                    Some(change) => {
                        self.handle_change(change).await;
                    }
                    None => {
                        tracing::warn!("realtime order feed closed");
                        break;
                    }
                },
            }
        }
        Ok(())
    }
}
