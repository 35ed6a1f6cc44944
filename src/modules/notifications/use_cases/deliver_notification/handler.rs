// Single consumer of the notification bus.
//
// Purpose
// - Funnel push and poll deliveries through one idempotent entry point.
//
// Responsibilities
// - Drop a delivery whose (id, timestamp) is already listed.
// - Alert once per accepted notification, never per raw delivery.

use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::modules::notifications::adapters::outbound::alert_sink::AlertSink;
use crate::modules::notifications::core::feed::{AddOutcome, FeedView, NotificationFeed};
use crate::modules::notifications::core::notification::Notification;
use crate::shared::infrastructure::event_bus::EventSubscriber;

pub struct NotificationCenter {
    feed: RwLock<NotificationFeed>,
    alerts: Arc<dyn AlertSink>,
}

impl NotificationCenter {
    pub fn new(capacity: usize, alerts: Arc<dyn AlertSink>) -> Self {
        Self {
            feed: RwLock::new(NotificationFeed::with_capacity(capacity)),
            alerts,
        }
    }

    pub async fn add_notification(&self, notification: Notification) -> AddOutcome {
        let outcome = self.feed.write().await.add(notification.clone());
        match outcome {
            AddOutcome::Accepted => {
                tracing::info!(id = %notification.id, timestamp = %notification.timestamp, kind = ?notification.kind, "notification accepted");
                if let Err(error) = self.alerts.alert(&notification).await {
                    tracing::warn!(%error, id = %notification.id, "alert failed");
                }
            }
            AddOutcome::Duplicate => {
                tracing::debug!(id = %notification.id, timestamp = %notification.timestamp, "duplicate notification dropped");
            }
        }
        outcome
    }

    /// Drains the bus until it closes or `token` is cancelled.
    pub async fn run(&self, mut subscriber: EventSubscriber<Notification>, token: CancellationToken) {
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                next = subscriber.next() => match next {
                    Some(notification) => {
                        self.add_notification(notification).await;
                    }
                    None => break,
                },
            }
        }
        tracing::debug!("notification consumer stopped");
    }

    pub async fn view(&self) -> FeedView {
        self.feed.read().await.view()
    }

    pub async fn notifications(&self) -> Vec<Notification> {
        self.feed.read().await.notifications()
    }

    pub async fn unread_count(&self) -> usize {
        self.feed.read().await.unread_count()
    }

    pub async fn mark_read(&self, id: &str, timestamp: &str) -> bool {
        self.feed.write().await.mark_read(id, timestamp)
    }

    pub async fn mark_all_read(&self) {
        self.feed.write().await.mark_all_read();
    }

    pub async fn clear(&self) {
        self.feed.write().await.clear();
    }

    pub async fn set_panel_open(&self, open: bool) {
        let mut feed = self.feed.write().await;
        if open {
            feed.open_panel();
        } else {
            feed.close_panel();
        }
    }

    pub async fn toggle_panel(&self) -> bool {
        self.feed.write().await.toggle_panel()
    }
}
