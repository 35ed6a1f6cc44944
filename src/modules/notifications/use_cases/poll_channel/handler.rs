use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::modules::notifications::adapters::outbound::orders_backend::OrdersBackend;
use crate::modules::notifications::core::notification::Notification;
use crate::modules::notifications::use_cases::poll_channel::differ::PollDiffer;
use crate::shared::core::primitives::now_timestamp;
use crate::shared::infrastructure::event_bus::EventPublisher;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(15);

/// Fallback producer. Runs alongside the push channel, not instead of it.
pub struct PollChannel {
    orders: Arc<dyn OrdersBackend>,
    publisher: EventPublisher<Notification>,
    differ: Mutex<PollDiffer>,
    interval: Duration,
}

impl PollChannel {
    pub fn new(
        orders: Arc<dyn OrdersBackend>,
        publisher: EventPublisher<Notification>,
        interval: Duration,
    ) -> Self {
        Self {
            orders,
            publisher,
            differ: Mutex::new(PollDiffer::new()),
            interval,
        }
    }

    /// One poll. A failed fetch is logged and leaves the baseline untouched.
    pub async fn poll_once(&self) -> Vec<Notification> {
        let summary = match self.orders.polling_data().await {
            Ok(summary) => summary,
            Err(error) => {
                tracing::warn!(%error, "order poll failed");
                return Vec::new();
            }
        };
        let drafts = self.differ.lock().await.observe(summary, &now_timestamp());

        let mut published = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let notification = Notification::from(draft);
            match self.publisher.publish(notification.clone()).await {
                Ok(()) => published.push(notification),
                Err(error) => {
                    tracing::warn!(%error, id = %notification.id, "poll notification not delivered");
                }
            }
        }
        published
    }

    /// Polls immediately, then on every tick until `token` is cancelled.
    pub async fn run(&self, token: CancellationToken) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!(interval_secs = self.interval.as_secs(), "order polling started");
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = ticker.tick() => {
                    self.poll_once().await;
                }
            }
        }
        tracing::debug!("order polling stopped");
    }
}
