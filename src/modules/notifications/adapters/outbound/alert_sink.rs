use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::notifications::core::notification::Notification;

/// Sound and attention cue for an operator, fired once per accepted notification.
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn alert(&self, notification: &Notification) -> anyhow::Result<()>;
}

#[derive(Default)]
pub struct TracingAlertSink;

#[async_trait]
impl AlertSink for TracingAlertSink {
    async fn alert(&self, notification: &Notification) -> anyhow::Result<()> {
        tracing::info!(
            id = %notification.id,
            kind = ?notification.kind,
            title = %notification.title,
            "{}",
            notification.message
        );
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingAlertSink {
    pub alerts: Mutex<Vec<Notification>>,
    is_offline: bool,
}

impl RecordingAlertSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn count(&self) -> usize {
        self.alerts.lock().await.len()
    }
}

#[async_trait]
impl AlertSink for RecordingAlertSink {
    async fn alert(&self, notification: &Notification) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Alert sink offline"));
        }
        self.alerts.lock().await.push(notification.clone());
        Ok(())
    }
}
