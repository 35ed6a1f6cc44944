use serde::Serialize;

use crate::modules::payments::core::gateway::Gateway;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RetryState {
    Idle,
    Initiating { gateway: Gateway },
    AwaitingGateway { gateway: Gateway },
    /// Left the page for the gateway's hosted flow. Verification happens on return.
    Redirected { order_id: String },
    Verifying,
    Success { order_id: String },
}

impl RetryState {
    pub fn name(&self) -> &'static str {
        match self {
            RetryState::Idle => "idle",
            RetryState::Initiating { .. } => "initiating",
            RetryState::AwaitingGateway { .. } => "awaiting_gateway",
            RetryState::Redirected { .. } => "redirected",
            RetryState::Verifying => "verifying",
            RetryState::Success { .. } => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryStatus {
    pub order_id: String,
    pub state: RetryState,
    /// Bumped by every new attempt and every reset. Late results from an older
    /// generation are dropped.
    pub generation: u64,
    pub notice: Option<Notice>,
}

impl RetryStatus {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            state: RetryState::Idle,
            generation: 0,
            notice: None,
        }
    }

    pub fn retrying(&self) -> bool {
        matches!(
            self.state,
            RetryState::Initiating { .. } | RetryState::AwaitingGateway { .. }
        )
    }

    pub fn verifying(&self) -> bool {
        self.state == RetryState::Verifying
    }

    pub fn can_retry(&self) -> bool {
        self.state == RetryState::Idle
    }
}
