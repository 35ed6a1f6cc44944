use serde::{Deserialize, Serialize};

use crate::modules::orders::core::order::OrderSnapshot;
use crate::shared::core::primitives::format_rupees;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewOrder,
    StatusChange,
    Cancelled,
    Deleted,
}

/// A change seen on either channel, before it has been enriched and shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub id: String,
    pub timestamp: String,
    pub kind: NotificationKind,
    pub order: Option<OrderSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub timestamp: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub title: String,
    pub message: String,
    pub order: Option<OrderSnapshot>,
}

impl Notification {
    pub fn new(
        id: impl Into<String>,
        timestamp: impl Into<String>,
        kind: NotificationKind,
        order: Option<OrderSnapshot>,
    ) -> Self {
        let id = id.into();
        let (title, message) = describe(&id, kind, order.as_ref());
        Self {
            id,
            timestamp: timestamp.into(),
            kind,
            read: false,
            title,
            message,
            order,
        }
    }

    /// Two deliveries describe the same change when this key matches.
    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.id, &self.timestamp)
    }
}

impl From<NotificationDraft> for Notification {
    fn from(draft: NotificationDraft) -> Self {
        Notification::new(draft.id, draft.timestamp, draft.kind, draft.order)
    }
}

fn describe(id: &str, kind: NotificationKind, order: Option<&OrderSnapshot>) -> (String, String) {
    let label = order
        .map(|o| format!("#{}", o.order_number))
        .unwrap_or_else(|| id.to_string());
    match kind {
        NotificationKind::NewOrder => {
            let detail = order
                .map(|o| {
                    let who = o.customer_name.as_deref().unwrap_or("A customer");
                    let what = if o.item_names.is_empty() {
                        String::new()
                    } else {
                        format!(" ({})", o.item_names.join(", "))
                    };
                    format!("{who} placed {label} for {}{what}", format_rupees(o.total))
                })
                .unwrap_or_else(|| format!("Order {label} was placed"));
            ("New order".to_string(), detail)
        }
        NotificationKind::StatusChange => {
            let detail = order
                .map(|o| format!("Order {label} is now {}", o.status))
                .unwrap_or_else(|| format!("Order {label} was updated"));
            ("Order updated".to_string(), detail)
        }
        NotificationKind::Cancelled => (
            "Order cancelled".to_string(),
            format!("Order {label} was cancelled"),
        ),
        NotificationKind::Deleted => (
            "Order deleted".to_string(),
            "An order was removed".to_string(),
        ),
    }
}
