use serde::{Deserialize, Serialize};

use crate::modules::orders::core::order::{Order, OrderStatus};
use crate::shared::core::primitives::Paise;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
    Insert,
    Update,
    Delete,
}

/// Row image carried by the realtime feed. Deletes usually carry the id only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub total: Option<Paise>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl OrderRecord {
    pub fn id_only(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// The key the change is known by: last update, falling back to creation.
    pub fn change_timestamp(&self) -> Option<&str> {
        self.updated_at.as_deref().or(self.created_at.as_deref())
    }
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            order_number: Some(order.order_number.clone()),
            status: Some(order.status),
            total: Some(order.total),
            created_at: Some(order.created_at.clone()),
            updated_at: Some(order.updated_at.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderChange {
    #[serde(rename = "eventType")]
    pub event_type: ChangeType,
    #[serde(default)]
    pub old: Option<OrderRecord>,
    #[serde(default)]
    pub new: Option<OrderRecord>,
}
