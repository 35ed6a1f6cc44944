use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::core::primitives::Paise;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub size: Option<String>,
    pub quantity: u32,
    pub price: Paise,
}

/// Owned by the hosted backend; read here, never written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub status: OrderStatus,
    pub total: Paise,
    pub subtotal: Paise,
    pub shipping: Paise,
    pub items: Vec<OrderItem>,
    pub customer_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// The slice of an order an admin notification shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub id: String,
    pub order_number: String,
    pub status: OrderStatus,
    pub total: Paise,
    pub customer_name: Option<String>,
    pub item_names: Vec<String>,
}

impl From<&Order> for OrderSnapshot {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            order_number: order.order_number.clone(),
            status: order.status,
            total: order.total,
            customer_name: order.customer_name.clone(),
            item_names: order
                .items
                .iter()
                .map(|item| item.product_name.clone())
                .collect(),
        }
    }
}
