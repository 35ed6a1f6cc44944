use crate::modules::orders::core::order::{Order, OrderItem, OrderStatus};
use crate::shared::core::primitives::Paise;

const DEFAULT_TIMESTAMP: &str = "2026-01-01T09:00:00.000Z";
const DEFAULT_PRICE: Paise = 129_900;

pub struct OrderBuilder {
    inner: Order,
}

#[allow(dead_code)]
impl OrderBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            inner: Order {
                order_number: format!("JW-{id}"),
                id,
                status: OrderStatus::Pending,
                total: DEFAULT_PRICE,
                subtotal: DEFAULT_PRICE,
                shipping: 0,
                items: vec![OrderItem {
                    product_id: "ring-01".to_string(),
                    product_name: "Solitaire ring".to_string(),
                    size: Some("12".to_string()),
                    quantity: 1,
                    price: DEFAULT_PRICE,
                }],
                customer_name: Some("Asha Rao".to_string()),
                created_at: DEFAULT_TIMESTAMP.to_string(),
                updated_at: DEFAULT_TIMESTAMP.to_string(),
            },
        }
    }

    pub fn order_number(mut self, v: impl Into<String>) -> Self {
        self.inner.order_number = v.into();
        self
    }

    pub fn customer_name(mut self, v: impl Into<String>) -> Self {
        self.inner.customer_name = Some(v.into());
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.inner.customer_name = None;
        self
    }

    pub fn status(mut self, v: OrderStatus) -> Self {
        self.inner.status = v;
        self
    }

    /// Sets both `created_at` and `updated_at`, like a freshly inserted row.
    pub fn at(mut self, v: impl Into<String>) -> Self {
        let ts = v.into();
        self.inner.created_at = ts.clone();
        self.inner.updated_at = ts;
        self
    }

    pub fn updated_at(mut self, v: impl Into<String>) -> Self {
        self.inner.updated_at = v.into();
        self
    }

    pub fn items(mut self, v: Vec<OrderItem>) -> Self {
        self.inner.items = v;
        self
    }

    pub fn build(self) -> Order {
        self.inner
    }
}
