use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::Paise;

/// Last-known catalog data for a product, captured when it was put in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub product_id: String,
    pub name: String,
    pub unit_price: Paise,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: String,
    pub product_id: String,
    pub size: Option<String>,
    pub quantity: u32,
    pub product: ProductSnapshot,
}

impl CartLineItem {
    pub fn is_variant(&self, product_id: &str, size: Option<&str>) -> bool {
        self.product_id == product_id && self.size.as_deref() == size
    }

    pub fn line_total(&self) -> Paise {
        self.product.unit_price.saturating_mul(Paise::from(self.quantity))
    }

    /// `None` when the total does not fit in `Paise`.
    pub fn checked_line_total(&self) -> Option<Paise> {
        self.product.unit_price.checked_mul(Paise::from(self.quantity))
    }
}
