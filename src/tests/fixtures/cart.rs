// Shared cart fixtures. Builder defaults come from json/add_item.json.

use serde::Deserialize;
use std::fs;

use crate::modules::cart::core::line_item::{CartLineItem, ProductSnapshot};
use crate::modules::cart::use_cases::mutate_cart::command::CartCommand;
use crate::shared::core::primitives::Paise;

const DEFAULT_PRICE: Paise = 1_000;

pub fn make_snapshot(product_id: &str, unit_price: Paise) -> ProductSnapshot {
    ProductSnapshot {
        product_id: product_id.to_string(),
        name: format!("Product {product_id}"),
        unit_price,
        image_url: None,
    }
}

pub fn make_line(id: &str, product_id: &str, size: Option<&str>, quantity: u32) -> CartLineItem {
    CartLineItem {
        id: id.to_string(),
        product_id: product_id.to_string(),
        size: size.map(str::to_string),
        quantity,
        product: make_snapshot(product_id, DEFAULT_PRICE),
    }
}

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct AddItemDto {
    pub line_id: String,
    pub product_id: String,
    pub size: Option<String>,
    pub quantity: i64,
    pub product: ProductSnapshot,
}

pub struct AddItemBuilder {
    inner: AddItemDto,
}

impl Default for AddItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AddItemBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/add_item.json").unwrap();
        let inner: AddItemDto = serde_json::from_str(&json_str).unwrap();
        Self { inner }
    }

    pub fn line_id(mut self, v: impl Into<String>) -> Self {
        self.inner.line_id = v.into();
        self
    }

    /// Moves the snapshot along with the product so the pair stays consistent.
    pub fn product_id(mut self, v: impl Into<String>) -> Self {
        let product_id = v.into();
        self.inner.product.product_id = product_id.clone();
        self.inner.product_id = product_id;
        self
    }

    pub fn size(mut self, v: Option<&str>) -> Self {
        self.inner.size = v.map(str::to_string);
        self
    }

    pub fn quantity(mut self, v: i64) -> Self {
        self.inner.quantity = v;
        self
    }

    pub fn product(mut self, v: ProductSnapshot) -> Self {
        self.inner.product = v;
        self
    }

    pub fn build(self) -> CartCommand {
        CartCommand::AddItem {
            line_id: self.inner.line_id,
            product_id: self.inner.product_id,
            size: self.inner.size,
            quantity: self.inner.quantity,
            product: self.inner.product,
        }
    }
}

#[cfg(test)]
mod add_item_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let CartCommand::AddItem {
            line_id,
            product_id,
            size,
            quantity,
            product,
        } = AddItemBuilder::default().build()
        else {
            panic!("expected an add command");
        };
        assert_eq!(line_id, "line-fixed-0001");
        assert_eq!(product_id, "ring-01");
        assert_eq!(size.as_deref(), Some("M"));
        assert_eq!(quantity, 2);
        assert_eq!(product.unit_price, 1_000);
        assert_eq!(product.image_url, None);
    }

    #[rstest]
    fn product_id_keeps_the_snapshot_in_step() {
        let CartCommand::AddItem {
            product_id,
            product,
            ..
        } = AddItemBuilder::new().product_id("chain-01").build()
        else {
            panic!("expected an add command");
        };
        assert_eq!(product_id, "chain-01");
        assert_eq!(product.product_id, "chain-01");
    }
}
