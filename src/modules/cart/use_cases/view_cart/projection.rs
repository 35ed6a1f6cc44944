use serde::Serialize;

use crate::modules::cart::core::line_item::CartLineItem;
use crate::modules::cart::core::state::CartState;
use crate::shared::core::primitives::Paise;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct CartView {
    pub session_id: String,
    pub items: Vec<CartLineItem>,
    pub cart_count: u64,
    pub subtotal: Paise,
    pub is_open: bool,
}

impl From<&CartState> for CartView {
    fn from(state: &CartState) -> Self {
        Self {
            session_id: state.session_id.clone(),
            items: state.lines.clone(),
            cart_count: state.cart_count(),
            subtotal: state.subtotal(),
            is_open: state.is_open,
        }
    }
}
