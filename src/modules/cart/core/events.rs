use serde::{Deserialize, Serialize};

use crate::modules::cart::core::line_item::{CartLineItem, ProductSnapshot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CartEvent {
    LineAdded {
        line: CartLineItem,
    },
    LineMerged {
        line_id: String,
        quantity: u32,
        product: ProductSnapshot,
    },
    QuantityChanged {
        line_id: String,
        quantity: u32,
    },
    LineRemoved {
        line_id: String,
    },
    Cleared,
    DrawerOpened,
    DrawerClosed,
}
