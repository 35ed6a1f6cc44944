use crate::modules::cart::core::events::CartEvent;
use crate::modules::cart::core::intents::CartIntent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(i64),

    #[error("quantity for line {line_id} would exceed the supported maximum")]
    QuantityOverflow { line_id: String },

    #[error("price for line {line_id} would push the cart total past the supported maximum")]
    AmountOverflow { line_id: String },

    #[error("unit price must not be negative, got {0}")]
    InvalidPrice(i64),

    #[error("product snapshot {snapshot} does not describe product {product_id}")]
    SnapshotMismatch {
        product_id: String,
        snapshot: String,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted {
        events: Vec<CartEvent>,
        intents: Vec<CartIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}

impl Decision {
    pub fn unchanged() -> Self {
        Decision::Accepted {
            events: Vec::new(),
            intents: Vec::new(),
        }
    }
}
