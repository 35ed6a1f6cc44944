// Pure decision function for cart mutations.
//
// Purpose
// - Validate a command against the current cart and produce events plus persistence intents.
//
// Invariants
// - At most one line per (product_id, size).
// - A line never holds a quantity below 1; asking for less removes it.
// - Prices are never negative and the cart subtotal always fits in `Paise`.

use crate::modules::cart::core::events::CartEvent;
use crate::modules::cart::core::intents::CartIntent;
use crate::modules::cart::core::line_item::{CartLineItem, ProductSnapshot};
use crate::modules::cart::core::state::CartState;
use crate::modules::cart::use_cases::mutate_cart::command::CartCommand;
use crate::modules::cart::use_cases::mutate_cart::decision::{DecideError, Decision};

pub fn decide(state: &CartState, command: CartCommand) -> Decision {
    match command {
        CartCommand::AddItem {
            line_id,
            product_id,
            size,
            quantity,
            product,
        } => decide_add(state, line_id, product_id, size, quantity, product),
        CartCommand::UpdateQuantity { line_id, quantity } => {
            decide_update(state, &line_id, quantity)
        }
        CartCommand::RemoveItem { line_id } => decide_remove(state, &line_id),
        CartCommand::Clear => Decision::Accepted {
            events: vec![CartEvent::Cleared],
            intents: vec![CartIntent::ClearCart {
                session_id: state.session_id.clone(),
            }],
        },
        CartCommand::OpenDrawer => Decision::Accepted {
            events: vec![CartEvent::DrawerOpened],
            intents: Vec::new(),
        },
        CartCommand::CloseDrawer => Decision::Accepted {
            events: vec![CartEvent::DrawerClosed],
            intents: Vec::new(),
        },
    }
}

fn decide_add(
    state: &CartState,
    line_id: String,
    product_id: String,
    size: Option<String>,
    quantity: i64,
    product: ProductSnapshot,
) -> Decision {
    if product.product_id != product_id {
        return Decision::Rejected {
            reason: DecideError::SnapshotMismatch {
                product_id,
                snapshot: product.product_id,
            },
        };
    }
    if product.unit_price < 0 {
        return Decision::Rejected {
            reason: DecideError::InvalidPrice(product.unit_price),
        };
    }
    let Some(quantity) = to_quantity(quantity) else {
        return Decision::Rejected {
            reason: DecideError::InvalidQuantity(quantity),
        };
    };

    match state.find_variant(&product_id, size.as_deref()) {
        Some(existing) => {
            let Some(merged) = existing.quantity.checked_add(quantity) else {
                return Decision::Rejected {
                    reason: DecideError::QuantityOverflow {
                        line_id: existing.id.clone(),
                    },
                };
            };
            let line = CartLineItem {
                quantity: merged,
                product: product.clone(),
                ..existing.clone()
            };
            if let Some(rejected) = reject_overflowing_total(state, &line) {
                return rejected;
            }
            Decision::Accepted {
                events: vec![CartEvent::LineMerged {
                    line_id: existing.id.clone(),
                    quantity: merged,
                    product,
                }],
                intents: vec![CartIntent::UpsertLine {
                    session_id: state.session_id.clone(),
                    line,
                }],
            }
        }
        None => {
            let line = CartLineItem {
                id: line_id,
                product_id,
                size,
                quantity,
                product,
            };
            if let Some(rejected) = reject_overflowing_total(state, &line) {
                return rejected;
            }
            Decision::Accepted {
                events: vec![CartEvent::LineAdded { line: line.clone() }],
                intents: vec![CartIntent::UpsertLine {
                    session_id: state.session_id.clone(),
                    line,
                }],
            }
        }
    }
}

fn decide_update(state: &CartState, line_id: &str, quantity: i64) -> Decision {
    if quantity < 1 {
        return decide_remove(state, line_id);
    }
    let Some(existing) = state.find_line(line_id) else {
        return Decision::unchanged();
    };
    let Some(quantity) = to_quantity(quantity) else {
        return Decision::Rejected {
            reason: DecideError::QuantityOverflow {
                line_id: line_id.to_string(),
            },
        };
    };
    let line = CartLineItem {
        quantity,
        ..existing.clone()
    };
    if let Some(rejected) = reject_overflowing_total(state, &line) {
        return rejected;
    }
    Decision::Accepted {
        events: vec![CartEvent::QuantityChanged {
            line_id: line_id.to_string(),
            quantity,
        }],
        intents: vec![CartIntent::UpsertLine {
            session_id: state.session_id.clone(),
            line,
        }],
    }
}

fn reject_overflowing_total(state: &CartState, line: &CartLineItem) -> Option<Decision> {
    match state.checked_subtotal_with(line) {
        Some(_) => None,
        None => Some(Decision::Rejected {
            reason: DecideError::AmountOverflow {
                line_id: line.id.clone(),
            },
        }),
    }
}

fn decide_remove(state: &CartState, line_id: &str) -> Decision {
    if state.find_line(line_id).is_none() {
        return Decision::unchanged();
    }
    Decision::Accepted {
        events: vec![CartEvent::LineRemoved {
            line_id: line_id.to_string(),
        }],
        intents: vec![CartIntent::DeleteLine {
            session_id: state.session_id.clone(),
            line_id: line_id.to_string(),
        }],
    }
}

fn to_quantity(quantity: i64) -> Option<u32> {
    if quantity < 1 {
        return None;
    }
    u32::try_from(quantity).ok()
}
