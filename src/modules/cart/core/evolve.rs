use crate::modules::cart::core::events::CartEvent;
use crate::modules::cart::core::state::CartState;

pub fn evolve(mut state: CartState, event: CartEvent) -> CartState {
    match event {
        CartEvent::LineAdded { line } => {
            if state.find_line(&line.id).is_none() {
                state.lines.push(line);
            }
        }
        CartEvent::LineMerged {
            line_id,
            quantity,
            product,
        } => {
            if let Some(line) = state.lines.iter_mut().find(|l| l.id == line_id) {
                line.quantity = quantity;
                line.product = product;
            }
        }
        CartEvent::QuantityChanged { line_id, quantity } => {
            if let Some(line) = state.lines.iter_mut().find(|l| l.id == line_id) {
                line.quantity = quantity;
            }
        }
        CartEvent::LineRemoved { line_id } => state.lines.retain(|l| l.id != line_id),
        CartEvent::Cleared => state.lines.clear(),
        CartEvent::DrawerOpened => state.is_open = true,
        CartEvent::DrawerClosed => state.is_open = false,
    }
    state
}
