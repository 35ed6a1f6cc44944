use crate::modules::cart::core::line_item::CartLineItem;

/// Persistence work handed to the backend after local state has changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartIntent {
    UpsertLine {
        session_id: String,
        line: CartLineItem,
    },
    DeleteLine {
        session_id: String,
        line_id: String,
    },
    ClearCart {
        session_id: String,
    },
}
