use crate::modules::cart::core::line_item::ProductSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    AddItem {
        /// Used only when no line exists yet for `(product_id, size)`.
        line_id: String,
        product_id: String,
        size: Option<String>,
        quantity: i64,
        product: ProductSnapshot,
    },
    UpdateQuantity {
        line_id: String,
        quantity: i64,
    },
    RemoveItem {
        line_id: String,
    },
    Clear,
    OpenDrawer,
    CloseDrawer,
}
