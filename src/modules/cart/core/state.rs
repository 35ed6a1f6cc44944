use crate::modules::cart::core::line_item::CartLineItem;
use crate::shared::core::primitives::Paise;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartState {
    pub session_id: String,
    pub lines: Vec<CartLineItem>,
    pub is_open: bool,
}

impl CartState {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            ..Self::default()
        }
    }

    pub fn find_line(&self, line_id: &str) -> Option<&CartLineItem> {
        self.lines.iter().find(|line| line.id == line_id)
    }

    pub fn find_variant(&self, product_id: &str, size: Option<&str>) -> Option<&CartLineItem> {
        self.lines
            .iter()
            .find(|line| line.is_variant(product_id, size))
    }

    /// Derived on every call; never cached.
    pub fn cart_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn subtotal(&self) -> Paise {
        self.lines
            .iter()
            .map(CartLineItem::line_total)
            .fold(0, Paise::saturating_add)
    }

    /// Subtotal as it would be with `line` upserted by id, or `None` on overflow.
    pub fn checked_subtotal_with(&self, line: &CartLineItem) -> Option<Paise> {
        self.lines
            .iter()
            .filter(|existing| existing.id != line.id)
            .chain(std::iter::once(line))
            .try_fold(0 as Paise, |total, l| total.checked_add(l.checked_line_total()?))
    }
}
