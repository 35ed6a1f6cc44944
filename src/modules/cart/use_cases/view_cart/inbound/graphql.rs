use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::cart::core::line_item::CartLineItem;
use crate::modules::cart::use_cases::view_cart::projection::CartView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCartLine {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub size: Option<String>,
    pub quantity: u32,
    pub unit_price: i64,
    pub line_total: i64,
    pub image_url: Option<String>,
}

impl From<CartLineItem> for GqlCartLine {
    fn from(line: CartLineItem) -> Self {
        let line_total = line.line_total();
        Self {
            id: line.id,
            product_id: line.product_id,
            product_name: line.product.name,
            size: line.size,
            quantity: line.quantity,
            unit_price: line.product.unit_price,
            line_total,
            image_url: line.product.image_url,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCart {
    pub session_id: String,
    pub items: Vec<GqlCartLine>,
    pub cart_count: u64,
    pub subtotal: i64,
    pub is_open: bool,
}

impl From<CartView> for GqlCart {
    fn from(view: CartView) -> Self {
        Self {
            session_id: view.session_id,
            items: view.items.into_iter().map(Into::into).collect(),
            cart_count: view.cart_count,
            subtotal: view.subtotal,
            is_open: view.is_open,
        }
    }
}

#[derive(Default)]
pub struct CartQuery;

#[Object]
impl CartQuery {
    async fn cart(&self, context: &Context<'_>, session_id: String) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<AppState>();
        let store = state.carts.get_or_open(&session_id).await;
        Ok(store.view().await.into())
    }
}
