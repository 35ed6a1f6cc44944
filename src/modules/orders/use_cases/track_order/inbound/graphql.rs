use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::orders::core::order::{Order, OrderItem};
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlOrderItem {
    pub product_id: String,
    pub product_name: String,
    pub size: Option<String>,
    pub quantity: u32,
    pub price: i64,
}

impl From<OrderItem> for GqlOrderItem {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name,
            size: item.size,
            quantity: item.quantity,
            price: item.price,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlOrder {
    pub id: String,
    pub order_number: String,
    pub status: String,
    pub total: i64,
    pub subtotal: i64,
    pub shipping: i64,
    pub items: Vec<GqlOrderItem>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Order> for GqlOrder {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            order_number: order.order_number,
            status: order.status.to_string(),
            total: order.total,
            subtotal: order.subtotal,
            shipping: order.shipping,
            items: order.items.into_iter().map(Into::into).collect(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

#[derive(Default)]
pub struct OrderQuery;

#[Object]
impl OrderQuery {
    async fn order(&self, context: &Context<'_>, id: String) -> GqlResult<Option<GqlOrder>> {
        let state = context.data_unchecked::<AppState>();
        let order = state
            .orders
            .get_order_by_id(&id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(order.map(Into::into))
    }
}
