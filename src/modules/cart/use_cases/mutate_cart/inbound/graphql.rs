use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::cart::core::line_item::ProductSnapshot;
use crate::modules::cart::use_cases::view_cart::inbound::graphql::GqlCart;
use crate::shell::state::AppState;

#[derive(async_graphql::InputObject)]
pub struct GqlProductSnapshot {
    pub product_id: String,
    pub name: String,
    pub unit_price: i64,
    pub image_url: Option<String>,
}

impl From<GqlProductSnapshot> for ProductSnapshot {
    fn from(input: GqlProductSnapshot) -> Self {
        Self {
            product_id: input.product_id,
            name: input.name,
            unit_price: input.unit_price,
            image_url: input.image_url,
        }
    }
}

#[derive(Default)]
pub struct CartMutation;

#[Object]
impl CartMutation {
    async fn add_to_cart(
        &self,
        context: &Context<'_>,
        session_id: String,
        product_id: String,
        size: Option<String>,
        quantity: i64,
        product: GqlProductSnapshot,
    ) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<AppState>();
        let store = state.carts.get_or_open(&session_id).await;
        let view = store
            .add_item(product_id, size, quantity, product.into())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.into())
    }

    async fn update_cart_quantity(
        &self,
        context: &Context<'_>,
        session_id: String,
        line_id: String,
        quantity: i64,
    ) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<AppState>();
        let store = state.carts.get_or_open(&session_id).await;
        let view = store
            .update_quantity(line_id, quantity)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.into())
    }

    async fn remove_cart_item(
        &self,
        context: &Context<'_>,
        session_id: String,
        line_id: String,
    ) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<AppState>();
        let store = state.carts.get_or_open(&session_id).await;
        let view = store
            .remove_item(line_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.into())
    }
}
