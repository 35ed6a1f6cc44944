use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::payments::core::gateway::Gateway;
use crate::modules::payments::core::state::RetryStatus;
use crate::modules::payments::use_cases::retry_payment::command::RetryPayment;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlRetryStatus {
    pub order_id: String,
    pub state: String,
    pub retrying: bool,
    pub verifying: bool,
    pub can_retry: bool,
    pub notice: Option<String>,
}

impl From<RetryStatus> for GqlRetryStatus {
    fn from(status: RetryStatus) -> Self {
        Self {
            state: status.state.name().to_string(),
            retrying: status.retrying(),
            verifying: status.verifying(),
            can_retry: status.can_retry(),
            notice: status.notice.map(|n| n.message),
            order_id: status.order_id,
        }
    }
}

#[derive(Default)]
pub struct PaymentQuery;

#[Object]
impl PaymentQuery {
    async fn payment_status(
        &self,
        context: &Context<'_>,
        order_id: String,
    ) -> GqlResult<GqlRetryStatus> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.payments.status(&order_id).await.into())
    }
}

#[derive(Default)]
pub struct PaymentMutation;

#[Object]
impl PaymentMutation {
    async fn retry_payment(
        &self,
        context: &Context<'_>,
        order_id: String,
        gateway: Gateway,
    ) -> GqlResult<GqlRetryStatus> {
        let state = context.data_unchecked::<AppState>();
        let status = state
            .payments
            .retry(RetryPayment { order_id, gateway })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(status.into())
    }

    async fn reset_payment(
        &self,
        context: &Context<'_>,
        order_id: String,
    ) -> GqlResult<GqlRetryStatus> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.payments.reset(&order_id).await.into())
    }
}
