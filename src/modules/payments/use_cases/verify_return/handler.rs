// Verification for a buyer coming back from a redirect-based checkout.
//
// No orchestrator state is involved: the page that started the attempt is gone.

use crate::modules::payments::adapters::outbound::payment_backend::PaymentBackend;
use crate::modules::payments::core::gateway::GatewayResponse;
use crate::modules::payments::use_cases::retry_payment::handler::{RetryError, verify};

pub async fn verify_return(
    backend: &dyn PaymentBackend,
    order_id: &str,
    response: &GatewayResponse,
) -> Result<(), RetryError> {
    let result = verify(backend, order_id, response).await;
    match &result {
        Ok(()) => tracing::info!(%order_id, "returning payment verified"),
        Err(error) => tracing::warn!(%order_id, %error, "returning payment not verified"),
    }
    result
}
