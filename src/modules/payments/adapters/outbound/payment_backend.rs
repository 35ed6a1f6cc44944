use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::payments::core::gateway::{Gateway, GatewayResponse};
use crate::shared::core::primitives::Paise;

/// Backend reply to a payment initiation. Which optional fields are set
/// depends on the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiatePaymentResponse {
    pub success: bool,
    pub gateway: Option<Gateway>,
    pub key_id: Option<String>,
    pub razorpay_order_id: Option<String>,
    pub amount: Option<Paise>,
    pub currency: Option<String>,
    pub payment_session_id: Option<String>,
    pub environment: Option<String>,
    pub error: Option<String>,
}

impl InitiatePaymentResponse {
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyPaymentResponse {
    pub success: bool,
    pub error: Option<String>,
}

#[async_trait]
pub trait PaymentBackend: Send + Sync {
    async fn initiate_payment(
        &self,
        order_id: &str,
        gateway: Gateway,
    ) -> anyhow::Result<InitiatePaymentResponse>;

    async fn verify_payment(
        &self,
        order_id: &str,
        response: &GatewayResponse,
    ) -> anyhow::Result<VerifyPaymentResponse>;
}
