use async_trait::async_trait;

use crate::modules::payments::core::gateway::GatewayResponse;
use crate::shared::core::primitives::Paise;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RazorpayOptions {
    pub key_id: String,
    pub gateway_order_id: String,
    pub amount: Paise,
    pub currency: String,
    pub merchant_name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalResult {
    Completed(GatewayResponse),
    Dismissed,
}

/// Hosted modal checkout. `open` resolves when the buyer pays or closes the modal.
#[async_trait]
pub trait RazorpayCheckout: Send + Sync {
    fn is_loaded(&self) -> bool;

    async fn open(&self, options: RazorpayOptions) -> anyhow::Result<ModalResult>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashfreeRedirect {
    pub payment_session_id: String,
    pub environment: String,
    pub return_url: String,
}

/// Hosted page checkout. Control does not come back to the caller after `redirect`.
#[async_trait]
pub trait CashfreeCheckout: Send + Sync {
    fn is_loaded(&self) -> bool;

    async fn redirect(&self, redirect: CashfreeRedirect) -> anyhow::Result<()>;
}
