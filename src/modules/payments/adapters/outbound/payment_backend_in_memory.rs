// In memory payment backend.
//
// Purpose
// - Stand in for the hosted backend's initiate/verify payment functions.
//
// Responsibilities
// - Issue a fresh gateway session for every initiation.
// - Refuse orders that are not awaiting payment.
// - Verify against the most recently issued session only, then mark the order paid.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

use crate::modules::payments::adapters::outbound::payment_backend::{
    InitiatePaymentResponse, PaymentBackend, VerifyPaymentResponse,
};
use crate::modules::payments::core::gateway::{Gateway, GatewayResponse};
use crate::shared::core::primitives::Paise;

pub const TEST_KEY_ID: &str = "rzp_test_storefront";

pub fn expected_signature(gateway_order_id: &str, payment_id: &str) -> String {
    format!("sig:{gateway_order_id}|{payment_id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PaymentOrderState {
    Pending,
    Paid,
}

#[derive(Debug, Clone)]
struct PaymentOrder {
    amount: Paise,
    state: PaymentOrderState,
    issued: Option<String>,
}

#[derive(Default)]
pub struct InMemoryPaymentBackend {
    orders: RwLock<HashMap<String, PaymentOrder>>,
    attempts: AtomicU64,
    delay_verify_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryPaymentBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_verify_ms(&self, ms: u64) {
        self.delay_verify_ms.store(ms, Ordering::SeqCst);
    }

    pub async fn add_pending_order(&self, order_id: impl Into<String>, amount: Paise) {
        self.orders.write().await.insert(
            order_id.into(),
            PaymentOrder {
                amount,
                state: PaymentOrderState::Pending,
                issued: None,
            },
        );
    }

    pub async fn is_paid(&self, order_id: &str) -> bool {
        self.orders
            .read()
            .await
            .get(order_id)
            .is_some_and(|o| o.state == PaymentOrderState::Paid)
    }

    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Payment backend offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl PaymentBackend for InMemoryPaymentBackend {
    async fn initiate_payment(
        &self,
        order_id: &str,
        gateway: Gateway,
    ) -> anyhow::Result<InitiatePaymentResponse> {
        self.ensure_online()?;
        let mut orders = self.orders.write().await;
        let Some(order) = orders.get_mut(order_id) else {
            return Ok(InitiatePaymentResponse::rejected("Order not found"));
        };
        if order.state != PaymentOrderState::Pending {
            return Ok(InitiatePaymentResponse::rejected(
                "Order is not awaiting payment",
            ));
        }

        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        let response = match gateway {
            Gateway::Razorpay => {
                let gateway_order_id = format!("order_{order_id}_{attempt}");
                order.issued = Some(gateway_order_id.clone());
                InitiatePaymentResponse {
                    success: true,
                    gateway: Some(gateway),
                    key_id: Some(TEST_KEY_ID.to_string()),
                    razorpay_order_id: Some(gateway_order_id),
                    amount: Some(order.amount),
                    currency: Some("INR".to_string()),
                    ..InitiatePaymentResponse::default()
                }
            }
            Gateway::Cashfree => {
                let payment_session_id = format!("session_{order_id}_{attempt}");
                order.issued = Some(payment_session_id.clone());
                InitiatePaymentResponse {
                    success: true,
                    gateway: Some(gateway),
                    payment_session_id: Some(payment_session_id),
                    environment: Some("sandbox".to_string()),
                    ..InitiatePaymentResponse::default()
                }
            }
        };
        tracing::debug!(%order_id, %gateway, attempt, "payment session issued");
        Ok(response)
    }

    async fn verify_payment(
        &self,
        order_id: &str,
        response: &GatewayResponse,
    ) -> anyhow::Result<VerifyPaymentResponse> {
        let delay = self.delay_verify_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        self.ensure_online()?;

        let mut orders = self.orders.write().await;
        let Some(order) = orders.get_mut(order_id) else {
            return Ok(VerifyPaymentResponse {
                success: false,
                error: Some("Order not found".into()),
            });
        };
        let issued = order.issued.as_deref() == Some(response.gateway_order_id.as_str());
        let signed = response.signature
            == expected_signature(&response.gateway_order_id, &response.payment_id);
        if !issued || !signed {
            return Ok(VerifyPaymentResponse {
                success: false,
                error: Some("Payment verification failed".into()),
            });
        }
        order.state = PaymentOrderState::Paid;
        order.issued = None;
        Ok(VerifyPaymentResponse {
            success: true,
            error: None,
        })
    }
}
