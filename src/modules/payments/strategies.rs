// Closed set of checkout strategies, one per gateway.
//
// Each strategy owns the two gateway-specific steps of a retry:
// - `initiate`: ask the backend for a fresh session and validate its fields.
// - `open_checkout`: hand the session to the gateway SDK (modal or redirect).

use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::payments::adapters::outbound::checkout_sdk::{
    CashfreeCheckout, CashfreeRedirect, ModalResult, RazorpayCheckout, RazorpayOptions,
};
use crate::modules::payments::adapters::outbound::payment_backend::{
    InitiatePaymentResponse, PaymentBackend,
};
use crate::modules::payments::core::gateway::{
    Gateway, GatewayCheckout, GatewayResponse, PaymentSession,
};
use crate::modules::payments::use_cases::retry_payment::handler::RetryError;

const DEFAULT_REJECTION: &str = "This order cannot be paid right now";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Completed(GatewayResponse),
    Dismissed,
    Redirected,
}

#[async_trait]
pub trait CheckoutStrategy: Send + Sync {
    fn gateway(&self) -> Gateway;

    /// Whether the gateway SDK has finished loading.
    fn is_ready(&self) -> bool;

    async fn initiate(&self, order_id: &str) -> Result<PaymentSession, RetryError>;

    async fn open_checkout(&self, session: &PaymentSession) -> Result<CheckoutOutcome, RetryError>;
}

async fn request_session(
    backend: &dyn PaymentBackend,
    order_id: &str,
    gateway: Gateway,
) -> Result<InitiatePaymentResponse, RetryError> {
    let response = backend
        .initiate_payment(order_id, gateway)
        .await
        .map_err(|e| RetryError::Backend(e.to_string()))?;
    if !response.success {
        return Err(RetryError::PaymentNotAllowed(
            response.error.unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
        ));
    }
    if let Some(issued_for) = response.gateway
        && issued_for != gateway
    {
        return Err(RetryError::InvalidSession(format!(
            "session issued for {issued_for}, expected {gateway}"
        )));
    }
    Ok(response)
}

fn required(field: Option<String>, name: &str) -> Result<String, RetryError> {
    field
        .filter(|value| !value.is_empty())
        .ok_or_else(|| RetryError::InvalidSession(format!("missing {name}")))
}

pub struct RazorpayStrategy {
    backend: Arc<dyn PaymentBackend>,
    sdk: Arc<dyn RazorpayCheckout>,
    merchant_name: String,
}

impl RazorpayStrategy {
    pub fn new(
        backend: Arc<dyn PaymentBackend>,
        sdk: Arc<dyn RazorpayCheckout>,
        merchant_name: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            sdk,
            merchant_name: merchant_name.into(),
        }
    }
}

#[async_trait]
impl CheckoutStrategy for RazorpayStrategy {
    fn gateway(&self) -> Gateway {
        Gateway::Razorpay
    }

    fn is_ready(&self) -> bool {
        self.sdk.is_loaded()
    }

    async fn initiate(&self, order_id: &str) -> Result<PaymentSession, RetryError> {
        let response = request_session(&*self.backend, order_id, Gateway::Razorpay).await?;
        let amount = response
            .amount
            .ok_or_else(|| RetryError::InvalidSession("missing amount".into()))?;
        Ok(PaymentSession {
            order_id: order_id.to_string(),
            gateway: Gateway::Razorpay,
            checkout: GatewayCheckout::Razorpay {
                key_id: required(response.key_id, "key id")?,
                gateway_order_id: required(response.razorpay_order_id, "razorpay order id")?,
                amount,
                currency: response.currency.unwrap_or_else(|| "INR".to_string()),
            },
        })
    }

    async fn open_checkout(&self, session: &PaymentSession) -> Result<CheckoutOutcome, RetryError> {
        let GatewayCheckout::Razorpay {
            key_id,
            gateway_order_id,
            amount,
            currency,
        } = &session.checkout
        else {
            return Err(RetryError::InvalidSession(
                "not a razorpay session".into(),
            ));
        };
        let options = RazorpayOptions {
            key_id: key_id.clone(),
            gateway_order_id: gateway_order_id.clone(),
            amount: *amount,
            currency: currency.clone(),
            merchant_name: self.merchant_name.clone(),
            description: format!("Payment for order {}", session.order_id),
        };
        let result = self
            .sdk
            .open(options)
            .await
            .map_err(|e| RetryError::Checkout {
                gateway: Gateway::Razorpay,
                message: e.to_string(),
            })?;
        Ok(match result {
            ModalResult::Completed(response) => CheckoutOutcome::Completed(response),
            ModalResult::Dismissed => CheckoutOutcome::Dismissed,
        })
    }
}

pub struct CashfreeStrategy {
    backend: Arc<dyn PaymentBackend>,
    sdk: Arc<dyn CashfreeCheckout>,
    return_url: String,
}

impl CashfreeStrategy {
    pub fn new(
        backend: Arc<dyn PaymentBackend>,
        sdk: Arc<dyn CashfreeCheckout>,
        return_url: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            sdk,
            return_url: return_url.into(),
        }
    }
}

#[async_trait]
impl CheckoutStrategy for CashfreeStrategy {
    fn gateway(&self) -> Gateway {
        Gateway::Cashfree
    }

    fn is_ready(&self) -> bool {
        self.sdk.is_loaded()
    }

    async fn initiate(&self, order_id: &str) -> Result<PaymentSession, RetryError> {
        let response = request_session(&*self.backend, order_id, Gateway::Cashfree).await?;
        Ok(PaymentSession {
            order_id: order_id.to_string(),
            gateway: Gateway::Cashfree,
            checkout: GatewayCheckout::Cashfree {
                payment_session_id: required(response.payment_session_id, "payment session id")?,
                environment: response
                    .environment
                    .unwrap_or_else(|| "production".to_string()),
            },
        })
    }

    async fn open_checkout(&self, session: &PaymentSession) -> Result<CheckoutOutcome, RetryError> {
        let GatewayCheckout::Cashfree {
            payment_session_id,
            environment,
        } = &session.checkout
        else {
            return Err(RetryError::InvalidSession(
                "not a cashfree session".into(),
            ));
        };
        self.sdk
            .redirect(CashfreeRedirect {
                payment_session_id: payment_session_id.clone(),
                environment: environment.clone(),
                return_url: format!("{}?order_id={}", self.return_url, session.order_id),
            })
            .await
            .map_err(|e| RetryError::Checkout {
                gateway: Gateway::Cashfree,
                message: e.to_string(),
            })?;
        Ok(CheckoutOutcome::Redirected)
    }
}

#[derive(Clone)]
pub struct GatewayStrategies {
    razorpay: Arc<RazorpayStrategy>,
    cashfree: Arc<CashfreeStrategy>,
}

impl GatewayStrategies {
    pub fn new(razorpay: RazorpayStrategy, cashfree: CashfreeStrategy) -> Self {
        Self {
            razorpay: Arc::new(razorpay),
            cashfree: Arc::new(cashfree),
        }
    }

    pub fn for_gateway(&self, gateway: Gateway) -> &dyn CheckoutStrategy {
        match gateway {
            Gateway::Razorpay => &*self.razorpay,
            Gateway::Cashfree => &*self.cashfree,
        }
    }
}
