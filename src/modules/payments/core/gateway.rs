use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::shared::core::primitives::Paise;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, async_graphql::Enum,
)]
#[serde(rename_all = "lowercase")]
pub enum Gateway {
    Razorpay,
    Cashfree,
}

impl Gateway {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gateway::Razorpay => "razorpay",
            Gateway::Cashfree => "cashfree",
        }
    }
}

impl fmt::Display for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown payment gateway: {0}")]
pub struct UnknownGateway(pub String);

impl FromStr for Gateway {
    type Err = UnknownGateway;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "razorpay" => Ok(Gateway::Razorpay),
            "cashfree" => Ok(Gateway::Cashfree),
            _ => Err(UnknownGateway(value.to_string())),
        }
    }
}

/// What the hosted checkout needs to open, per gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCheckout {
    Razorpay {
        key_id: String,
        gateway_order_id: String,
        amount: Paise,
        currency: String,
    },
    Cashfree {
        payment_session_id: String,
        environment: String,
    },
}

/// A single-use session created for one retry attempt. Never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSession {
    pub order_id: String,
    pub gateway: Gateway,
    pub checkout: GatewayCheckout,
}

impl PaymentSession {
    pub fn session_token(&self) -> &str {
        match &self.checkout {
            GatewayCheckout::Razorpay {
                gateway_order_id, ..
            } => gateway_order_id,
            GatewayCheckout::Cashfree {
                payment_session_id, ..
            } => payment_session_id,
        }
    }
}

/// Fields handed back by the hosted checkout on completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub payment_id: String,
    pub gateway_order_id: String,
    pub signature: String,
}
