use crate::modules::payments::core::gateway::Gateway;

pub const CHECKOUT_DISMISSED_NOTICE: &str = "Payment window closed";
pub const PAYMENT_VERIFIED_NOTICE: &str = "Payment successful";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryEvent {
    Started { gateway: Gateway, generation: u64 },
    SessionCreated { gateway: Gateway },
    CheckoutCompleted,
    CheckoutDismissed,
    Redirected { order_id: String },
    Verified { order_id: String },
    Failed { message: String },
    Reset,
}
