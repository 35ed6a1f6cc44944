use crate::modules::payments::core::events::{
    CHECKOUT_DISMISSED_NOTICE, PAYMENT_VERIFIED_NOTICE, RetryEvent,
};
use crate::modules::payments::core::state::{Notice, RetryState, RetryStatus};

pub fn evolve(status: RetryStatus, event: RetryEvent) -> RetryStatus {
    match event {
        RetryEvent::Started {
            gateway,
            generation,
        } => RetryStatus {
            state: RetryState::Initiating { gateway },
            generation,
            notice: None,
            ..status
        },
        RetryEvent::SessionCreated { gateway } => RetryStatus {
            state: RetryState::AwaitingGateway { gateway },
            ..status
        },
        RetryEvent::CheckoutCompleted => RetryStatus {
            state: RetryState::Verifying,
            ..status
        },
        RetryEvent::CheckoutDismissed => RetryStatus {
            state: RetryState::Idle,
            notice: Some(Notice::info(CHECKOUT_DISMISSED_NOTICE)),
            ..status
        },
        RetryEvent::Redirected { order_id } => RetryStatus {
            state: RetryState::Redirected { order_id },
            ..status
        },
        RetryEvent::Verified { order_id } => RetryStatus {
            state: RetryState::Success { order_id },
            notice: Some(Notice::info(PAYMENT_VERIFIED_NOTICE)),
            ..status
        },
        RetryEvent::Failed { message } => RetryStatus {
            state: RetryState::Idle,
            notice: Some(Notice::error(message)),
            ..status
        },
        RetryEvent::Reset => RetryStatus {
            state: RetryState::Idle,
            generation: status.generation + 1,
            notice: None,
            ..status
        },
    }
}
