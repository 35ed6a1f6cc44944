// Payment retry orchestrator for a single order.
//
// Responsibilities
// - Drive one explicit attempt: session, checkout, verification.
// - Turn every failure into state (Idle + notice); never retry on its own.
// - Drop results from an attempt the caller has already moved on from.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

use crate::modules::payments::adapters::outbound::payment_backend::PaymentBackend;
use crate::modules::payments::core::events::RetryEvent;
use crate::modules::payments::core::evolve::evolve;
use crate::modules::payments::core::gateway::{Gateway, GatewayResponse};
use crate::modules::payments::core::state::RetryStatus;
use crate::modules::payments::strategies::{CheckoutOutcome, CheckoutStrategy, GatewayStrategies};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RetryError {
    #[error("A payment attempt is already in progress")]
    AlreadyInProgress,

    #[error("{0} checkout is still loading, please wait a moment and try again")]
    GatewayNotReady(Gateway),

    #[error("{0}")]
    PaymentNotAllowed(String),

    #[error("payment session is incomplete: {0}")]
    InvalidSession(String),

    #[error("payment service unavailable: {0}")]
    Backend(String),

    #[error("{gateway} checkout failed: {message}")]
    Checkout { gateway: Gateway, message: String },

    #[error("{0}")]
    VerificationRejected(String),
}

const DEFAULT_VERIFICATION_FAILURE: &str = "Payment verification failed";

/// Shared by the retry flow and the return-redirect verification.
pub async fn verify(
    backend: &dyn PaymentBackend,
    order_id: &str,
    response: &GatewayResponse,
) -> Result<(), RetryError> {
    let verdict = backend
        .verify_payment(order_id, response)
        .await
        .map_err(|e| RetryError::Backend(e.to_string()))?;
    if !verdict.success {
        return Err(RetryError::VerificationRejected(
            verdict
                .error
                .unwrap_or_else(|| DEFAULT_VERIFICATION_FAILURE.to_string()),
        ));
    }
    Ok(())
}

pub struct PaymentRetryOrchestrator {
    order_id: String,
    strategies: GatewayStrategies,
    backend: Arc<dyn PaymentBackend>,
    status: watch::Sender<RetryStatus>,
}

impl PaymentRetryOrchestrator {
    pub fn new(
        order_id: impl Into<String>,
        strategies: GatewayStrategies,
        backend: Arc<dyn PaymentBackend>,
    ) -> Self {
        let order_id = order_id.into();
        let (status, _) = watch::channel(RetryStatus::new(order_id.clone()));
        Self {
            order_id,
            strategies,
            backend,
            status,
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn status(&self) -> RetryStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RetryStatus> {
        self.status.subscribe()
    }

    pub async fn retry(&self, gateway: Gateway) -> Result<RetryStatus, RetryError> {
        let generation = self.begin(gateway)?;
        tracing::info!(order_id = %self.order_id, %gateway, generation, "payment retry started");

        let strategy = self.strategies.for_gateway(gateway);
        match self.attempt(strategy, generation).await {
            Ok(()) => Ok(self.status()),
            Err(error) => {
                let message = error.to_string();
                if self.apply_if_current(generation, RetryEvent::Failed { message }) {
                    tracing::warn!(order_id = %self.order_id, %gateway, %error, "payment retry failed");
                    Err(error)
                } else {
                    tracing::debug!(order_id = %self.order_id, %error, "stale payment failure ignored");
                    Ok(self.status())
                }
            }
        }
    }

    /// Back to `Idle` from any state. Anything still in flight lands on an
    /// old generation and is ignored.
    pub fn reset(&self) -> RetryStatus {
        self.status
            .send_modify(|status| *status = evolve(status.clone(), RetryEvent::Reset));
        self.status()
    }

    fn begin(&self, gateway: Gateway) -> Result<u64, RetryError> {
        let mut started = None;
        self.status.send_if_modified(|status| {
            if !status.can_retry() {
                return false;
            }
            let generation = status.generation + 1;
            *status = evolve(
                status.clone(),
                RetryEvent::Started {
                    gateway,
                    generation,
                },
            );
            started = Some(generation);
            true
        });
        started.ok_or(RetryError::AlreadyInProgress)
    }

    async fn attempt(
        &self,
        strategy: &dyn CheckoutStrategy,
        generation: u64,
    ) -> Result<(), RetryError> {
        let gateway = strategy.gateway();
        if !strategy.is_ready() {
            return Err(RetryError::GatewayNotReady(gateway));
        }

        let session = strategy.initiate(&self.order_id).await?;
        if !self.apply_if_current(generation, RetryEvent::SessionCreated { gateway }) {
            return Ok(());
        }

        match strategy.open_checkout(&session).await? {
            CheckoutOutcome::Dismissed => {
                tracing::info!(order_id = %self.order_id, "payment window closed");
                self.apply_if_current(generation, RetryEvent::CheckoutDismissed);
            }
            CheckoutOutcome::Redirected => {
                self.apply_if_current(
                    generation,
                    RetryEvent::Redirected {
                        order_id: self.order_id.clone(),
                    },
                );
            }
            CheckoutOutcome::Completed(response) => {
                if !self.apply_if_current(generation, RetryEvent::CheckoutCompleted) {
                    return Ok(());
                }
                verify(&*self.backend, &self.order_id, &response).await?;
                let applied = self.apply_if_current(
                    generation,
                    RetryEvent::Verified {
                        order_id: self.order_id.clone(),
                    },
                );
                if applied {
                    tracing::info!(order_id = %self.order_id, "payment verified");
                } else {
                    tracing::debug!(order_id = %self.order_id, "stale verification ignored");
                }
            }
        }
        Ok(())
    }

    fn apply_if_current(&self, generation: u64, event: RetryEvent) -> bool {
        self.status.send_if_modified(|status| {
            if status.generation != generation {
                return false;
            }
            *status = evolve(status.clone(), event);
            true
        })
    }
}
