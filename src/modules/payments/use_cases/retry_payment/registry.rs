use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::modules::payments::adapters::outbound::payment_backend::PaymentBackend;
use crate::modules::payments::core::state::RetryStatus;
use crate::modules::payments::strategies::GatewayStrategies;
use crate::modules::payments::use_cases::retry_payment::command::RetryPayment;
use crate::modules::payments::use_cases::retry_payment::handler::{
    PaymentRetryOrchestrator, RetryError,
};

/// One orchestrator per order, created on the first retry.
pub struct PaymentRetries {
    orchestrators: RwLock<HashMap<String, Arc<PaymentRetryOrchestrator>>>,
    strategies: GatewayStrategies,
    backend: Arc<dyn PaymentBackend>,
}

impl PaymentRetries {
    pub fn new(strategies: GatewayStrategies, backend: Arc<dyn PaymentBackend>) -> Self {
        Self {
            orchestrators: RwLock::new(HashMap::new()),
            strategies,
            backend,
        }
    }

    pub fn backend(&self) -> &dyn PaymentBackend {
        &*self.backend
    }

    pub async fn get(&self, order_id: &str) -> Option<Arc<PaymentRetryOrchestrator>> {
        self.orchestrators.read().await.get(order_id).cloned()
    }

    pub async fn get_or_create(&self, order_id: &str) -> Arc<PaymentRetryOrchestrator> {
        if let Some(existing) = self.get(order_id).await {
            return existing;
        }
        self.orchestrators
            .write()
            .await
            .entry(order_id.to_string())
            .or_insert_with(|| {
                Arc::new(PaymentRetryOrchestrator::new(
                    order_id,
                    self.strategies.clone(),
                    self.backend.clone(),
                ))
            })
            .clone()
    }

    pub async fn retry(&self, command: RetryPayment) -> Result<RetryStatus, RetryError> {
        self.get_or_create(&command.order_id)
            .await
            .retry(command.gateway)
            .await
    }

    pub async fn reset(&self, order_id: &str) -> RetryStatus {
        match self.get(order_id).await {
            Some(orchestrator) => orchestrator.reset(),
            None => RetryStatus::new(order_id),
        }
    }

    /// Unknown orders report a fresh `Idle` status without creating anything.
    pub async fn status(&self, order_id: &str) -> RetryStatus {
        match self.get(order_id).await {
            Some(orchestrator) => orchestrator.status(),
            None => RetryStatus::new(order_id),
        }
    }
}

#[cfg(test)]
mod payment_retries_tests {
    use super::*;
    use crate::modules::payments::adapters::outbound::checkout_sdk_in_memory::{
        RecordingCashfree, ScriptedRazorpay,
    };
    use crate::modules::payments::adapters::outbound::payment_backend_in_memory::InMemoryPaymentBackend;
    use crate::modules::payments::core::gateway::Gateway;
    use crate::modules::payments::core::state::RetryState;
    use crate::modules::payments::strategies::{CashfreeStrategy, RazorpayStrategy};
    use rstest::{fixture, rstest};

    #[fixture]
    fn retries() -> (PaymentRetries, Arc<InMemoryPaymentBackend>) {
        let backend = Arc::new(InMemoryPaymentBackend::new());
        let strategies = GatewayStrategies::new(
            RazorpayStrategy::new(backend.clone(), Arc::new(ScriptedRazorpay::new()), "Storefront"),
            CashfreeStrategy::new(backend.clone(), Arc::new(RecordingCashfree::new()), "https://shop.test/return"),
        );
        (PaymentRetries::new(strategies, backend.clone()), backend)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reuse_the_orchestrator_for_an_order(
        retries: (PaymentRetries, Arc<InMemoryPaymentBackend>),
    ) {
        let (retries, _) = retries;
        let a = retries.get_or_create("o-1").await;
        let b = retries.get_or_create("o-1").await;
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &retries.get_or_create("o-2").await));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_idle_for_an_unknown_order(
        retries: (PaymentRetries, Arc<InMemoryPaymentBackend>),
    ) {
        let (retries, _) = retries;
        assert_eq!(retries.status("o-9").await, RetryStatus::new("o-9"));
        assert!(retries.get("o-9").await.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_route_retries_by_order(
        retries: (PaymentRetries, Arc<InMemoryPaymentBackend>),
    ) {
        let (retries, backend) = retries;
        backend.add_pending_order("o-1", 1_000).await;
        let status = retries
            .retry(RetryPayment {
                order_id: "o-1".into(),
                gateway: Gateway::Cashfree,
            })
            .await
            .unwrap();
        assert!(matches!(status.state, RetryState::Redirected { .. }));
        assert_eq!(retries.status("o-1").await, status);
        assert!(retries.reset("o-1").await.can_retry());
    }
}
