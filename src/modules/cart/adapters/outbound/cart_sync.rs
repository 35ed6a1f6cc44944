use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cart::adapters::outbound::cart_repository::CartRepository;
use crate::modules::cart::core::intents::CartIntent;
use crate::shared::infrastructure::intent_outbox::IntentDispatcher;

/// Writes cart intents through to the backend, best effort.
pub struct CartSyncWorker {
    repository: Arc<dyn CartRepository>,
}

impl CartSyncWorker {
    pub fn new(repository: Arc<dyn CartRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IntentDispatcher<CartIntent> for CartSyncWorker {
    async fn dispatch(&self, intent: CartIntent) -> anyhow::Result<()> {
        match intent {
            CartIntent::UpsertLine { session_id, line } => {
                tracing::debug!(%session_id, line_id = %line.id, quantity = line.quantity, "syncing cart line");
                self.repository.upsert_line(&session_id, &line).await
            }
            CartIntent::DeleteLine {
                session_id,
                line_id,
            } => {
                tracing::debug!(%session_id, %line_id, "deleting cart line");
                self.repository.delete_line(&session_id, &line_id).await
            }
            CartIntent::ClearCart { session_id } => {
                tracing::debug!(%session_id, "clearing cart");
                self.repository.clear(&session_id).await
            }
        }
    }
}

#[cfg(test)]
mod cart_sync_worker_tests {
    use super::*;
    use crate::modules::cart::adapters::outbound::cart_repository_in_memory::InMemoryCartRepository;
    use crate::tests::fixtures::cart::make_line;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_translate_each_intent_into_a_repository_call() {
        let repository = Arc::new(InMemoryCartRepository::new());
        let worker = CartSyncWorker::new(repository.clone());
        worker
            .dispatch(CartIntent::UpsertLine {
                session_id: "s-1".into(),
                line: make_line("a", "ring-01", None, 2),
            })
            .await
            .unwrap();
        worker
            .dispatch(CartIntent::UpsertLine {
                session_id: "s-1".into(),
                line: make_line("b", "ring-02", None, 1),
            })
            .await
            .unwrap();
        worker
            .dispatch(CartIntent::DeleteLine {
                session_id: "s-1".into(),
                line_id: "a".into(),
            })
            .await
            .unwrap();
        assert_eq!(repository.lines("s-1").await.len(), 1);
        worker
            .dispatch(CartIntent::ClearCart {
                session_id: "s-1".into(),
            })
            .await
            .unwrap();
        assert!(repository.lines("s-1").await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_backend_failures_to_the_relay() {
        let mut repository = InMemoryCartRepository::new();
        repository.toggle_offline();
        let worker = CartSyncWorker::new(Arc::new(repository));
        let result = worker
            .dispatch(CartIntent::ClearCart {
                session_id: "s-1".into(),
            })
            .await;
        assert!(result.is_err());
    }
}
