use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::modules::cart::adapters::outbound::cart_repository::CartRepository;
use crate::modules::cart::core::intents::CartIntent;
use crate::modules::cart::core::state::CartState;
use crate::modules::cart::use_cases::mutate_cart::handler::CartStore;
use crate::shared::infrastructure::intent_outbox::IntentOutbox;

/// One `CartStore` per session, hydrated from the backend on first use.
pub struct CartSessions {
    stores: RwLock<HashMap<String, Arc<CartStore>>>,
    repository: Arc<dyn CartRepository>,
    outbox: IntentOutbox<CartIntent>,
}

impl CartSessions {
    pub fn new(repository: Arc<dyn CartRepository>, outbox: IntentOutbox<CartIntent>) -> Self {
        Self {
            stores: RwLock::new(HashMap::new()),
            repository,
            outbox,
        }
    }

    pub async fn get_or_open(&self, session_id: &str) -> Arc<CartStore> {
        if let Some(store) = self.stores.read().await.get(session_id) {
            return store.clone();
        }

        let lines = match self.repository.load(session_id).await {
            Ok(lines) => lines,
            Err(error) => {
                tracing::warn!(%session_id, %error, "could not load saved cart, starting empty");
                Vec::new()
            }
        };

        let mut guard = self.stores.write().await;
        guard
            .entry(session_id.to_string())
            .or_insert_with(|| {
                let state = CartState {
                    lines,
                    ..CartState::new(session_id)
                };
                Arc::new(CartStore::restore(state, self.outbox.clone()))
            })
            .clone()
    }

    pub async fn len(&self) -> usize {
        self.stores.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.stores.read().await.is_empty()
    }
}
