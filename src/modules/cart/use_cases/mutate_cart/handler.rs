use thiserror::Error;
use tokio::sync::{RwLock, watch};

use crate::modules::cart::core::evolve::evolve;
use crate::modules::cart::core::intents::CartIntent;
use crate::modules::cart::core::line_item::{CartLineItem, ProductSnapshot};
use crate::modules::cart::core::state::CartState;
use crate::modules::cart::use_cases::mutate_cart::command::CartCommand;
use crate::modules::cart::use_cases::mutate_cart::decide::decide;
use crate::modules::cart::use_cases::mutate_cart::decision::{DecideError, Decision};
use crate::modules::cart::use_cases::view_cart::projection::CartView;
use crate::shared::core::primitives::{Paise, new_id};
use crate::shared::infrastructure::intent_outbox::IntentOutbox;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),
}

/// Cart of one visitor session.
///
/// Local state is the source of truth: a mutation is applied in memory first and
/// its persistence intent is handed to the outbox without waiting for the backend.
/// A failed backend write is never rolled back here.
pub struct CartStore {
    state: RwLock<CartState>,
    outbox: IntentOutbox<CartIntent>,
    views: watch::Sender<CartView>,
}

impl CartStore {
    pub fn new(session_id: impl Into<String>, outbox: IntentOutbox<CartIntent>) -> Self {
        Self::restore(CartState::new(session_id), outbox)
    }

    pub fn restore(state: CartState, outbox: IntentOutbox<CartIntent>) -> Self {
        let (views, _) = watch::channel(CartView::from(&state));
        Self {
            state: RwLock::new(state),
            outbox,
            views,
        }
    }

    pub async fn handle(&self, command: CartCommand) -> Result<CartView, CartError> {
        // Held across decide, evolve and enqueue so intents leave in dispatch order.
        let mut guard = self.state.write().await;
        match decide(&guard, command) {
            Decision::Accepted { events, intents } => {
                let changed = !events.is_empty();
                let next = events.into_iter().fold(guard.clone(), evolve);
                *guard = next;
                for intent in intents {
                    self.outbox.enqueue(intent);
                }
                let view = CartView::from(&*guard);
                if changed {
                    self.views.send_replace(view.clone());
                }
                Ok(view)
            }
            Decision::Rejected { reason } => {
                tracing::debug!(session_id = %guard.session_id, %reason, "cart command rejected");
                Err(CartError::Domain(reason))
            }
        }
    }

    pub async fn add_item(
        &self,
        product_id: impl Into<String>,
        size: Option<String>,
        quantity: i64,
        product: ProductSnapshot,
    ) -> Result<CartView, CartError> {
        self.handle(CartCommand::AddItem {
            line_id: new_id(),
            product_id: product_id.into(),
            size,
            quantity,
            product,
        })
        .await
    }

    pub async fn update_quantity(
        &self,
        line_id: impl Into<String>,
        quantity: i64,
    ) -> Result<CartView, CartError> {
        self.handle(CartCommand::UpdateQuantity {
            line_id: line_id.into(),
            quantity,
        })
        .await
    }

    pub async fn remove_item(&self, line_id: impl Into<String>) -> Result<CartView, CartError> {
        self.handle(CartCommand::RemoveItem {
            line_id: line_id.into(),
        })
        .await
    }

    pub async fn clear(&self) -> Result<CartView, CartError> {
        self.handle(CartCommand::Clear).await
    }

    pub async fn open_cart(&self) -> Result<CartView, CartError> {
        self.handle(CartCommand::OpenDrawer).await
    }

    pub async fn close_cart(&self) -> Result<CartView, CartError> {
        self.handle(CartCommand::CloseDrawer).await
    }

    pub async fn items(&self) -> Vec<CartLineItem> {
        self.state.read().await.lines.clone()
    }

    pub async fn cart_count(&self) -> u64 {
        self.state.read().await.cart_count()
    }

    pub async fn subtotal(&self) -> Paise {
        self.state.read().await.subtotal()
    }

    pub async fn is_cart_open(&self) -> bool {
        self.state.read().await.is_open
    }

    pub async fn view(&self) -> CartView {
        CartView::from(&*self.state.read().await)
    }

    pub fn subscribe(&self) -> watch::Receiver<CartView> {
        self.views.subscribe()
    }
}
