// Background tasks.
//
// - cart relay: replays cart intents to the backend in order, and flushes its
//   backlog on shutdown.
// - notification consumer: the only writer of the notification feed.
// - push channel: realtime order changes.
// - poll channel: fixed-interval fallback.
//
// `shutdown` cancels all of them and waits for them to finish.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::shell::compose::Background;
use crate::shell::state::AppState;

const CART_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Workers {
    token: CancellationToken,
    handles: Vec<JoinHandle<()>>,
}

impl Workers {
    pub fn spawn(state: &AppState, background: Background) -> Self {
        let token = CancellationToken::new();
        let Background {
            cart_relay,
            cart_sync,
            notification_bus,
            push,
            poll,
        } = background;

        let mut handles = Vec::with_capacity(4);

        handles.push(tokio::spawn({
            let token = token.clone();
            async move {
                let dispatched = cart_relay
                    .run_until(&cart_sync, token, CART_DRAIN_TIMEOUT)
                    .await;
                tracing::debug!(dispatched, "cart relay stopped");
            }
        }));

        handles.push(tokio::spawn({
            let center = Arc::clone(&state.notifications);
            let token = token.clone();
            async move { center.run(notification_bus, token).await }
        }));

        handles.push(tokio::spawn({
            let token = token.clone();
            async move {
                if let Err(error) = push.run(token).await {
                    tracing::error!(%error, "realtime subscription failed, relying on polling");
                }
            }
        }));

        handles.push(tokio::spawn({
            let token = token.clone();
            async move { poll.run(token).await }
        }));

        tracing::info!(workers = handles.len(), "background workers started");
        Self { token, handles }
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub async fn shutdown(self) {
        self.token.cancel();
        for handle in self.handles {
            if let Err(error) = handle.await {
                tracing::warn!(%error, "worker ended abnormally");
            }
        }
        tracing::info!("background workers stopped");
    }
}
