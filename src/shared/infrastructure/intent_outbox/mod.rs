// Intent outbox: fire-and-forget hand-off of side effects decided by the core.
//
// Purpose
// - Let a handler record "this should be persisted" without waiting on the backend.
//
// Responsibilities
// - Preserve enqueue order: the relay dispatches intents one at a time, in order.
// - Never report a dispatch failure back to the producer. Local state stays the truth.
// - On shutdown, stop accepting intents and flush what is already queued.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[async_trait]
pub trait IntentDispatcher<Intent: Send + 'static>: Send + Sync {
    async fn dispatch(&self, intent: Intent) -> anyhow::Result<()>;
}

pub struct IntentOutbox<Intent> {
    sender: mpsc::UnboundedSender<Intent>,
}

impl<Intent> Clone for IntentOutbox<Intent> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<Intent> IntentOutbox<Intent> {
    pub fn enqueue(&self, intent: Intent) {
        if self.sender.send(intent).is_err() {
            tracing::warn!("intent relay is gone, dropping intent");
        }
    }
}

pub struct IntentRelay<Intent> {
    receiver: mpsc::UnboundedReceiver<Intent>,
}

pub fn channel<Intent>() -> (IntentOutbox<Intent>, IntentRelay<Intent>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (IntentOutbox { sender }, IntentRelay { receiver })
}

impl<Intent: Send + 'static> IntentRelay<Intent> {
    /// Dispatches until every outbox handle has been dropped.
    /// Returns how many intents were dispatched successfully.
    pub async fn run<TDispatcher>(mut self, dispatcher: &TDispatcher) -> usize
    where
        TDispatcher: IntentDispatcher<Intent> + ?Sized,
    {
        let mut delivered = 0;
        while let Some(intent) = self.receiver.recv().await {
            delivered += usize::from(dispatch_one(dispatcher, intent).await);
        }
        delivered
    }

    /// Like `run`, but stops taking intents once `token` is cancelled and then
    /// flushes the backlog for at most `drain_timeout`. A dispatch in flight
    /// when the token fires always completes.
    pub async fn run_until<TDispatcher>(
        mut self,
        dispatcher: &TDispatcher,
        token: CancellationToken,
        drain_timeout: Duration,
    ) -> usize
    where
        TDispatcher: IntentDispatcher<Intent> + ?Sized,
    {
        let mut delivered = 0;
        loop {
            let next = tokio::select! {
                biased;
                _ = token.cancelled() => break,
                next = self.receiver.recv() => next,
            };
            let Some(intent) = next else {
                return delivered;
            };
            delivered += usize::from(dispatch_one(dispatcher, intent).await);
        }

        self.receiver.close();
        let backlog = self.receiver.len();
        let drain = async {
            let mut drained = 0;
            while let Some(intent) = self.receiver.recv().await {
                drained += usize::from(dispatch_one(dispatcher, intent).await);
            }
            drained
        };
        match tokio::time::timeout(drain_timeout, drain).await {
            Ok(drained) => {
                tracing::debug!(backlog, drained, "intent backlog flushed");
                delivered + drained
            }
            Err(_) => {
                tracing::warn!(
                    backlog,
                    abandoned = self.receiver.len(),
                    "intent backlog not flushed in time"
                );
                delivered
            }
        }
    }
}

async fn dispatch_one<Intent, TDispatcher>(dispatcher: &TDispatcher, intent: Intent) -> bool
where
    Intent: Send + 'static,
    TDispatcher: IntentDispatcher<Intent> + ?Sized,
{
    match dispatcher.dispatch(intent).await {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(%error, "intent dispatch failed, local state kept");
            false
        }
    }
}

#[cfg(test)]
mod intent_outbox_tests {
    use super::*;
    use rstest::rstest;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        seen: Mutex<Vec<u32>>,
        fail_on: Option<u32>,
    }

    #[async_trait]
    impl IntentDispatcher<u32> for Recording {
        async fn dispatch(&self, intent: u32) -> anyhow::Result<()> {
            if self.fail_on == Some(intent) {
                return Err(anyhow::anyhow!("backend offline"));
            }
            self.seen.lock().await.push(intent);
            Ok(())
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_dispatch_in_enqueue_order() {
        let (outbox, relay) = channel();
        for i in 1..=4 {
            outbox.enqueue(i);
        }
        drop(outbox);
        let dispatcher = Recording::default();
        let delivered = relay.run(&dispatcher).await;
        assert_eq!(delivered, 4);
        assert_eq!(*dispatcher.seen.lock().await, vec![1, 2, 3, 4]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_going_after_a_failed_dispatch() {
        let (outbox, relay) = channel();
        outbox.enqueue(1);
        outbox.enqueue(2);
        outbox.enqueue(3);
        drop(outbox);
        let dispatcher = Recording {
            fail_on: Some(2),
            ..Recording::default()
        };
        let delivered = relay.run(&dispatcher).await;
        assert_eq!(delivered, 2);
        assert_eq!(*dispatcher.seen.lock().await, vec![1, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_flush_the_backlog_after_cancellation() {
        let (outbox, relay) = channel();
        for i in 1..=3 {
            outbox.enqueue(i);
        }
        let token = CancellationToken::new();
        token.cancel();
        let dispatcher = Recording::default();
        let delivered = relay
            .run_until(&dispatcher, token, Duration::from_secs(1))
            .await;
        assert_eq!(delivered, 3);
        assert_eq!(*dispatcher.seen.lock().await, vec![1, 2, 3]);

        // The relay is closed now; late intents are dropped, not queued.
        outbox.enqueue(4);
        assert_eq!(dispatcher.seen.lock().await.len(), 3);
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_give_up_on_a_backlog_that_outlives_the_drain_timeout() {
        struct Stalled;

        #[async_trait]
        impl IntentDispatcher<u32> for Stalled {
            async fn dispatch(&self, _intent: u32) -> anyhow::Result<()> {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(())
            }
        }

        let (outbox, relay) = channel();
        outbox.enqueue(1);
        outbox.enqueue(2);
        let token = CancellationToken::new();
        token.cancel();
        let delivered = relay
            .run_until(&Stalled, token, Duration::from_secs(5))
            .await;
        assert_eq!(delivered, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_when_producers_are_gone_before_cancellation() {
        let (outbox, relay) = channel();
        outbox.enqueue(1);
        drop(outbox);
        let dispatcher = Recording::default();
        let delivered = relay
            .run_until(&dispatcher, CancellationToken::new(), Duration::from_secs(1))
            .await;
        assert_eq!(delivered, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_panic_when_the_relay_is_gone() {
        let (outbox, relay) = channel::<u32>();
        drop(relay);
        outbox.enqueue(7);
    }
}
