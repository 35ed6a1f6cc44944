// In-process event bus.
//
// Purpose
// - Give several producers (realtime push, backup poll) one ordered lane into a single consumer.
//
// Boundaries
// - No de-duplication here; the consumer owns the idempotency filter.

use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventBusError {
    #[error("event bus closed")]
    Closed,
}

#[derive(Debug)]
pub struct EventPublisher<Event> {
    sender: mpsc::Sender<Event>,
}

impl<Event> Clone for EventPublisher<Event> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<Event> EventPublisher<Event> {
    pub async fn publish(&self, event: Event) -> Result<(), EventBusError> {
        self.sender
            .send(event)
            .await
            .map_err(|_| EventBusError::Closed)
    }
}

#[derive(Debug)]
pub struct EventSubscriber<Event> {
    receiver: mpsc::Receiver<Event>,
}

impl<Event> EventSubscriber<Event> {
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }

    pub fn try_next(&mut self) -> Option<Event> {
        self.receiver.try_recv().ok()
    }
}

pub fn channel<Event>(capacity: usize) -> (EventPublisher<Event>, EventSubscriber<Event>) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (EventPublisher { sender }, EventSubscriber { receiver })
}
