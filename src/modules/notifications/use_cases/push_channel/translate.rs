// Maps a realtime row change to a notification draft.
//
// - INSERT: new order, keyed by the row's change timestamp.
// - UPDATE: ignored when the status is known and unchanged; cancelled gets its own kind.
// - DELETE: the row image carries no timestamp, so the observation time is used.

use crate::modules::notifications::core::notification::{NotificationDraft, NotificationKind};
use crate::modules::notifications::core::order_change::{ChangeType, OrderChange};
use crate::modules::orders::core::order::OrderStatus;

pub fn translate(change: &OrderChange, observed_at: &str) -> Option<NotificationDraft> {
    match change.event_type {
        ChangeType::Insert => {
            let new = change.new.as_ref()?;
            Some(NotificationDraft {
                id: new.id.clone(),
                timestamp: new.change_timestamp().unwrap_or(observed_at).to_string(),
                kind: NotificationKind::NewOrder,
                order: None,
            })
        }
        ChangeType::Update => {
            let new = change.new.as_ref()?;
            let old_status = change.old.as_ref().and_then(|old| old.status);
            if old_status.is_some() && old_status == new.status {
                return None;
            }
            let kind = match new.status {
                Some(OrderStatus::Cancelled) => NotificationKind::Cancelled,
                _ => NotificationKind::StatusChange,
            };
            Some(NotificationDraft {
                id: new.id.clone(),
                timestamp: new.change_timestamp().unwrap_or(observed_at).to_string(),
                kind,
                order: None,
            })
        }
        ChangeType::Delete => {
            let old = change.old.as_ref()?;
            Some(NotificationDraft {
                id: format!("deleted-{}", old.id),
                timestamp: observed_at.to_string(),
                kind: NotificationKind::Deleted,
                order: None,
            })
        }
    }
}
