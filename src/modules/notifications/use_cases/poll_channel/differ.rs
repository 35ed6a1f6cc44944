// Infers order changes by diffing two consecutive polling summaries.
//
// Rules, in priority order
// - First observation only seeds the baseline.
// - Total went down: one synthesized deletion and nothing else for this poll.
//   A delete plus an insert inside one interval nets out and is not seen.
// - Latest id moved: new order.
// - Same latest id, different timestamp: status change (or cancellation).

use uuid::Uuid;

use crate::modules::notifications::core::notification::{NotificationDraft, NotificationKind};
use crate::modules::notifications::core::polling::PollingSummary;
use crate::modules::orders::core::order::OrderStatus;

#[derive(Debug, Default)]
pub struct PollDiffer {
    baseline: Option<PollingSummary>,
}

impl PollDiffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_seeded(&self) -> bool {
        self.baseline.is_some()
    }

    pub fn observe(&mut self, summary: PollingSummary, observed_at: &str) -> Vec<NotificationDraft> {
        let Some(previous) = self.baseline.replace(summary.clone()) else {
            return Vec::new();
        };

        if summary.total_orders < previous.total_orders {
            return vec![NotificationDraft {
                id: format!("deleted-{}", Uuid::now_v7()),
                timestamp: observed_at.to_string(),
                kind: NotificationKind::Deleted,
                order: None,
            }];
        }

        let (Some(latest_id), Some(latest_timestamp)) =
            (summary.latest_id.as_ref(), summary.latest_timestamp.as_ref())
        else {
            return Vec::new();
        };

        let kind = if previous.latest_id.as_ref() != Some(latest_id) {
            NotificationKind::NewOrder
        } else if previous.latest_timestamp.as_ref() != Some(latest_timestamp) {
            match summary.latest_order.as_ref().map(|o| o.status) {
                Some(OrderStatus::Cancelled) => NotificationKind::Cancelled,
                _ => NotificationKind::StatusChange,
            }
        } else {
            return Vec::new();
        };

        vec![NotificationDraft {
            id: latest_id.clone(),
            timestamp: latest_timestamp.clone(),
            kind,
            order: summary.latest_order,
        }]
    }
}
