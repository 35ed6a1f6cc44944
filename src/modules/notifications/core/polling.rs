use serde::{Deserialize, Serialize};

use crate::modules::orders::core::order::OrderSnapshot;

/// Lightweight summary fetched by the backup poll.
///
/// `latest_timestamp` is the last-update time of the latest order, the same key the
/// realtime feed uses, so both channels name one change identically.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PollingSummary {
    pub latest_id: Option<String>,
    pub latest_timestamp: Option<String>,
    pub total_orders: u64,
    pub latest_order: Option<OrderSnapshot>,
}
