use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Amounts are carried in the currency's minor unit (paise for INR).
pub type Paise = i64;

pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

/// RFC 3339 with millisecond precision, so lexical order matches time order.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn format_rupees(amount: Paise) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{sign}₹{}.{:02}", abs / 100, abs % 100)
}
