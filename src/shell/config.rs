use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

use crate::modules::notifications::core::feed::DEFAULT_CAPACITY;
use crate::modules::notifications::use_cases::poll_channel::handler::DEFAULT_POLL_INTERVAL;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub poll_interval: Duration,
    pub notification_capacity: usize,
    pub merchant_name: String,
    pub payment_return_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            poll_interval: DEFAULT_POLL_INTERVAL,
            notification_capacity: DEFAULT_CAPACITY,
            merchant_name: "Storefront".to_string(),
            payment_return_url: "http://localhost:8080/payments/return".to_string(),
        }
    }
}

fn parsed<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let poll_secs = parsed(
            &lookup,
            "NOTIFICATION_POLL_INTERVAL_SECS",
            defaults.poll_interval.as_secs(),
        )?;
        if poll_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "NOTIFICATION_POLL_INTERVAL_SECS",
                value: "0".into(),
            });
        }
        let capacity = parsed(
            &lookup,
            "NOTIFICATION_CAPACITY",
            defaults.notification_capacity,
        )?;
        if capacity == 0 {
            return Err(ConfigError::Invalid {
                key: "NOTIFICATION_CAPACITY",
                value: "0".into(),
            });
        }
        Ok(Self {
            host: parsed(&lookup, "STOREFRONT_HOST", defaults.host)?,
            port: parsed(&lookup, "STOREFRONT_PORT", defaults.port)?,
            poll_interval: Duration::from_secs(poll_secs),
            notification_capacity: capacity,
            merchant_name: lookup("STOREFRONT_MERCHANT_NAME").unwrap_or(defaults.merchant_name),
            payment_return_url: lookup("PAYMENT_RETURN_URL").unwrap_or(defaults.payment_return_url),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
