//! Environment-driven configuration, read once at startup.

use std::net::SocketAddr;

use chrono::FixedOffset;
use thiserror::Error;

/// Minutes east of UTC for the default business timezone (UTC+5:30).
const DEFAULT_TZ_OFFSET_MINUTES: i32 = 330;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Process configuration.
///
/// The business timezone is explicit rather than inherited from the host:
/// peak-hour determination must not silently change because the service got
/// deployed in a different region.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to. `BIND_ADDR`, default `0.0.0.0:3000`.
    pub bind_addr: SocketAddr,
    /// Timezone peak hours are interpreted in. `TZ_OFFSET_MINUTES` east of
    /// UTC, default 330 (UTC+5:30).
    pub business_tz: FixedOffset,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDR",
                value: raw,
            })?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 3000)),
        };

        let offset_minutes = match std::env::var("TZ_OFFSET_MINUTES") {
            Ok(raw) => raw.parse::<i32>().map_err(|_| ConfigError::Invalid {
                name: "TZ_OFFSET_MINUTES",
                value: raw,
            })?,
            Err(_) => DEFAULT_TZ_OFFSET_MINUTES,
        };
        let business_tz =
            FixedOffset::east_opt(offset_minutes * 60).ok_or_else(|| ConfigError::Invalid {
                name: "TZ_OFFSET_MINUTES",
                value: offset_minutes.to_string(),
            })?;

        Ok(Self {
            bind_addr,
            business_tz,
        })
    }
}
