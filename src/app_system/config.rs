//! Runtime settings, with defaults matching the original dashboard.

use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::clients::SimulatedLatency;

/// Dashboard settings. Every field can be overridden by a `DASHBOARD_*`
/// environment variable; see [`DashboardConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Rows per table page.
    pub page_size: usize,
    pub list_latency: Duration,
    pub create_latency: Duration,
    /// How long a success message stays up before leaving the form.
    pub redirect_delay: Duration,
    pub notification_duration: Duration,
    pub channel_buffer: usize,
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            list_latency: Duration::from_millis(300),
            create_latency: Duration::from_millis(500),
            redirect_delay: Duration::from_millis(1500),
            notification_duration: Duration::from_millis(4000),
            channel_buffer: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Reads overrides from the process environment (after loading `.env`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unparseable values
    /// are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            page_size: parse_or(&lookup, "DASHBOARD_PAGE_SIZE", defaults.page_size).max(1),
            list_latency: millis_or(&lookup, "DASHBOARD_LIST_LATENCY_MS", defaults.list_latency),
            create_latency: millis_or(&lookup, "DASHBOARD_CREATE_LATENCY_MS", defaults.create_latency),
            redirect_delay: millis_or(&lookup, "DASHBOARD_REDIRECT_DELAY_MS", defaults.redirect_delay),
            notification_duration: millis_or(&lookup, "DASHBOARD_NOTIFICATION_MS", defaults.notification_duration),
            channel_buffer: parse_or(&lookup, "DASHBOARD_CHANNEL_BUFFER", defaults.channel_buffer).max(1),
            log_filter: lookup("DASHBOARD_LOG").unwrap_or(defaults.log_filter),
        }
    }

    pub fn latency(&self) -> SimulatedLatency {
        SimulatedLatency {
            list: self.list_latency,
            create: self.create_latency,
        }
    }

    /// Same settings with every artificial delay removed.
    pub fn without_latency(mut self) -> Self {
        self.list_latency = Duration::ZERO;
        self.create_latency = Duration::ZERO;
        self.redirect_delay = Duration::ZERO;
        self
    }
}

fn parse_or<T: FromStr + Copy>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Ignoring invalid setting");
            default
        }),
    }
}

fn millis_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Duration) -> Duration {
    let default_ms = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
    Duration::from_millis(parse_or(lookup, key, default_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_overrides_and_invalid_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("DASHBOARD_PAGE_SIZE", "25"),
            ("DASHBOARD_CREATE_LATENCY_MS", "abc"),
            ("DASHBOARD_LIST_LATENCY_MS", " 0 "),
            ("DASHBOARD_LOG", "order_dashboard=debug"),
        ]);
        let config = DashboardConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.page_size, 25);
        assert_eq!(config.create_latency, Duration::from_millis(500));
        assert_eq!(config.list_latency, Duration::ZERO);
        assert_eq!(config.log_filter, "order_dashboard=debug");
        assert_eq!(config.redirect_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_page_size_never_zero() {
        let config = DashboardConfig::from_lookup(|key| (key == "DASHBOARD_PAGE_SIZE").then(|| "0".to_string()));
        assert_eq!(config.page_size, 1);
    }
}
