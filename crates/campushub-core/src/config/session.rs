//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session lifecycle and cookie settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Idle lifetime in seconds. The expiry window slides forward on every
    /// authenticated request.
    #[serde(default = "default_idle_lifetime")]
    pub idle_lifetime_seconds: u64,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the session cookie is marked `Secure`. Off by default;
    /// deployments behind TLS must enable it.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Interval for the expired-session sweep in minutes.
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_minutes: u64,
}

impl SessionConfig {
    /// The idle lifetime as a `chrono::Duration`.
    pub fn idle_lifetime(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.idle_lifetime_seconds as i64)
    }

    /// The sweep interval as a `std::time::Duration`.
    pub fn cleanup_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.cleanup_interval_minutes * 60)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_lifetime_seconds: default_idle_lifetime(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
            cleanup_interval_minutes: default_cleanup_interval(),
        }
    }
}

fn default_idle_lifetime() -> u64 {
    3600
}

fn default_cookie_name() -> String {
    "campushub_session".to_string()
}

fn default_cleanup_interval() -> u64 {
    15
}
