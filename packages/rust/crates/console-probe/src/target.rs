//! Fixed probe target: the local management console and its guest login.

use std::time::Duration;

/// Management console base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:15672";
/// Default broker user shipped with the management plugin.
pub const DEFAULT_USERNAME: &str = "guest";
pub const DEFAULT_PASSWORD: &str = "guest";
/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Substring expected in the homepage HTML.
pub const DEFAULT_TITLE_MARKER: &str = "RabbitMQ Management";

/// Where and how the probe connects.
///
/// The binary always uses [`ProbeTarget::default`]; other values exist so the
/// probe can be pointed at a mock console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
    pub title_marker: String,
}

impl Default for ProbeTarget {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            title_marker: DEFAULT_TITLE_MARKER.to_string(),
        }
    }
}

impl ProbeTarget {
    /// Default target with another base URL (trailing slashes dropped).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Absolute URL for an endpoint path. `/` maps to the bare base URL.
    pub fn endpoint_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/target.rs"]
mod tests;
