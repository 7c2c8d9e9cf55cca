use crate::shared::Result;
use std::time::Duration;

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Attempts per request used when none is configured
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Connection settings shared by the HTTP adapters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub base_url: String,
    pub timeout: Duration,
    /// Total attempts per request, at least 1
    pub max_retries: u32,
}

impl HttpSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Base URL without trailing slashes, ready for `{base}/{endpoint}`
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub(crate) fn build_client(&self) -> Result<reqwest::Client> {
        let user_agent = format!("recipe-finder/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(client)
    }
}

/// Linear back-off between attempts: 100 ms, 200 ms, ...
pub(crate) fn retry_delay(attempt: u32) -> Duration {
    Duration::from_millis(100 * attempt as u64)
}
