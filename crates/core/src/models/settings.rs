use serde::{Deserialize, Serialize};

/// Default endpoint for the metalpriceapi.com v1 API.
pub const DEFAULT_API_URL: &str = "https://api.metalpriceapi.com/v1";

/// Runtime configuration for the tracker.
///
/// Not persisted alongside the inventory; front ends build it from their own
/// configuration sources (flags, environment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Key for the spot-price API. Fetching without one is a reported failure.
    pub api_key: Option<String>,

    /// Base URL of the spot-price API, without a trailing slash.
    pub api_url: String,

    /// Currency the spot rates are quoted in.
    pub base_currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            base_currency: "USD".to_string(),
        }
    }
}

impl Settings {
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }
}
