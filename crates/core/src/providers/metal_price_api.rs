use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::metal::Metal;
use crate::models::settings::{Settings, DEFAULT_API_URL};
use super::traits::SpotPriceProvider;

const PROVIDER_NAME: &str = "metalpriceapi.com";

/// metalpriceapi.com provider for precious-metal spot rates.
///
/// - **Requires**: API key (`api_key` query parameter).
/// - **Endpoint**: `GET /latest?api_key=..&base=USD&symbols=USDXAU`.
/// - **Coverage**: Gold (USDXAU), Silver (USDXAG), Platinum (USDXPT),
///   Palladium (USDXPD), each quoted in USD per troy ounce.
///
/// No retries or de-duplication: overlapping requests resolve independently
/// and the caller applies whichever finishes last.
pub struct MetalPriceApiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    base_currency: String,
}

impl MetalPriceApiProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_API_URL)
    }

    /// Point the provider at a different host (self-hosted proxy, tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            base_currency: "USD".to_string(),
        }
    }

    /// Build from runtime settings. Fails when no API key is configured.
    pub fn from_settings(settings: &Settings) -> Result<Self, CoreError> {
        let key = settings
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| CoreError::MissingApiKey(PROVIDER_NAME.to_string()))?;
        let mut provider = Self::with_base_url(key, settings.api_url.clone());
        provider.base_currency = settings.base_currency.clone();
        Ok(provider)
    }

    /// Rate symbol for `metal`: base currency followed by the metal code,
    /// e.g. `USDXAU`.
    pub fn rate_symbol(&self, metal: Metal) -> String {
        format!("{}{}", self.base_currency, metal.symbol())
    }
}

// ── metalpriceapi.com response types ────────────────────────────────

#[derive(Deserialize)]
struct LatestResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    rates: HashMap<String, f64>,
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "statusCode")]
    status_code: Option<u16>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl SpotPriceProvider for MetalPriceApiProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn supported_metals(&self) -> Vec<Metal> {
        Metal::ALL.to_vec()
    }

    async fn get_ounce_rate(&self, metal: Metal) -> Result<f64, CoreError> {
        let symbol = self.rate_symbol(metal);
        let url = format!("{}/latest", self.base_url);

        let resp: LatestResponse = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("base", self.base_currency.as_str()),
                ("symbols", symbol.as_str()),
            ])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message: format!("Failed to parse latest rates: {}", CoreError::from(e)),
            })?;

        if !resp.success {
            let message = match resp.error {
                Some(ApiErrorBody {
                    message: Some(message),
                    status_code,
                }) => match status_code {
                    Some(code) => format!("{message} (status {code})"),
                    None => message,
                },
                _ => "API error".to_string(),
            };
            return Err(CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message,
            });
        }

        resp.rates
            .get(&symbol)
            .copied()
            .ok_or_else(|| CoreError::RateNotAvailable {
                provider: PROVIDER_NAME.to_string(),
                symbol,
            })
    }
}
