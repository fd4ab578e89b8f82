use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::metal::Metal;

/// Source of live spot quotes.
///
/// Implementations quote USD per troy ounce; conversion to per-gram prices
/// happens in [`PriceService`](crate::services::price_service::PriceService).
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SpotPriceProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Which metals this provider can quote.
    fn supported_metals(&self) -> Vec<Metal>;

    /// Latest USD price of one troy ounce of `metal`.
    async fn get_ounce_rate(&self, metal: Metal) -> Result<f64, CoreError>;
}
