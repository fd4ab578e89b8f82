use crate::errors::CoreError;
use crate::models::metal::Metal;
use crate::models::number::to_num;
use crate::models::price::{ounce_rate_to_gram, PriceTable};
use crate::providers::traits::SpotPriceProvider;

/// Maintains the per-gram price table: manual edits and live spot quotes.
///
/// The provider is optional so the tracker stays fully usable offline with
/// hand-entered prices only.
pub struct PriceService {
    provider: Option<Box<dyn SpotPriceProvider>>,
}

impl PriceService {
    pub fn new(provider: Option<Box<dyn SpotPriceProvider>>) -> Self {
        Self { provider }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.name())
    }

    /// Apply a hand-entered price. Non-finite input is stored as 0, the same
    /// as a blank field; negative prices are rejected.
    pub fn set_manual_price(
        &self,
        prices: &mut PriceTable,
        metal: Metal,
        price_per_gram: f64,
    ) -> Result<f64, CoreError> {
        let price = to_num(price_per_gram);
        if price < 0.0 {
            return Err(CoreError::InvalidPrice {
                metal: metal.to_string(),
                value: price,
            });
        }
        prices.set(metal, price);
        Ok(price)
    }

    /// Fetch the live USD-per-gram price for `metal`.
    ///
    /// Does not touch any price table; the caller decides what to overwrite.
    pub async fn fetch_price_per_gram(&self, metal: Metal) -> Result<f64, CoreError> {
        let provider = self.provider.as_deref().ok_or(CoreError::NoProvider)?;
        if !provider.supported_metals().contains(&metal) {
            return Err(CoreError::RateNotAvailable {
                provider: provider.name().to_string(),
                symbol: metal.symbol().to_string(),
            });
        }

        let ounce_rate = provider.get_ounce_rate(metal).await?;
        if !ounce_rate.is_finite() || ounce_rate <= 0.0 {
            return Err(CoreError::Api {
                provider: provider.name().to_string(),
                message: format!("Implausible {} rate: {ounce_rate}", metal.symbol()),
            });
        }
        Ok(ounce_rate_to_gram(ounce_rate))
    }
}
