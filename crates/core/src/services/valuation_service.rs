use crate::models::item::{Item, MAX_KARAT, MIN_KARAT};
use crate::models::number::to_num;
use crate::models::price::PriceTable;

/// Prices items against a [`PriceTable`].
///
/// Pure arithmetic, fail-soft: non-finite inputs count as 0 instead of
/// producing an error, so a damaged record values at $0 rather than
/// poisoning the total.
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }

    /// Fractional fineness: `clamp(karat, 1, 24) / 24`.
    ///
    /// Out-of-range karats are clamped, not rejected; a non-finite karat is
    /// read as 0 and therefore clamps to 1/24.
    pub fn purity_from_karat(&self, karat: f64) -> f64 {
        to_num(karat).clamp(MIN_KARAT, MAX_KARAT) / MAX_KARAT
    }

    /// `grams × price_per_gram(metal) × purity`.
    pub fn value_of_item(&self, item: &Item, prices: &PriceTable) -> f64 {
        let price = to_num(prices.get(item.metal));
        let purity = self.purity_from_karat(item.karat);
        to_num(item.grams) * price * purity
    }

    /// Sum of every item's value, recomputed from scratch.
    pub fn total_value(&self, items: &[Item], prices: &PriceTable) -> f64 {
        items
            .iter()
            .map(|item| self.value_of_item(item, prices))
            .sum()
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}
