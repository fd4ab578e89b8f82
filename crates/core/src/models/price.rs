use serde::{Deserialize, Serialize};

use super::metal::Metal;

/// Grams in one troy ounce, as used to convert quoted ounce rates.
pub const GRAMS_PER_TROY_OUNCE: f64 = 31.1035;

/// Current USD price per gram for each supported metal.
///
/// Always fully defined: there is one field per metal, and a stored table
/// missing any of them fails to deserialize (the loader then falls back to
/// the default table).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    #[serde(rename = "Gold")]
    pub gold: f64,
    #[serde(rename = "Silver")]
    pub silver: f64,
    #[serde(rename = "Platinum")]
    pub platinum: f64,
    #[serde(rename = "Palladium")]
    pub palladium: f64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            gold: 60.0,
            silver: 0.75,
            platinum: 30.0,
            palladium: 35.0,
        }
    }
}

impl PriceTable {
    /// USD per gram for `metal`.
    pub fn get(&self, metal: Metal) -> f64 {
        match metal {
            Metal::Gold => self.gold,
            Metal::Silver => self.silver,
            Metal::Platinum => self.platinum,
            Metal::Palladium => self.palladium,
        }
    }

    pub fn set(&mut self, metal: Metal, price_per_gram: f64) {
        let slot = match metal {
            Metal::Gold => &mut self.gold,
            Metal::Silver => &mut self.silver,
            Metal::Platinum => &mut self.platinum,
            Metal::Palladium => &mut self.palladium,
        };
        *slot = price_per_gram;
    }

    /// `(metal, price)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Metal, f64)> + '_ {
        Metal::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}

/// Convert a USD-per-troy-ounce rate to USD per gram.
pub fn ounce_rate_to_gram(ounce_rate: f64) -> f64 {
    ounce_rate / GRAMS_PER_TROY_OUNCE
}
