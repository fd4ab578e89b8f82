use crate::models::item::Item;
use crate::models::price::PriceTable;
use crate::models::view::{DisplayModel, ItemRow};

use super::valuation_service::ValuationService;

/// Turns (items, prices) into a [`DisplayModel`]. No diffing; every call is
/// a full rebuild.
pub struct ViewService {
    valuation: ValuationService,
}

impl ViewService {
    pub fn new() -> Self {
        Self {
            valuation: ValuationService::new(),
        }
    }

    pub fn render(&self, items: &[Item], prices: &PriceTable) -> DisplayModel {
        let rows: Vec<ItemRow> = items
            .iter()
            .enumerate()
            .map(|(position, item)| {
                let value = self.valuation.value_of_item(item, prices);
                ItemRow {
                    position,
                    metal: item.metal,
                    karat: item.karat,
                    grams: item.grams,
                    value,
                    grams_display: format_grams(item.grams),
                    value_display: format_dollars(value),
                }
            })
            .collect();

        let total = rows.iter().map(|r| r.value).sum();
        DisplayModel {
            rows,
            total,
            total_display: format_amount(total),
        }
    }
}

impl Default for ViewService {
    fn default() -> Self {
        Self::new()
    }
}

/// `12.5` → `"12.500"`.
pub fn format_grams(grams: f64) -> String {
    format!("{grams:.3}")
}

/// `600.0` → `"600.00"`.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// `600.0` → `"$600.00"`.
pub fn format_dollars(amount: f64) -> String {
    format!("${amount:.2}")
}
