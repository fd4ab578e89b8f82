use serde::{Deserialize, Serialize};

use super::metal::Metal;

/// One table row, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRow {
    /// Position in the inventory; the key for edit/delete controls.
    pub position: usize,
    pub metal: Metal,
    pub karat: f64,
    pub grams: f64,
    pub value: f64,
    /// Grams to 3 decimal places.
    pub grams_display: String,
    /// Dollar value with `$` prefix and 2 decimal places.
    pub value_display: String,
}

/// Everything the front end shows for the inventory: rows plus total.
///
/// Rebuilt from scratch on every render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayModel {
    pub rows: Vec<ItemRow>,
    pub total: f64,
    /// Total to 2 decimal places, without a currency sign.
    pub total_display: String,
}
