use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::metal::Metal;
use super::number::{lenient_f64, missing_number};

/// Lowest karat accepted on add/edit.
pub const MIN_KARAT: f64 = 1.0;
/// Highest karat accepted on add/edit (pure metal).
pub const MAX_KARAT: f64 = 24.0;

/// A single piece in the collection.
///
/// Position in the inventory is the mutation key; `id` is a stable handle
/// for callers that need to follow an item across deletions. Records written
/// before ids existed get a fresh one on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub metal: Metal,

    /// Fineness on the 1–24 scale.
    #[serde(deserialize_with = "lenient_f64", default = "missing_number")]
    pub karat: f64,

    /// Weight in grams.
    #[serde(deserialize_with = "lenient_f64", default = "missing_number")]
    pub grams: f64,
}

impl Item {
    pub fn new(metal: Metal, karat: f64, grams: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            metal,
            karat,
            grams,
        }
    }
}

/// A full replacement for an existing item, validated as a unit.
///
/// `None` keeps the item's current value for that field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditRequest {
    pub metal: Option<String>,
    pub karat: Option<f64>,
    pub grams: Option<f64>,
}

impl EditRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metal(mut self, metal: impl Into<String>) -> Self {
        self.metal = Some(metal.into());
        self
    }

    pub fn karat(mut self, karat: f64) -> Self {
        self.karat = Some(karat);
        self
    }

    pub fn grams(mut self, grams: f64) -> Self {
        self.grams = Some(grams);
        self
    }
}
