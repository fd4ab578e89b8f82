use std::str::FromStr;

use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::item::{EditRequest, Item, MAX_KARAT, MIN_KARAT};
use crate::models::metal::Metal;

/// Validation and mutation rules for the ordered item list.
///
/// Pure business logic, no I/O. Every rejected call leaves the list exactly
/// as it was.
pub struct InventoryService;

impl InventoryService {
    pub fn new() -> Self {
        Self
    }

    /// Karat must be a finite number in `[1, 24]`.
    pub fn validate_karat(&self, karat: f64) -> Result<(), CoreError> {
        if !karat.is_finite() || !(MIN_KARAT..=MAX_KARAT).contains(&karat) {
            return Err(CoreError::InvalidKarat(karat));
        }
        Ok(())
    }

    /// Grams must be a finite number greater than 0.
    pub fn validate_grams(&self, grams: f64) -> Result<(), CoreError> {
        if !grams.is_finite() || grams <= 0.0 {
            return Err(CoreError::InvalidGrams(grams));
        }
        Ok(())
    }

    /// Append a new item after validating karat, then grams.
    pub fn add_item(
        &self,
        items: &mut Vec<Item>,
        metal: Metal,
        karat: f64,
        grams: f64,
    ) -> Result<Uuid, CoreError> {
        self.validate_karat(karat)?;
        self.validate_grams(grams)?;
        let item = Item::new(metal, karat, grams);
        let id = item.id;
        items.push(item);
        Ok(id)
    }

    /// Remove the item at `position`; later items shift down by one.
    pub fn remove_item(&self, items: &mut Vec<Item>, position: usize) -> Result<Item, CoreError> {
        if position >= items.len() {
            return Err(CoreError::ItemNotFound(position));
        }
        Ok(items.remove(position))
    }

    /// Replace the item at `position` with the edited values.
    ///
    /// Unset request fields keep the current value. Any invalid field rejects
    /// the whole edit with the generic [`CoreError::InvalidEdit`].
    pub fn edit_item(
        &self,
        items: &mut [Item],
        position: usize,
        request: &EditRequest,
    ) -> Result<(), CoreError> {
        let current = items
            .get(position)
            .ok_or(CoreError::ItemNotFound(position))?;

        let metal = match &request.metal {
            Some(name) => Metal::from_str(name).map_err(|_| CoreError::InvalidEdit)?,
            None => current.metal,
        };
        let karat = request.karat.unwrap_or(current.karat);
        let grams = request.grams.unwrap_or(current.grams);
        let id = current.id;

        if self.validate_karat(karat).is_err() || self.validate_grams(grams).is_err() {
            return Err(CoreError::InvalidEdit);
        }

        items[position] = Item {
            id,
            metal,
            karat,
            grams,
        };
        Ok(())
    }

    /// Current position of the item with `id`, if it is still in the list.
    pub fn position_of(&self, items: &[Item], id: Uuid) -> Option<usize> {
        items.iter().position(|item| item.id == id)
    }
}

impl Default for InventoryService {
    fn default() -> Self {
        Self::new()
    }
}
