use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CoreError;
use crate::models::chart::HistorySnapshot;
use crate::models::item::Item;
use crate::models::price::PriceTable;

use super::store::KeyValueStore;

/// Storage key for the ordered item list.
pub const ITEMS_KEY: &str = "mw_items_v1";
/// Storage key for the snapshot history.
pub const HISTORY_KEY: &str = "mw_history_v1";
/// Storage key for the per-gram price table.
pub const PRICES_KEY: &str = "mw_prices_v1";

/// JSON persistence over a [`KeyValueStore`].
///
/// Writes are fire-and-forget: a failed write is logged, never returned.
/// Reads never fail: a missing key, a stored `null` or an unreadable blob all
/// yield the caller's fallback, and the stored value is left as it was.
pub struct StorageManager;

impl StorageManager {
    /// Serialize `value` as JSON and store it under `key`.
    pub fn save<S, T>(store: &mut S, key: &str, value: &T)
    where
        S: KeyValueStore + ?Sized,
        T: Serialize + ?Sized,
    {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                let err = CoreError::Serialization(format!("{key}: {e}"));
                log::error!("Failed to write {key}: {err}");
                return;
            }
        };
        if let Err(e) = store.set(key, &json) {
            log::error!("Failed to write {key}: {e}");
        }
    }

    /// Load and deserialize the value under `key`, or return `fallback`.
    pub fn load<S, T>(store: &S, key: &str, fallback: T) -> T
    where
        S: KeyValueStore + ?Sized,
        T: DeserializeOwned,
    {
        let raw = match store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback,
            Err(e) => {
                log::warn!("Failed to read {key}, using default: {e}");
                return fallback;
            }
        };
        match serde_json::from_str::<Option<T>>(&raw) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(e) => {
                log::warn!("Stored {key} is unreadable, using default: {e}");
                fallback
            }
        }
    }

    pub fn load_items<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Item> {
        Self::load(store, ITEMS_KEY, Vec::new())
    }

    pub fn save_items<S: KeyValueStore + ?Sized>(store: &mut S, items: &[Item]) {
        Self::save(store, ITEMS_KEY, items)
    }

    pub fn load_history<S: KeyValueStore + ?Sized>(store: &S) -> Vec<HistorySnapshot> {
        Self::load(store, HISTORY_KEY, Vec::new())
    }

    pub fn save_history<S: KeyValueStore + ?Sized>(store: &mut S, history: &[HistorySnapshot]) {
        Self::save(store, HISTORY_KEY, history)
    }

    pub fn load_prices<S: KeyValueStore + ?Sized>(store: &S) -> PriceTable {
        Self::load(store, PRICES_KEY, PriceTable::default())
    }

    pub fn save_prices<S: KeyValueStore + ?Sized>(store: &mut S, prices: &PriceTable) {
        Self::save(store, PRICES_KEY, prices)
    }
}
