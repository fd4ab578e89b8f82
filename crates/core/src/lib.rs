pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use chrono::{DateTime, Local, TimeZone};
use models::{
    chart::{ChartSeries, HistorySnapshot},
    item::{EditRequest, Item},
    metal::Metal,
    number::to_num,
    price::PriceTable,
    view::DisplayModel,
};
use providers::traits::SpotPriceProvider;
use services::{
    history_service::HistoryService, inventory_service::InventoryService,
    price_service::PriceService, valuation_service::ValuationService,
    view_service::{format_amount, ViewService},
};
use storage::{manager::StorageManager, store::KeyValueStore};

use errors::CoreError;

/// Prompt shown before deleting an item.
pub const DELETE_ITEM_PROMPT: &str = "Delete this item?";

/// Outcome of [`MetalWorth::update_and_snapshot`].
#[derive(Debug)]
pub struct UpdateOutcome {
    /// New gold price per gram, or why the fetch failed (prices unchanged).
    pub fetch: Result<f64, CoreError>,
    /// Snapshot taken after the fetch settled, success or not.
    pub snapshot: HistorySnapshot,
}

/// Main entry point for the Metal Worth core library.
///
/// Owns the application state (items, prices, history) and the store they
/// are mirrored to. Every mutation persists the affected slice and
/// re-renders the display model before returning.
#[must_use]
pub struct MetalWorth<S: KeyValueStore> {
    store: S,
    items: Vec<Item>,
    prices: PriceTable,
    history: Vec<HistorySnapshot>,
    display: DisplayModel,
    inventory_service: InventoryService,
    valuation_service: ValuationService,
    price_service: PriceService,
    history_service: HistoryService,
    view_service: ViewService,
}

impl<S: KeyValueStore> std::fmt::Debug for MetalWorth<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetalWorth")
            .field("items", &self.items.len())
            .field("prices", &self.prices)
            .field("history", &self.history.len())
            .field("total", &self.display.total)
            .field("provider", &self.price_service.provider_name())
            .finish()
    }
}

impl<S: KeyValueStore> MetalWorth<S> {
    /// Hydrate state from `store` (falling back to defaults for anything
    /// missing or unreadable) and render once. No spot-price provider.
    pub fn open(store: S) -> Self {
        let items = StorageManager::load_items(&store);
        let history = StorageManager::load_history(&store);
        let prices = StorageManager::load_prices(&store);
        log::debug!(
            "Loaded {} items, {} snapshots",
            items.len(),
            history.len()
        );

        let mut tracker = Self {
            store,
            items,
            prices,
            history,
            display: DisplayModel::default(),
            inventory_service: InventoryService::new(),
            valuation_service: ValuationService::new(),
            price_service: PriceService::new(None),
            history_service: HistoryService::new(),
            view_service: ViewService::new(),
        };
        tracker.render();
        tracker
    }

    /// Attach a spot-price provider for [`update_spot_price`](Self::update_spot_price).
    pub fn with_provider(mut self, provider: Box<dyn SpotPriceProvider>) -> Self {
        self.price_service = PriceService::new(Some(provider));
        self
    }

    /// Give back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// The store state is mirrored to.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ── State accessors ─────────────────────────────────────────────

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    #[must_use]
    pub fn history(&self) -> &[HistorySnapshot] {
        &self.history
    }

    /// The model produced by the last render.
    #[must_use]
    pub fn display(&self) -> &DisplayModel {
        &self.display
    }

    /// The total as currently displayed (2 decimal places), read back as a
    /// number. This is what snapshots record.
    #[must_use]
    pub fn displayed_total(&self) -> f64 {
        to_num(self.display.total_display.parse().unwrap_or(0.0))
    }

    /// Value of the item at `position` under the current prices.
    #[must_use]
    pub fn value_of_item(&self, position: usize) -> Option<f64> {
        self.items
            .get(position)
            .map(|item| self.valuation_service.value_of_item(item, &self.prices))
    }

    /// Current position of the item with `id`.
    #[must_use]
    pub fn position_of(&self, id: uuid::Uuid) -> Option<usize> {
        self.inventory_service.position_of(&self.items, id)
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// Rebuild the display model from items and prices.
    pub fn render(&mut self) -> &DisplayModel {
        self.display = self.view_service.render(&self.items, &self.prices);
        &self.display
    }

    // ── Item actions ────────────────────────────────────────────────

    /// Validate and append an item. On failure nothing is stored or written.
    pub fn add_item(&mut self, metal: Metal, karat: f64, grams: f64) -> Result<uuid::Uuid, CoreError> {
        let id = self
            .inventory_service
            .add_item(&mut self.items, metal, karat, grams)?;
        log::debug!("Added {metal} {karat}k {grams}g");
        StorageManager::save_items(&mut self.store, &self.items);
        self.render();
        Ok(id)
    }

    /// Delete the item at `position` if `confirm` approves.
    ///
    /// Returns the removed item, or `None` when the user declined.
    pub fn delete_item<F>(&mut self, position: usize, confirm: F) -> Result<Option<Item>, CoreError>
    where
        F: FnOnce(&str) -> bool,
    {
        if position >= self.items.len() {
            return Err(CoreError::ItemNotFound(position));
        }
        if !confirm(DELETE_ITEM_PROMPT) {
            return Ok(None);
        }
        let removed = self.inventory_service.remove_item(&mut self.items, position)?;
        log::debug!("Deleted item at position {position}");
        StorageManager::save_items(&mut self.store, &self.items);
        self.render();
        Ok(Some(removed))
    }

    /// Replace the item at `position`. Invalid edits leave it untouched.
    pub fn edit_item(&mut self, position: usize, request: &EditRequest) -> Result<(), CoreError> {
        self.inventory_service
            .edit_item(&mut self.items, position, request)?;
        log::debug!("Edited item at position {position}");
        StorageManager::save_items(&mut self.store, &self.items);
        self.render();
        Ok(())
    }

    // ── Prices ──────────────────────────────────────────────────────

    /// Apply a hand-entered per-gram price, persist it and re-render.
    pub fn set_price(&mut self, metal: Metal, price_per_gram: f64) -> Result<(), CoreError> {
        self.price_service
            .set_manual_price(&mut self.prices, metal, price_per_gram)?;
        StorageManager::save_prices(&mut self.store, &self.prices);
        self.render();
        Ok(())
    }

    /// The price as shown in the editable field for `metal`.
    ///
    /// Rounded to 2 decimals for display; the table keeps full precision.
    #[must_use]
    pub fn price_input_value(&self, metal: Metal) -> String {
        format_amount(self.prices.get(metal))
    }

    /// Fetch the live gold price, store it as the new Gold entry and
    /// re-render.
    ///
    /// On failure the price table is left unchanged and the error is logged
    /// and returned for the front end to show.
    pub async fn update_spot_price(&mut self) -> Result<f64, CoreError> {
        match self.price_service.fetch_price_per_gram(Metal::Gold).await {
            Ok(per_gram) => {
                self.prices.set(Metal::Gold, per_gram);
                StorageManager::save_prices(&mut self.store, &self.prices);
                self.render();
                log::info!("Gold price updated to {per_gram:.2} USD/g");
                Ok(per_gram)
            }
            Err(e) => {
                log::error!("Failed to fetch gold price: {e}");
                Err(e)
            }
        }
    }

    /// The "update" action: fetch the gold price, then re-render, then take
    /// a snapshot. The last two happen whether or not the fetch succeeded.
    pub async fn update_and_snapshot(&mut self) -> UpdateOutcome {
        let fetch = self.update_spot_price().await;
        self.render();
        let snapshot = self.snapshot();
        UpdateOutcome { fetch, snapshot }
    }

    // ── History ─────────────────────────────────────────────────────

    /// Record the displayed total, stamped with the local time.
    pub fn snapshot(&mut self) -> HistorySnapshot {
        self.snapshot_at(&Local::now())
    }

    /// Record the displayed total, stamped with `at`.
    pub fn snapshot_at<Tz: TimeZone>(&mut self, at: &DateTime<Tz>) -> HistorySnapshot
    where
        Tz::Offset: std::fmt::Display,
    {
        let stamped = HistorySnapshot::at(at, self.displayed_total());
        let entry = self
            .history_service
            .snapshot(&mut self.history, stamped.timestamp, stamped.value);
        StorageManager::save_history(&mut self.store, &self.history);
        entry
    }

    /// Clear all snapshots after confirmation. An empty history is a no-op
    /// and `confirm` is never called. Returns whether anything was cleared.
    pub fn reset_history<F>(&mut self, confirm: F) -> bool
    where
        F: FnOnce(&str) -> bool,
    {
        let cleared = self.history_service.reset(&mut self.history, confirm);
        if cleared {
            StorageManager::save_history(&mut self.store, &self.history);
            log::debug!("History cleared");
        }
        cleared
    }

    /// Backing series for the value-over-time chart.
    #[must_use]
    pub fn chart_series(&self) -> ChartSeries {
        self.history_service.chart_series(&self.history)
    }
}
