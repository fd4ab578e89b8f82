use crate::models::chart::{ChartSeries, HistorySnapshot};

/// Prompt shown before clearing the history.
pub const RESET_HISTORY_PROMPT: &str = "Clear chart history snapshots? Your items will remain.";

/// Append-only log of collection totals over time.
pub struct HistoryService;

impl HistoryService {
    pub fn new() -> Self {
        Self
    }

    /// Append a snapshot of `total` stamped with `timestamp`.
    pub fn snapshot(
        &self,
        history: &mut Vec<HistorySnapshot>,
        timestamp: impl Into<String>,
        total: f64,
    ) -> HistorySnapshot {
        let entry = HistorySnapshot::new(timestamp, total);
        history.push(entry.clone());
        entry
    }

    /// Clear the whole log after confirmation.
    ///
    /// An empty log is left alone without asking. Returns whether anything
    /// was cleared.
    pub fn reset<F>(&self, history: &mut Vec<HistorySnapshot>, confirm: F) -> bool
    where
        F: FnOnce(&str) -> bool,
    {
        if history.is_empty() || !confirm(RESET_HISTORY_PROMPT) {
            return false;
        }
        history.clear();
        true
    }

    pub fn chart_series(&self, history: &[HistorySnapshot]) -> ChartSeries {
        ChartSeries::from_history(history)
    }
}

impl Default for HistoryService {
    fn default() -> Self {
        Self::new()
    }
}
