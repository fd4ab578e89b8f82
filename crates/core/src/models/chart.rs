use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use super::number::lenient_f64;

/// Label shown on the value-over-time chart.
pub const CHART_LABEL: &str = "Collection Worth ($)";

/// Format used for snapshot timestamps, e.g. `10/19/2026, 3:04:05 PM`.
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// One manually recorded (time, total value) pair.
///
/// Records only the aggregate at the moment it was taken; it cannot be
/// recomputed if items or prices change later. Persisted as `{"t", "v"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// Display-formatted local time.
    #[serde(rename = "t")]
    pub timestamp: String,

    /// Collection total in USD.
    #[serde(rename = "v", deserialize_with = "lenient_f64")]
    pub value: f64,
}

impl HistorySnapshot {
    pub fn new(timestamp: impl Into<String>, value: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            value,
        }
    }

    /// Build a snapshot stamped with `at`, formatted with [`TIMESTAMP_FORMAT`].
    pub fn at<Tz: TimeZone>(at: &DateTime<Tz>, value: f64) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self::new(at.format(TIMESTAMP_FORMAT).to_string(), value)
    }
}

/// Backing series for the history line chart.
///
/// The core computes the numbers; the front end only draws them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    /// X axis: snapshot timestamps.
    pub labels: Vec<String>,
    /// Y axis: snapshot totals.
    pub data: Vec<f64>,
}

impl ChartSeries {
    pub fn from_history(history: &[HistorySnapshot]) -> Self {
        Self {
            label: CHART_LABEL.to_string(),
            labels: history.iter().map(|h| h.timestamp.clone()).collect(),
            data: history.iter().map(|h| h.value).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for ChartSeries {
    fn default() -> Self {
        Self::from_history(&[])
    }
}
