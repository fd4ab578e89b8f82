use thiserror::Error;

/// Unified error type for the entire metal-worth-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Validation ──────────────────────────────────────────────────
    #[error("Please enter a karat between 1 and 24.")]
    InvalidKarat(f64),

    #[error("Please enter grams > 0.")]
    InvalidGrams(f64),

    #[error("Unknown metal: {0}. Supported: Gold, Silver, Platinum, Palladium")]
    UnknownMetal(String),

    #[error("Invalid edit. No changes saved.")]
    InvalidEdit,

    #[error("Invalid price for {metal}: {value}")]
    InvalidPrice { metal: String, value: f64 },

    #[error("Item not found at position {0}")]
    ItemNotFound(usize),

    // ── Storage ─────────────────────────────────────────────────────
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("No API key configured for {0}")]
    MissingApiKey(String),

    #[error("No spot price provider configured")]
    NoProvider,

    #[error("Rate {symbol} not available from {provider}")]
    RateNotAvailable { provider: String, symbol: String },
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors carry the full URL, and the API key travels in the query.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
