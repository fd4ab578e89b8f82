pub mod traits;

// API provider implementations
pub mod metal_price_api;
