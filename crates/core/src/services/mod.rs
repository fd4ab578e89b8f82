pub mod history_service;
pub mod inventory_service;
pub mod price_service;
pub mod valuation_service;
pub mod view_service;
