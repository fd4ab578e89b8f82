pub mod chart;
pub mod item;
pub mod metal;
pub mod number;
pub mod price;
pub mod settings;
pub mod view;
