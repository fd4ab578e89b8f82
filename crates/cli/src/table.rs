use std::fmt::Write;

use metal_worth_core::models::metal::Metal;
use metal_worth_core::models::view::DisplayModel;
use metal_worth_core::storage::store::KeyValueStore;
use metal_worth_core::MetalWorth;

/// Item table plus total. Item numbers are 1-based.
pub fn render(model: &DisplayModel) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<10} {:>6} {:>12} {:>14}",
        "#", "Metal", "Karat", "Grams", "Value"
    );
    if model.rows.is_empty() {
        let _ = writeln!(out, "     (no items)");
    }
    for row in &model.rows {
        let _ = writeln!(
            out,
            "{:>3}  {:<10} {:>6} {:>12} {:>14}",
            row.position + 1,
            row.metal.name(),
            row.karat,
            row.grams_display,
            row.value_display
        );
    }
    let _ = writeln!(out, "Total: ${}", model.total_display);
    out
}

/// Per-gram prices as shown in the editable fields.
pub fn render_prices<S: KeyValueStore>(tracker: &MetalWorth<S>) -> String {
    let mut out = String::from("Prices (USD/g):");
    for metal in Metal::ALL {
        let _ = write!(out, "  {}: {}", metal.name(), tracker.price_input_value(metal));
    }
    out.push('\n');
    out
}
