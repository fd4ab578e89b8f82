use std::fmt::Write;

use metal_worth_core::models::chart::ChartSeries;

/// Bar width used by the `history` command.
pub const DEFAULT_WIDTH: usize = 40;

/// Draw the series as one labelled bar per snapshot, scaled to the largest
/// value, with a sparkline of the trend underneath.
pub fn render(series: &ChartSeries, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", series.label);
    if series.is_empty() {
        let _ = writeln!(out, "  (no snapshots)");
        return out;
    }

    let max = series.data.iter().copied().fold(0.0_f64, f64::max);
    let label_width = series.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    for (label, value) in series.labels.iter().zip(&series.data) {
        let filled = if max > 0.0 {
            ((value.max(0.0) / max) * width as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "  {label:<label_width$} | {:<width$} {value:.2}",
            "█".repeat(filled)
        );
    }
    let _ = writeln!(out, "  {}", sparkline(&series.data));
    out
}

/// One block character per value, low to high.
pub fn sparkline(data: &[f64]) -> String {
    const TICKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    data.iter()
        .map(|v| {
            if span <= 0.0 {
                TICKS[TICKS.len() / 2]
            } else {
                let idx = ((v - min) / span * (TICKS.len() - 1) as f64).round() as usize;
                TICKS[idx.min(TICKS.len() - 1)]
            }
        })
        .collect()
}
