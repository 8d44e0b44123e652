use comfy_table::{Attribute, Cell, CellAlignment, Table, modifiers, presets};

use crate::core::{axis::EnergyAxis, overlay::Overlay};

const BAR_WIDTH: usize = 20;

/// Render the overlay: one row per recent reading, newest last and bold, with
/// a bar proportional to the reading's position on the energy axis.
pub fn build_overlay_table(overlay: &Overlay, axis: EnergyAxis) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec![
        "Time".to_string(),
        "Energy output".to_string(),
        "Cost savings".to_string(),
        format!("{} .. {}", axis.start, axis.end),
    ]);
    let n_rows = overlay.history().len();
    for (index, sample) in overlay.history().iter().enumerate() {
        let mut row = vec![
            Cell::new(&sample.time_label),
            Cell::new(sample.energy_output).set_alignment(CellAlignment::Right),
            Cell::new(sample.cost_savings).set_alignment(CellAlignment::Right),
            Cell::new(bar(axis.position(sample.energy_output))),
        ];
        if index + 1 == n_rows {
            row = row.into_iter().map(|cell| cell.add_attribute(Attribute::Bold)).collect();
        }
        table.add_row(row);
    }
    table
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
fn bar(position: f64) -> String {
    "█".repeat((position * BAR_WIDTH as f64).round() as usize)
}
