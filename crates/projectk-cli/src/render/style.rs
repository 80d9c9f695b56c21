//! Shared comfy-table styling.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use projectk_model::DeckColor;

pub(crate) fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
}

pub(crate) fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub(crate) fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub(crate) fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

/// Cell painted in the deck colour, or dimmed when the deck has none.
pub(crate) fn deck_cell<T: ToString>(value: T, color: Option<DeckColor>) -> Cell {
    match color {
        Some(color) => Cell::new(value).fg(table_color(color)),
        None => dim_cell(value),
    }
}

pub(crate) fn table_color(color: DeckColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb { r, g, b }
}

/// Integers without decimals, everything else with two. NaN prints as `-`.
pub(crate) fn format_value(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_drop_zero_decimals() {
        assert_eq!(format_value(2.0), "2");
        assert_eq!(format_value(1.5), "1.50");
        assert_eq!(format_value(f64::NAN), "-");
    }

    #[test]
    fn deck_colours_map_to_rgb() {
        assert_eq!(
            table_color(DeckColor::Orange),
            Color::Rgb {
                r: 255,
                g: 165,
                b: 0
            }
        );
    }
}
