// Plain-text formatting of a render, for stdout snapshots and logs

use crate::grid::{Placement, Render};

/// Grid container header with its declarations
pub fn format_grid_header(render: &Render) -> String {
    let mut out = String::new();
    out.push_str(&"=".repeat(60));
    out.push('\n');
    out.push_str(&format!(
        "MASONRY - {} blocks on {} columns\n",
        render.tiles.len(),
        render.template.columns
    ));
    out.push_str(&"=".repeat(60));
    out.push('\n');
    for declaration in render.template.declarations() {
        out.push_str(&format!("  {}\n", declaration));
    }
    out
}

/// One line per tile: 1-based number, text content and declarations
pub fn format_tile_list(render: &Render) -> String {
    render
        .tiles
        .iter()
        .map(|tile| {
            let declarations: Vec<String> =
                tile.declarations().iter().map(|d| d.to_string()).collect();
            format!(
                "{:>4} [{:>3}] {}\n",
                tile.index + 1,
                tile.text(),
                declarations.join(" ")
            )
        })
        .collect()
}

/// Column headers for a placement map
pub fn format_column_headers(columns: u32) -> String {
    let mut out = String::from("    ");
    for col in 0..columns {
        out.push_str(&format!(" {:3}", col));
    }
    out
}

/// Row prefix for placement map rows
pub fn format_row_prefix(row: u32) -> String {
    format!("{:3}:", row)
}

/// Placement map: every cell shows the 1-based number of the tile covering it
pub fn format_placement(placement: &Placement) -> String {
    let mut out = format_column_headers(placement.columns);
    out.push('\n');
    for row in 0..placement.rows {
        out.push_str(&format_row_prefix(row));
        for col in 0..placement.columns {
            match placement.tile_at(row, col) {
                Some(index) => out.push_str(&format!(" {:3}", index + 1)),
                None => out.push_str("   ."),
            }
        }
        out.push('\n');
    }
    out
}
