// Display module - terminal drawing, control panel and text formatting
pub mod formatters;
pub mod panel;
pub mod tui;

pub use formatters::{format_grid_header, format_placement, format_tile_list};
pub use panel::{hit_test, Control};
pub use tui::{panel_area, render_main_ui};
