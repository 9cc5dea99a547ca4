// Grid module - template resolution, per-render tiles and their placement

pub mod placement;
pub mod template;
pub mod tile;

pub use placement::{PlacedTile, Placement};
pub use template::{Declaration, GridTemplate, FALLBACK_COLUMNS};
pub use tile::{render, Render, Rgb, Tile};
