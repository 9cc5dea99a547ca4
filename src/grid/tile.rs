// Tiles - derived per render, never stored in the configuration

use crate::config::{coin_flip, MasonryConfig};
use crate::grid::template::{Declaration, GridTemplate};
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// 24-bit background colour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn from_u32(value: u32) -> Self {
        Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_u32(rng.gen_range(0..=0x00FF_FFFF))
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Perceived brightness in 0..=255, used to pick a readable label colour
    pub fn luma(&self) -> u8 {
        ((299 * self.0 as u32 + 587 * self.1 as u32 + 114 * self.2 as u32) / 1000) as u8
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub index: u32,
    pub color: Rgb,
    pub row_span: Option<u32>,
    pub column_span: Option<u32>,
    pub radius: Option<u32>,
    pub label: Option<String>,
}

/// A span is declared only when it exceeds one and its own coin flip succeeds
fn draw_span<R: Rng + ?Sized>(rng: &mut R, span: u32) -> Option<u32> {
    let flip = coin_flip(rng);
    (flip && span > 1).then_some(span)
}

impl Tile {
    pub fn derive<R: Rng + ?Sized>(index: u32, config: &MasonryConfig, rng: &mut R) -> Self {
        let color = Rgb::random(rng);
        let row_span = draw_span(rng, config.row_span);
        let column_span = draw_span(rng, config.column_span);
        Self {
            index,
            color,
            row_span,
            column_span,
            radius: (config.tile_radius > 0).then_some(config.tile_radius),
            label: config.show_numbers.then(|| (index + 1).to_string()),
        }
    }

    pub fn rows(&self) -> u32 {
        self.row_span.unwrap_or(1)
    }

    pub fn columns(&self) -> u32 {
        self.column_span.unwrap_or(1)
    }

    pub fn text(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    pub fn declarations(&self) -> Vec<Declaration> {
        let mut declarations = vec![Declaration::new("background-color", self.color.hex())];
        if let Some(radius) = self.radius {
            declarations.push(Declaration::new("border-radius", format!("{}px", radius)));
        }
        if let Some(span) = self.row_span {
            declarations.push(Declaration::new("grid-row", format!("span {}", span)));
        }
        if let Some(span) = self.column_span {
            declarations.push(Declaration::new("grid-column", format!("span {}", span)));
        }
        declarations
    }
}

/// One projection of a configuration onto the grid
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Render {
    pub config: MasonryConfig,
    pub template: GridTemplate,
    pub tiles: Vec<Tile>,
}

/// Projects the configuration. Colours and span flips are drawn fresh on every call.
pub fn render<R: Rng + ?Sized>(config: &MasonryConfig, rng: &mut R) -> Render {
    let tiles = (0..config.min_value)
        .map(|index| Tile::derive(index, config, rng))
        .collect();
    Render {
        config: *config,
        template: GridTemplate::from_config(config),
        tiles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tile_count_and_numbering() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = MasonryConfig {
            min_value: 37,
            ..MasonryConfig::default()
        };
        let render = render(&config, &mut rng);
        assert_eq!(render.tiles.len(), 37);
        for (i, tile) in render.tiles.iter().enumerate() {
            assert_eq!(tile.label.as_deref(), Some((i + 1).to_string().as_str()));
        }
    }

    #[test]
    fn test_hidden_numbers_render_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = MasonryConfig::default().toggle_show_numbers();
        let render = render(&config, &mut rng);
        assert!(render.tiles.iter().all(|t| t.text().is_empty()));
    }

    #[test]
    fn test_unit_spans_never_declared() {
        let mut rng = StdRng::seed_from_u64(5);
        let render = render(&MasonryConfig::default(), &mut rng);
        for tile in &render.tiles {
            assert_eq!(tile.row_span, None);
            assert_eq!(tile.column_span, None);
            assert_eq!(tile.radius, None);
            assert_eq!(tile.declarations().len(), 1);
        }
    }

    #[test]
    fn test_spans_are_drawn_per_tile() {
        let mut rng = StdRng::seed_from_u64(9);
        let config = MasonryConfig {
            row_span: 3,
            column_span: 2,
            min_value: 200,
            ..MasonryConfig::default()
        };
        let render = render(&config, &mut rng);
        let spanned_rows = render.tiles.iter().filter(|t| t.row_span.is_some()).count();
        let spanned_cols = render.tiles.iter().filter(|t| t.column_span.is_some()).count();
        assert!(spanned_rows > 0 && spanned_rows < 200);
        assert!(spanned_cols > 0 && spanned_cols < 200);
        assert!(render
            .tiles
            .iter()
            .all(|t| t.row_span.map_or(true, |s| s == 3) && t.column_span.map_or(true, |s| s == 2)));
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb::from_u32(0x0a0b0c).hex(), "#0a0b0c");
        assert_eq!(Rgb(255, 255, 255).luma(), 255);
        assert_eq!(Rgb(0, 0, 0).luma(), 0);
    }
}
