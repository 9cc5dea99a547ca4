// Masonry configuration - the single record every control edits
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MIN_VALUE_FLOOR: u32 = 20;
pub const SPAN_FLOOR: u32 = 1;
pub const PIXEL_FLOOR: u32 = 0;

/// Display parameters of the masonry grid.
///
/// Values are replaced whole; every transition returns a new record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasonryConfig {
    pub show_numbers: bool,
    pub row_span: u32,
    pub column_span: u32,
    pub tile_radius: u32,
    pub gap: u32,
    pub repeat: u32,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub min_value: u32,
}

impl Default for MasonryConfig {
    fn default() -> Self {
        Self {
            show_numbers: true,
            row_span: 1,
            column_span: 1,
            tile_radius: 0,
            gap: 0,
            repeat: 12,
            looping: false,
            min_value: MIN_VALUE_FLOOR,
        }
    }
}

/// Numeric fields driven by a -/+ stepper
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    MinValue,
    Gap,
    TileRadius,
    Repeat,
    RowSpan,
    ColumnSpan,
}

impl Field {
    /// Steppers in panel order
    pub const ALL: [Field; 6] = [
        Field::MinValue,
        Field::Gap,
        Field::TileRadius,
        Field::Repeat,
        Field::RowSpan,
        Field::ColumnSpan,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::MinValue => "Min. number of blocks:",
            Field::Gap => "Gap (px):",
            Field::TileRadius => "Border radius (px):",
            Field::Repeat => "Repeat:",
            Field::RowSpan => "Row span:",
            Field::ColumnSpan => "Column span:",
        }
    }

    /// Lowest value a decrement may leave behind
    pub fn floor(&self) -> u32 {
        match self {
            Field::MinValue => MIN_VALUE_FLOOR,
            Field::Gap | Field::TileRadius | Field::Repeat => PIXEL_FLOOR,
            Field::RowSpan | Field::ColumnSpan => SPAN_FLOOR,
        }
    }
}

/// `ceil(random() * range) + offset` over a uniform draw in [0, 1).
///
/// Yields `offset + 1..=offset + range`; `offset` itself only on an exact zero draw.
pub fn ceil_draw<R: Rng + ?Sized>(rng: &mut R, range: u32, offset: u32) -> u32 {
    let draw: f64 = rng.gen();
    (draw * range as f64).ceil() as u32 + offset
}

/// Fair coin, true when the draw exceeds one half
pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen::<f64>() > 0.5
}

impl MasonryConfig {
    pub fn value(&self, field: Field) -> u32 {
        match field {
            Field::MinValue => self.min_value,
            Field::Gap => self.gap,
            Field::TileRadius => self.tile_radius,
            Field::Repeat => self.repeat,
            Field::RowSpan => self.row_span,
            Field::ColumnSpan => self.column_span,
        }
    }

    pub fn with_value(self, field: Field, value: u32) -> Self {
        let mut next = self;
        match field {
            Field::MinValue => next.min_value = value,
            Field::Gap => next.gap = value,
            Field::TileRadius => next.tile_radius = value,
            Field::Repeat => next.repeat = value,
            Field::RowSpan => next.row_span = value,
            Field::ColumnSpan => next.column_span = value,
        }
        next
    }

    pub fn toggle_show_numbers(self) -> Self {
        Self {
            show_numbers: !self.show_numbers,
            ..self
        }
    }

    pub fn toggle_loop(self) -> Self {
        Self {
            looping: !self.looping,
            ..self
        }
    }

    pub fn increment(self, field: Field) -> Self {
        let value = self.value(field).saturating_add(1);
        self.with_value(field, value)
    }

    /// Step a field down by one; `None` when it already sits on its floor.
    pub fn decrement(self, field: Field) -> Option<Self> {
        let value = self.value(field);
        if value > field.floor() {
            Some(self.with_value(field, value - 1))
        } else {
            None
        }
    }

    /// Draws every field independently. Loop mode is always left off.
    pub fn randomize<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            show_numbers: coin_flip(rng),
            row_span: ceil_draw(rng, 20, 1),
            column_span: ceil_draw(rng, 20, 1),
            tile_radius: ceil_draw(rng, 20, 1),
            gap: ceil_draw(rng, 20, 1),
            repeat: ceil_draw(rng, 20, 4),
            looping: false,
            min_value: ceil_draw(rng, 100, 20),
        }
    }

    /// Redraws the tile count only
    pub fn regenerate<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        Self {
            min_value: ceil_draw(rng, 100, 20),
            ..self
        }
    }

    pub fn reset() -> Self {
        Self::default()
    }
}
