// Placement - row-major sparse auto-placement of spanned tiles

use crate::grid::tile::Tile;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlacedTile {
    pub index: u32,
    pub row: u32,
    pub column: u32,
    pub row_span: u32,
    pub column_span: u32,
}

impl PlacedTile {
    pub fn contains(&self, row: u32, column: u32) -> bool {
        row >= self.row
            && row < self.row + self.row_span
            && column >= self.column
            && column < self.column + self.column_span
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub columns: u32,
    pub rows: u32,
    pub tiles: Vec<PlacedTile>,
}

/// Occupancy of the implicit grid; rows are appended on demand
struct Occupancy {
    columns: usize,
    cells: Vec<Vec<bool>>,
}

impl Occupancy {
    fn new(columns: usize) -> Self {
        Self {
            columns,
            cells: Vec::new(),
        }
    }

    fn is_free(&self, row: usize, column: usize, rows: usize, columns: usize) -> bool {
        (row..row + rows).all(|r| {
            self.cells
                .get(r)
                .map_or(true, |cells| cells[column..column + columns].iter().all(|c| !c))
        })
    }

    fn fill(&mut self, row: usize, column: usize, rows: usize, columns: usize) {
        while self.cells.len() < row + rows {
            self.cells.push(vec![false; self.columns]);
        }
        for cells in &mut self.cells[row..row + rows] {
            for cell in &mut cells[column..column + columns] {
                *cell = true;
            }
        }
    }
}

impl Placement {
    /// Places tiles in index order on `columns` tracks.
    ///
    /// The cursor only moves forward, so holes left behind by tall tiles stay
    /// empty. Column spans wider than the grid are clamped to its width.
    pub fn compute(tiles: &[Tile], columns: u32) -> Self {
        let columns = columns.max(1);
        let width = columns as usize;
        let mut occupancy = Occupancy::new(width);
        let mut placed = Vec::with_capacity(tiles.len());
        let (mut cursor_row, mut cursor_column) = (0usize, 0usize);

        for tile in tiles {
            let span_columns = (tile.columns() as usize).clamp(1, width);
            let span_rows = (tile.rows() as usize).max(1);

            loop {
                if cursor_column + span_columns > width {
                    cursor_row += 1;
                    cursor_column = 0;
                    continue;
                }
                if occupancy.is_free(cursor_row, cursor_column, span_rows, span_columns) {
                    break;
                }
                cursor_column += 1;
            }

            occupancy.fill(cursor_row, cursor_column, span_rows, span_columns);
            placed.push(PlacedTile {
                index: tile.index,
                row: cursor_row as u32,
                column: cursor_column as u32,
                row_span: span_rows as u32,
                column_span: span_columns as u32,
            });
            cursor_column += span_columns;
        }

        Self {
            columns,
            rows: occupancy.cells.len() as u32,
            tiles: placed,
        }
    }

    /// Index of the tile covering a cell, if any
    pub fn tile_at(&self, row: u32, column: u32) -> Option<u32> {
        self.tiles
            .iter()
            .find(|t| t.contains(row, column))
            .map(|t| t.index)
    }
}
