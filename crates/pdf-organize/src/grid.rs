//! Grid geometry for the organizer
//!
//! Maps a linear page order onto a fixed number of columns and maps a pointer
//! position back to the index a dragged card should move to.

use crate::collection::{PageCollection, PageId};
use crate::constants::{CELL_SPACING, FALLBACK_CELL_SIZE, GRID_COLUMNS, MIN_MEASURED_CELL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

/// Pixel footprint of one grid cell, spacing included
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

impl CellSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Footprint derived from a measured card, falling back per axis when the
    /// card has not been laid out yet.
    pub fn from_card(card_width: f32, card_height: f32) -> Self {
        let width = card_width + CELL_SPACING;
        let height = card_height + CELL_SPACING;
        Self {
            width: if width < MIN_MEASURED_CELL {
                FALLBACK_CELL_SIZE.0
            } else {
                width
            },
            height: if height < MIN_MEASURED_CELL {
                FALLBACK_CELL_SIZE.1
            } else {
                height
            },
        }
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::new(FALLBACK_CELL_SIZE.0, FALLBACK_CELL_SIZE.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(GRID_COLUMNS)
    }
}

impl GridLayout {
    /// A zero column count is bumped to one.
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_of(&self, index: usize) -> GridCell {
        GridCell {
            row: index / self.columns,
            col: index % self.columns,
        }
    }

    pub fn index_of(&self, cell: GridCell) -> usize {
        cell.row * self.columns + cell.col
    }

    /// Rows needed to show `count` items
    pub fn rows_for(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }

    /// Cells for every index in `0..count`, in order
    pub fn cells(&self, count: usize) -> impl Iterator<Item = GridCell> + '_ {
        (0..count).map(move |i| self.cell_of(i))
    }

    /// Index a card dropped at `(x, y)` (relative to the grid origin) lands on.
    ///
    /// `None` when there is nothing to drop onto.
    pub fn target_index(&self, x: f32, y: f32, cell: CellSize, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let col = (x / cell.width).floor().max(0.0) as usize;
        let col = col.min(self.columns - 1);
        let row = (y / cell.height).floor().max(0.0) as usize;
        let index = row.saturating_mul(self.columns).saturating_add(col);
        Some(index.min(count - 1))
    }
}

/// Drag-and-drop bookkeeping for one organizer grid
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DragState {
    dragging: Option<PageId>,
}

impl DragState {
    pub fn start(&mut self, id: PageId) {
        self.dragging = Some(id);
    }

    pub fn stop(&mut self) {
        self.dragging = None;
    }

    pub fn dragging(&self) -> Option<PageId> {
        self.dragging
    }

    /// Follow the pointer: move the dragged page to the cell under `(x, y)`.
    ///
    /// Returns true when the collection order changed and the grid needs to
    /// be laid out again.
    pub fn drag_to(
        &self,
        collection: &mut PageCollection,
        layout: &GridLayout,
        x: f32,
        y: f32,
        cell: CellSize,
    ) -> bool {
        let Some(id) = self.dragging else {
            return false;
        };
        let Some(target) = layout.target_index(x, y, cell, collection.len()) else {
            return false;
        };
        match collection.position(id) {
            Some(current) if current != target => collection.move_to(id, target),
            _ => false,
        }
    }
}
