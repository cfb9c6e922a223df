// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Types that make up the game board.

pub use self::{
    cell::{Cell, CellState},
    facing::Facing,
};

mod cell;
mod facing;

/// Width and height of the square board. Valid coordinates are `0..BOARD_SIZE` on both
/// axes.
pub const BOARD_SIZE: i32 = 10;

/// Returns true if the given row and column both lie within `[0, BOARD_SIZE - 1]`.
pub fn in_bounds(row: i32, column: i32) -> bool {
    (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&column)
}

/// Smallest axis-aligned rectangle containing a set of cells. All bounds are inclusive.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BoundingBox {
    /// Smallest row.
    pub top: i32,
    /// Largest row.
    pub bottom: i32,
    /// Smallest column.
    pub left: i32,
    /// Largest column.
    pub right: i32,
}

impl BoundingBox {
    /// The box covering a single cell.
    pub fn around(cell: &Cell) -> Self {
        Self {
            top: cell.row(),
            bottom: cell.row(),
            left: cell.column(),
            right: cell.column(),
        }
    }

    /// Grow this box just enough to also cover `cell`.
    pub fn including(self, cell: &Cell) -> Self {
        Self {
            top: self.top.min(cell.row()),
            bottom: self.bottom.max(cell.row()),
            left: self.left.min(cell.column()),
            right: self.right.max(cell.column()),
        }
    }

    /// Compute the bounding box of the given cells. Returns `None` if there are no cells.
    pub fn of<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Option<Self> {
        let mut cells = cells.into_iter();
        let first = cells.next()?;
        Some(cells.fold(Self::around(first), Self::including))
    }

    /// Returns true if the whole box lies on the board.
    pub fn is_on_board(&self) -> bool {
        in_bounds(self.top, self.left) && in_bounds(self.bottom, self.right)
    }
}
