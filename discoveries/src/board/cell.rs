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

//! A single board coordinate and its per-cell state.
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use enumflags2::BitFlags;

/// Flags that can be set on a [`Cell`]. The flags are independent of each other.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum CellState {
    /// A ship has claimed the cell.
    Occupied = 0b01,
    /// A shot has landed on the cell.
    Hit = 0b10,
}

/// A coordinate on the board, along with whether it is occupied by a ship and whether it
/// has been shot.
///
/// Identity is the `(row, column)` pair alone: equality, ordering and hashing ignore the
/// state flags, so a freshly constructed cell can be used to look up a cell owned by a
/// ship. Cells are plain values and are copied at every hand-off.
///
/// No bounds are enforced here. Rows and columns may be negative or beyond the board;
/// bounds are checked by the fleet and the game.
#[derive(Copy, Clone)]
pub struct Cell {
    row: i32,
    column: i32,
    state: BitFlags<CellState>,
}

impl Cell {
    /// Construct an unoccupied, unshot cell at the given coordinate.
    pub fn new(row: i32, column: i32) -> Self {
        Self {
            row,
            column,
            state: BitFlags::empty(),
        }
    }

    /// Construct a cell at the given offset from this one, with fresh state. Returns
    /// `None` if either coordinate would leave the `i32` range.
    pub fn offset(&self, rows: i32, columns: i32) -> Option<Self> {
        Some(Self::new(
            self.row.checked_add(rows)?,
            self.column.checked_add(columns)?,
        ))
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    /// Returns true if `other` is in the 8-connected neighborhood of this cell, or is
    /// this cell.
    pub fn is_adjacent_or_same(&self, other: &Cell) -> bool {
        let drow = i64::from(self.row) - i64::from(other.row);
        let dcol = i64::from(self.column) - i64::from(other.column);
        drow.abs() <= 1 && dcol.abs() <= 1
    }

    /// Mark this cell as claimed by a ship. Idempotent.
    pub fn mark_occupied(&mut self) {
        self.state.insert(CellState::Occupied);
    }

    /// Mark this cell as shot. Idempotent.
    pub fn mark_hit(&mut self) {
        self.state.insert(CellState::Hit);
    }

    pub fn is_occupied(&self) -> bool {
        self.state.contains(CellState::Occupied)
    }

    pub fn is_hit(&self) -> bool {
        self.state.contains(CellState::Hit)
    }

    /// All state flags currently set on this cell.
    pub fn state(&self) -> BitFlags<CellState> {
        self.state
    }

    /// The `(row, column)` key used for equality and ordering.
    fn key(&self) -> (i32, i32) {
        (self.row, self.column)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cell")
            .field("row", &self.row)
            .field("column", &self.column)
            .field("state", &self.state)
            .finish()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(i32, i32)> for Cell {
    /// Construct a [`Cell`] from a `(row, column)` pair.
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

impl From<Cell> for (i32, i32) {
    /// Convert the [`Cell`] into a `(row, column)` pair, dropping its state.
    fn from(cell: Cell) -> Self {
        cell.key()
    }
}
