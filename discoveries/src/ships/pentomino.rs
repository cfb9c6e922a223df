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
use crate::{
    board::{Cell, Facing},
    ships::{ShapeProjection, ShipShape},
};

/// `(row, column)` offsets from the anchor, anchor first.
type Layout = [(i32, i32); 5];

const NORTH: Layout = [(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)];
const SOUTH: Layout = [(0, 0), (1, 0), (2, -1), (2, 0), (2, 1)];
const EAST: Layout = [(0, 0), (1, -2), (1, -1), (1, 0), (2, 0)];
const WEST: Layout = [(0, 0), (1, 0), (1, 1), (1, 2), (2, 0)];

/// The five-cell galleon shape. Unlike [`Line`][crate::ships::Line], each of the four
/// facings has its own layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Pentomino;

impl Pentomino {
    fn layout(facing: Facing) -> Option<&'static Layout> {
        match facing {
            Facing::North => Some(&NORTH),
            Facing::South => Some(&SOUTH),
            Facing::East => Some(&EAST),
            Facing::West => Some(&WEST),
            Facing::Unknown => None,
        }
    }
}

impl ShipShape for Pentomino {
    fn project(&self, anchor: &Cell, facing: Facing) -> Option<ShapeProjection> {
        Self::layout(facing)?
            .iter()
            .map(|&(drow, dcol)| anchor.offset(drow, dcol))
            .collect()
    }
}
