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

/// A linear ship shape, with a given length.
///
/// Lines only distinguish the two axes: North and South both run down the board along
/// increasing rows, East and West both run along increasing columns.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear ship with the specified length. Panics if len is 0.
    pub fn new(len: usize) -> Self {
        assert!(len > 0);
        Line(len)
    }
}

impl ShipShape for Line {
    fn project(&self, anchor: &Cell, facing: Facing) -> Option<ShapeProjection> {
        let (drow, dcol) = match facing {
            Facing::North | Facing::South => (1, 0),
            Facing::East | Facing::West => (0, 1),
            Facing::Unknown => return None,
        };
        (0..self.0 as i32)
            .map(|step| anchor.offset(drow * step, dcol * step))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_line_is_just_the_anchor() {
        let anchor = Cell::new(9, 9);
        for &facing in Facing::VALID {
            assert_eq!(Line::new(1).project(&anchor, facing), Some(vec![anchor]));
        }
        assert_eq!(Line::new(1).project(&anchor, Facing::Unknown), None);
    }

    #[test]
    fn runs_down_and_right() {
        let anchor = Cell::new(0, 8);
        assert_eq!(
            Line::new(2).project(&anchor, Facing::North),
            Some(vec![Cell::new(0, 8), Cell::new(1, 8)])
        );
        // Projection ignores the board edge.
        assert_eq!(
            Line::new(3).project(&anchor, Facing::West),
            Some(vec![Cell::new(0, 8), Cell::new(0, 9), Cell::new(0, 10)])
        );
    }

    #[test]
    fn runs_past_the_integer_range() {
        let anchor = Cell::new(i32::MAX - 1, i32::MAX);
        assert_eq!(Line::new(3).project(&anchor, Facing::South), None);
        assert_eq!(Line::new(2).project(&anchor, Facing::East), None);
        assert_eq!(
            Line::new(2).project(&anchor, Facing::North),
            Some(vec![anchor, Cell::new(i32::MAX, i32::MAX)])
        );
    }

    #[test]
    #[should_panic]
    fn empty_line_panics() {
        Line::new(0);
    }
}
