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

//! Types used for defining ships and their shapes.
use std::{fmt, slice, str::FromStr};

use crate::board::{BoundingBox, Cell, Facing};

pub use self::{
    errors::{InvalidShip, InvalidShipReason, ParseCategoryError},
    linear::Line,
    pentomino::Pentomino,
};

mod errors;
mod linear;
mod pentomino;

/// Projection of a shape onto the board relative to an anchor cell. The first cell is
/// always the anchor.
pub type ShapeProjection = Vec<Cell>;

/// Trait for shapes that a ship can be.
pub trait ShipShape {
    /// Project this shape from `anchor` in the given facing. Returns `None` if the shape
    /// cannot be laid out in that facing, or if a cell would fall outside the `i32`
    /// coordinate range. Does not check the board bounds.
    fn project(&self, anchor: &Cell, facing: Facing) -> Option<ShapeProjection>;
}

/// The kinds of ship in the fleet, smallest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Category {
    /// Dinghy: length 1.
    Dinghy,
    /// Caravel: length 2.
    Caravel,
    /// Carrack: length 3.
    Carrack,
    /// Frigate: length 4.
    Frigate,
    /// Galleon: 5 cells in a T shape.
    Galleon,
}

impl Category {
    /// Every category, smallest first.
    pub const ALL: &'static [Category] = &[
        Category::Dinghy,
        Category::Caravel,
        Category::Carrack,
        Category::Frigate,
        Category::Galleon,
    ];

    /// Number of cells a ship of this category occupies.
    pub fn size(self) -> usize {
        match self {
            Category::Dinghy => 1,
            Category::Caravel => 2,
            Category::Carrack => 3,
            Category::Frigate => 4,
            Category::Galleon => 5,
        }
    }

    /// Lowercase name of the category.
    pub fn name(self) -> &'static str {
        match self {
            Category::Dinghy => "dinghy",
            Category::Caravel => "caravel",
            Category::Carrack => "carrack",
            Category::Frigate => "frigate",
            Category::Galleon => "galleon",
        }
    }

    /// Two-letter abbreviation, used when drawing boards.
    pub fn abbrev(self) -> &'static str {
        match self {
            Category::Dinghy => "dy",
            Category::Caravel => "cv",
            Category::Carrack => "ck",
            Category::Frigate => "fg",
            Category::Galleon => "gn",
        }
    }

    /// Lay out the cells of a ship of this category. Fails if `facing` is unknown or the
    /// shape would run past the `i32` coordinate range.
    pub fn project(self, anchor: &Cell, facing: Facing) -> Result<ShapeProjection, InvalidShip> {
        if !facing.is_valid() {
            return Err(InvalidShip::new(
                InvalidShipReason::UnknownFacing,
                self,
                facing,
                *anchor,
            ));
        }
        let projection = match self {
            Category::Dinghy | Category::Caravel | Category::Carrack | Category::Frigate => {
                Line::new(self.size()).project(anchor, facing)
            }
            Category::Galleon => Pentomino.project(anchor, facing),
        };
        projection.ok_or_else(|| {
            InvalidShip::new(InvalidShipReason::CoordinateOverflow, self, facing, *anchor)
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Accepts the English name, the abbreviation, or the Portuguese name, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dinghy" | "dy" | "barca" => Ok(Category::Dinghy),
            "caravel" | "cv" | "caravela" => Ok(Category::Caravel),
            "carrack" | "ck" | "nau" => Ok(Category::Carrack),
            "frigate" | "fg" | "fragata" => Ok(Category::Frigate),
            "galleon" | "gn" | "galeao" => Ok(Category::Galleon),
            _ => Err(ParseCategoryError::new(s)),
        }
    }
}

/// Anything that covers a set of cells on the board. Used for spacing checks between
/// ships and against single cells.
pub trait Footprint {
    fn footprint(&self) -> &[Cell];
}

impl Footprint for Cell {
    fn footprint(&self) -> &[Cell] {
        slice::from_ref(self)
    }
}

impl Footprint for Ship {
    fn footprint(&self) -> &[Cell] {
        &self.cells
    }
}

/// A ship laid out on the board.
///
/// The shape is fixed at construction. The only thing that changes over a ship's life is
/// which of its cells have been hit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    category: Category,
    facing: Facing,
    anchor: Cell,
    cells: Vec<Cell>,
}

impl Ship {
    /// Build a ship of the given category from `anchor` in the given facing. The anchor
    /// is copied; later changes to the caller's cell do not reach the ship.
    pub fn new(category: Category, facing: Facing, anchor: Cell) -> Result<Self, InvalidShip> {
        let mut cells = category.project(&anchor, facing)?;
        debug_assert_eq!(cells.len(), category.size());
        for cell in cells.iter_mut() {
            cell.mark_occupied();
        }
        Ok(Self {
            category,
            facing,
            anchor: Cell::new(anchor.row(), anchor.column()),
            cells,
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// The cell the ship was laid out from.
    pub fn anchor(&self) -> Cell {
        self.anchor
    }

    /// Number of cells the ship occupies.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Read-only view of the ship's cells, anchor first. Copy them out (`to_vec`) to get
    /// an independent snapshot.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells that have been hit.
    pub fn damage(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hit()).count()
    }

    /// Returns true while at least one cell has not been hit.
    pub fn is_floating(&self) -> bool {
        self.cells.iter().any(|cell| !cell.is_hit())
    }

    /// Returns true once every cell has been hit.
    pub fn is_sunk(&self) -> bool {
        !self.is_floating()
    }

    /// Returns true if `pos` is one of this ship's cells.
    pub fn occupies(&self, pos: &Cell) -> bool {
        self.cells.contains(pos)
    }

    /// Smallest rectangle containing the whole ship.
    pub fn bounding_box(&self) -> BoundingBox {
        self.cells
            .iter()
            .fold(BoundingBox::around(&self.anchor), BoundingBox::including)
    }

    /// Returns true if any cell of this ship is on or next to (8-connected) any cell of
    /// `other`.
    pub fn is_too_close_to<F: Footprint + ?Sized>(&self, other: &F) -> bool {
        let theirs = other.footprint();
        self.cells
            .iter()
            .any(|mine| theirs.iter().any(|cell| mine.is_adjacent_or_same(cell)))
    }

    /// Record a shot at `pos`. Marks the matching cell hit and returns true if the ship
    /// occupies `pos`; otherwise does nothing and returns false.
    pub fn register_shot(&mut self, pos: &Cell) -> bool {
        match self.cells.iter_mut().find(|cell| **cell == *pos) {
            Some(cell) => {
                cell.mark_hit();
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} facing {} at {} ({}/{} hit)",
            self.category,
            self.facing,
            self.anchor,
            self.damage(),
            self.size(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn coords(ship: &Ship) -> Vec<(i32, i32)> {
        ship.cells().iter().map(|&cell| cell.into()).collect()
    }

    #[test]
    fn every_category_and_facing_has_the_right_size() {
        for &category in Category::ALL {
            for &facing in Facing::VALID {
                let ship = Ship::new(category, facing, Cell::new(4, 4)).unwrap();
                assert_eq!(ship.size(), category.size());
                let distinct: HashSet<_> = ship.cells().iter().collect();
                assert_eq!(distinct.len(), category.size(), "{} {:?}", category, facing);
                assert_eq!(ship.cells()[0], Cell::new(4, 4));
                assert!(ship.cells().iter().all(|cell| cell.is_occupied()));
            }
        }
    }

    #[test]
    fn unknown_facing_is_rejected_for_every_category() {
        for &category in Category::ALL {
            let err = Ship::new(category, Facing::Unknown, Cell::new(0, 0)).unwrap_err();
            assert_eq!(err.reason(), InvalidShipReason::UnknownFacing);
            assert_eq!(err.category(), category);
            assert_eq!(err.facing(), Facing::Unknown);
        }
    }

    #[test]
    fn straight_ships_pair_up_axes() {
        let north = Ship::new(Category::Frigate, Facing::North, Cell::new(1, 2)).unwrap();
        let south = Ship::new(Category::Frigate, Facing::South, Cell::new(1, 2)).unwrap();
        assert_eq!(coords(&north), vec![(1, 2), (2, 2), (3, 2), (4, 2)]);
        assert_eq!(coords(&north), coords(&south));

        let east = Ship::new(Category::Carrack, Facing::East, Cell::new(1, 2)).unwrap();
        let west = Ship::new(Category::Carrack, Facing::West, Cell::new(1, 2)).unwrap();
        assert_eq!(coords(&east), vec![(1, 2), (1, 3), (1, 4)]);
        assert_eq!(coords(&east), coords(&west));
    }

    #[test]
    fn anchor_is_copied_in() {
        let mut anchor = Cell::new(5, 5);
        let ship = Ship::new(Category::Dinghy, Facing::North, anchor).unwrap();
        anchor.mark_hit();
        assert!(!ship.cells()[0].is_hit());
        assert!(ship.is_floating());
        assert!(!ship.anchor().is_hit());
    }

    #[test]
    fn shots_do_not_reach_the_callers_anchor() {
        let anchor = Cell::new(5, 5);
        let mut ship = Ship::new(Category::Caravel, Facing::East, anchor).unwrap();
        assert!(ship.register_shot(&anchor));
        assert!(ship.cells()[0].is_hit());
        assert!(!anchor.is_hit());
        assert!(!ship.anchor().is_hit());
    }

    #[test]
    fn anchors_at_the_integer_extremes() {
        let extremes = [
            Cell::new(i32::MAX, 0),
            Cell::new(i32::MIN, 0),
            Cell::new(0, i32::MAX),
            Cell::new(0, i32::MIN),
            Cell::new(i32::MAX, i32::MAX),
            Cell::new(i32::MIN, i32::MIN),
        ];
        let mut fleet = crate::fleet::Fleet::new();
        for anchor in &extremes {
            for &category in Category::ALL {
                for &facing in Facing::VALID {
                    match Ship::new(category, facing, *anchor) {
                        Ok(ship) => {
                            assert_eq!(ship.size(), category.size());
                            assert!(!ship.bounding_box().is_on_board());
                            assert!(!fleet.add(ship));
                        }
                        Err(err) => {
                            assert_eq!(err.reason(), InvalidShipReason::CoordinateOverflow);
                            assert_eq!(err.anchor(), *anchor);
                        }
                    }
                }
            }
        }
        assert!(fleet.is_empty());

        let err = Ship::new(Category::Frigate, Facing::North, Cell::new(i32::MAX, 0)).unwrap_err();
        assert_eq!(err.reason(), InvalidShipReason::CoordinateOverflow);
        assert!(Ship::new(Category::Frigate, Facing::North, Cell::new(i32::MIN, 0)).is_ok());
    }

    #[test]
    fn snapshots_are_independent() {
        let mut ship = Ship::new(Category::Caravel, Facing::East, Cell::new(0, 0)).unwrap();
        let mut snapshot = ship.cells().to_vec();
        snapshot[0].mark_hit();
        snapshot.clear();
        assert_eq!(ship.size(), 2);
        assert_eq!(ship.damage(), 0);

        ship.register_shot(&Cell::new(0, 0));
        let snapshot = ship.cells().to_vec();
        ship.register_shot(&Cell::new(0, 1));
        assert!(!snapshot[1].is_hit());
        assert!(ship.cells()[1].is_hit());
    }

    #[test]
    fn shots_sink_a_ship() {
        let mut ship = Ship::new(Category::Carrack, Facing::South, Cell::new(2, 3)).unwrap();
        assert!(!ship.register_shot(&Cell::new(2, 4)));
        assert!(ship.register_shot(&Cell::new(2, 3)));
        assert!(ship.register_shot(&Cell::new(3, 3)));
        assert!(ship.is_floating());
        assert!(ship.register_shot(&Cell::new(4, 3)));
        assert!(ship.is_sunk());

        // Repeat shots change nothing.
        assert!(ship.register_shot(&Cell::new(4, 3)));
        assert!(ship.is_sunk());
        assert_eq!(ship.damage(), 3);
    }

    #[test]
    fn bounding_box_of_a_galleon() {
        let ship = Ship::new(Category::Galleon, Facing::East, Cell::new(0, 3)).unwrap();
        assert_eq!(
            ship.bounding_box(),
            BoundingBox {
                top: 0,
                bottom: 2,
                left: 1,
                right: 3
            }
        );
    }

    #[test]
    fn too_close_covers_overlap_sides_and_corners() {
        let ship = Ship::new(Category::Caravel, Facing::East, Cell::new(3, 3)).unwrap();
        let overlapping = Ship::new(Category::Dinghy, Facing::North, Cell::new(3, 4)).unwrap();
        let beside = Ship::new(Category::Carrack, Facing::North, Cell::new(2, 5)).unwrap();
        let corner = Ship::new(Category::Dinghy, Facing::North, Cell::new(4, 2)).unwrap();
        let clear = Ship::new(Category::Frigate, Facing::East, Cell::new(5, 0)).unwrap();

        assert!(ship.is_too_close_to(&overlapping));
        assert!(ship.is_too_close_to(&beside));
        assert!(ship.is_too_close_to(&corner));
        assert!(!ship.is_too_close_to(&clear));
        assert!(!clear.is_too_close_to(&ship));

        assert!(ship.is_too_close_to(&Cell::new(2, 2)));
        assert!(!ship.is_too_close_to(&Cell::new(1, 3)));
    }

    #[test]
    fn category_names() {
        assert_eq!("Galleon".parse::<Category>().unwrap(), Category::Galleon);
        assert_eq!("nau".parse::<Category>().unwrap(), Category::Carrack);
        assert_eq!("dy".parse::<Category>().unwrap(), Category::Dinghy);
        let err = "submarine".parse::<Category>().unwrap_err();
        assert_eq!(err.input(), "submarine");
        for &category in Category::ALL {
            assert_eq!(category.name().parse::<Category>().unwrap(), category);
            assert_eq!(category.abbrev().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn display() {
        let mut ship = Ship::new(Category::Frigate, Facing::West, Cell::new(7, 1)).unwrap();
        ship.register_shot(&Cell::new(7, 2));
        assert_eq!(ship.to_string(), "frigate facing o at (7, 1) (1/4 hit)");
    }
}
