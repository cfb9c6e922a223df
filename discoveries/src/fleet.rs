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

//! A player's fleet and the rules for admitting ships into it.
use tracing::debug;

use crate::{
    board::Cell,
    ships::{Category, Ship},
};

pub use self::errors::{CannotPlaceReason, PlaceError};

mod errors;
#[cfg(feature = "rng_gen")]
mod random;

/// Maximum number of ships in a fleet.
pub const FLEET_SIZE: usize = 10;

/// The ships a standard fleet is built from, largest first.
pub const STANDARD_FLEET: [Category; FLEET_SIZE] = [
    Category::Galleon,
    Category::Frigate,
    Category::Carrack,
    Category::Carrack,
    Category::Caravel,
    Category::Caravel,
    Category::Caravel,
    Category::Dinghy,
    Category::Dinghy,
    Category::Dinghy,
];

/// An ordered collection of ships that are all on the board and never touch.
///
/// Ships can only be added, through [`Fleet::add`] or [`Fleet::try_add`], which check the
/// capacity, the board bounds and the spacing to every ship already admitted.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Construct an empty fleet.
    pub fn new() -> Self {
        Self {
            ships: Vec::with_capacity(FLEET_SIZE),
        }
    }

    /// Attempt to admit a ship. Returns false and leaves the fleet unchanged if the fleet
    /// is full, the ship leaves the board, or it is on or next to another ship.
    pub fn add(&mut self, ship: Ship) -> bool {
        self.try_add(ship).is_ok()
    }

    /// Attempt to admit a ship, returning the reason and the ship on failure.
    pub fn try_add(&mut self, ship: Ship) -> Result<(), PlaceError> {
        if let Err(reason) = self.check(&ship) {
            debug!(%ship, ?reason, "ship rejected");
            return Err(PlaceError::new(reason, ship));
        }
        debug!(%ship, admitted = self.ships.len() + 1, "ship admitted");
        self.ships.push(ship);
        Ok(())
    }

    /// Check whether `ship` could be admitted, without adding it.
    pub fn check(&self, ship: &Ship) -> Result<(), CannotPlaceReason> {
        if self.is_full() {
            Err(CannotPlaceReason::FleetFull)
        } else if !ship.bounding_box().is_on_board() {
            Err(CannotPlaceReason::OutOfBounds)
        } else if self.ships.iter().any(|other| other.is_too_close_to(ship)) {
            Err(CannotPlaceReason::TooClose)
        } else {
            Ok(())
        }
    }

    /// All ships, in the order they were admitted.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Returns true once the fleet holds [`FLEET_SIZE`] ships.
    pub fn is_full(&self) -> bool {
        self.ships.len() >= FLEET_SIZE
    }

    /// All ships of the given category, in admission order.
    pub fn ships_of_category(&self, category: Category) -> Vec<&Ship> {
        self.ships
            .iter()
            .filter(|ship| ship.category() == category)
            .collect()
    }

    /// All ships that still have an unhit cell.
    pub fn floating_ships(&self) -> Vec<&Ship> {
        self.ships.iter().filter(|ship| ship.is_floating()).collect()
    }

    /// The first ship occupying `pos`, if any.
    pub fn ship_at(&self, pos: &Cell) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.occupies(pos))
    }

    /// Mutable access for shot resolution. Only the game registers shots.
    pub(crate) fn ship_at_mut(&mut self, pos: &Cell) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|ship| ship.occupies(pos))
    }

    /// The categories from [`STANDARD_FLEET`] that are not yet in this fleet.
    pub fn missing_categories(&self) -> Vec<Category> {
        let mut missing = STANDARD_FLEET.to_vec();
        for ship in &self.ships {
            if let Some(i) = missing.iter().position(|&c| c == ship.category()) {
                missing.remove(i);
            }
        }
        missing
    }
}
