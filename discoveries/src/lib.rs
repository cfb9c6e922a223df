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

//! Rules engine for the Discoveries naval battle.
//!
//! A player builds a [`Fleet`] of shaped [`Ship`]s on a fixed 10x10 board, then a
//! [`Game`] resolves every shot fired at that fleet into an invalid, repeated, missed,
//! hit or sinking shot, keeping statistics along the way.
//!
//! The crate is split the same way the game is played:
//!
//! [`board`] defines [`Cell`] coordinates and compass [`Facing`]s.
//!
//! [`ships`] defines the five ship [`Category`]s and the shapes they project from an
//! anchor cell.
//!
//! [`fleet`] validates placement (board bounds, spacing and capacity).
//!
//! [`game`] resolves shots against a finished fleet.
//!
//! ```
//! use discoveries::{Category, Cell, Facing, Fleet, Game, Ship};
//!
//! let mut fleet = Fleet::new();
//! let caravel = Ship::new(Category::Caravel, Facing::East, Cell::new(0, 0)).unwrap();
//! assert!(fleet.add(caravel));
//!
//! let mut game = Game::new(fleet);
//! assert!(game.fire(Cell::new(0, 0)).is_none());
//! let sunk = game.fire(Cell::new(0, 1)).expect("second shot sinks the caravel");
//! assert_eq!(sunk.category(), Category::Caravel);
//! assert_eq!(game.hits(), 2);
//! assert_eq!(game.sunk_ships(), 1);
//! ```

pub use self::{
    board::{BoundingBox, Cell, Facing, BOARD_SIZE},
    fleet::{CannotPlaceReason, Fleet, PlaceError, FLEET_SIZE, STANDARD_FLEET},
    game::{Game, ShotOutcome},
    ships::{Category, InvalidShip, InvalidShipReason, Ship},
};

pub mod board;
pub mod fleet;
pub mod game;
pub mod ships;
