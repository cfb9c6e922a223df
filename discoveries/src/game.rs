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

//! Shot resolution against a finished fleet.
//!
//! Every shot passed to [`Game::shoot`] is classified, in this order, as:
//!
//! 1. invalid, if it lies off the board;
//! 2. repeated, if the same coordinate was already fired at;
//! 3. a miss, a hit, or a hit that sinks a ship.
//!
//! Invalid and repeated shots are only counted. Every other shot is logged in
//! [`Game::shots`]. The game never ends by itself: callers check
//! [`Game::remaining_ships`].
use std::collections::HashSet;

use tracing::debug;

use crate::{
    board::{self, Cell},
    fleet::Fleet,
    ships::Ship,
};

pub use self::outcome::ShotOutcome;

mod outcome;

/// A game session: one fleet under fire, plus the shot log and statistics.
#[derive(Debug, Clone)]
pub struct Game {
    fleet: Fleet,

    /// Valid, non-repeated shots in the order they were fired.
    shots: Vec<Cell>,

    /// Same coordinates as `shots`, for repeat detection.
    fired: HashSet<Cell>,

    invalid_shots: usize,
    repeated_shots: usize,
    hits: usize,
    sunk_ships: usize,
}

impl Game {
    /// Start a game against the given fleet. All counters start at zero.
    pub fn new(fleet: Fleet) -> Self {
        Self {
            fleet,
            shots: Vec::new(),
            fired: HashSet::new(),
            invalid_shots: 0,
            repeated_shots: 0,
            hits: 0,
            sunk_ships: 0,
        }
    }

    /// Returns true if `pos` lies on the board.
    pub fn is_valid_shot(pos: &Cell) -> bool {
        board::in_bounds(pos.row(), pos.column())
    }

    /// Fire at `pos`, returning the ship if this shot sank it.
    pub fn fire(&mut self, pos: Cell) -> Option<&Ship> {
        self.shoot(pos).sunk()
    }

    /// Fire at `pos` and report exactly how the shot was resolved.
    pub fn shoot(&mut self, pos: Cell) -> ShotOutcome<'_> {
        if !Self::is_valid_shot(&pos) {
            self.invalid_shots += 1;
            debug!(%pos, "invalid shot");
            return ShotOutcome::Invalid;
        }
        if !self.fired.insert(pos) {
            self.repeated_shots += 1;
            debug!(%pos, "repeated shot");
            return ShotOutcome::Repeated;
        }
        let mut shot = Cell::new(pos.row(), pos.column());
        shot.mark_hit();
        self.shots.push(shot);

        let ship = match self.fleet.ship_at_mut(&pos) {
            Some(ship) => ship,
            None => {
                debug!(%pos, "miss");
                return ShotOutcome::Miss;
            }
        };
        let was_floating = ship.is_floating();
        ship.register_shot(&pos);
        self.hits += 1;
        if was_floating && ship.is_sunk() {
            self.sunk_ships += 1;
            debug!(%pos, %ship, "sunk");
            ShotOutcome::Sunk(ship)
        } else {
            debug!(%pos, %ship, "hit");
            ShotOutcome::Hit(ship)
        }
    }

    /// The fleet under fire.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Valid, non-repeated shots in the order they were fired.
    pub fn shots(&self) -> &[Cell] {
        &self.shots
    }

    /// Number of shots that landed off the board.
    pub fn invalid_shots(&self) -> usize {
        self.invalid_shots
    }

    /// Number of shots at coordinates that had already been fired at.
    pub fn repeated_shots(&self) -> usize {
        self.repeated_shots
    }

    /// Number of shots that hit a ship.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Number of ships sunk so far.
    pub fn sunk_ships(&self) -> usize {
        self.sunk_ships
    }

    /// Number of ships still floating, computed from the ships themselves.
    pub fn remaining_ships(&self) -> usize {
        self.fleet.floating_ships().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::{Facing, BOARD_SIZE},
        ships::Category,
    };

    fn game_with(ships: &[(Category, Facing, i32, i32)]) -> Game {
        let mut fleet = Fleet::new();
        for &(category, facing, row, column) in ships {
            let ship = Ship::new(category, facing, Cell::new(row, column)).unwrap();
            assert!(fleet.add(ship));
        }
        Game::new(fleet)
    }

    #[test]
    fn counters_start_at_zero() {
        let game = Game::new(Fleet::new());
        assert_eq!(game.invalid_shots(), 0);
        assert_eq!(game.repeated_shots(), 0);
        assert_eq!(game.hits(), 0);
        assert_eq!(game.sunk_ships(), 0);
        assert_eq!(game.remaining_ships(), 0);
        assert!(game.shots().is_empty());
    }

    #[test]
    fn off_board_shots_are_only_counted() {
        let mut game = game_with(&[(Category::Dinghy, Facing::North, 0, 0)]);
        for &(row, column) in &[(-1, 0), (0, -1), (BOARD_SIZE, 0), (0, BOARD_SIZE), (42, 42)] {
            assert_eq!(game.shoot(Cell::new(row, column)), ShotOutcome::Invalid);
        }
        assert_eq!(game.invalid_shots(), 5);
        assert!(game.shots().is_empty());
        assert_eq!(game.hits(), 0);
        assert_eq!(game.repeated_shots(), 0);

        assert_eq!(game.shoot(Cell::new(9, 9)), ShotOutcome::Miss);
        assert_eq!(game.invalid_shots(), 5);
    }

    #[test]
    fn repeated_shots_have_no_further_effect() {
        let mut game = game_with(&[(Category::Caravel, Facing::North, 3, 3)]);
        assert!(matches!(game.shoot(Cell::new(3, 3)), ShotOutcome::Hit(_)));
        assert_eq!(game.shoot(Cell::new(3, 3)), ShotOutcome::Repeated);
        assert_eq!(game.shoot(Cell::new(0, 0)), ShotOutcome::Miss);
        assert_eq!(game.shoot(Cell::new(0, 0)), ShotOutcome::Repeated);

        assert_eq!(game.repeated_shots(), 2);
        assert_eq!(game.hits(), 1);
        assert_eq!(game.sunk_ships(), 0);
        assert_eq!(game.shots(), &[Cell::new(3, 3), Cell::new(0, 0)]);
        assert!(game.shots().iter().all(Cell::is_hit));
    }

    #[test]
    fn caravel_sinks_on_second_shot() {
        let mut game = game_with(&[(Category::Caravel, Facing::East, 0, 0)]);
        assert!(game.fire(Cell::new(0, 0)).is_none());
        assert_eq!(game.hits(), 1);

        let sunk = game.fire(Cell::new(0, 1)).expect("caravel should sink");
        assert_eq!(sunk.category(), Category::Caravel);
        assert_eq!(sunk.anchor(), Cell::new(0, 0));
        assert_eq!(game.hits(), 2);
        assert_eq!(game.sunk_ships(), 1);
        assert_eq!(game.remaining_ships(), 0);
    }

    #[test]
    fn galleon_stays_afloat_until_every_cell_is_hit() {
        let mut game = game_with(&[
            (Category::Galleon, Facing::North, 5, 5),
            (Category::Dinghy, Facing::North, 0, 0),
        ]);
        assert!(matches!(game.shoot(Cell::new(5, 6)), ShotOutcome::Hit(_)));
        assert_eq!(game.remaining_ships(), 2);

        for &(row, column) in &[(5, 5), (5, 7), (6, 6)] {
            assert!(game.fire(Cell::new(row, column)).is_none());
            assert_eq!(game.remaining_ships(), 2);
        }
        match game.shoot(Cell::new(7, 6)) {
            ShotOutcome::Sunk(ship) => assert_eq!(ship.category(), Category::Galleon),
            other => panic!("expected galleon to sink, got {:?}", other),
        }
        assert_eq!(game.remaining_ships(), 1);
        assert_eq!(game.hits(), 5);
        assert_eq!(game.sunk_ships(), 1);
    }

    #[test]
    fn misses_are_logged_without_hits() {
        let mut game = game_with(&[(Category::Frigate, Facing::South, 0, 9)]);
        assert_eq!(game.shoot(Cell::new(0, 8)), ShotOutcome::Miss);
        assert_eq!(game.shoot(Cell::new(9, 9)), ShotOutcome::Miss);
        assert_eq!(game.shots().len(), 2);
        assert_eq!(game.hits(), 0);
        assert_eq!(game.remaining_ships(), 1);
    }
}
