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

//! Random fleet generation.
use once_cell::sync::Lazy;
use rand::{distributions::Uniform, Rng};
use tracing::trace;

use crate::{
    board::{Cell, Facing, BOARD_SIZE},
    fleet::Fleet,
    ships::{Category, Ship},
};

/// Range of valid rows and columns.
static COORD_RANGE: Lazy<Uniform<i32>> = Lazy::new(|| Uniform::new(0, BOARD_SIZE));

/// How many random anchors to try for one ship before giving up on it.
const ATTEMPTS_PER_SHIP: usize = 200;

impl Fleet {
    /// Build a full [`STANDARD_FLEET`][crate::fleet::STANDARD_FLEET] at random positions.
    /// Starts over whenever the ships already placed leave no room for the next one.
    pub fn random(rng: &mut impl Rng) -> Self {
        loop {
            let mut fleet = Fleet::new();
            if fleet.fill_random(rng) {
                return fleet;
            }
            trace!(placed = fleet.len(), "random fleet got stuck, starting over");
        }
    }

    /// Place every category still missing from the standard fleet at random. Returns false
    /// if some ship could not be placed; ships placed before that point stay in the fleet.
    pub fn fill_random(&mut self, rng: &mut impl Rng) -> bool {
        self.missing_categories()
            .into_iter()
            .all(|category| self.place_random(rng, category))
    }

    fn place_random(&mut self, rng: &mut impl Rng, category: Category) -> bool {
        for _ in 0..ATTEMPTS_PER_SHIP {
            let anchor = Cell::new(rng.sample(&*COORD_RANGE), rng.sample(&*COORD_RANGE));
            let facing: Facing = rng.gen();
            let ship = match Ship::new(category, facing, anchor) {
                Ok(ship) => ship,
                Err(_) => continue,
            };
            if self.check(&ship).is_ok() {
                return self.add(ship);
            }
        }
        false
    }
}
