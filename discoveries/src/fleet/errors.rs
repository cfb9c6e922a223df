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

//! Errors used by the [`Fleet`][crate::fleet::Fleet].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::ships::Ship;

/// Reason why a ship could not be admitted to the fleet.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The fleet already holds its maximum number of ships.
    #[error("the fleet is already full")]
    FleetFull,
    /// Part of the ship lies outside the board.
    #[error("the ship does not fit on the board")]
    OutOfBounds,
    /// The ship overlaps or touches a ship already in the fleet.
    #[error("the ship is on or next to another ship")]
    TooClose,
}

/// Error caused when attempting to admit a ship the fleet cannot take. Gives the ship
/// back so the caller can retry or report it.
#[derive(Error)]
#[error("could not place {ship}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    pub(super) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason admission was refused.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the ship that was refused.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the refused ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}
