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
use crate::ships::Ship;

/// Result of a single shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome<'a> {
    /// The shot was off the board and was only counted.
    Invalid,
    /// The coordinate had already been fired at; the shot was only counted.
    Repeated,
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the given ship, which is still floating.
    Hit(&'a Ship),
    /// The shot hit the given ship and sank it.
    Sunk(&'a Ship),
}

impl<'a> ShotOutcome<'a> {
    /// Get the ship this shot sank, if it sank one.
    pub fn sunk(self) -> Option<&'a Ship> {
        match self {
            ShotOutcome::Sunk(ship) => Some(ship),
            _ => None,
        }
    }
}
