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

//! Errors raised while building ships.

use thiserror::Error;

use crate::{
    board::{Cell, Facing},
    ships::Category,
};

/// Reason why a ship could not be laid out.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidShipReason {
    /// The facing was [`Facing::Unknown`].
    #[error("the facing is unknown")]
    UnknownFacing,
    /// Some cell of the shape lies beyond the `i32` coordinate range.
    #[error("the shape runs past the coordinate range")]
    CoordinateOverflow,
}

/// Error returned when a ship cannot be built from the given category, facing and anchor.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("cannot build a {category} facing {facing:?} at {anchor}: {reason}")]
pub struct InvalidShip {
    #[source]
    reason: InvalidShipReason,
    category: Category,
    facing: Facing,
    anchor: Cell,
}

impl InvalidShip {
    pub(super) fn new(
        reason: InvalidShipReason,
        category: Category,
        facing: Facing,
        anchor: Cell,
    ) -> Self {
        Self {
            reason,
            category,
            facing,
            anchor,
        }
    }

    /// Why the ship could not be built.
    pub fn reason(&self) -> InvalidShipReason {
        self.reason
    }

    /// The category of ship that was requested.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The facing that was requested.
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// The anchor the ship was to be laid out from.
    pub fn anchor(&self) -> Cell {
        self.anchor
    }
}

/// Error returned when a string does not name a ship category.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown ship category {input:?}")]
pub struct ParseCategoryError {
    input: String,
}

impl ParseCategoryError {
    pub(super) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The input that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}
