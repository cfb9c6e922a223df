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
use std::fmt;

/// Compass orientation of a ship.
///
/// [`Facing::Unknown`] is what parsing produces for unrecognized input. It is never a
/// valid facing for a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Facing {
    North,
    South,
    East,
    West,
    Unknown,
}

impl Facing {
    /// The four facings a ship may actually use.
    pub const VALID: &'static [Facing] = &[Facing::North, Facing::South, Facing::East, Facing::West];

    /// Parse a single-character facing. Accepts `n`, `s`, `e` and `o`/`w` for west, in
    /// either case. Anything else is [`Facing::Unknown`].
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'n' => Facing::North,
            's' => Facing::South,
            'e' => Facing::East,
            'o' | 'w' => Facing::West,
            _ => Facing::Unknown,
        }
    }

    /// Parse a facing from user input: either a single character accepted by
    /// [`Facing::from_char`] or a full compass word. Never fails; unrecognized input is
    /// [`Facing::Unknown`].
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => match input.to_ascii_lowercase().as_str() {
                "north" | "up" => Facing::North,
                "south" | "down" => Facing::South,
                "east" | "right" => Facing::East,
                "west" | "oeste" | "left" => Facing::West,
                _ => Facing::Unknown,
            },
        }
    }

    /// Returns false only for [`Facing::Unknown`].
    pub fn is_valid(self) -> bool {
        self != Facing::Unknown
    }

    /// Canonical single-character form.
    pub fn as_char(self) -> char {
        match self {
            Facing::North => 'n',
            Facing::South => 's',
            Facing::East => 'e',
            Facing::West => 'o',
            Facing::Unknown => 'u',
        }
    }
}

impl From<char> for Facing {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(feature = "rng_gen")]
mod rng_gen {
    use rand::{
        distributions::{Distribution, Standard},
        Rng,
    };

    use super::Facing;

    impl Distribution<Facing> for Standard {
        /// Samples only the valid facings, never [`Facing::Unknown`].
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Facing {
            Facing::VALID[rng.gen_range(0, Facing::VALID.len())]
        }
    }
}
