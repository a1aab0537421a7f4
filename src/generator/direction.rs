/*
direction.rs

Copyright 2025 The Wordgrid authors

This file is part of Wordgrid.

Wordgrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordgrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordgrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! The eight directions a word can be written in.

use rand::Rng;
use serde::Serialize;
use std::fmt;
use strum_macros::FromRepr;

/// Direction of a word in the grid, from its first letter to its last letter.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

impl Direction {
    /// Number of directions.
    pub const COUNT: u8 = 8;

    /// All the directions.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// Return a uniformly random direction.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Return the (row, column) step between two consecutive letters.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
        }
    }

    /// Name used in the console report.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Right => "RIGHT",
            Direction::Left => "LEFT",
            Direction::Down => "DOWN",
            Direction::Up => "UP",
            Direction::DownRight => "DOWN_RIGHT",
            Direction::DownLeft => "DOWN_LEFT",
            Direction::UpRight => "UP_RIGHT",
            Direction::UpLeft => "UP_LEFT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn deltas_are_unit_steps_and_distinct() {
        let deltas: HashSet<(isize, isize)> = Direction::ALL.iter().map(|d| d.delta()).collect();
        assert_eq!(deltas.len(), 8);
        for (dr, dc) in deltas {
            assert!((-1..=1).contains(&dr) && (-1..=1).contains(&dc));
            assert!(dr != 0 || dc != 0);
        }
    }

    #[test]
    fn from_repr_matches_declaration_order() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(Direction::from_repr(i as u8), Some(*d));
        }
        assert_eq!(Direction::from_repr(Direction::COUNT), None);
    }

    #[test]
    fn random_eventually_yields_every_direction() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<Direction> = (0..1000).map(|_| Direction::random(&mut rng)).collect();
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn serializes_with_report_names() {
        let json: String = serde_json::to_string(&Direction::DownLeft).unwrap();
        assert_eq!(json, "\"DOWN_LEFT\"");
        assert_eq!(Direction::UpRight.to_string(), "UP_RIGHT");
    }
}
