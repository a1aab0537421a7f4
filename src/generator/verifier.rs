/*
verifier.rs

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

//! Check that the recorded placements match the grid content.

use log::debug;
use serde::Serialize;

use super::grid::Grid;
use super::placement::WordPlacement;

/// Verification result for a placed word.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// Expected word.
    pub word: String,

    /// Row of the first letter.
    pub row: usize,

    /// Column of the first letter.
    pub col: usize,

    /// Letters read from the grid.
    pub found: String,

    /// Whether the letters read from the grid are the expected word.
    pub passed: bool,
}

/// Read back each placed word from the grid and compare it with the recorded word.
pub fn verify_placements(grid: &Grid, placements: &[WordPlacement]) -> Vec<Verification> {
    placements
        .iter()
        .map(|p| {
            let found: String = grid.read_word(p.row, p.col, p.direction, p.word.chars().count());
            let passed: bool = found == p.word;
            debug!("Verifying {} at ({},{}): {found}", p.word, p.row, p.col);
            Verification {
                word: p.word.clone(),
                row: p.row,
                col: p.col,
                found,
                passed,
            }
        })
        .collect()
}
