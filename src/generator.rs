/*
generator.rs

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

//! Build the word search grid.
//!
//! The generation goes through the following steps:
//!
//! * [`filter::filter_by_length`] removes the words that are longer than the grid side.
//! * [`selector::select_words`] picks random words from the remaining ones, and converts them to
//!   uppercase.
//! * [`placement::place_words`] writes the words in a [`grid::Grid`] object at random positions
//!   and in random [`direction::Direction`] directions, and fills the remaining cells with random
//!   letters.
//!   Words that cannot be placed in a reasonable number of attempts are skipped.
//! * [`verifier::verify_placements`] reads the words back from the grid.
//!
//! [`crate::puzzle::Puzzle::generate`] chains these steps.

pub mod direction;
pub mod filter;
pub mod grid;
pub mod placement;
pub mod selector;
pub mod verifier;
