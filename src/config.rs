/*
config.rs

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

//! Puzzle parameters.
//!
//! A [`PuzzleConfig`] object is passed explicitly to the generator and to the renderer. Its
//! [`Default`] implementation gives the classic 10x10 puzzle with ten words.

use serde::Serialize;

/// Default side length of the square grid.
pub const GRID_SIZE: usize = 10;

/// Default size in pixels of a grid cell in the output image.
pub const CELL_SIZE: u32 = 40;

/// Default number of words to hide in the grid.
pub const WORD_COUNT: usize = 10;

/// Number of placement attempts for a word before giving up on that word.
pub const MAX_ATTEMPTS: usize = 100;

/// Default output image file name.
pub const OUTPUT_FILE: &str = "output.png";

/// Vertical space in pixels for the "Find these words:" title.
pub const TITLE_HEIGHT: u32 = 25;

/// Vertical spacing in pixels between two rows of the word list.
pub const WORD_ROW_SPACING: u32 = 20;

/// Number of words on each row of the word list.
pub const WORDS_PER_ROW: usize = 4;

/// Horizontal spacing in pixels between two words of the word list.
pub const WORD_SPACING: u32 = 80;

/// Padding in pixels between the word list and the grid.
pub const HEADER_PADDING: u32 = 15;

/// Parameters of a puzzle generation run.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Number of rows and columns in the grid.
    pub grid_size: usize,

    /// Size of a cell in the rendered image, in pixels.
    pub cell_size: u32,

    /// Number of words to select from the vocabulary.
    pub word_count: usize,

    /// Minimum number of usable words, after filtering, for the run to proceed.
    pub min_words: usize,

    /// Placement attempts for each word.
    pub max_attempts: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            cell_size: CELL_SIZE,
            word_count: WORD_COUNT,
            min_words: WORD_COUNT,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}
