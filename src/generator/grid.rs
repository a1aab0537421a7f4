/*
grid.rs

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

//! Square letter grid.
//!
//! Cells are stored row by row in a flat vector. An empty cell is [`None`].

use rand::Rng;

use super::direction::Direction;

/// Character used by [`Grid::read_word`] for positions outside the grid, or for empty cells.
pub const OUT_OF_GRID: char = '?';

/// Letter grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Cells, row by row.
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty grid of `size` x `size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the letter in the given cell, or [`None`] if the cell is empty or outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col]
        } else {
            None
        }
    }

    /// Convert signed coordinates into a cell index, if they are inside the grid.
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        let size: isize = self.size as isize;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(row as usize * self.size + col as usize)
        } else {
            None
        }
    }

    /// Coordinates of the `len` cells starting at (`row`, `col`) in the given direction.
    fn path(
        row: usize,
        col: usize,
        direction: Direction,
        len: usize,
    ) -> impl Iterator<Item = (isize, isize)> {
        let (d_row, d_col) = direction.delta();
        (0..len as isize).map(move |i| (row as isize + d_row * i, col as isize + d_col * i))
    }

    /// Whether the word can be written from (`row`, `col`) in the given direction.
    ///
    /// The word must stay inside the grid, and every non-empty cell on its path must already
    /// hold the same letter as the word.
    pub fn can_place(&self, word: &[char], row: usize, col: usize, direction: Direction) -> bool {
        if word.is_empty() {
            return false;
        }

        // The word must not run off the grid
        let (d_row, d_col) = direction.delta();
        let last: isize = word.len() as isize - 1;
        if self
            .index(row as isize + d_row * last, col as isize + d_col * last)
            .is_none()
        {
            return false;
        }

        // Existing letters must match
        Self::path(row, col, direction, word.len())
            .zip(word)
            .all(|((r, c), letter)| match self.index(r, c) {
                Some(i) => self.cells[i].is_none_or(|existing| existing == *letter),
                None => false,
            })
    }

    /// Write the word from (`row`, `col`) in the given direction.
    ///
    /// The caller must have checked the position with [`Grid::can_place`]. Letters that fall
    /// outside the grid are ignored.
    pub fn place(&mut self, word: &[char], row: usize, col: usize, direction: Direction) {
        for ((r, c), letter) in Self::path(row, col, direction, word.len()).zip(word) {
            if let Some(i) = self.index(r, c) {
                self.cells[i] = Some(*letter);
            }
        }
    }

    /// Read `len` letters from (`row`, `col`) in the given direction.
    ///
    /// Positions outside the grid, and empty cells, are returned as [`OUT_OF_GRID`].
    pub fn read_word(&self, row: usize, col: usize, direction: Direction, len: usize) -> String {
        Self::path(row, col, direction, len)
            .map(|(r, c)| {
                self.index(r, c)
                    .and_then(|i| self.cells[i])
                    .unwrap_or(OUT_OF_GRID)
            })
            .collect()
    }

    /// Fill all the empty cells with uniformly random uppercase letters.
    pub fn fill_empty<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            *cell = Some(char::from(b'A' + rng.random_range(0..26u8)));
        }
    }

    /// Number of empty cells.
    pub fn num_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Whether all the cells hold a letter.
    pub fn is_full(&self) -> bool {
        self.num_empty() == 0
    }

    /// Return the rows of the grid as strings. Empty cells are returned as spaces.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|c| c.unwrap_or(' ')).collect())
            .collect()
    }
}
