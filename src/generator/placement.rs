/*
placement.rs

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

//! Place words in a grid at random positions.
//!
//! For each word, [`place_words`] draws a random starting cell and a random direction, and
//! writes the word if it fits in the grid without overwriting a different letter. After
//! [`crate::config::PuzzleConfig::max_attempts`] failed attempts, the word is abandoned and the
//! next word is processed. There is no backtracking: an abandoned word is simply missing from
//! the puzzle.
//!
//! Once all the words are processed, the remaining empty cells receive random letters.

use log::{debug, warn};
use rand::Rng;
use serde::Serialize;

use super::direction::Direction;
use super::grid::Grid;
use crate::config::PuzzleConfig;

/// Position and direction of a word in the grid.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WordPlacement {
    /// Uppercase word.
    pub word: String,

    /// Row of the first letter.
    pub row: usize,

    /// Column of the first letter.
    pub col: usize,

    /// Direction from the first letter to the last letter.
    pub direction: Direction,
}

/// Output of [`place_words`].
#[derive(Debug, Clone)]
pub struct GeneratedGrid {
    /// Grid with all the cells filled.
    pub grid: Grid,

    /// Placed words, in the order they were processed.
    pub placements: Vec<WordPlacement>,

    /// Words that could not be placed.
    pub unplaced: Vec<String>,
}

/// Try to write `word` in the grid at the given position and direction.
///
/// Return the [`WordPlacement`] record on success. The grid is not modified on failure.
pub fn try_place(
    grid: &mut Grid,
    word: &str,
    row: usize,
    col: usize,
    direction: Direction,
) -> Option<WordPlacement> {
    let letters: Vec<char> = word.chars().collect();
    if !grid.can_place(&letters, row, col, direction) {
        return None;
    }
    grid.place(&letters, row, col, direction);
    Some(WordPlacement {
        word: word.to_string(),
        row,
        col,
        direction,
    })
}

/// Try to place the word at random positions, up to `max_attempts` times.
pub fn place_word<R: Rng + ?Sized>(
    grid: &mut Grid,
    word: &str,
    max_attempts: usize,
    rng: &mut R,
) -> Option<WordPlacement> {
    let size: usize = grid.size();
    if size == 0 {
        return None;
    }

    for attempt in 0..max_attempts {
        let row: usize = rng.random_range(0..size);
        let col: usize = rng.random_range(0..size);
        let direction: Direction = Direction::random(rng);

        if let Some(p) = try_place(grid, word, row, col, direction) {
            debug!(
                "Placed {word} at ({row},{col}) {direction} after {} attempt(s)",
                attempt + 1
            );
            return Some(p);
        }
        debug!(
            "Rejected {word} at ({row},{col}) {direction} (attempt {})",
            attempt + 1
        );
    }
    None
}

/// Build a grid with the given words.
///
/// The words must already be in uppercase. Words that cannot be placed are listed in
/// [`GeneratedGrid::unplaced`].
pub fn place_words<S, R>(words: &[S], config: &PuzzleConfig, rng: &mut R) -> GeneratedGrid
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut grid: Grid = Grid::new(config.grid_size);
    let mut placements: Vec<WordPlacement> = Vec::with_capacity(words.len());
    let mut unplaced: Vec<String> = Vec::new();

    for word in words.iter().map(AsRef::as_ref) {
        match place_word(&mut grid, word, config.max_attempts, rng) {
            Some(p) => placements.push(p),
            None => {
                warn!(
                    "Could not place word '{word}' after {} attempts",
                    config.max_attempts
                );
                unplaced.push(word.to_string());
            }
        }
    }

    debug!(
        "{} word(s) placed, filling {} empty cell(s)",
        placements.len(),
        grid.num_empty()
    );
    grid.fill_empty(rng);

    GeneratedGrid {
        grid,
        placements,
        unplaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::verifier::verify_placements;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;

    const WORDS: [&str; 10] = [
        "FOG", "GLAD", "HOBBY", "THUNDER", "SPIRAL", "TICKET", "WHIRL", "SEED", "MOUNTAIN", "ROAR",
    ];

    #[test]
    fn generated_grid_is_full_of_uppercase_letters() {
        let config: PuzzleConfig = PuzzleConfig::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let generated: GeneratedGrid = place_words(&WORDS, &config, &mut rng);
            assert!(generated.grid.is_full());
            assert_eq!(generated.grid.size(), 10);
            for row in generated.grid.rows() {
                assert!(row.chars().all(|c| c.is_ascii_uppercase()));
            }
            assert_eq!(
                generated.placements.len() + generated.unplaced.len(),
                WORDS.len()
            );
        }
    }

    #[test]
    fn every_placement_reads_back() {
        let config: PuzzleConfig = PuzzleConfig::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let generated: GeneratedGrid = place_words(&WORDS, &config, &mut rng);
            for p in &generated.placements {
                let read: String =
                    generated
                        .grid
                        .read_word(p.row, p.col, p.direction, p.word.chars().count());
                assert_eq!(read, p.word);
            }
            assert!(
                verify_placements(&generated.grid, &generated.placements)
                    .iter()
                    .all(|v| v.passed)
            );
        }
    }

    #[test]
    fn word_that_cannot_fit_is_a_soft_failure() {
        let config: PuzzleConfig = PuzzleConfig {
            grid_size: 3,
            ..PuzzleConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        let generated: GeneratedGrid = place_words(&["TOOLONG", "AB"], &config, &mut rng);

        assert_eq!(generated.unplaced, vec!["TOOLONG"]);
        assert_eq!(generated.placements.len(), 1);
        assert_eq!(generated.placements[0].word, "AB");
        assert!(generated.grid.is_full());
    }

    #[test]
    fn fill_runs_even_without_words() {
        let config: PuzzleConfig = PuzzleConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let generated: GeneratedGrid = place_words::<&str, _>(&[], &config, &mut rng);
        assert!(generated.placements.is_empty());
        assert!(generated.grid.is_full());
    }

    #[test]
    fn try_place_rejects_conflicts_without_writing() {
        let mut grid: Grid = Grid::new(10);
        let cat: WordPlacement = try_place(&mut grid, "CAT", 2, 2, Direction::Right).unwrap();
        assert_eq!(cat.direction, Direction::Right);

        // DOG crossing CAT's 'C' at (2, 2) with its 'O'
        let before: Grid = grid.clone();
        assert!(try_place(&mut grid, "DOG", 1, 2, Direction::Down).is_none());
        assert_eq!(grid, before);

        // COD crossing CAT's 'C' with its own 'C'
        let cod: WordPlacement = try_place(&mut grid, "COD", 2, 2, Direction::Down).unwrap();
        assert_eq!((cod.row, cod.col), (2, 2));
        assert_eq!(grid.read_word(2, 2, Direction::Down, 3), "COD");
        assert_eq!(grid.read_word(2, 2, Direction::Right, 3), "CAT");
    }

    // Logger that keeps the messages of the current thread
    struct CaptureLogger;

    thread_local! {
        static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Debug
        }

        fn log(&self, record: &log::Record) {
            CAPTURED.with(|c| c.borrow_mut().push(record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;

    #[test]
    fn rejected_attempts_are_logged() {
        let _ = log::set_logger(&CAPTURE_LOGGER);
        log::set_max_level(log::LevelFilter::Debug);

        let mut grid: Grid = Grid::new(3);
        let mut rng = StdRng::seed_from_u64(6);
        assert!(place_word(&mut grid, "TOOLONG", 5, &mut rng).is_none());

        let rejected: Vec<String> = CAPTURED.with(|c| {
            c.borrow()
                .iter()
                .filter(|m| m.starts_with("Rejected TOOLONG at ("))
                .cloned()
                .collect()
        });
        assert_eq!(rejected.len(), 5);
        assert!(rejected[4].ends_with("(attempt 5)"));
    }

    #[test]
    fn zero_attempts_never_places() {
        let mut grid: Grid = Grid::new(10);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(place_word(&mut grid, "FOG", 0, &mut rng).is_none());
        assert_eq!(grid.num_empty(), 100);
    }
}
