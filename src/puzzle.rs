/*
puzzle.rs

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

//! Word search puzzle.

use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::config::PuzzleConfig;
use crate::errors::{Error, Result};
use crate::generator::filter::{self, FilterOutcome};
use crate::generator::grid::Grid;
use crate::generator::placement::{self, GeneratedGrid, WordPlacement};
use crate::generator::selector;
use crate::generator::verifier::{self, Verification};

/// Generated puzzle.
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// Parameters used to build the puzzle.
    pub config: PuzzleConfig,

    /// Vocabulary words kept and removed by the length filter.
    pub filtered: FilterOutcome,

    /// Selected words, in uppercase. Some of them might not be in the grid, see
    /// [`Puzzle::unplaced`].
    pub words: Vec<String>,

    /// Letter grid.
    pub grid: Grid,

    /// Position of the words in the grid.
    pub placements: Vec<WordPlacement>,

    /// Selected words that could not be placed.
    pub unplaced: Vec<String>,
}

/// Serializable view of a [`Puzzle`], with the verification results.
#[derive(Serialize, Debug)]
pub struct PuzzleSummary<'a> {
    pub grid_size: usize,
    pub removed_words: &'a [String],
    pub words: &'a [String],
    pub grid: Vec<String>,
    pub placements: &'a [WordPlacement],
    pub unplaced: &'a [String],
    pub verifications: Vec<Verification>,
}

impl Puzzle {
    /// Generate a puzzle from the given vocabulary.
    ///
    /// # Errors
    ///
    /// The method returns an error when fewer than [`PuzzleConfig::min_words`] words fit in the
    /// grid. No grid is built in that case.
    pub fn generate<S, R>(config: &PuzzleConfig, vocabulary: &[S], rng: &mut R) -> Result<Self>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let filtered: FilterOutcome = filter::filter_by_length(vocabulary, config.grid_size);
        Self::from_filtered(config, filtered, rng)
    }

    /// Generate a puzzle from an already filtered vocabulary.
    ///
    /// # Errors
    ///
    /// See [`Puzzle::generate`].
    pub fn from_filtered<R: Rng + ?Sized>(
        config: &PuzzleConfig,
        filtered: FilterOutcome,
        rng: &mut R,
    ) -> Result<Self> {
        info!(
            "{} words available after filtering ({} removed)",
            filtered.kept.len(),
            filtered.removed.len()
        );
        if filtered.kept.len() < config.min_words {
            return Err(Error::TooFewUsableWords {
                found: filtered.kept.len(),
                required: config.min_words,
                grid_size: config.grid_size,
            });
        }

        let words: Vec<String> = selector::select_words(&filtered.kept, config.word_count, rng);
        debug!("Selected words: {words:?}");

        let generated: GeneratedGrid = placement::place_words(&words, config, rng);
        Ok(Self {
            config: *config,
            filtered,
            words,
            grid: generated.grid,
            placements: generated.placements,
            unplaced: generated.unplaced,
        })
    }

    /// Verify the placements against the grid.
    pub fn verify(&self) -> Vec<Verification> {
        verifier::verify_placements(&self.grid, &self.placements)
    }

    /// Return a serializable summary of the puzzle.
    pub fn summary(&self) -> PuzzleSummary<'_> {
        PuzzleSummary {
            grid_size: self.config.grid_size,
            removed_words: &self.filtered.removed,
            words: &self.words,
            grid: self.grid.rows(),
            placements: &self.placements,
            unplaced: &self.unplaced,
            verifications: self.verify(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn builtin_vocabulary_produces_a_verified_puzzle() {
        let config: PuzzleConfig = PuzzleConfig::default();
        let vocabulary: Vec<String> = crate::vocabulary::builtin();
        let mut rng = StdRng::seed_from_u64(2025);
        let puzzle: Puzzle = Puzzle::generate(&config, &vocabulary, &mut rng).unwrap();

        assert_eq!(puzzle.words.len(), 10);
        assert!(puzzle.filtered.removed.contains(&"transportation".to_string()));
        assert!(puzzle.filtered.removed.contains(&"illustrator".to_string()));
        assert!(puzzle.grid.is_full());
        assert_eq!(
            puzzle.placements.len() + puzzle.unplaced.len(),
            puzzle.words.len()
        );
        assert!(puzzle.verify().iter().all(|v| v.passed));
    }

    #[test]
    fn too_long_words_never_reach_the_grid() {
        let config: PuzzleConfig = PuzzleConfig::default();
        let mut vocabulary: Vec<&str> = vec![
            "ache", "fog", "glad", "grin", "heap", "knob", "mask", "obey", "pest", "roar",
        ];
        vocabulary.push("illustrator");
        let mut rng = StdRng::seed_from_u64(8);
        let puzzle: Puzzle = Puzzle::generate(&config, &vocabulary, &mut rng).unwrap();

        assert_eq!(puzzle.filtered.removed, vec!["illustrator"]);
        assert!(!puzzle.words.contains(&"ILLUSTRATOR".to_string()));
        assert!(puzzle.placements.iter().all(|p| p.word != "ILLUSTRATOR"));
    }

    #[test]
    fn selected_words_fit_once_in_uppercase() {
        let config: PuzzleConfig = PuzzleConfig::default();
        let vocabulary: Vec<&str> = vec![
            "fußballfan", "ache", "fog", "glad", "grin", "heap", "knob", "mask", "obey", "pest",
            "roar",
        ];
        let mut rng = StdRng::seed_from_u64(3);
        let puzzle: Puzzle = Puzzle::generate(&config, &vocabulary, &mut rng).unwrap();

        assert_eq!(puzzle.filtered.removed, vec!["fußballfan"]);
        assert!(puzzle.words.iter().all(|w| w.chars().count() <= config.grid_size));
        assert!(!puzzle.words.contains(&"FUSSBALLFAN".to_string()));
    }

    #[test]
    fn too_few_usable_words_is_an_error() {
        let config: PuzzleConfig = PuzzleConfig::default();
        let vocabulary: Vec<&str> = vec![
            "ache", "fog", "glad", "grin", "heap", "knob", "mask", "obey", "pest", "transportation",
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let err: Error = Puzzle::generate(&config, &vocabulary, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            Error::TooFewUsableWords {
                found: 9,
                required: 10,
                grid_size: 10
            }
        ));
    }

    #[test]
    fn summary_serializes_to_json() {
        let config: PuzzleConfig = PuzzleConfig::default();
        let vocabulary: Vec<String> = crate::vocabulary::builtin();
        let mut rng = StdRng::seed_from_u64(77);
        let puzzle: Puzzle = Puzzle::generate(&config, &vocabulary, &mut rng).unwrap();

        let value: serde_json::Value = serde_json::to_value(puzzle.summary()).unwrap();
        assert_eq!(value["grid_size"], 10);
        assert_eq!(value["grid"].as_array().unwrap().len(), 10);
        assert_eq!(
            value["placements"].as_array().unwrap().len(),
            puzzle.placements.len()
        );
        if let Some(p) = value["placements"].as_array().unwrap().first() {
            let direction: &str = p["direction"].as_str().unwrap();
            assert!(
                direction
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c == '_')
            );
        }
    }
}
