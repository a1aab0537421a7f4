/*
report.rs

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

//! Console report.
//!
//! The text report echoes the vocabulary choice and the filter diagnostics, then prints the
//! grid, the word positions, and the verification results. The JSON report prints a single
//! [`crate::puzzle::PuzzleSummary`] document instead.

use clap::ValueEnum;
use std::io::Write;

use crate::errors::Result;
use crate::generator::filter::{FilterOutcome, word_len};
use crate::generator::grid::Grid;
use crate::generator::placement::WordPlacement;
use crate::generator::verifier::Verification;
use crate::puzzle::Puzzle;
use crate::vocabulary::Vocabulary;

/// Report format.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable lines.
    #[default]
    Text,

    /// JSON document.
    Json,
}

/// Print the vocabulary file being loaded. Nothing is printed for the built-in vocabulary.
///
/// Called before loading, so that the path is echoed even when loading fails.
pub fn write_vocabulary_source<W: Write>(out: &mut W, vocabulary: &Vocabulary) -> Result<()> {
    if let Vocabulary::File(path) = vocabulary {
        writeln!(out, "Loading custom vocabulary from: {}", path.display())?;
    }
    Ok(())
}

/// Print the size of the loaded vocabulary.
pub fn write_vocabulary_size<W: Write>(
    out: &mut W,
    vocabulary: &Vocabulary,
    count: usize,
) -> Result<()> {
    match vocabulary {
        Vocabulary::Builtin => {
            writeln!(out, "Using default first-grade vocabulary ({count} words)")?;
        }
        Vocabulary::File(_) => {
            writeln!(out, "Loaded {count} words from custom vocabulary file")?;
        }
    }
    Ok(())
}

/// Print the words removed by the length filter.
pub fn write_filter<W: Write>(
    out: &mut W,
    outcome: &FilterOutcome,
    grid_size: usize,
) -> Result<()> {
    if !outcome.removed.is_empty() {
        writeln!(
            out,
            "Removed {} words that are too long for {grid_size}x{grid_size} grid:",
            outcome.removed.len()
        )?;
        for word in &outcome.removed {
            writeln!(out, "  - {word} ({} characters)", word_len(word))?;
        }
    }
    writeln!(
        out,
        "After filtering: {} words available for puzzle generation",
        outcome.kept.len()
    )?;
    Ok(())
}

/// Print the words that could not be placed.
pub fn write_unplaced<W: Write>(
    out: &mut W,
    unplaced: &[String],
    max_attempts: usize,
) -> Result<()> {
    for word in unplaced {
        writeln!(
            out,
            "Warning: Could not place word '{word}' after {max_attempts} attempts"
        )?;
    }
    Ok(())
}

/// Print the grid, one row per line, letters separated by spaces.
pub fn write_grid<W: Write>(out: &mut W, grid: &Grid) -> Result<()> {
    writeln!(out, "\nWord search puzzle grid:")?;
    for row in grid.rows() {
        let letters: Vec<String> = row.chars().map(String::from).collect();
        writeln!(out, "{}", letters.join(" "))?;
    }
    Ok(())
}

/// Print the position of each placed word, and their number.
pub fn write_placements<W: Write>(out: &mut W, placements: &[WordPlacement]) -> Result<()> {
    writeln!(out, "\nWords placed in the puzzle:")?;
    for p in placements {
        writeln!(
            out,
            "- {}: Row {}, Col {}, Direction {}",
            p.word, p.row, p.col, p.direction
        )?;
    }
    writeln!(out, "\nTotal words placed: {}", placements.len())?;
    Ok(())
}

/// Print one line per verified word.
pub fn write_verifications<W: Write>(out: &mut W, verifications: &[Verification]) -> Result<()> {
    writeln!(out, "\nVerifying word placements:")?;
    for v in verifications {
        if v.passed {
            writeln!(out, "✓ {} found correctly at ({},{})", v.word, v.row, v.col)?;
        } else {
            writeln!(
                out,
                "✗ {} NOT found at ({},{}) - found '{}' instead",
                v.word, v.row, v.col, v.found
            )?;
        }
    }
    Ok(())
}

/// Print the puzzle as a JSON document.
pub fn write_json<W: Write>(out: &mut W, puzzle: &Puzzle) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &puzzle.summary())?;
    writeln!(out)?;
    Ok(())
}
