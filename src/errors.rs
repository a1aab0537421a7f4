/*
errors.rs

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

//! Errors that abort a puzzle generation run.
//!
//! Placement shortfalls are not errors: a word that cannot be placed is reported and skipped.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The vocabulary file cannot be opened.
    #[error("failed to open vocabulary file {}: {source}", .path.display())]
    VocabularyOpen { path: PathBuf, source: io::Error },

    /// The vocabulary file cannot be read.
    #[error("error reading vocabulary file {}: {source}", .path.display())]
    VocabularyRead { path: PathBuf, source: io::Error },

    /// The vocabulary file does not provide enough words.
    #[error("vocabulary file must contain at least {required} words, found {found}")]
    TooFewVocabularyWords { found: usize, required: usize },

    /// Not enough words remain once the words too long for the grid are removed.
    #[error(
        "not enough words available after filtering: need at least {required} words, but only {found} words fit in a {grid_size}x{grid_size} grid"
    )]
    TooFewUsableWords {
        found: usize,
        required: usize,
        grid_size: usize,
    },

    /// The image cannot be encoded.
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    /// The image file cannot be created or written.
    #[error("failed to write output file {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The console report cannot be written.
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),

    /// The JSON report cannot be serialized.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type of the crate.
pub type Result<T> = std::result::Result<T, Error>;
