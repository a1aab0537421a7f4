/*
vocabulary.rs

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

//! Word lists to build puzzles from.
//!
//! The built-in list contains first-grade level English words. A custom list can be loaded
//! from a plain text file with one word per line.

use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::errors::{Error, Result};

/// Built-in first-grade vocabulary.
pub const FIRST_GRADE_VOCABULARY: [&str; 100] = [
    "ache",
    "enormous",
    "equal",
    "exclaim",
    "exhausted",
    "expensive",
    "fancy",
    "fasten",
    "filthy",
    "flat",
    "flee",
    "fog",
    "footprint",
    "forest",
    "freezing",
    "gather",
    "giant",
    "glad",
    "gleaming",
    "glum",
    "grab",
    "grateful",
    "grin",
    "grip",
    "groan",
    "hatch",
    "heap",
    "hide",
    "hobby",
    "honest",
    "howl",
    "illustrator",
    "injury",
    "jealous",
    "knob",
    "lively",
    "loosen",
    "mask",
    "misty",
    "modern",
    "mountain",
    "narrow",
    "obey",
    "pain",
    "passenger",
    "pattern",
    "pest",
    "polish",
    "pretend",
    "promise",
    "rapid",
    "remove",
    "repeat",
    "rescue",
    "restart",
    "return",
    "ripe",
    "rise",
    "roar",
    "rough",
    "rusty",
    "scold",
    "scratch",
    "seed",
    "selfish",
    "serious",
    "shell",
    "shovel",
    "shriek",
    "sibling",
    "silent",
    "simple",
    "slippery",
    "sly",
    "sneaky",
    "sob",
    "spiral",
    "splendid",
    "sprinkle",
    "squirm",
    "startle",
    "steep",
    "stormy",
    "striped",
    "surround",
    "switch",
    "terrified",
    "thick",
    "thunder",
    "ticket",
    "timid",
    "transportation",
    "travel",
    "trust",
    "upset",
    "weed",
    "whimper",
    "whirl",
    "wicked",
    "yank",
];

/// Origin of the words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vocabulary {
    /// The built-in [`FIRST_GRADE_VOCABULARY`] list.
    Builtin,

    /// A text file with one word per line.
    File(PathBuf),
}

impl Vocabulary {
    /// Create a [`Vocabulary`] object from an optional file path.
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Vocabulary::File(p),
            None => Vocabulary::Builtin,
        }
    }

    /// Return the words.
    ///
    /// # Errors
    ///
    /// Loading a file fails if the file cannot be read or if it contains fewer than
    /// `min_words` words.
    pub fn words(&self, min_words: usize) -> Result<Vec<String>> {
        match self {
            Vocabulary::Builtin => Ok(builtin()),
            Vocabulary::File(path) => load_from_path(path, min_words),
        }
    }
}

/// Return the built-in word list.
pub fn builtin() -> Vec<String> {
    FIRST_GRADE_VOCABULARY
        .iter()
        .map(|w| w.to_string())
        .collect()
}

/// Load words from a text file.
///
/// The lines are trimmed and blank lines are skipped.
pub fn load_from_path<P: AsRef<Path>>(path: P, min_words: usize) -> Result<Vec<String>> {
    let path: &Path = path.as_ref();
    let file: File = File::open(path).map_err(|source| Error::VocabularyOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let words: Vec<String> = parse_lines(BufReader::new(file)).map_err(|source| {
        Error::VocabularyRead {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!("Read {} words from {}", words.len(), path.display());

    if words.len() < min_words {
        return Err(Error::TooFewVocabularyWords {
            found: words.len(),
            required: min_words,
        });
    }
    Ok(words)
}

/// Extract the non-blank, trimmed lines from a reader.
fn parse_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut words: Vec<String> = Vec::new();
    for line in reader.lines() {
        let line: String = line?;
        let word: &str = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}
