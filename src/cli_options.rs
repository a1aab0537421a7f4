/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate a puzzle from the built-in vocabulary into `output.png`:
//!
//! ```
//! $ wordgrid
//! ```
//!
//! Use a custom word list, one word per line, and regenerate the same puzzle later:
//!
//! ```
//! $ wordgrid --vocab animals.txt --seed 1234 --output animals.png
//! ```

use clap::Parser;
use std::path::PathBuf;

use wordgrid::application::RunOptions;
use wordgrid::config::{OUTPUT_FILE, PuzzleConfig};
use wordgrid::report::OutputFormat;
use wordgrid::vocabulary::Vocabulary;

/// Generate a word search puzzle as a PNG image.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Path to custom vocabulary file (one word per line)
    #[arg(short, long)]
    pub vocab: Option<PathBuf>,

    /// Path of the image to create
    #[arg(short, long, default_value = OUTPUT_FILE)]
    pub output: PathBuf,

    /// Seed for the random generator, to reproduce a puzzle
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Format of the report printed on the standard output
    #[arg(value_enum, short, long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Build the run parameters from the command-line options.
    pub fn run_options(self) -> RunOptions {
        RunOptions {
            vocabulary: Vocabulary::from_option(self.vocab),
            output: self.output,
            seed: self.seed,
            format: self.format,
            config: PuzzleConfig::default(),
        }
    }
}

/// Parse the command-line options.
pub fn parse() -> Args {
    Args::parse()
}
