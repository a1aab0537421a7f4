/*
application.rs

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

//! Generate a puzzle, draw it, and report about it.

use image::RgbaImage;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::path::PathBuf;

use crate::config::{OUTPUT_FILE, PuzzleConfig};
use crate::draw;
use crate::errors::Result;
use crate::generator::filter::{self, FilterOutcome};
use crate::generator::verifier::Verification;
use crate::puzzle::Puzzle;
use crate::report::{self, OutputFormat};
use crate::vocabulary::Vocabulary;

/// Parameters of a run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Where to get the words from.
    pub vocabulary: Vocabulary,

    /// Path of the PNG image to create.
    pub output: PathBuf,

    /// Seed of the random generator. A random seed is used when not provided.
    pub seed: Option<u64>,

    /// Report format.
    pub format: OutputFormat,

    /// Puzzle parameters.
    pub config: PuzzleConfig,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::Builtin,
            output: PathBuf::from(OUTPUT_FILE),
            seed: None,
            format: OutputFormat::default(),
            config: PuzzleConfig::default(),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Seed that was used. Passing it back in [`RunOptions::seed`] reproduces the puzzle.
    pub seed: u64,

    /// Selected words.
    pub words: Vec<String>,

    /// Number of words placed in the grid.
    pub placed: usize,

    /// Number of placed words that passed the verification.
    pub verified: usize,

    /// Image width and height in pixels.
    pub image_size: (u32, u32),

    /// Path of the created image.
    pub output: PathBuf,
}

/// Run the whole generation and write the report to `out`.
///
/// # Errors
///
/// The function fails when the vocabulary cannot be loaded, when not enough words fit in the
/// grid, or when the image cannot be written. In the first two cases no image is created.
pub fn run<W: Write>(options: &RunOptions, out: &mut W) -> Result<RunSummary> {
    let text: bool = options.format == OutputFormat::Text;
    let config: &PuzzleConfig = &options.config;

    if text {
        writeln!(out, "Generating word search puzzle...")?;
    }

    let seed: u64 = options.seed.unwrap_or_else(|| rand::rng().random());
    debug!("Random seed = {seed}");
    let mut rng: StdRng = StdRng::seed_from_u64(seed);

    if text {
        report::write_vocabulary_source(out, &options.vocabulary)?;
    }
    let vocabulary: Vec<String> = options.vocabulary.words(config.min_words)?;
    info!("Vocabulary: {} words", vocabulary.len());
    if text {
        report::write_vocabulary_size(out, &options.vocabulary, vocabulary.len())?;
    }

    let filtered: FilterOutcome = filter::filter_by_length(&vocabulary, config.grid_size);
    if text {
        report::write_filter(out, &filtered, config.grid_size)?;
    }

    let puzzle: Puzzle = Puzzle::from_filtered(config, filtered, &mut rng)?;
    if text {
        report::write_unplaced(out, &puzzle.unplaced, config.max_attempts)?;
    }

    let img: RgbaImage = draw::render(&puzzle);
    draw::save_png(&img, &options.output)?;
    info!("Puzzle saved in {}", options.output.display());

    let verifications: Vec<Verification> = puzzle.verify();
    match options.format {
        OutputFormat::Text => {
            writeln!(
                out,
                "Word search puzzle created successfully: {} ({}x{} pixels)",
                options.output.display(),
                img.width(),
                img.height()
            )?;
            report::write_grid(out, &puzzle.grid)?;
            report::write_placements(out, &puzzle.placements)?;
            report::write_verifications(out, &verifications)?;
        }
        OutputFormat::Json => report::write_json(out, &puzzle)?,
    }

    out.flush()?;

    Ok(RunSummary {
        seed,
        words: puzzle.words.clone(),
        placed: puzzle.placements.len(),
        verified: verifications.iter().filter(|v| v.passed).count(),
        image_size: img.dimensions(),
        output: options.output.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::io;

    // Writer that accepts the report but cannot flush it
    struct UnflushableWriter(Vec<u8>);

    impl Write for UnflushableWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn flush_error_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let options: RunOptions = RunOptions {
            output: dir.path().join("puzzle.png"),
            seed: Some(10),
            ..RunOptions::default()
        };
        let mut out: UnflushableWriter = UnflushableWriter(Vec::new());
        let err: Error = run(&options, &mut out).unwrap_err();
        assert!(matches!(err, Error::Report(_)));
        assert!(!out.0.is_empty());
    }

    #[test]
    fn seed_is_reported_back() {
        let dir = tempfile::tempdir().unwrap();
        let options: RunOptions = RunOptions {
            output: dir.path().join("puzzle.png"),
            seed: Some(123),
            ..RunOptions::default()
        };
        let summary: RunSummary = run(&options, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(summary.seed, 123);
        assert_eq!(summary.verified, summary.placed);
    }
}
