/*
draw.rs

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

//! Draw the puzzle into a raster image.
//!
//! The image has a white background. The top part lists the words to find, below the
//! `Find these words:` title, four words per row. The grid follows, with one letter centered in
//! each cell. Text is drawn with the 8x8 monospaced bitmap font of the [`font8x8`] crate.

use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{ImageFormat, Rgba, RgbaImage};
use log::debug;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use crate::config::{
    HEADER_PADDING, PuzzleConfig, TITLE_HEIGHT, WORD_ROW_SPACING, WORD_SPACING, WORDS_PER_ROW,
};
use crate::errors::{Error, Result};
use crate::generator::grid::Grid;
use crate::puzzle::Puzzle;

/// Title above the word list.
pub const TITLE: &str = "Find these words:";

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

// Left margin of the title and of the word list
const LEFT_MARGIN: u32 = 10;

// Top of the title glyphs
const TITLE_TOP: u32 = 9;

// Top of the first row of the word list
const WORD_LIST_TOP: u32 = TITLE_HEIGHT + 8;

// Scaling factor of the grid letters (the word list uses the unscaled font)
const GRID_LETTER_SCALE: u32 = 2;

/// Width and height of a glyph, in pixels.
pub const GLYPH_SIZE: u32 = 8;

// Glyph drawn for the characters missing from the font
const FALLBACK_GLYPH: char = '?';

/// Height in pixels of the area above the grid, for the given number of words.
pub fn header_height(word_count: usize) -> u32 {
    let word_rows: u32 = word_count.div_ceil(WORDS_PER_ROW) as u32;
    TITLE_HEIGHT + word_rows * WORD_ROW_SPACING + HEADER_PADDING
}

/// Width and height in pixels of the image.
pub fn image_size(config: &PuzzleConfig, word_count: usize) -> (u32, u32) {
    let grid_pixels: u32 = config.grid_size as u32 * config.cell_size;
    (grid_pixels, grid_pixels + header_height(word_count))
}

/// Draw the puzzle.
pub fn render(puzzle: &Puzzle) -> RgbaImage {
    let (width, height) = image_size(&puzzle.config, puzzle.words.len());
    debug!("Drawing a {width}x{height} image");

    let mut img: RgbaImage = RgbaImage::from_pixel(width, height, WHITE);
    draw_word_list(&mut img, &puzzle.words);
    draw_grid(
        &mut img,
        &puzzle.grid,
        puzzle.config.cell_size,
        header_height(puzzle.words.len()),
    );
    img
}

/// Encode the image in PNG and write it to the given file.
///
/// The image is encoded in memory first, so that an encoding error does not leave a file behind.
pub fn save_png<P: AsRef<Path>>(img: &RgbaImage, path: P) -> Result<()> {
    let path: &Path = path.as_ref();
    let mut bytes: Vec<u8> = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    fs::write(path, &bytes).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Draw the title and the words.
fn draw_word_list(img: &mut RgbaImage, words: &[String]) {
    draw_text(img, TITLE, LEFT_MARGIN, TITLE_TOP, 1);

    for (i, word) in words.iter().enumerate() {
        let row: u32 = (i / WORDS_PER_ROW) as u32;
        let col: u32 = (i % WORDS_PER_ROW) as u32;
        draw_text(
            img,
            word,
            LEFT_MARGIN + col * WORD_SPACING,
            WORD_LIST_TOP + row * WORD_ROW_SPACING,
            1,
        );
    }
}

/// Draw the grid letters, starting `top` pixels from the top of the image.
fn draw_grid(img: &mut RgbaImage, grid: &Grid, cell_size: u32, top: u32) {
    let letter_size: u32 = GLYPH_SIZE * GRID_LETTER_SCALE;
    let offset_x: u32 = cell_size.saturating_sub(letter_size) / 2;
    let offset_y: u32 = cell_size.saturating_sub(letter_size) / 2;

    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if let Some(letter) = grid.get(row, col) {
                draw_char(
                    img,
                    letter,
                    col as u32 * cell_size + offset_x,
                    top + row as u32 * cell_size + offset_y,
                    GRID_LETTER_SCALE,
                );
            }
        }
    }
}

/// Draw a line of text. (`x`, `y`) is the top-left corner of the first glyph.
fn draw_text(img: &mut RgbaImage, text: &str, x: u32, y: u32, scale: u32) {
    for (i, c) in text.chars().enumerate() {
        draw_char(img, c, x + i as u32 * GLYPH_SIZE * scale, y, scale);
    }
}

/// Return the bitmap of a character: one byte per row, bit 0 is the leftmost pixel.
fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| BASIC_FONTS.get(FALLBACK_GLYPH))
        .unwrap_or([0; 8])
}

/// Draw a single glyph. Pixels outside the image are dropped.
fn draw_char(img: &mut RgbaImage, c: char, x: u32, y: u32, scale: u32) {
    for (gy, bits) in (0..GLYPH_SIZE).zip(glyph(c)) {
        for gx in (0..GLYPH_SIZE).filter(|gx| bits & (1 << gx) != 0) {
            for sy in 0..scale {
                for sx in 0..scale {
                    let px: u32 = x + gx * scale + sx;
                    let py: u32 = y + gy * scale + sy;
                    if px < img.width() && py < img.height() {
                        img.put_pixel(px, py, BLACK);
                    }
                }
            }
        }
    }
}
