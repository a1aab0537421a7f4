/*
lib.rs

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

//! Word search puzzle generator.
//!
//! Words are picked from a vocabulary, hidden in a square letter grid in any of eight
//! directions, and the puzzle is drawn into a PNG image with the list of the words to find.
//!
//! [`application::run`] performs a complete run. The building blocks are in the
//! [`generator`] module.

pub mod application;
pub mod config;
pub mod draw;
pub mod errors;
pub mod generator;
pub mod logger;
pub mod puzzle;
pub mod report;
pub mod vocabulary;
