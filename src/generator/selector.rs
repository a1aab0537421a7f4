/*
selector.rs

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

//! Pick random words from a list.

use rand::Rng;

/// Select up to `count` distinct entries from `words`, and return them in uppercase.
///
/// Each drawn entry is removed from a working copy of the list by swapping it with the last
/// entry. The returned order is random. Fewer than `count` words are returned when the list is
/// shorter.
pub fn select_words<S, R>(words: &[S], count: usize, rng: &mut R) -> Vec<String>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut pool: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
    let mut selected: Vec<String> = Vec::with_capacity(count.min(pool.len()));

    while selected.len() < count && !pool.is_empty() {
        let i: usize = rng.random_range(0..pool.len());
        selected.push(pool.swap_remove(i).to_uppercase());
    }
    selected
}
