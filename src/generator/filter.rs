/*
filter.rs

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

//! Remove the words that cannot fit in the grid.

use log::debug;
use serde::Serialize;

/// Result of [`filter_by_length`].
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Words that fit, in their original order.
    pub kept: Vec<String>,

    /// Words that are too long, in their original order.
    pub removed: Vec<String>,
}

/// Return the length of a word once in uppercase, in characters.
///
/// Uppercase conversion can add characters (`ß` becomes `SS`), and the words are placed in the
/// grid in uppercase.
pub fn word_len(word: &str) -> usize {
    word.chars().flat_map(char::to_uppercase).count()
}

/// Split the words between the ones with at most `max_len` characters in uppercase and the
/// others.
pub fn filter_by_length<S: AsRef<str>>(words: &[S], max_len: usize) -> FilterOutcome {
    let mut outcome: FilterOutcome = FilterOutcome::default();
    for word in words.iter().map(AsRef::as_ref) {
        if word_len(word) <= max_len {
            outcome.kept.push(word.to_string());
        } else {
            debug!("Removing {word} ({} characters)", word_len(word));
            outcome.removed.push(word.to_string());
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_length() {
        let words: [&str; 5] = ["fog", "mountain", "transportation", "sly", "illustrator"];
        let outcome: FilterOutcome = filter_by_length(&words, 10);
        assert_eq!(outcome.kept, vec!["fog", "mountain", "sly"]);
        assert_eq!(outcome.removed, vec!["transportation", "illustrator"]);
    }

    #[test]
    fn length_equal_to_the_maximum_is_kept() {
        let outcome: FilterOutcome = filter_by_length(&["abcde", "abcdef"], 5);
        assert_eq!(outcome.kept, vec!["abcde"]);
        assert_eq!(outcome.removed, vec!["abcdef"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let outcome: FilterOutcome = filter_by_length(&["été", "crème"], 3);
        assert_eq!(outcome.kept, vec!["été"]);
    }

    #[test]
    fn counts_the_uppercase_length() {
        assert_eq!(word_len("fußballfan"), 11);
        let outcome: FilterOutcome = filter_by_length(&["fußballfan", "fussballs"], 10);
        assert_eq!(outcome.kept, vec!["fussballs"]);
        assert_eq!(outcome.removed, vec!["fußballfan"]);
    }

    #[test]
    fn filtering_twice_gives_the_same_result() {
        let words: Vec<String> = crate::vocabulary::builtin();
        let first: FilterOutcome = filter_by_length(&words, 10);
        let second: FilterOutcome = filter_by_length(&words, 10);
        assert_eq!(first, second);
        assert_eq!(filter_by_length(&first.kept, 10).kept, first.kept);
    }

    #[test]
    fn empty_result_is_valid() {
        let outcome: FilterOutcome = filter_by_length(&["abc"], 2);
        assert!(outcome.kept.is_empty());
        assert_eq!(outcome.removed.len(), 1);
    }
}
