// Copyright 2024 Felix Engl
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use itertools::Itertools;
use std::collections::HashMap;

/// Lower-cases a single body line and counts its whitespace separated tokens.
pub fn token_counts(line: &str) -> HashMap<String, usize> {
    let lowered = line.to_lowercase();
    lowered.split_whitespace().map(str::to_owned).counts()
}

/// Lower-cases a single body line and counts every contiguous substring of
/// `n` characters within it. Windows are character based and never leave the
/// line, so a substring straddling two lines of a document is never counted.
pub fn ngram_counts(line: &str, n: usize) -> HashMap<String, usize> {
    let lowered = line.to_lowercase();
    let chars = lowered.chars().collect_vec();
    if n == 0 || chars.len() < n {
        return HashMap::new();
    }
    chars
        .windows(n)
        .map(|window| window.iter().collect::<String>())
        .counts()
}

#[cfg(test)]
mod test {
    use super::{ngram_counts, token_counts};

    #[test]
    fn token_counts_are_case_insensitive() {
        let counts = token_counts("The cat SAT the");
        assert_eq!(counts.get("the"), Some(&2));
        assert_eq!(counts.get("cat"), Some(&1));
        assert_eq!(counts.get("sat"), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn empty_lines_have_no_tokens() {
        assert!(token_counts("").is_empty());
        assert!(token_counts("   \t ").is_empty());
    }

    #[test]
    fn ngram_counts_slide_over_the_line() {
        let counts = ngram_counts("abcabc", 3);
        assert_eq!(counts.get("abc"), Some(&2));
        assert_eq!(counts.get("bca"), Some(&1));
        assert_eq!(counts.get("cab"), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn ngram_counts_lower_case_their_input() {
        let counts = ngram_counts("ABAB", 2);
        assert_eq!(counts.get("ab"), Some(&2));
        assert_eq!(counts.get("ba"), Some(&1));
    }

    #[test]
    fn lines_shorter_than_the_window_have_no_ngrams() {
        assert!(ngram_counts("ab", 3).is_empty());
        assert!(ngram_counts("", 3).is_empty());
    }

    #[test]
    fn ngram_windows_are_character_based() {
        // 4 chars, 10 bytes; byte based windows would split the umlauts.
        let counts = ngram_counts("äöüß", 3);
        assert_eq!(counts.get("äöü"), Some(&1));
        assert_eq!(counts.get("öüß"), Some(&1));
        assert_eq!(counts.len(), 2);
    }
}
