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

pub mod counts;
pub mod linguistic;
pub mod normalize;

use crate::vocabulary::Vocabulary;
use std::ops::RangeInclusive;
use strum::{AsRefStr, Display, EnumIs, EnumString};

/// The character window lengths used by the ngrams and combined modes.
pub const NGRAM_RANGE: RangeInclusive<usize> = 3..=6;

/// The feature mode of a run. Selected once per run, never per document.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, AsRefStr, EnumString, EnumIs)]
#[strum(serialize_all = "lowercase")]
pub enum FeatureMode {
    /// One slot per vocabulary term, holding whitespace token counts.
    Words,
    /// One slot per vocabulary term, holding character n-gram counts.
    Ngrams,
    /// A single slot holding the average sentence length of the document.
    Linguistic,
    /// N-gram slots plus a trailing average sentence length slot.
    Combined,
}

impl FeatureMode {
    /// The vector length of every document under this mode.
    pub fn vector_len(&self, vocabulary_len: usize) -> usize {
        match self {
            FeatureMode::Words | FeatureMode::Ngrams => vocabulary_len,
            FeatureMode::Linguistic => 1,
            FeatureMode::Combined => vocabulary_len + 1,
        }
    }
}

/// The extraction strategy of a run: how a body line updates a document
/// vector and what happens to the vector when its document closes.
#[derive(Debug)]
pub struct FeatureExtractor<'a> {
    mode: FeatureMode,
    vocabulary: &'a Vocabulary,
}

impl<'a> FeatureExtractor<'a> {
    pub fn new(mode: FeatureMode, vocabulary: &'a Vocabulary) -> Self {
        Self { mode, vocabulary }
    }

    /// The length of every vector allocated for this run.
    pub fn vector_len(&self) -> usize {
        self.mode.vector_len(self.vocabulary.len())
    }

    /// Applies one body line to the document vector.
    /// Under the linguistic mode this is a no-op, the scalar is computed
    /// from the accumulated text when the document closes.
    pub fn consume_line(&self, line: &str, vector: &mut [f64]) {
        match self.mode {
            FeatureMode::Words => self.add_token_counts(line, vector),
            FeatureMode::Ngrams => self.add_ngram_counts(line, vector),
            FeatureMode::Combined => {
                let scalar_slot = vector.len() - 1;
                self.add_ngram_counts(line, &mut vector[..scalar_slot]);
            }
            FeatureMode::Linguistic => {}
        }
    }

    /// Finalizes a document vector from the accumulated text at close.
    /// Count vectors are L1 normalized over themselves, the linguistic
    /// scalar is assigned raw and never divided by anything.
    pub fn finalize(&self, text: &str, vector: &mut [f64]) {
        match self.mode {
            FeatureMode::Words | FeatureMode::Ngrams => normalize::l1_normalize(vector),
            FeatureMode::Linguistic => {
                vector[0] = linguistic::average_sentence_length(text);
            }
            FeatureMode::Combined => {
                let scalar_slot = vector.len() - 1;
                normalize::l1_normalize(&mut vector[..scalar_slot]);
                vector[scalar_slot] = linguistic::average_sentence_length(text);
            }
        }
    }

    fn add_token_counts(&self, line: &str, vector: &mut [f64]) {
        for (token, count) in counts::token_counts(line) {
            if let Some(slot) = self.vocabulary.slot_of(&token) {
                vector[slot] += count as f64;
            }
        }
    }

    fn add_ngram_counts(&self, line: &str, vector: &mut [f64]) {
        for n in NGRAM_RANGE {
            for (ngram, count) in counts::ngram_counts(line, n) {
                if let Some(slot) = self.vocabulary.slot_of(&ngram) {
                    vector[slot] += count as f64;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{FeatureExtractor, FeatureMode};
    use crate::vocabulary::Vocabulary;
    use float_cmp::approx_eq;
    use std::str::FromStr;

    fn vocabulary(terms: &[&str]) -> Vocabulary {
        Vocabulary::new(terms.iter().map(|term| term.to_string()).collect())
    }

    #[test]
    fn mode_names_round_trip() {
        for mode in [
            FeatureMode::Words,
            FeatureMode::Ngrams,
            FeatureMode::Linguistic,
            FeatureMode::Combined,
        ] {
            assert_eq!(FeatureMode::from_str(&mode.to_string()).unwrap(), mode);
        }
        assert_eq!(FeatureMode::from_str("ngrams").unwrap(), FeatureMode::Ngrams);
        assert!(FeatureMode::from_str("tfidf").is_err());
    }

    #[test]
    fn vector_lengths_per_mode() {
        assert_eq!(FeatureMode::Words.vector_len(7), 7);
        assert_eq!(FeatureMode::Ngrams.vector_len(7), 7);
        assert_eq!(FeatureMode::Linguistic.vector_len(7), 1);
        assert_eq!(FeatureMode::Combined.vector_len(7), 8);
    }

    #[test]
    fn words_mode_counts_and_normalizes_known_tokens() {
        let vocabulary = vocabulary(&["cat", "dog"]);
        let extractor = FeatureExtractor::new(FeatureMode::Words, &vocabulary);
        let mut vector = vec![0.0; extractor.vector_len()];
        extractor.consume_line("The cat sat", &mut vector);
        extractor.consume_line("dog dog", &mut vector);
        assert_eq!(vector, vec![1.0, 2.0]);
        extractor.finalize(" The cat sat dog dog", &mut vector);
        assert!(approx_eq!(f64, vector[0], 1.0 / 3.0, ulps = 2));
        assert!(approx_eq!(f64, vector[1], 2.0 / 3.0, ulps = 2));
        assert!(approx_eq!(f64, vector.iter().sum::<f64>(), 1.0, ulps = 2));
    }

    #[test]
    fn ngrams_mode_counts_all_window_lengths() {
        let vocabulary = vocabulary(&["abc", "abcd", "xyz"]);
        let extractor = FeatureExtractor::new(FeatureMode::Ngrams, &vocabulary);
        let mut vector = vec![0.0; extractor.vector_len()];
        extractor.consume_line("abcdabc", &mut vector);
        // "abc" at offsets 0 and 4, "abcd" at offset 0, no "xyz".
        assert_eq!(vector, vec![2.0, 1.0, 0.0]);
        extractor.finalize(" abcdabc", &mut vector);
        assert!(approx_eq!(f64, vector.iter().sum::<f64>(), 1.0, ulps = 2));
    }

    #[test]
    fn linguistic_mode_ignores_lines_and_scores_at_close() {
        let vocabulary = vocabulary(&["cat"]);
        let extractor = FeatureExtractor::new(FeatureMode::Linguistic, &vocabulary);
        let mut vector = vec![0.0; extractor.vector_len()];
        assert_eq!(vector.len(), 1);
        extractor.consume_line("Hi there.", &mut vector);
        assert_eq!(vector, vec![0.0]);
        extractor.finalize(" Hi there. Bob went home. ", &mut vector);
        assert!(approx_eq!(f64, vector[0], 2.5, ulps = 2));
    }

    #[test]
    fn combined_mode_keeps_the_scalar_out_of_the_normalization() {
        let vocabulary = vocabulary(&["abc", "bcd"]);
        let extractor = FeatureExtractor::new(FeatureMode::Combined, &vocabulary);
        let mut vector = vec![0.0; extractor.vector_len()];
        assert_eq!(vector.len(), 3);
        extractor.consume_line("abcd abcd", &mut vector);
        assert_eq!(vector, vec![2.0, 2.0, 0.0]);
        extractor.finalize(" one two. three four five six.", &mut vector);
        // The count slots are normalized over themselves only.
        assert!(approx_eq!(f64, vector[0], 0.5, ulps = 2));
        assert!(approx_eq!(f64, vector[1], 0.5, ulps = 2));
        // The trailing scalar is the raw average sentence length.
        assert!(approx_eq!(f64, vector[2], 3.0, ulps = 2));
    }

    #[test]
    fn unknown_tokens_contribute_nothing() {
        let vocabulary = vocabulary(&["x"]);
        let extractor = FeatureExtractor::new(FeatureMode::Words, &vocabulary);
        let mut vector = vec![0.0; extractor.vector_len()];
        extractor.consume_line("y z", &mut vector);
        assert_eq!(vector, vec![0.0]);
        extractor.finalize(" y z", &mut vector);
        assert!(vector[0].is_nan());
    }
}
