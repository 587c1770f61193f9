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

/// The mean number of whitespace separated words per sentence, where a
/// sentence is a non-blank fragment between literal `.` characters.
/// A text without any sentence has a mean of 0.
pub fn average_sentence_length(text: &str) -> f64 {
    let (sentences, words) = text
        .split('.')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .fold((0usize, 0usize), |(sentences, words), fragment| {
            (sentences + 1, words + fragment.split_whitespace().count())
        });
    if sentences == 0 {
        return 0.0;
    }
    words as f64 / sentences as f64
}

#[cfg(test)]
mod test {
    use super::average_sentence_length;
    use float_cmp::approx_eq;

    #[test]
    fn averages_words_over_sentences() {
        // Two sentences of 2 and 3 words, the trailing blank fragment is dropped.
        let avg = average_sentence_length("Hi there. Bob went home. ");
        assert!(approx_eq!(f64, avg, 2.5, ulps = 2));
    }

    #[test]
    fn blank_fragments_are_not_sentences() {
        let avg = average_sentence_length("one two three... four");
        assert!(approx_eq!(f64, avg, 2.0, ulps = 2));
    }

    #[test]
    fn no_sentences_means_zero() {
        assert_eq!(average_sentence_length(""), 0.0);
        assert_eq!(average_sentence_length("..."), 0.0);
        assert_eq!(average_sentence_length("   "), 0.0);
    }
}
