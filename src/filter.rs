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

use crate::corpus::CategoryAccumulator;

/// The survivors of one category after degenerate vectors are removed,
/// identifiers and matrix rows in matching encounter order.
#[derive(Debug, Default)]
pub struct FilteredCategory {
    pub identifiers: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
    /// How many documents the category had before filtering.
    pub original_len: usize,
}

impl FilteredCategory {
    pub fn retained_len(&self) -> usize {
        self.identifiers.len()
    }
}

/// Drops every document whose vector sum is NaN or zero.
///
/// NaN sums are what the normalizer leaves behind when it divides a
/// zero-sum vector by itself; this is the single place that interprets
/// them. Encounter order is preserved, and a duplicated identifier is
/// checked once per occurrence, each surviving occurrence emitting the
/// last-written vector again.
pub fn retain_valid(accumulated: CategoryAccumulator) -> FilteredCategory {
    let CategoryAccumulator { order, vectors } = accumulated;
    let original_len = order.len();
    let mut identifiers = Vec::new();
    let mut matrix = Vec::new();
    for identifier in order {
        let Some(vector) = vectors.get(&identifier) else {
            continue;
        };
        let sum: f64 = vector.iter().sum();
        if !sum.is_nan() && sum != 0.0 {
            identifiers.push(identifier);
            matrix.push(vector.clone());
        }
    }
    FilteredCategory {
        identifiers,
        matrix,
        original_len,
    }
}

#[cfg(test)]
mod test {
    use super::retain_valid;
    use crate::corpus::CategoryAccumulator;
    use std::collections::HashMap;

    fn accumulator(entries: &[(&str, Vec<f64>)]) -> CategoryAccumulator {
        CategoryAccumulator {
            order: entries.iter().map(|(id, _)| id.to_string()).collect(),
            vectors: entries
                .iter()
                .map(|(id, vector)| (id.to_string(), vector.clone()))
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn drops_nan_and_zero_sums_and_keeps_order() {
        let filtered = retain_valid(accumulator(&[
            ("a", vec![0.5, 0.5]),
            ("b", vec![f64::NAN, f64::NAN]),
            ("c", vec![0.0, 0.0]),
            ("d", vec![0.0, 1.0]),
        ]));
        assert_eq!(filtered.identifiers, vec!["a", "d"]);
        assert_eq!(filtered.matrix, vec![vec![0.5, 0.5], vec![0.0, 1.0]]);
        assert_eq!(filtered.original_len, 4);
        assert_eq!(filtered.retained_len(), 2);
    }

    #[test]
    fn a_single_nan_entry_poisons_the_document() {
        let filtered = retain_valid(accumulator(&[("a", vec![1.0, f64::NAN])]));
        assert_eq!(filtered.retained_len(), 0);
        assert_eq!(filtered.original_len, 1);
    }

    #[test]
    fn surviving_duplicates_emit_one_row_per_occurrence() {
        let mut accumulated = accumulator(&[("a", vec![1.0])]);
        accumulated.order.push("a".to_string());
        let filtered = retain_valid(accumulated);
        assert_eq!(filtered.identifiers, vec!["a", "a"]);
        assert_eq!(filtered.matrix, vec![vec![1.0], vec![1.0]]);
        assert_eq!(filtered.original_len, 2);
    }

    #[test]
    fn empty_categories_stay_empty() {
        let filtered = retain_valid(CategoryAccumulator::default());
        assert_eq!(filtered.retained_len(), 0);
        assert_eq!(filtered.original_len, 0);
    }
}
