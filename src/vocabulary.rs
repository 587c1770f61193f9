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

use camino::Utf8Path;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// The ordered list of terms spanning the feature space of a run.
/// The position of a term is its slot in every document vector.
/// Immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    slots: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn new(terms: Vec<String>) -> Self {
        let mut slots = HashMap::with_capacity(terms.len());
        for (slot, term) in terms.iter().enumerate() {
            // The first occurrence of a term keeps its slot.
            slots.entry(term.clone()).or_insert(slot);
        }
        Self { terms, slots }
    }

    /// Reads a vocabulary from a file with one term per line.
    /// The 0-based line number of a term is its feature slot.
    pub fn load<P: AsRef<Utf8Path>>(path: P) -> std::io::Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let mut terms = Vec::new();
        for line in reader.lines() {
            terms.push(line?);
        }
        Ok(Self::new(terms))
    }

    /// The dimensionality of the feature space.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The feature slot of a term, if the term is part of the vocabulary.
    pub fn slot_of(&self, term: &str) -> Option<usize> {
        self.slots.get(term).copied()
    }
}
