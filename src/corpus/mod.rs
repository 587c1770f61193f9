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

pub mod parser;

pub use parser::{CorpusParser, ParserState};

use std::collections::HashMap;

/// Everything one category's corpus file accumulated: the identifiers in
/// encounter order (duplicates included) and the identifier to vector map.
/// A duplicated identifier maps to the vector of its last occurrence.
#[derive(Debug, Default)]
pub struct CategoryAccumulator {
    pub order: Vec<String>,
    pub vectors: HashMap<String, Vec<f64>>,
}
