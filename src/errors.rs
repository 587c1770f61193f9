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

use thiserror::Error;

/// An error raised while turning corpora into document vectors.
/// Every variant is fatal for the whole run; degenerate vectors are not
/// errors, they are handled by the document filter.
#[derive(Debug, Error)]
pub enum VectorizeError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("Malformed document tag in {category} at line {line_number}: {line:?}")]
    MalformedDocumentTag {
        category: String,
        line_number: usize,
        line: String,
    },
}
