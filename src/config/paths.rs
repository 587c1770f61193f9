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

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// The default folder scanned for category folders.
pub const DEFAULT_DATA_ROOT: &str = "./data";
/// The default corpus file expected inside every category folder.
pub const DEFAULT_CORPUS_FILE_NAME: &str = "linear.txt";
/// The default vocabulary file name inside the data root.
pub const DEFAULT_VOCAB_FILE_NAME: &str = "vocab_file.txt";

/// All paths used by a run.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename(serialize = "Paths"))]
pub struct PathsConfig {
    /// The folder whose sub folders are the categories.
    #[serde(default = "_default_data_root")]
    pub data_root: Utf8PathBuf,

    /// The vocabulary file, one term per line. When unset the file
    /// `vocab_file.txt` inside the data root is used.
    #[serde(default)]
    pub vocabulary_file: Option<Utf8PathBuf>,

    /// The corpus file name expected inside every category folder.
    #[serde(default = "_default_corpus_file_name")]
    pub corpus_file_name: String,
}

fn _default_data_root() -> Utf8PathBuf {
    Utf8PathBuf::from(DEFAULT_DATA_ROOT)
}
fn _default_corpus_file_name() -> String {
    DEFAULT_CORPUS_FILE_NAME.to_string()
}

impl PathsConfig {
    /// The resolved vocabulary file path.
    pub fn vocabulary_path(&self) -> Utf8PathBuf {
        self.vocabulary_file
            .clone()
            .unwrap_or_else(|| self.data_root.join(DEFAULT_VOCAB_FILE_NAME))
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_root: _default_data_root(),
            vocabulary_file: None,
            corpus_file_name: _default_corpus_file_name(),
        }
    }
}
