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

use crate::config::Configs;
use crate::corpus::CorpusParser;
use crate::errors::VectorizeError;
use crate::features::{FeatureExtractor, FeatureMode};
use crate::filter::retain_valid;
use crate::output::write_vectors;
use crate::vocabulary::Vocabulary;
use camino::{Utf8Path, Utf8PathBuf};
use log::{info, warn};
use std::fs::File;
use std::io::BufReader;

/// A full vectorizer run over every category below the data root.
/// Categories are processed one after another and share nothing but the
/// vocabulary; each one's state is dropped once its output file is written.
#[derive(Debug)]
pub struct Docvec {
    mode: FeatureMode,
    configs: Configs,
}

impl Docvec {
    pub fn new(mode: FeatureMode, configs: Configs) -> Self {
        Self { mode, configs }
    }

    /// Processes every category and writes one `vecs_<mode>.csv` each.
    /// The first malformed document tag aborts the whole run.
    pub fn run(&self) -> Result<(), VectorizeError> {
        let vocabulary_path = self.configs.paths.vocabulary_path();
        let vocabulary = Vocabulary::load(&vocabulary_path)?;
        if vocabulary.is_empty() && !self.mode.is_linguistic() {
            warn!(
                "The vocabulary at {} is empty, every document will be filtered out.",
                vocabulary_path
            );
        }
        let extractor = FeatureExtractor::new(self.mode, &vocabulary);
        for category in self.category_directories()? {
            self.process_category(&category, &extractor)?;
        }
        Ok(())
    }

    /// The category folders below the data root, sorted by name for
    /// reproducible runs.
    fn category_directories(&self) -> Result<Vec<Utf8PathBuf>, VectorizeError> {
        let mut categories = Vec::new();
        for entry in self.configs.paths.data_root.read_dir_utf8()? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                categories.push(entry.into_path());
            }
        }
        categories.sort();
        Ok(categories)
    }

    fn process_category(
        &self,
        category: &Utf8Path,
        extractor: &FeatureExtractor,
    ) -> Result<(), VectorizeError> {
        info!("{category}");
        let category_name = category.file_name().unwrap_or(category.as_str());
        let corpus_path = category.join(&self.configs.paths.corpus_file_name);
        let reader = BufReader::new(File::open(&corpus_path)?);
        let mut parser = CorpusParser::new(category_name, extractor);
        parser.consume(reader)?;
        let filtered = retain_valid(parser.finish());
        info!(
            "{category_name}: retained {} of {} documents",
            filtered.retained_len(),
            filtered.original_len
        );
        write_vectors(category.join(format!("vecs_{}.csv", self.mode)), &filtered)?;
        Ok(())
    }
}
