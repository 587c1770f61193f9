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
use crate::errors::VectorizeError;
use crate::features::FeatureExtractor;
use log::info;
use regex::Regex;
use std::collections::HashMap;
use std::io::BufRead;
use strum::{AsRefStr, Display, EnumIs};

/// The prefix marking a document open line.
const OPEN_MARKER: &str = "<doc";
/// The prefix marking a document close line.
const CLOSE_MARKER: &str = "</doc";

/// The identifier sits between a `date=` field and the closing `>` of the
/// open line.
const IDENTIFIER_PATTERN: &str = "date=(.*)>";

/// Where the parser currently is in the corpus stream.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, AsRefStr, EnumIs)]
pub enum ParserState {
    OutsideDoc,
    InDoc,
}

/// A streaming parser for one category's corpus file.
///
/// Feed it lines in order via [`Self::push_line`] (or a whole reader via
/// [`Self::consume`]), then take the accumulated documents with
/// [`Self::finish`]. All per-category state is owned here and handed over
/// on finish; nothing outlives the category.
pub struct CorpusParser<'a> {
    extractor: &'a FeatureExtractor<'a>,
    category: String,
    identifier_pattern: Regex,
    state: ParserState,
    /// Every identifier in encounter order, duplicates included.
    order: Vec<String>,
    vectors: HashMap<String, Vec<f64>>,
    current_id: String,
    current_text: String,
    line_number: usize,
}

impl<'a> CorpusParser<'a> {
    pub fn new(category: impl Into<String>, extractor: &'a FeatureExtractor<'a>) -> Self {
        Self {
            extractor,
            category: category.into(),
            identifier_pattern: Regex::new(IDENTIFIER_PATTERN).unwrap(),
            state: ParserState::OutsideDoc,
            order: Vec::new(),
            vectors: HashMap::new(),
            current_id: String::new(),
            current_text: String::new(),
            line_number: 0,
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Drives the parser over a whole buffered reader, one line at a time.
    pub fn consume<R: BufRead>(&mut self, reader: R) -> Result<(), VectorizeError> {
        for line in reader.lines() {
            self.push_line(&line?)?;
        }
        Ok(())
    }

    /// Consumes the next line of the corpus file, trailing newline already
    /// stripped.
    ///
    /// Outside a document only an open marker does anything. Inside a
    /// document the close marker is the only exit; every other line,
    /// open markers included, is body text.
    pub fn push_line(&mut self, line: &str) -> Result<(), VectorizeError> {
        self.line_number += 1;
        match self.state {
            ParserState::OutsideDoc => {
                if line.starts_with(OPEN_MARKER) {
                    self.open_document(line)?;
                }
            }
            ParserState::InDoc => {
                if line.starts_with(CLOSE_MARKER) {
                    self.close_document();
                } else {
                    self.current_text.push(' ');
                    self.current_text.push_str(line);
                    if let Some(vector) = self.vectors.get_mut(&self.current_id) {
                        self.extractor.consume_line(line, vector);
                    }
                }
            }
        }
        Ok(())
    }

    /// Ends the category and hands over everything accumulated.
    /// A document still open at this point stays unnormalized.
    pub fn finish(self) -> CategoryAccumulator {
        CategoryAccumulator {
            order: self.order,
            vectors: self.vectors,
        }
    }

    fn open_document(&mut self, line: &str) -> Result<(), VectorizeError> {
        let identifier = match self.identifier_pattern.captures(line) {
            // Commas clash with the output encoding and become spaces.
            Some(captures) => captures[1].replace(',', " "),
            None => {
                return Err(VectorizeError::MalformedDocumentTag {
                    category: self.category.clone(),
                    line_number: self.line_number,
                    line: line.to_string(),
                })
            }
        };
        self.order.push(identifier.clone());
        self.current_text.clear();
        // A reopened identifier starts over; the earlier vector is gone.
        self.vectors
            .insert(identifier.clone(), vec![0.0; self.extractor.vector_len()]);
        self.current_id = identifier;
        self.state = ParserState::InDoc;
        Ok(())
    }

    fn close_document(&mut self) {
        if let Some(vector) = self.vectors.get_mut(&self.current_id) {
            self.extractor.finalize(&self.current_text, vector);
        }
        info!("{}", self.current_id);
        self.state = ParserState::OutsideDoc;
    }
}
