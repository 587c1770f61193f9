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
use crate::errors::VectorizeError;
use crate::features::FeatureMode;
use camino::Utf8PathBuf;
use clap::Parser;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Welcome to Docvec
pub struct DocvecArgs {
    /// The feature mode used for every document of this run.
    #[arg(value_parser = FeatureMode::from_str)]
    pub mode: FeatureMode,

    /// The folder whose sub folders are the categories.
    #[arg(short, long)]
    pub data: Option<Utf8PathBuf>,

    /// The vocabulary file, one term per line.
    /// Defaults to vocab_file.txt inside the data folder.
    #[arg(long)]
    pub vocab: Option<Utf8PathBuf>,

    /// The corpus file name expected inside every category folder.
    #[arg(long)]
    pub corpus_file_name: Option<String>,

    /// The folder containing the required configs.
    #[arg(short, long)]
    pub config: Option<Utf8PathBuf>,

    /// Overrides the log level from the config.
    #[arg(long)]
    pub override_log_level: Option<log::LevelFilter>,

    /// Log to file
    #[arg(long)]
    pub log_to_file: bool,
}

/// Consumes the args and returns everything necessary to execute a run:
/// the discovered configs with the command line folded over them.
pub fn consume_args(args: DocvecArgs) -> Result<(FeatureMode, Configs), VectorizeError> {
    let mut configs = match &args.config {
        Some(folder) => Configs::load_from(folder)?,
        None => Configs::discover_or_default()?,
    };
    if let Some(data) = args.data {
        configs.paths.data_root = data;
    }
    if let Some(vocab) = args.vocab {
        configs.paths.vocabulary_file = Some(vocab);
    }
    if let Some(corpus_file_name) = args.corpus_file_name {
        configs.paths.corpus_file_name = corpus_file_name;
    }
    if let Some(log_level) = args.override_log_level {
        configs.system.log_level = log_level;
    }
    if args.log_to_file {
        configs.system.log_to_file = true;
    }
    Ok((args.mode, configs))
}
