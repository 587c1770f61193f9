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

use crate::application::Docvec;
use crate::args::{consume_args, DocvecArgs};
use crate::logging::configure_logging;
use clap::Parser;
use log::info;
use std::process::ExitCode;

mod application;
mod args;
mod config;
mod corpus;
mod errors;
mod features;
mod filter;
mod logging;
mod output;
mod vocabulary;

fn main() -> ExitCode {
    let (mode, configs) = match consume_args(DocvecArgs::parse()) {
        Ok(consumed) => consumed,
        Err(err) => {
            eprintln!("Failed to load the configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    configure_logging(&configs);
    info!("docvec in {mode} mode over {}", configs.paths.data_root);
    match Docvec::new(mode, configs).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
