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

use crate::config::paths::PathsConfig;
use crate::config::system::SystemConfig;
use camino::Utf8Path;
use config::Config;
use serde::{Deserialize, Serialize};

/// A collection of all config used by a vectorizer run.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename(serialize = "Config"))]
pub struct Configs {
    pub system: SystemConfig,
    pub paths: PathsConfig,
}

impl Configs {
    /// Loads the config from a folder, also honoring a config next to the
    /// executable and `DOCVEC.*` environment overrides.
    pub fn load_from<P: AsRef<Utf8Path>>(folder: P) -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("./docvec").required(false))
            .add_source(config::File::with_name(
                folder.as_ref().join("docvec").as_str(),
            ))
            .add_source(config::Environment::with_prefix("DOCVEC").separator("."))
            .build()?
            .try_deserialize()
    }

    /// Tries the default config locations and falls back to the defaults
    /// when nothing is found.
    pub fn discover_or_default() -> Result<Self, config::ConfigError> {
        match Config::builder()
            .add_source(config::File::with_name("./docvec"))
            .add_source(config::File::with_name("./data/docvec"))
            .add_source(config::Environment::with_prefix("DOCVEC").separator("."))
            .build()
        {
            Ok(value) => value.try_deserialize(),
            Err(_) => Ok(Default::default()),
        }
    }
}
