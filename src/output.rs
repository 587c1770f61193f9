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

use crate::filter::FilteredCategory;
use camino::Utf8Path;
use csv::WriterBuilder;

/// Writes one `identifier,value_0,value_1,...` record per retained document,
/// without a header row. Identifiers reach this point with their commas
/// already replaced by spaces, so the records never need quoting for them.
pub fn write_vectors<P: AsRef<Utf8Path>>(
    path: P,
    filtered: &FilteredCategory,
) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path.as_ref())?;
    for (identifier, vector) in filtered.identifiers.iter().zip(&filtered.matrix) {
        let mut record = Vec::with_capacity(vector.len() + 1);
        record.push(identifier.clone());
        record.extend(vector.iter().map(|value| value.to_string()));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
