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

/// Divides every entry by the sum of all entries, making the slice sum to 1.
/// A zero sum floods the slice with NaN; the document filter is the only
/// place that interprets such a vector.
pub fn l1_normalize(vector: &mut [f64]) {
    let sum: f64 = vector.iter().sum();
    for value in vector.iter_mut() {
        *value /= sum;
    }
}
