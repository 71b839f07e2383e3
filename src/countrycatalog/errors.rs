// Copyright (C) 2025 The rphoneformat Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// More than one region carries the calling code and none of them is
    /// its configured owner.
    #[error("Calling code +{calling_code} is shared by {regions:?} and has no owner configured")]
    AmbiguousCallingCode {
        calling_code: u16,
        regions: Vec<String>,
    },
}
