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

//! Seams between the country catalog and the data it is built from.
//! The compiled-in implementations are [`crate::i18n::LocaleDatabase`]
//! and [`crate::grammar::PhoneGrammar`]; tests swap in their own.

use crate::i18n::CultureInfo;

/// Enumerates the cultures known to a locale database.
pub trait RegionSource {
    /// Returns every specific culture, in database order. The same region
    /// may be reachable through several cultures.
    fn cultures(&self) -> Vec<CultureInfo>;
}

/// Resolves the telephone country calling code of a region.
pub trait CallingCodeLookup {
    /// Returns the calling code for `region_code`, or 0 if the region has
    /// none or is unknown.
    fn country_code_for_region(&self, region_code: &str) -> u16;
}
