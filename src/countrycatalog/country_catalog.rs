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

use std::sync::Arc;

use log::{debug, warn};

use super::{
    CallingCodeOwners, CatalogOrder, CountryEntry,
    errors::CatalogError,
    helper_constants::EXPECTED_CATALOG_SIZE,
    helper_functions::{collect_entries, resolve_calling_codes, us_first},
};
use crate::interfaces::{CallingCodeLookup, RegionSource};

// Helper type for Result
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Immutable catalog of countries with their ISO code and calling code,
/// kept in the orderings selection controls need.
///
/// Build it once and share it; [`crate::COUNTRY_CATALOG`] is the instance
/// over the compiled-in data.
#[derive(Debug, Clone)]
pub struct CountryCatalog {
    /// `by_name` preceded by a United States row and the placeholder row.
    by_name_us_first: Vec<Arc<CountryEntry>>,

    by_name: Vec<Arc<CountryEntry>>,

    by_iso: Vec<Arc<CountryEntry>>,

    /// Sorted by calling code, unique calling codes. Shared codes keep
    /// only their owner (US for 1, RU for 7 by default).
    by_calling_code: Vec<Arc<CountryEntry>>,
}

impl CountryCatalog {
    /// Builds the catalog with the default owners for shared calling codes.
    pub fn build(regions: &impl RegionSource, codes: &impl CallingCodeLookup) -> Result<Self> {
        Self::build_with_owners(regions, codes, &CallingCodeOwners::default())
    }

    /// Builds the catalog. Regions without a calling code stay in the name
    /// and ISO views but are left out of the calling code view.
    ///
    /// Fails if a calling code is shared by several regions and `owners`
    /// names none of them.
    pub fn build_with_owners(
        regions: &impl RegionSource,
        codes: &impl CallingCodeLookup,
        owners: &CallingCodeOwners,
    ) -> Result<Self> {
        let entries = collect_entries(regions, codes);
        if !EXPECTED_CATALOG_SIZE.contains(&entries.len()) {
            warn!(
                "Country catalog has {} entries, expected {} to {}",
                entries.len(),
                EXPECTED_CATALOG_SIZE.start(),
                EXPECTED_CATALOG_SIZE.end()
            );
        }

        let mut by_name = entries.clone();
        by_name.sort_by(|a, b| a.english_name().cmp(b.english_name()));

        let mut by_iso = entries.clone();
        by_iso.sort_by(|a, b| a.iso_code().cmp(b.iso_code()));

        let by_calling_code = resolve_calling_codes(&entries, owners)?;
        let by_name_us_first = us_first(&by_name);

        debug!(
            "Country catalog built: {} regions, {} calling codes",
            by_name.len(),
            by_calling_code.len()
        );
        Ok(Self {
            by_name_us_first,
            by_name,
            by_iso,
            by_calling_code,
        })
    }

    pub fn by_name_us_first(&self) -> &[Arc<CountryEntry>] {
        &self.by_name_us_first
    }

    pub fn by_name(&self) -> &[Arc<CountryEntry>] {
        &self.by_name
    }

    pub fn by_iso(&self) -> &[Arc<CountryEntry>] {
        &self.by_iso
    }

    pub fn by_calling_code(&self) -> &[Arc<CountryEntry>] {
        &self.by_calling_code
    }

    pub fn view(&self, order: CatalogOrder) -> &[Arc<CountryEntry>] {
        match order {
            CatalogOrder::ByNameUsFirst => self.by_name_us_first(),
            CatalogOrder::ByName => self.by_name(),
            CatalogOrder::ByIso => self.by_iso(),
            CatalogOrder::ByCallingCode => self.by_calling_code(),
        }
    }

    /// Number of regions, synthetic rows excluded.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn name_to_entry(&self, english_name: &str) -> Option<&CountryEntry> {
        self.by_name
            .iter()
            .find(|entry| entry.english_name() == english_name)
            .map(|entry| &**entry)
    }

    pub fn iso_to_entry(&self, iso_code: &str) -> Option<&CountryEntry> {
        self.by_iso
            .iter()
            .find(|entry| entry.iso_code() == iso_code)
            .map(|entry| &**entry)
    }

    /// Converts an English country name to its two-letter ISO code.
    pub fn name_to_iso(&self, english_name: &str) -> Option<&str> {
        self.name_to_entry(english_name).map(CountryEntry::iso_code)
    }

    /// Converts a two-letter ISO code to the English country name.
    pub fn iso_to_name(&self, iso_code: &str) -> Option<&str> {
        self.iso_to_entry(iso_code).map(CountryEntry::english_name)
    }

    /// The country representing `calling_code`, after shared codes were
    /// reduced to their owner.
    pub fn entry_for_calling_code(&self, calling_code: u16) -> Option<&CountryEntry> {
        self.by_calling_code
            .binary_search_by_key(&Some(calling_code), |entry| entry.calling_code())
            .ok()
            .map(|index| &*self.by_calling_code[index])
    }
}
