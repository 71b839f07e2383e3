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

use std::{collections::HashSet, sync::Arc};

use log::trace;

use crate::{
    i18n::RegionCode,
    interfaces::{CallingCodeLookup, RegionSource},
};

use super::{
    CallingCodeOwners, CountryEntry,
    errors::CatalogError,
    helper_constants::{NANPA_COUNTRY_CODE, UNITED_STATES},
};

/// Turns the cultures of `regions` into one entry per region, in
/// enumeration order. The first culture naming a region wins.
pub(super) fn collect_entries(
    regions: &impl RegionSource,
    codes: &impl CallingCodeLookup,
) -> Vec<Arc<CountryEntry>> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for culture in regions.cultures() {
        let Some(region) = culture.region else {
            trace!("Culture '{}' has no associated region, skipping", culture.name);
            continue;
        };
        if !seen.insert(region.iso_code.clone()) {
            continue;
        }
        let calling_code = match codes.country_code_for_region(&region.iso_code) {
            0 => {
                trace!("Region '{}' has no calling code", region.iso_code);
                None
            }
            code => Some(code),
        };
        entries.push(Arc::new(CountryEntry::new(
            region.english_name,
            region.iso_code,
            calling_code,
        )));
    }
    entries
}

/// Builds the by-calling-code view: entries with a calling code, sorted by
/// code, with shared codes reduced to their owner.
///
/// A code still carried by several regions after that has no sensible
/// representative and is reported instead of being dropped.
pub(super) fn resolve_calling_codes(
    entries: &[Arc<CountryEntry>],
    owners: &CallingCodeOwners,
) -> Result<Vec<Arc<CountryEntry>>, CatalogError> {
    let mut with_code: Vec<(u16, Arc<CountryEntry>)> = entries
        .iter()
        .filter_map(|entry| entry.calling_code().map(|code| (code, entry.clone())))
        .filter(|(code, entry)| owners.keeps(*code, entry.iso_code()))
        .collect();
    with_code.sort_by_key(|(code, _)| *code);

    for group in with_code.chunk_by(|(a, _), (b, _)| a == b) {
        if group.len() > 1 {
            return Err(CatalogError::AmbiguousCallingCode {
                calling_code: group[0].0,
                regions: group
                    .iter()
                    .map(|(_, entry)| entry.iso_code().to_owned())
                    .collect(),
            });
        }
    }

    Ok(with_code.into_iter().map(|(_, entry)| entry).collect())
}

/// Presentation adapter for country pickers: a United States row with
/// calling code 1, then the placeholder row, then `by_name` untouched (so
/// the United States shows up a second time at its alphabetical place).
pub fn us_first(by_name: &[Arc<CountryEntry>]) -> Vec<Arc<CountryEntry>> {
    let mut rows = Vec::with_capacity(by_name.len() + 2);
    rows.push(Arc::new(CountryEntry::new(
        UNITED_STATES,
        RegionCode::us(),
        Some(NANPA_COUNTRY_CODE),
    )));
    rows.push(Arc::new(CountryEntry::placeholder()));
    rows.extend(by_name.iter().cloned());
    rows
}
