use std::ops::RangeInclusive;

/// English name of the United States as the locale database spells it.
pub const UNITED_STATES: &'static str = "United States";

/// Display name of the "no selection" row.
pub const PLACEHOLDER_NAME: &'static str = "-----";

pub const NANPA_COUNTRY_CODE: u16 = 1;
pub const RUSSIA_COUNTRY_CODE: u16 = 7;

// Size of the catalog for the shipped locale table. Consumers rely on it,
// so anything outside is worth a warning but not a failure.
pub const EXPECTED_CATALOG_SIZE: RangeInclusive<usize> = 136..=139;
