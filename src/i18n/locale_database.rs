use log::trace;

use crate::interfaces::RegionSource;

use super::RegionCode;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/locales.rs"));
}

/// A country or region as seen by the locale database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionInfo {
    pub iso_code: String,
    pub english_name: String,
}

/// A specific culture, e.g. `fr-CA`, and the region it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CultureInfo {
    pub name: String,
    /// `None` when the culture is tied to an area rather than a country.
    pub region: Option<RegionInfo>,
}

impl CultureInfo {
    pub fn new(name: impl Into<String>, region: Option<RegionInfo>) -> Self {
        Self { name: name.into(), region }
    }

    pub fn with_region(
        name: impl Into<String>,
        iso_code: impl Into<String>,
        english_name: impl Into<String>,
    ) -> Self {
        Self::new(name, Some(RegionInfo {
            iso_code: iso_code.into(),
            english_name: english_name.into(),
        }))
    }
}

/// The compiled-in culture table generated from `resources/locales.txt`.
#[derive(Debug, Clone, Copy)]
pub struct LocaleDatabase {
    locales: &'static [(&'static str, &'static str, &'static str)],
}

impl LocaleDatabase {
    pub fn new() -> Self {
        Self { locales: generated::LOCALES }
    }

    /// Number of cultures in the table, including those without a region.
    pub fn culture_count(&self) -> usize {
        self.locales.len()
    }
}

impl Default for LocaleDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionSource for LocaleDatabase {
    fn cultures(&self) -> Vec<CultureInfo> {
        self.locales
            .iter()
            .map(|&(locale, region, english_name)| {
                if RegionCode::is_iso_alpha2(region) {
                    CultureInfo::with_region(locale, region, english_name)
                } else {
                    trace!("Culture '{}' maps to area '{}', not a region", locale, region);
                    CultureInfo::new(locale, None)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::interfaces::RegionSource;

    use super::LocaleDatabase;

    #[test]
    fn table_is_not_empty() {
        let database = LocaleDatabase::new();
        assert!(database.culture_count() > 0);
        assert_eq!(database.cultures().len(), database.culture_count());
    }

    #[test]
    fn area_cultures_have_no_region() {
        let cultures = LocaleDatabase::new().cultures();
        let caribbean = cultures.iter().find(|c| c.name == "en-029").unwrap();
        assert!(caribbean.region.is_none());

        let us = cultures.iter().find(|c| c.name == "en-US").unwrap();
        let region = us.region.as_ref().unwrap();
        assert_eq!(region.iso_code, "US");
        assert_eq!(region.english_name, "United States");
    }
}
