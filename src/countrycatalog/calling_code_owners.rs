use crate::i18n::RegionCode;

use super::helper_constants::{NANPA_COUNTRY_CODE, RUSSIA_COUNTRY_CODE};

/// Decides which region represents a calling code shared by several
/// regions. The default keeps the United States for +1 and Russia for +7,
/// the same owners libphonenumber picks for those codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallingCodeOwners {
    owners: Vec<(u16, String)>,
}

impl CallingCodeOwners {
    /// No owners at all: every shared calling code is an inconsistency.
    pub fn none() -> Self {
        Self { owners: Vec::new() }
    }

    /// Makes `region_code` the owner of `calling_code`, replacing any
    /// previous owner.
    pub fn with_owner(mut self, calling_code: u16, region_code: impl Into<String>) -> Self {
        let region_code = region_code.into();
        match self.owners.iter_mut().find(|(code, _)| *code == calling_code) {
            Some((_, owner)) => *owner = region_code,
            None => self.owners.push((calling_code, region_code)),
        }
        self
    }

    pub fn owner_of(&self, calling_code: u16) -> Option<&str> {
        self.owners
            .iter()
            .find(|(code, _)| *code == calling_code)
            .map(|(_, owner)| owner.as_str())
    }

    /// True if `region_code` may appear for `calling_code` in the
    /// by-calling-code view.
    pub fn keeps(&self, calling_code: u16, region_code: &str) -> bool {
        self.owner_of(calling_code)
            .map_or(true, |owner| owner == region_code)
    }
}

impl Default for CallingCodeOwners {
    fn default() -> Self {
        Self::none()
            .with_owner(NANPA_COUNTRY_CODE, RegionCode::us())
            .with_owner(RUSSIA_COUNTRY_CODE, RegionCode::ru())
    }
}

#[cfg(test)]
mod tests {
    use super::CallingCodeOwners;

    #[test]
    fn default_owners() {
        let owners = CallingCodeOwners::default();
        assert_eq!(owners.owner_of(1), Some("US"));
        assert_eq!(owners.owner_of(7), Some("RU"));
        assert_eq!(owners.owner_of(44), None);
        assert!(owners.keeps(1, "US"));
        assert!(!owners.keeps(1, "CA"));
        assert!(owners.keeps(44, "GB"));
    }

    #[test]
    fn with_owner_replaces() {
        let owners = CallingCodeOwners::default().with_owner(1, "CA");
        assert_eq!(owners.owner_of(1), Some("CA"));
        assert!(!owners.keeps(1, "US"));
    }
}
