use serde::{Deserialize, Serialize};

use crate::{i18n::RegionCode, phoneformatter::PLUS_SIGN};

use super::helper_constants::PLACEHOLDER_NAME;

/// One country of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryEntry {
    english_name: String,
    iso_code: String,
    calling_code: Option<u16>,
}

impl CountryEntry {
    pub fn new(
        english_name: impl Into<String>,
        iso_code: impl Into<String>,
        calling_code: Option<u16>,
    ) -> Self {
        Self {
            english_name: english_name.into(),
            iso_code: iso_code.into(),
            calling_code,
        }
    }

    /// The "no selection" row shown at the top of a country picker.
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_NAME, RegionCode::placeholder(), None)
    }

    pub fn english_name(&self) -> &str {
        &self.english_name
    }

    /// Two-letter ISO region code, `--` for the placeholder row.
    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }

    pub fn calling_code(&self) -> Option<u16> {
        self.calling_code
    }

    /// The calling code as shown next to a number, e.g. `+44`. Empty if
    /// the country has no calling code.
    pub fn text_calling_code(&self) -> String {
        match self.calling_code {
            Some(code) => {
                let mut buf = itoa::Buffer::new();
                let code = buf.format(code);
                fast_cat::concat_str!(PLUS_SIGN, code)
            }
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CountryEntry;

    #[test]
    fn text_calling_code() {
        assert_eq!(CountryEntry::new("United Kingdom", "GB", Some(44)).text_calling_code(), "+44");
        assert_eq!(CountryEntry::placeholder().text_calling_code(), "");
    }

    #[test]
    fn serializes_for_ui_binding() {
        let entry = CountryEntry::new("Germany", "DE", Some(49));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"english_name":"Germany","iso_code":"DE","calling_code":49}"#);
        assert_eq!(serde_json::from_str::<CountryEntry>(&json).unwrap(), entry);
    }
}
