use std::sync::LazyLock;

use regex::Regex;

use crate::regex_util::RegexFullMatch;

static ISO_ALPHA2_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[A-Z]{2}").unwrap()
});

pub struct RegionCode {
}

impl RegionCode {
    /// Region code of the synthetic "no selection" row.
    pub fn placeholder() -> &'static str {
        "--"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn ru() -> &'static str {
        "RU"
    }

    /// Returns true for two-letter uppercase ISO 3166 region codes. UN M.49
    /// area codes such as `029` or `419` are not regions of their own.
    pub fn is_iso_alpha2(code: &str) -> bool {
        ISO_ALPHA2_PATTERN.full_match(code)
    }
}

#[cfg(test)]
mod tests {
    use super::RegionCode;

    #[test]
    fn recognizes_two_letter_codes() {
        assert!(RegionCode::is_iso_alpha2("US"));
        assert!(RegionCode::is_iso_alpha2(RegionCode::ru()));
        assert!(!RegionCode::is_iso_alpha2("029"));
        assert!(!RegionCode::is_iso_alpha2("419"));
        assert!(!RegionCode::is_iso_alpha2("us"));
        assert!(!RegionCode::is_iso_alpha2(RegionCode::placeholder()));
        assert!(!RegionCode::is_iso_alpha2(""));
    }
}
