use regex::Regex;

use super::helper_constants::NANPA_INTERNATIONAL;

pub(super) struct FormatterRegExps {
    /// Matches a North American number in international format. Must be
    /// applied with `captures_start`.
    pub nanpa_international: Regex,
}

impl FormatterRegExps {
    pub fn new() -> Self {
        Self {
            nanpa_international: Regex::new(NANPA_INTERNATIONAL).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn check_regexps_are_compiling() {
        super::FormatterRegExps::new();
    }
}
