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

use std::borrow::Cow;

use log::{debug, trace};

use super::{
    errors::FormatError,
    helper_constants::DEFAULT_CALLING_CODE,
    helper_functions::{trim_phone, with_default_calling_code},
    regexps::FormatterRegExps,
};
use crate::{grammar::PhoneGrammar, regex_util::RegexConsume};

// Helper type for Result
pub type Result<T> = std::result::Result<T, FormatError>;

/// A phone number split into its calling code and the locally formatted
/// remainder, e.g. `(1, "(303) 555-1212")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumberComponents {
    pub calling_code: u16,
    pub local_number: String,
}

impl PhoneNumberComponents {
    pub fn new(calling_code: u16, local_number: impl Into<String>) -> Self {
        Self { calling_code, local_number: local_number.into() }
    }
}

/// Normalizes, formats and validates phone number text.
///
/// Every operation is a pure function of its input. Numbers without a
/// leading `+` are assumed to be North American and get `+1` prepended.
pub struct PhoneFormatter {
    grammar: PhoneGrammar,
    reg_exps: FormatterRegExps,
}

impl PhoneFormatter {
    pub fn new() -> Self {
        Self {
            grammar: PhoneGrammar,
            reg_exps: FormatterRegExps::new(),
        }
    }

    /// Formats a phone number for display, e.g. `+13035551212` becomes
    /// `+1 (303) 555-1212` and `+442087654321` becomes `+44 20 8765 4321`.
    ///
    /// Never fails: empty input and input the grammar cannot parse are
    /// returned unchanged (as `Cow::Borrowed`).
    pub fn format<'a>(&self, phone_number: &'a str) -> Cow<'a, str> {
        if phone_number.is_empty() {
            return Cow::Borrowed(phone_number);
        }
        match self.try_format(phone_number) {
            Ok(formatted) => Cow::Owned(formatted),
            Err(err) => {
                debug!("Leaving '{}' unformatted: {}", phone_number, err);
                Cow::Borrowed(phone_number)
            }
        }
    }

    /// Strict variant of [`format`](Self::format) that reports why a number
    /// could not be formatted.
    pub fn try_format(&self, phone_number: &str) -> Result<String> {
        if phone_number.is_empty() {
            return Err(FormatError::Empty);
        }
        let phone_number = with_default_calling_code(phone_number);
        // The grammar cannot find the calling code in "+1720.352.0676", so
        // punctuated input gets a second chance as bare digits. Parsing the
        // text as written first keeps extensions like "ext. 5".
        let parsed = match self.grammar.parse(&phone_number) {
            Ok(parsed) => parsed,
            Err(err) => {
                let digits = trim_phone(&phone_number);
                trace!("Retrying '{}' as '{}': {}", phone_number, digits, err);
                self.grammar.parse(&digits).map_err(|_| err)?
            }
        };
        let international = self.grammar.format_international(&parsed);
        Ok(self.rewrite_nanpa_area_code(international))
    }

    /// Turns "+1 650-253-0000..." into "+1 (650) 253-0000...". Anything of
    /// another shape is returned as is.
    fn rewrite_nanpa_area_code(&self, international: String) -> String {
        let rewritten = self
            .reg_exps
            .nanpa_international
            .captures_start(&international)
            .map(|captures| {
                fast_cat::concat_str!("+1 (", &captures[1], ") ", &captures[2])
            });
        rewritten.unwrap_or(international)
    }

    /// Splits a phone number into its calling code and local part, e.g.
    /// `+13035551212` gives `(1, "(303) 555-1212")`.
    ///
    /// When the formatted number has no calling code prefix the whole
    /// formatted text is returned as the local part of a `+1` number. The
    /// same happens when the prefix does not fit a `u16`: no calling code
    /// has more than three digits.
    pub fn components(&self, phone_number: &str) -> PhoneNumberComponents {
        let formatted = self.format(phone_number);
        let split = formatted.split_once(' ').and_then(|(prefix, local)| {
            let calling_code = prefix.get(1..)?.parse::<u16>().ok()?;
            Some(PhoneNumberComponents::new(calling_code, local.trim()))
        });
        split.unwrap_or_else(|| {
            trace!("No calling code prefix in '{}', assuming +{}", formatted, DEFAULT_CALLING_CODE);
            PhoneNumberComponents::new(DEFAULT_CALLING_CODE, &*formatted)
        })
    }

    /// Same as [`trim_phone`].
    pub fn trim(&self, phone_number: &str) -> String {
        trim_phone(phone_number)
    }

    /// Returns true if the grammar accepts the number as valid. Any
    /// notation works: E.164, `1 (303) 555-1212`, `303.555.1212`...
    pub fn is_valid(&self, phone_number: &str) -> bool {
        let phone_number = with_default_calling_code(phone_number);
        match self.grammar.parse(&trim_phone(&phone_number)) {
            Ok(parsed) => self.grammar.is_valid(&parsed),
            Err(err) => {
                trace!("'{}' is not a valid phone number: {}", phone_number, err);
                false
            }
        }
    }
}

impl Default for PhoneFormatter {
    fn default() -> Self {
        Self::new()
    }
}
