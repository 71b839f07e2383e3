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

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::phoneformatter::{DEFAULT_CALLING_CODE, PHONE_FORMATTER, PLUS_SIGN, trim_phone};

/// A phone number as edited in a form: a calling code and the rest of the
/// number, which may carry formatting.
///
/// Nothing is validated on construction; partial numbers are fine until
/// [`is_valid`](Self::is_valid) is asked. Equality compares the stored
/// fields, so `(720) 352-0676` and `7203520676` are different values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumberValue {
    #[serde(default = "default_calling_code")]
    calling_code: u16,
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    national_number: String,
}

fn default_calling_code() -> u16 {
    DEFAULT_CALLING_CODE
}

fn deserialize_trimmed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let national_number = String::deserialize(deserializer)?;
    Ok(national_number.trim().to_owned())
}

impl PhoneNumberValue {
    /// Calling code defaults to 1, the national number to empty.
    pub fn new(calling_code: Option<u16>, national_number: Option<&str>) -> Self {
        Self {
            calling_code: calling_code.unwrap_or(DEFAULT_CALLING_CODE),
            national_number: national_number.unwrap_or_default().trim().to_owned(),
        }
    }

    /// Splits a stored number such as `+13035551212` back into calling code
    /// and formatted national number.
    pub fn from_e164(phone_number: &str) -> Self {
        let components = PHONE_FORMATTER.components(phone_number);
        Self::new(Some(components.calling_code), Some(components.local_number.as_str()))
    }

    pub fn calling_code(&self) -> u16 {
        self.calling_code
    }

    pub fn set_calling_code(&mut self, calling_code: u16) {
        self.calling_code = calling_code;
    }

    /// The number without its calling code, as entered (trimmed).
    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    pub fn set_national_number(&mut self, national_number: impl AsRef<str>) {
        self.national_number = national_number.as_ref().trim().to_owned();
    }

    /// True if no national number has been entered.
    pub fn is_empty(&self) -> bool {
        self.national_number.trim().is_empty()
    }

    /// The number in E.164 form, e.g. `+13035551212`. Best effort: only as
    /// good as the stored fields, and just the calling code when the
    /// national number is empty.
    pub fn e164(&self) -> String {
        let mut buf = itoa::Buffer::new();
        let calling_code = buf.format(self.calling_code);
        let national_number = if self.is_empty() { "" } else { self.national_number.as_str() };
        trim_phone(&fast_cat::concat_str!(PLUS_SIGN, calling_code, national_number))
    }

    /// The number formatted for display, e.g. `+1 (303) 555-1212`.
    pub fn formatted(&self) -> String {
        PHONE_FORMATTER.format(&self.e164()).into_owned()
    }

    pub fn is_valid(&self) -> bool {
        PHONE_FORMATTER.is_valid(&self.e164())
    }
}

impl Default for PhoneNumberValue {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl fmt::Display for PhoneNumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CountryCode: {}, NationalNumber: {}",
            self.calling_code, self.national_number
        )
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    use super::PhoneNumberValue;

    fn hash_of(value: &PhoneNumberValue) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn trims_national_number() {
        let mut phone = PhoneNumberValue::new(Some(1), Some(" 7203520676 "));
        assert_eq!(phone.national_number(), "7203520676");
        assert!(!phone.is_empty());
        assert!(phone.e164().starts_with("+1"));

        phone.set_national_number("\t(720) 352-0676  ");
        assert_eq!(phone.national_number(), "(720) 352-0676");
    }

    #[test]
    fn defaults() {
        let phone = PhoneNumberValue::default();
        assert_eq!(phone.calling_code(), 1);
        assert_eq!(phone.national_number(), "");
        assert!(phone.is_empty());
        assert_eq!(phone, PhoneNumberValue::new(None, Some("   ")));
    }

    #[test]
    fn derived_forms() {
        let phone = PhoneNumberValue::new(Some(1), Some("(720) 352-0676"));
        assert_eq!(phone.e164(), "+17203520676");
        assert_eq!(phone.formatted(), "+1 (720) 352-0676");
        assert!(phone.is_valid());

        let empty = PhoneNumberValue::new(Some(44), None);
        assert_eq!(empty.e164(), "+44");
        assert_eq!(empty.formatted(), "+44");
        assert!(!empty.is_valid());
    }

    #[test]
    fn derived_forms_follow_setters() {
        let mut phone = PhoneNumberValue::default();
        phone.set_national_number("7203520676");
        assert_eq!(phone.e164(), "+17203520676");
        phone.set_calling_code(44);
        assert_eq!(phone.e164(), "+447203520676");
    }

    #[test]
    fn equality_is_on_stored_fields() {
        let formatted = PhoneNumberValue::new(Some(1), Some("(720) 352-0676"));
        let digits = PhoneNumberValue::new(Some(1), Some("7203520676"));
        assert_ne!(formatted, digits);
        assert_eq!(formatted.e164(), digits.e164());

        let copy = formatted.clone();
        assert_eq!(copy, formatted);
        assert_eq!(hash_of(&copy), hash_of(&formatted));
        assert_ne!(PhoneNumberValue::new(Some(44), Some("7203520676")), digits);
    }

    #[test]
    fn from_e164_splits_components() {
        let phone = PhoneNumberValue::from_e164("+17203520676");
        assert_eq!(phone.calling_code(), 1);
        assert_eq!(phone.national_number(), "(720) 352-0676");

        let punctuated = PhoneNumberValue::from_e164("720.352.0676");
        assert_eq!(punctuated.calling_code(), 1);
        assert_eq!(punctuated.national_number(), "(720) 352-0676");
        assert_eq!(punctuated.e164(), "+17203520676");
    }

    #[test]
    fn display() {
        let phone = PhoneNumberValue::new(Some(1), Some("7203520676"));
        assert_eq!(phone.to_string(), "CountryCode: 1, NationalNumber: 7203520676");
    }

    #[test]
    fn deserialization_trims() {
        let phone: PhoneNumberValue =
            serde_json::from_str(r#"{"calling_code":1,"national_number":" 7203520676 "}"#).unwrap();
        assert_eq!(phone.national_number(), "7203520676");

        let defaulted: PhoneNumberValue = serde_json::from_str("{}").unwrap();
        assert_eq!(defaulted, PhoneNumberValue::default());
    }
}
