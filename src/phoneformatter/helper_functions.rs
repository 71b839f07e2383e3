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

use dec_from_char::DecimalExtended;

use super::helper_constants::{DEFAULT_CALLING_CODE_PREFIX, PLUS_SIGN};

/// Removes everything a person types around a phone number: spaces,
/// parentheses, hyphens, dots and letters. A leading plus sign and the
/// decimal digits are kept in their original order.
///
/// The result is usually an E.164 number, but nothing here guarantees it.
pub fn trim_phone(phone: &str) -> String {
    let phone = phone.trim();
    let mut buffer = String::with_capacity(phone.len());
    if phone.starts_with(PLUS_SIGN) {
        buffer.push_str(PLUS_SIGN);
    }
    buffer.extend(phone.chars().filter(|c| c.is_decimal_utf8()));
    buffer
}

/// Prepends `+1` to numbers that do not start with a plus sign.
pub(super) fn with_default_calling_code(phone: &str) -> Cow<'_, str> {
    if phone.starts_with(PLUS_SIGN) {
        Cow::Borrowed(phone)
    } else {
        Cow::Owned(fast_cat::concat_str!(DEFAULT_CALLING_CODE_PREFIX, phone))
    }
}
