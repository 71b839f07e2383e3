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

//! Thin adapter over the `phonenumber` crate, which carries the
//! libphonenumber metadata. Everything else in this crate talks to the
//! phone grammar through [`PhoneGrammar`].

use phonenumber::{Mode, PhoneNumber};
use thiserror::Error;

use crate::interfaces::CallingCodeLookup;

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("Failed to parse phone number: {0}")]
    Parse(#[from] phonenumber::ParseError),
}

/// Stateless handle to the compiled-in libphonenumber metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhoneGrammar;

impl PhoneGrammar {
    /// Parses `text` without a default region, so the number must carry
    /// its own calling code.
    pub fn parse(&self, text: &str) -> Result<PhoneNumber, GrammarError> {
        Ok(phonenumber::parse(None, text)?)
    }

    /// Renders `number` the libphonenumber "international" way, e.g.
    /// `+1 650-253-0000` or `+44 20 8765 4321`, with any extension appended.
    pub fn format_international(&self, number: &PhoneNumber) -> String {
        phonenumber::format(number).mode(Mode::International).to_string()
    }

    pub fn is_valid(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }
}

impl CallingCodeLookup for PhoneGrammar {
    fn country_code_for_region(&self, region_code: &str) -> u16 {
        phonenumber::metadata::DATABASE
            .by_id(region_code)
            .map(|metadata| metadata.country_code())
            .unwrap_or(0)
    }
}
