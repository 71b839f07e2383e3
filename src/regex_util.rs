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

use regex::{Captures, Regex};

pub trait RegexFullMatch {
    /// True only if the whole string is matched
    fn full_match(&self, s: &str) -> bool;
}

pub trait RegexConsume {
    /// Captures anchored at the start of `s`
    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>>;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        let found = self.find(s);
        if let Some(matched) = found {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }
}

impl RegexConsume for Regex {
    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>> {
        let captures = self.captures(s)?;
        let full_capture = captures.get(0)?;
        if full_capture.start() != 0 {
            return None
        }

        Some(captures)
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{RegexConsume, RegexFullMatch};

    #[test]
    fn full_match_requires_whole_string() {
        let regex = Regex::new("[A-Z]{2}").unwrap();
        assert!(regex.full_match("US"));
        assert!(!regex.full_match("USA"));
        assert!(!regex.full_match("xUS"));
    }

    #[test]
    fn captures_start_is_anchored() {
        let regex = Regex::new(r"(\d+)-").unwrap();
        assert_eq!(&regex.captures_start("720-352").unwrap()[1], "720");
        assert!(regex.captures_start("x720-352").is_none());
    }
}
