// Copyright (C) 2026 The nanpgeo authors
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

use std::sync::LazyLock;

use regex::Regex;

/// Ten digit NANP number: NPA and NXX each start with 2-9. Finer dialing
/// rules (N11 service codes and the like) are left to the registries,
/// which are the source of truth for assignability.
pub(super) static PHONE_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[2-9]\d{2}[2-9]\d{6}$").expect("Invalid constant pattern!")
});

/// Separator characters tolerated on input, e.g. "(212) 867-5309".
/// Everything outside `[0-9A-Za-z_]` is stripped before validation.
pub(super) static SEPARATOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W").expect("Invalid constant pattern!"));

#[cfg(test)]
mod tests {
    use super::{PHONE_NUMBER_PATTERN, SEPARATOR_PATTERN};

    #[test]
    fn pattern_requires_assignable_leading_digits() {
        assert!(PHONE_NUMBER_PATTERN.is_match("2128675309"));
        assert!(PHONE_NUMBER_PATTERN.is_match("9998675309"));

        // NPA may not start with 0 or 1.
        assert!(!PHONE_NUMBER_PATTERN.is_match("1128675309"));
        assert!(!PHONE_NUMBER_PATTERN.is_match("0128675309"));
        // Neither may the NXX.
        assert!(!PHONE_NUMBER_PATTERN.is_match("2121675309"));
        assert!(!PHONE_NUMBER_PATTERN.is_match("2120675309"));
    }

    #[test]
    fn pattern_requires_exactly_ten_digits() {
        assert!(!PHONE_NUMBER_PATTERN.is_match(""));
        assert!(!PHONE_NUMBER_PATTERN.is_match("212867530"));
        assert!(!PHONE_NUMBER_PATTERN.is_match("21286753090"));
        assert!(!PHONE_NUMBER_PATTERN.is_match("212867530a"));
    }

    #[test]
    fn separator_pattern_leaves_word_characters_alone() {
        assert_eq!("2128675309", SEPARATOR_PATTERN.replace_all("(212) 867-5309", ""));
        assert_eq!("212867JERK", SEPARATOR_PATTERN.replace_all("212-867-JERK", ""));
    }
}
