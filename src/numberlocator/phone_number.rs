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

use std::fmt;

/// A syntactically valid NANP number over its normalized ten digit
/// string, decomposed positionally: digits `[0..3]` are the NPA (area
/// code), `[3..6]` the NXX (exchange code), `[6]` the thousands-block
/// digit and `[7..10]` the line number. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    digits: String,
}

impl PhoneNumber {
    /// `digits` must be exactly ten ASCII digits; the parser is the only
    /// construction site.
    pub(super) fn new(digits: String) -> Self {
        debug_assert!(digits.len() == 10 && digits.bytes().all(|b| b.is_ascii_digit()));
        Self { digits }
    }

    /// The three digit area code.
    pub fn npa(&self) -> &str {
        &self.digits[0..3]
    }

    /// The three digit exchange (central office) code.
    pub fn nxx(&self) -> &str {
        &self.digits[3..6]
    }

    /// The single digit selecting the thousand-number block within the
    /// exchange.
    pub fn thousands_block(&self) -> &str {
        &self.digits[6..7]
    }

    /// The last three digits.
    pub fn line_number(&self) -> &str {
        &self.digits[7..10]
    }

    /// The full normalized digit string.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// First six digits, the exchange table key.
    pub(super) fn exchange_key(&self) -> &str {
        &self.digits[0..6]
    }

    /// First seven digits, the block table key.
    pub(super) fn block_key(&self) -> &str {
        &self.digits[0..7]
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}
