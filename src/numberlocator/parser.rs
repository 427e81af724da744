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

use std::borrow::Cow;

use log::trace;

use super::errors::InvalidNumberError;
use super::number_patterns::{PHONE_NUMBER_PATTERN, SEPARATOR_PATTERN};
use super::phone_number::PhoneNumber;

/// Validates `raw` against the NANP syntax and decomposes it. Separators
/// are stripped first, so "(212) 867-5309" parses the same as
/// "2128675309"; the stripped form is what the resulting number carries.
/// Purely syntactic, no registry access.
pub(super) fn parse(raw: &str) -> Result<PhoneNumber, InvalidNumberError> {
    let digits = strip_separators(raw);
    if !PHONE_NUMBER_PATTERN.is_match(&digits) {
        trace!("rejected input {:?}: not a ten digit NANP number", raw);
        return Err(InvalidNumberError);
    }
    Ok(PhoneNumber::new(digits.into_owned()))
}

fn strip_separators(raw: &str) -> Cow<'_, str> {
    SEPARATOR_PATTERN.replace_all(raw, "")
}
