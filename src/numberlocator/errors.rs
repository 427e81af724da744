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

use thiserror::Error;

/// The input fails syntactic validation: wrong length, characters other
/// than digits and separators, or a disallowed leading digit. Raised
/// before any registry lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("number does not match the ten digit NANP format")]
pub struct InvalidNumberError;

/// The number is well formed but its area code has no registry entry:
/// never assigned, reserved for future expansion, or withdrawn from
/// service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("area code {area_code} is not assignable")]
pub struct InvalidAreaCodeError {
    /// The NPA of the number submitted.
    pub area_code: String,
}

/// The area code is a valid US assignment but this exchange within it is
/// not allocated to any carrier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("exchange {area_code}-{exchange} is not assigned to any carrier")]
pub struct InvalidExchangeError {
    /// The NPA of the number submitted.
    pub area_code: String,
    /// The NXX of the number submitted.
    pub exchange: String,
}

/// Failure modes of [`crate::NumberLocator::locate_number`], each distinct
/// and non-overlapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    #[error("{0}")]
    InvalidNumber(#[from] InvalidNumberError),
    #[error("{0}")]
    InvalidAreaCode(#[from] InvalidAreaCodeError),
    #[error("{0}")]
    InvalidExchange(#[from] InvalidExchangeError),
}

/// Registry level failures surfaced by the resolver, before the facade
/// widens them to [`LocateError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ResolveError {
    #[error("{0}")]
    InvalidAreaCode(#[from] InvalidAreaCodeError),
    #[error("{0}")]
    InvalidExchange(#[from] InvalidExchangeError),
}

impl From<ResolveError> for LocateError {
    fn from(value: ResolveError) -> Self {
        match value {
            ResolveError::InvalidAreaCode(err) => LocateError::InvalidAreaCode(err),
            ResolveError::InvalidExchange(err) => LocateError::InvalidExchange(err),
        }
    }
}
