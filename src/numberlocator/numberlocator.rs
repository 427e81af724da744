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

use log::trace;

use super::errors::{InvalidNumberError, LocateError};
use super::metadata::NumberMetadata;
use super::parser;
use super::resolver::Resolver;
use crate::i18n::Country;
use crate::interfaces::TableSource;
use crate::tables::ReferenceTables;

/// Facade over the parser, the resolver and the three reference tables.
/// Queries are pure in-memory lookups with no I/O; once built, a locator
/// can be shared freely across threads.
pub struct NumberLocator {
    tables: ReferenceTables,
}

impl NumberLocator {
    /// Builds a locator directly over pre-built tables.
    pub fn new(tables: ReferenceTables) -> Self {
        Self { tables }
    }

    /// Acquires tables from `source`, runs `f` against the resulting
    /// locator and releases the source again. Release happens on every
    /// exit path: normal return, failed acquisition and unwinding panic
    /// alike.
    pub fn with_source<S, T>(source: S, f: impl FnOnce(&NumberLocator) -> T) -> Result<T, S::Error>
    where
        S: TableSource,
    {
        struct ReleaseOnDrop<S: TableSource>(S);

        impl<S: TableSource> Drop for ReleaseOnDrop<S> {
            fn drop(&mut self) {
                self.0.release();
            }
        }

        let mut guard = ReleaseOnDrop(source);
        let locator = NumberLocator::new(guard.0.acquire()?);
        Ok(f(&locator))
    }

    /// Whether the number's area code is assigned to the United States.
    /// Registry absence is simply `false`, never an error; malformed
    /// input still is.
    pub fn has_us_area_code(&self, raw: &str) -> Result<bool, InvalidNumberError> {
        let number = parser::parse(raw)?;
        let is_us = self
            .tables
            .area_codes()
            .lookup(number.npa())
            .is_some_and(|record| record.country() == Country::us());
        Ok(is_us)
    }

    /// Whether the number falls in an assignable exchange of an
    /// assignable area code. Says nothing about whether the number has
    /// actually been handed to a subscriber. Unassigned codes come back
    /// as `false`; malformed input is a caller bug and keeps its error.
    pub fn is_potentially_valid_number(&self, raw: &str) -> Result<bool, InvalidNumberError> {
        let number = parser::parse(raw)?;
        Ok(Resolver::new(&self.tables).resolve(&number).is_ok())
    }

    /// Full registry metadata for the number: country, region and time
    /// zone, plus rate center, carrier and operating company number for
    /// US numbers. Either succeeds completely or fails with exactly one
    /// of the three error kinds.
    pub fn locate_number(&self, raw: &str) -> Result<NumberMetadata, LocateError> {
        let number = parser::parse(raw)?;
        let metadata = Resolver::new(&self.tables).resolve(&number)?;
        trace!(
            "located {}: {} {}",
            number,
            metadata.country(),
            metadata.region()
        );
        Ok(metadata)
    }
}
