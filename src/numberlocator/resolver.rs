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

use log::{debug, trace, warn};

use super::errors::{InvalidAreaCodeError, InvalidExchangeError, ResolveError};
use super::metadata::NumberMetadata;
use super::phone_number::PhoneNumber;
use crate::i18n::Country;
use crate::tables::ReferenceTables;

/// Walks the three registries for a parsed number, layering the block
/// level reallocation on top of the exchange assignment when one exists.
pub(super) struct Resolver<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> Resolver<'a> {
    pub(super) fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// Registry walk: NPA first, then for US numbers the NPA-NXX
    /// assignment, then the thousand-block reallocations. A missing block
    /// row is the normal unpooled case, not a failure; lookups are pure,
    /// so nothing is retried.
    pub(super) fn resolve(&self, number: &PhoneNumber) -> Result<NumberMetadata, ResolveError> {
        let area_code = self
            .tables
            .area_codes()
            .lookup(number.npa())
            .ok_or_else(|| {
                warn!("No NPA registry entry for area code {}", number.npa());
                InvalidAreaCodeError {
                    area_code: number.npa().to_owned(),
                }
            })?;

        if area_code.country() != Country::us() {
            // Exchange and block data only exist for US allocations; for
            // the other NANP participants the NPA registry is all there is.
            trace!(
                "{} belongs to {}, skipping exchange lookup",
                number.npa(),
                area_code.country()
            );
            return Ok(NumberMetadata::outside_us(area_code, number));
        }

        let exchange = self
            .tables
            .exchanges()
            .lookup_prefix(number.exchange_key())
            .ok_or_else(|| {
                trace!(
                    "no exchange registry entry for {}-{}",
                    number.npa(),
                    number.nxx()
                );
                InvalidExchangeError {
                    area_code: number.npa().to_owned(),
                    exchange: number.nxx().to_owned(),
                }
            })?;

        if let Some(block) = self.tables.blocks().lookup_prefix(number.block_key()) {
            debug!(
                "block {}-{}-{} reallocated to {}, overriding exchange holder",
                number.npa(),
                number.nxx(),
                number.thousands_block(),
                block.carrier()
            );
            return Ok(NumberMetadata::from_block(area_code, block, number));
        }
        Ok(NumberMetadata::from_exchange(area_code, exchange, number))
    }
}
