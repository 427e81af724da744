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

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use super::records::{AreaCodeRecord, BlockRecord, ExchangeRecord};
use crate::interfaces::TableSource;

/// Registry of assigned NPAs, keyed by the three digit area code.
#[derive(Debug, Default)]
pub struct AreaCodeTable {
    records: HashMap<String, AreaCodeRecord>,
}

impl AreaCodeTable {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Registers the record for an assigned NPA, returning the previous
    /// record if the NPA was already present.
    pub fn insert(&mut self, npa: &str, record: AreaCodeRecord) -> Option<AreaCodeRecord> {
        self.records.insert(npa.to_owned(), record)
    }

    pub fn lookup(&self, npa: &str) -> Option<&AreaCodeRecord> {
        self.records.get(npa)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Registry of assigned exchanges. Keys are the six concatenated NPA-NXX
/// digits, so the resolver can probe the map with a plain slice of the
/// number it is resolving.
#[derive(Debug, Default)]
pub struct ExchangeTable {
    records: HashMap<String, ExchangeRecord>,
}

impl ExchangeTable {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    pub fn insert(&mut self, npa: &str, nxx: &str, record: ExchangeRecord) -> Option<ExchangeRecord> {
        self.records.insert(fast_cat::concat_str!(npa, nxx), record)
    }

    pub fn lookup(&self, npa: &str, nxx: &str) -> Option<&ExchangeRecord> {
        self.records.get(&fast_cat::concat_str!(npa, nxx))
    }

    /// Lookup keyed by the first six digits of a number, avoiding the key
    /// allocation on the query path.
    pub(crate) fn lookup_prefix(&self, npa_nxx: &str) -> Option<&ExchangeRecord> {
        self.records.get(npa_nxx)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Registry of reallocated thousand-blocks. Keys are the seven
/// concatenated NPA-NXX-block digits; unpooled blocks have no entry.
#[derive(Debug, Default)]
pub struct BlockTable {
    records: HashMap<String, BlockRecord>,
}

impl BlockTable {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    pub fn insert(
        &mut self,
        npa: &str,
        nxx: &str,
        block: &str,
        record: BlockRecord,
    ) -> Option<BlockRecord> {
        self.records.insert(fast_cat::concat_str!(npa, nxx, block), record)
    }

    pub fn lookup(&self, npa: &str, nxx: &str, block: &str) -> Option<&BlockRecord> {
        self.records.get(&fast_cat::concat_str!(npa, nxx, block))
    }

    /// Lookup keyed by the first seven digits of a number.
    pub(crate) fn lookup_prefix(&self, npa_nxx_block: &str) -> Option<&BlockRecord> {
        self.records.get(npa_nxx_block)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The three layered registries consulted during resolution. Built once by
/// the loading collaborator, then handed over here; no `&mut` access is
/// exposed afterwards, so the snapshot cannot change for the lifetime of
/// the locator that owns it.
#[derive(Debug)]
pub struct ReferenceTables {
    area_codes: AreaCodeTable,
    exchanges: ExchangeTable,
    blocks: BlockTable,
}

impl ReferenceTables {
    pub fn new(area_codes: AreaCodeTable, exchanges: ExchangeTable, blocks: BlockTable) -> Self {
        debug!(
            "reference tables loaded: {} area codes, {} exchanges, {} reallocated blocks",
            area_codes.len(),
            exchanges.len(),
            blocks.len()
        );
        Self {
            area_codes,
            exchanges,
            blocks,
        }
    }

    pub fn area_codes(&self) -> &AreaCodeTable {
        &self.area_codes
    }

    pub fn exchanges(&self) -> &ExchangeTable {
        &self.exchanges
    }

    pub fn blocks(&self) -> &BlockTable {
        &self.blocks
    }
}

/// The error returned when an [`InMemorySource`] is asked for its tables
/// a second time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("reference tables were already taken from this source")]
pub struct TablesTakenError;

/// [`TableSource`] over tables that already live on the heap. Release is
/// a no-op; there is nothing behind the tables to let go of.
#[derive(Debug)]
pub struct InMemorySource {
    tables: Option<ReferenceTables>,
}

impl InMemorySource {
    pub fn new(tables: ReferenceTables) -> Self {
        Self {
            tables: Some(tables),
        }
    }
}

impl TableSource for InMemorySource {
    type Error = TablesTakenError;

    fn acquire(&mut self) -> Result<ReferenceTables, Self::Error> {
        self.tables.take().ok_or(TablesTakenError)
    }
}
