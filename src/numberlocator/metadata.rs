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

use super::phone_number::PhoneNumber;
use crate::tables::{AreaCodeRecord, BlockRecord, ExchangeRecord};

/// Everything the registries know about one number. Country, region and
/// time zone come from the NPA registry; rate center, carrier and
/// operating company number are populated for US numbers only, where the
/// exchange and block registries apply. Built by the resolver and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberMetadata {
    country: String,
    time_zone: String,
    region: String,
    rate_center: Option<String>,
    carrier: Option<String>,
    operating_company_number: Option<String>,
    phone_number: String,
}

impl NumberMetadata {
    /// Metadata for a NANP participant outside the US. The exchange level
    /// registries do not cover these countries, so the US-only fields
    /// stay absent.
    pub(super) fn outside_us(area_code: &AreaCodeRecord, number: &PhoneNumber) -> Self {
        Self {
            country: area_code.country().to_owned(),
            time_zone: area_code.time_zone().to_owned(),
            region: area_code.region().to_owned(),
            rate_center: None,
            carrier: None,
            operating_company_number: None,
            phone_number: number.as_str().to_owned(),
        }
    }

    /// Metadata for a US number served by the exchange's code holder.
    pub(super) fn from_exchange(
        area_code: &AreaCodeRecord,
        exchange: &ExchangeRecord,
        number: &PhoneNumber,
    ) -> Self {
        Self {
            country: area_code.country().to_owned(),
            time_zone: area_code.time_zone().to_owned(),
            region: area_code.region().to_owned(),
            rate_center: Some(exchange.rate_center().to_owned()),
            carrier: Some(exchange.carrier().to_owned()),
            operating_company_number: Some(exchange.operating_company_number().to_owned()),
            phone_number: number.as_str().to_owned(),
        }
    }

    /// Metadata for a US number whose thousand-block was reallocated away
    /// from the exchange's holder. The block's fields replace the
    /// exchange's as a complete set.
    pub(super) fn from_block(
        area_code: &AreaCodeRecord,
        block: &BlockRecord,
        number: &PhoneNumber,
    ) -> Self {
        Self {
            country: area_code.country().to_owned(),
            time_zone: area_code.time_zone().to_owned(),
            region: area_code.region().to_owned(),
            rate_center: Some(block.rate_center().to_owned()),
            carrier: Some(block.carrier().to_owned()),
            operating_company_number: Some(block.operating_company_number().to_owned()),
            phone_number: number.as_str().to_owned(),
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn rate_center(&self) -> Option<&str> {
        self.rate_center.as_deref()
    }

    pub fn carrier(&self) -> Option<&str> {
        self.carrier.as_deref()
    }

    pub fn operating_company_number(&self) -> Option<&str> {
        self.operating_company_number.as_deref()
    }

    /// The normalized digit string the lookup was performed for.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}
