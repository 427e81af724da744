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

/// Geographic assignment data for one NPA (area code), as published in
/// NANPA's NPA database report. Reserved and otherwise unassignable area
/// codes carry no record at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaCodeRecord {
    country: String,
    region: String,
    time_zone: String,
}

impl AreaCodeRecord {
    pub fn new(
        country: impl Into<String>,
        region: impl Into<String>,
        time_zone: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            region: region.into(),
            time_zone: time_zone.into(),
        }
    }

    /// Country the NPA is assigned to, e.g. "US" or "CA".
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Subnational code, e.g. "NY" or "ON".
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Short time zone code, e.g. "E" for Eastern.
    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }
}

/// Rate center and carrier assignment for one NPA-NXX, from the central
/// office code assignment records. For pooled exchanges the carrier here
/// is the original code holder; thousand-blocks handed to another carrier
/// get their own [`BlockRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRecord {
    rate_center: String,
    carrier: String,
    operating_company_number: String,
}

impl ExchangeRecord {
    pub fn new(
        rate_center: impl Into<String>,
        carrier: impl Into<String>,
        operating_company_number: impl Into<String>,
    ) -> Self {
        Self {
            rate_center: rate_center.into(),
            carrier: carrier.into(),
            operating_company_number: operating_company_number.into(),
        }
    }

    pub fn rate_center(&self) -> &str {
        &self.rate_center
    }

    pub fn carrier(&self) -> &str {
        &self.carrier
    }

    /// NECA operating company number of the carrier holding the exchange.
    pub fn operating_company_number(&self) -> &str {
        &self.operating_company_number
    }
}

/// Reallocation data for one thousand-number block within a pooled
/// exchange. Present only when the block left the exchange's original
/// holder; its fields replace the exchange's as a complete set, never a
/// partial merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRecord {
    rate_center: String,
    carrier: String,
    operating_company_number: String,
}

impl BlockRecord {
    pub fn new(
        rate_center: impl Into<String>,
        carrier: impl Into<String>,
        operating_company_number: impl Into<String>,
    ) -> Self {
        Self {
            rate_center: rate_center.into(),
            carrier: carrier.into(),
            operating_company_number: operating_company_number.into(),
        }
    }

    pub fn rate_center(&self) -> &str {
        &self.rate_center
    }

    pub fn carrier(&self) -> &str {
        &self.carrier
    }

    pub fn operating_company_number(&self) -> &str {
        &self.operating_company_number
    }
}
