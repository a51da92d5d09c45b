// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
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

use log::{debug, trace};

use super::{
    country::{Country, CountryCode},
    helper_constants::DATASET_DELIMITER,
};
use crate::interfaces::RegionNameProvider;

/// Parses the line oriented `calling_code;region_id[;pattern]` dataset.
///
/// Lines with fewer than two fields, or whose calling code is not a
/// non-negative integer, are skipped without error. Each accepted line becomes
/// its own visible country with a single wildcard calling code.
pub(super) fn parse_dataset(data: &str, names: &impl RegionNameProvider) -> Vec<Country> {
    let mut countries = Vec::new();
    for (line_number, line) in data.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match parse_line(line, names) {
            Some(country) => countries.push(country),
            None => trace!("Skipping dataset line {}: {:?}", line_number + 1, line),
        }
    }
    debug!("Loaded {} countries from dataset", countries.len());
    countries
}

/// Folds countries sharing a region id into the first one, appending the
/// codes of later records in order. Countries keep their first appearance
/// order.
pub(super) fn merge_by_region_id(countries: Vec<Country>) -> Vec<Country> {
    let mut merged: Vec<Country> = Vec::with_capacity(countries.len());
    let mut index_by_id = HashMap::<String, usize>::new();
    for country in countries {
        match index_by_id.get(country.id()) {
            Some(&index) => {
                trace!("Merging repeated region {} into its first record", country.id());
                merged[index].append_country_codes(country.into_country_codes());
            }
            None => {
                index_by_id.insert(country.id().to_owned(), merged.len());
                merged.push(country);
            }
        }
    }
    merged
}

fn parse_line(line: &str, names: &impl RegionNameProvider) -> Option<Country> {
    let mut fields = line.split(DATASET_DELIMITER);
    let calling_code = fields.next()?;
    let region_id = fields.next()?;
    let pattern = fields.next().unwrap_or_default();

    calling_code.parse::<u64>().ok()?;

    let patterns = if pattern.is_empty() {
        Vec::new()
    } else {
        vec![pattern.to_owned()]
    };
    let name = names.localized_region_name(region_id).unwrap_or_default();
    Some(Country::new(
        region_id,
        name,
        None,
        vec![CountryCode::new(calling_code, Vec::new(), patterns)],
        false,
    ))
}
