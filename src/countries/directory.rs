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

use std::{fs, path::Path};

use log::warn;

use super::{
    country::{Country, CountryCode},
    errors::LoadError,
    helper_constants::{
        PLUS_SIGN, TEST_CALLING_CODE, TEST_COUNTRY_NAME, TEST_NUMBER_PATTERN,
    },
    loader::{merge_by_region_id, parse_dataset},
};
use crate::{
    i18n::{RegionCode, emoji_flag_for_region},
    interfaces::RegionNameProvider,
};

/// Immutable table of known countries.
///
/// Built once and then shared by reference; every lookup is a pure function
/// of the table, so a directory can be read from many threads at once.
/// Lookups scan in load order, which is also the tie break between countries
/// sharing a code and prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryDirectory {
    countries: Vec<Country>,
    /// Synthetic country behind calling code 999. Not part of `countries`.
    test_country: Country,
}

impl CountryDirectory {
    /// Builds a directory from countries in load order. Records repeating a
    /// region id are folded into the first one, so every id names a single
    /// country.
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries: merge_by_region_id(countries),
            test_country: Country::new(
                RegionCode::test(),
                TEST_COUNTRY_NAME,
                Some(TEST_COUNTRY_NAME.to_owned()),
                vec![CountryCode::new(
                    TEST_CALLING_CODE,
                    Vec::new(),
                    vec![TEST_NUMBER_PATTERN.to_owned()],
                )],
                false,
            ),
        }
    }

    /// Builds a directory from `calling_code;region_id[;pattern]` lines.
    pub fn from_dataset(data: &str, names: &impl RegionNameProvider) -> Self {
        Self::new(parse_dataset(data, names))
    }

    pub fn load_from_path(
        path: impl AsRef<Path>,
        names: &impl RegionNameProvider,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).inspect_err(|err| {
            warn!("Failed to read country dataset {}: {}", path.display(), err)
        })?;
        Ok(Self::from_dataset(&data, names))
    }

    /// Builds a directory from a JSON array of countries in the compact
    /// `{c, n, ln, cc, h}` form.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let countries: Vec<Country> = serde_json::from_str(json)?;
        Ok(Self::new(countries))
    }

    /// All loaded countries in load order, hidden ones included.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Countries offered by pickers.
    pub fn visible_countries(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter().filter(|country| !country.hidden())
    }

    pub fn test_country(&self) -> &Country {
        &self.test_country
    }

    /// Finds the country owning `code_number`.
    ///
    /// With a `prefix`, the first country whose first entry for that code
    /// lists the prefix wins; failing that, the first country having a
    /// wildcard entry for the code. Without a prefix any entry with the code
    /// matches. Code 999 always yields the test country.
    pub fn lookup_by_code(&self, code_number: &str, prefix: Option<&str>) -> Option<&Country> {
        if code_number == TEST_CALLING_CODE {
            return Some(&self.test_country);
        }
        let first_trip = self.countries.iter().find(|country| {
            country
                .country_codes()
                .iter()
                .find(|code| code.code() == code_number)
                .is_some_and(|code| prefix.is_none_or(|prefix| code.has_prefix(prefix)))
        });
        first_trip.or_else(|| {
            self.countries.iter().find(|country| {
                country
                    .country_codes()
                    .iter()
                    .any(|code| code.code() == code_number && code.is_wildcard())
            })
        })
    }

    /// Every country with a code equal to `code_number` or, when
    /// `match_prefix_of_code` is set, a code starting with it. The test
    /// country takes part as the last candidate. Each country appears once.
    pub fn lookup_all_by_code(&self, code_number: &str, match_prefix_of_code: bool) -> Vec<&Country> {
        self.countries
            .iter()
            .chain(std::iter::once(&self.test_country))
            .filter(|country| {
                country.country_codes().iter().any(|code| {
                    code.code() == code_number
                        || (match_prefix_of_code && code.code().starts_with(code_number))
                })
            })
            .collect()
    }

    pub fn lookup_by_region_id(&self, id: &str) -> Option<&Country> {
        self.countries.iter().find(|country| country.id() == id)
    }

    pub fn flag_glyph(&self, region_id: &str) -> String {
        emoji_flag_for_region(region_id)
    }

    /// Picker label: `"<flag> <name> +<code>"`, or only the name for a
    /// country without codes.
    pub fn display_label(&self, country: &Country) -> String {
        let Some(code) = country.primary_code() else {
            return country.name().to_owned();
        };
        let flag = self.flag_glyph(country.id());
        fast_cat::concat_str!(&flag, " ", country.name(), " ", PLUS_SIGN, code.code())
    }
}
