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

use serde::{Deserialize, Serialize};

/// One calling code of a country together with the carrier prefixes that
/// select it and the masks used to format numbers behind it.
///
/// An empty `prefixes` list is a wildcard: the entry matches whatever digit
/// follows the calling code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryCode {
    #[serde(rename = "c")]
    code: String,
    #[serde(rename = "pfx")]
    prefixes: Vec<String>,
    #[serde(rename = "ptrn")]
    patterns: Vec<String>,
}

impl CountryCode {
    pub fn new(code: impl Into<String>, prefixes: Vec<String>, patterns: Vec<String>) -> Self {
        Self {
            code: code.into(),
            prefixes,
            patterns,
        }
    }

    /// Calling code digits, e.g. `"44"`.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Masks in preference order. `X` is a digit slot, anything else is a
    /// literal.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.prefixes.iter().any(|p| p == prefix)
    }

    pub fn is_wildcard(&self) -> bool {
        self.prefixes.is_empty()
    }
}

/// A country or region known to the directory. Equality compares every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "c")]
    id: String,
    #[serde(rename = "n")]
    name: String,
    #[serde(rename = "ln", default, skip_serializing_if = "Option::is_none")]
    localized_name: Option<String>,
    #[serde(rename = "cc")]
    country_codes: Vec<CountryCode>,
    /// Hidden countries are left out of pickers but still resolve by code.
    #[serde(rename = "h")]
    hidden: bool,
}

impl Country {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        localized_name: Option<String>,
        country_codes: Vec<CountryCode>,
        hidden: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            localized_name,
            country_codes,
            hidden,
        }
    }

    /// Region identifier, usually an ISO 3166 alpha-2 code.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn localized_name(&self) -> Option<&str> {
        self.localized_name.as_deref()
    }

    pub fn country_codes(&self) -> &[CountryCode] {
        &self.country_codes
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// The code shown next to the country and used for formatting.
    pub fn primary_code(&self) -> Option<&CountryCode> {
        self.country_codes.first()
    }

    /// Patterns of the primary code, empty when the country has none.
    pub fn patterns(&self) -> &[String] {
        self.primary_code()
            .map(|code| code.patterns())
            .unwrap_or_default()
    }

    pub(super) fn append_country_codes(&mut self, country_codes: Vec<CountryCode>) {
        self.country_codes.extend(country_codes);
    }

    pub(super) fn into_country_codes(self) -> Vec<CountryCode> {
        self.country_codes
    }

    /// Whether any of the codes is exactly `code_number`.
    pub fn has_code(&self, code_number: &str) -> bool {
        self.country_codes.iter().any(|c| c.code == code_number)
    }
}
