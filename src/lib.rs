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

//! Country directory and as-you-type phone number masking.
//!
//! A [`CountryDirectory`] is built once from a `calling_code;region_id[;pattern]`
//! dataset (or JSON) and answers lookups by calling code and region id.
//! [`PhoneNumberFormatter`] renders digits through a country's pattern and
//! resolves the country from a dial code buffer. [`PhoneEntrySession`] ties
//! both together for a single entry form.

mod interfaces;
mod countries;
mod formatter;
mod session;
pub mod i18n;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use countries::{Country, CountryCode, CountryDirectory, errors, helper_constants};
pub use formatter::{DialCodeResolution, PhoneNumberFormatter, Placeholder, render, select_pattern};
pub use interfaces::{NoRegionNames, RegionNameProvider};
pub use session::{EntryField, PhoneEntrySession};
