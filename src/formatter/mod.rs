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

mod dial_code;
mod mask;

use std::borrow::Cow;

use crate::countries::{
    Country, CountryDirectory,
    helper_constants::DEFAULT_NUMBER_PLACEHOLDER,
};

pub use dial_code::DialCodeResolution;
pub use mask::{render, select_pattern};

/// Hint shown behind the phone number field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub text: String,
    /// Leading characters of `text` hidden under what is already typed.
    pub covered: usize,
}

/// Formats phone numbers against the patterns of a directory's countries and
/// resolves countries from dial code buffers.
#[derive(Debug, Clone, Copy)]
pub struct PhoneNumberFormatter<'a> {
    directory: &'a CountryDirectory,
}

impl<'a> PhoneNumberFormatter<'a> {
    pub fn new(directory: &'a CountryDirectory) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &'a CountryDirectory {
        self.directory
    }

    /// Resolves the country for a dial code buffer. Non digits are ignored.
    ///
    /// Up to four digits are looked up directly. Longer buffers are split
    /// into code and remainder, trying codes from the shortest up and taking
    /// the first digit of the remainder as carrier prefix.
    pub fn resolve_dial_code(&self, dial_digits: &str) -> DialCodeResolution<'a> {
        dial_code::resolve_dial_code(self.directory, dial_digits)
    }

    /// Formats `number` with the pattern its first digit selects from the
    /// country's primary code. Returned borrowed when the country has no
    /// pattern.
    pub fn format_number<'b>(&self, number: &'b str, country: &Country) -> Cow<'b, str> {
        match select_pattern(country.patterns(), number) {
            Some(pattern) => Cow::Owned(render(number, pattern)),
            None => Cow::Borrowed(number),
        }
    }

    /// Builds the hint for the phone number field from the selected country's
    /// pattern, with digit slots shown as dashes.
    pub fn placeholder(&self, country: Option<&Country>, phone_number: &str) -> Placeholder {
        let pattern = country.and_then(|country| select_pattern(country.patterns(), phone_number));
        let text = match pattern {
            Some(pattern) => mask::hint_for_pattern(pattern),
            None if phone_number.is_empty() => DEFAULT_NUMBER_PLACEHOLDER.to_owned(),
            None => String::new(),
        };
        let covered = if phone_number.is_empty() {
            0
        } else {
            phone_number.chars().count().min(text.chars().count())
        };
        Placeholder { text, covered }
    }
}
