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

use log::trace;

use crate::{
    countries::{
        Country, CountryDirectory,
        helper_constants::{MAX_FORMATTED_NUMBER_LENGTH, PLUS_SIGN},
    },
    formatter::{DialCodeResolution, PhoneNumberFormatter, Placeholder},
    string_util::{extract_digits, truncate_chars},
};

/// Input field of the phone entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Code,
    PhoneNumber,
}

/// State of one phone number entry form: the `+code` field, the formatted
/// number field and the country they resolve to.
///
/// Edits return the field that should receive focus next, if any. A session
/// belongs to a single editor and is not meant to be shared.
#[derive(Debug, Clone)]
pub struct PhoneEntrySession<'a> {
    formatter: PhoneNumberFormatter<'a>,
    code_text: String,
    phone_number: String,
    selected_country: Option<&'a Country>,
    is_next_available: bool,
}

impl<'a> PhoneEntrySession<'a> {
    pub fn new(directory: &'a CountryDirectory) -> Self {
        Self {
            formatter: PhoneNumberFormatter::new(directory),
            code_text: PLUS_SIGN.to_owned(),
            phone_number: String::new(),
            selected_country: None,
            is_next_available: false,
        }
    }

    pub fn code_text(&self) -> &str {
        &self.code_text
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn selected_country(&self) -> Option<&'a Country> {
        self.selected_country
    }

    pub fn is_next_available(&self) -> bool {
        self.is_next_available
    }

    /// Code followed by the number without surrounding whitespace.
    pub fn ready_value(&self) -> String {
        fast_cat::concat_str!(&self.code_text, self.phone_number.trim())
    }

    pub fn placeholder(&self) -> Placeholder {
        self.formatter
            .placeholder(self.selected_country, &self.phone_number)
    }

    /// Selects `country`, e.g. from a picker. With `update_code_text` the
    /// code field is rewritten to the country's primary code.
    pub fn select_country(&mut self, country: Option<&'a Country>, update_code_text: bool) {
        trace!("Selected country {:?}", country.map(Country::id));
        self.selected_country = country;
        if update_code_text {
            self.code_text = match country.and_then(Country::primary_code) {
                Some(code) => fast_cat::concat_str!(PLUS_SIGN, code.code()),
                None => PLUS_SIGN.to_owned(),
            };
        }
    }

    /// Applies an edit of the code field.
    ///
    /// A long buffer that splits into code and number moves the number part
    /// in front of the digits already in the number field.
    pub fn update_code_text(&mut self, code_text: &str) -> Option<EntryField> {
        if code_text == self.code_text {
            return None;
        }
        self.code_text = code_text.to_owned();

        match self.formatter.resolve_dial_code(code_text) {
            DialCodeResolution::Typing {
                country,
                dial_code,
                should_advance_focus,
            } => {
                self.code_text = fast_cat::concat_str!(PLUS_SIGN, &dial_code);
                self.select_country(country, false);
                should_advance_focus.then_some(EntryField::PhoneNumber)
            }
            DialCodeResolution::Resolved {
                country,
                dial_code,
                remainder,
            } => {
                self.code_text = fast_cat::concat_str!(PLUS_SIGN, &dial_code);
                self.select_country(Some(country), false);

                let mut digits = remainder;
                digits.push_str(&extract_digits(&self.phone_number));
                self.phone_number = self.format_truncated(&digits, country);
                Some(EntryField::PhoneNumber)
            }
            DialCodeResolution::Unresolved => {
                self.select_country(None, false);
                None
            }
        }
    }

    /// Applies an edit of the number field.
    ///
    /// Without a selected country the typed digits are moved to the code
    /// field instead, and focus goes back there.
    pub fn update_phone_number(&mut self, phone_number: &str) -> Option<EntryField> {
        if self.phone_number.trim() == phone_number {
            return None;
        }
        let digits = extract_digits(phone_number).into_owned();

        let focus = match self.selected_country {
            Some(country) => {
                self.phone_number = self.format_truncated(&digits, country);
                None
            }
            None => {
                self.code_text = fast_cat::concat_str!(PLUS_SIGN, &digits);
                self.phone_number.clear();
                Some(EntryField::Code)
            }
        };
        self.is_next_available = !self.phone_number.is_empty() && !self.code_text.is_empty();
        focus
    }

    fn format_truncated(&self, digits: &str, country: &Country) -> String {
        let formatted = self.formatter.format_number(digits, country).into_owned();
        truncate_chars(formatted, MAX_FORMATTED_NUMBER_LENGTH)
    }
}
