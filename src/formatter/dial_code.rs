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
    countries::{Country, CountryDirectory, helper_constants::MAX_DIRECT_DIAL_CODE_LENGTH},
    string_util::{extract_digits, split_at_char},
};

/// Outcome of resolving the dial code buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum DialCodeResolution<'a> {
    /// The buffer is short enough to still be a dial code being typed. It was
    /// looked up as is.
    Typing {
        country: Option<&'a Country>,
        dial_code: String,
        /// Exactly one country has, or extends, this code: nothing more
        /// needs to be typed in the code field.
        should_advance_focus: bool,
    },
    /// A long buffer was split into a calling code and the start of the
    /// phone number.
    Resolved {
        country: &'a Country,
        dial_code: String,
        remainder: String,
    },
    /// A long buffer that no split could resolve.
    Unresolved,
}

impl<'a> DialCodeResolution<'a> {
    pub fn country(&self) -> Option<&'a Country> {
        match self {
            DialCodeResolution::Typing { country, .. } => *country,
            DialCodeResolution::Resolved { country, .. } => Some(*country),
            DialCodeResolution::Unresolved => None,
        }
    }

    /// Number of buffer digits taken as the calling code.
    pub fn consumed_prefix_length(&self) -> usize {
        match self {
            DialCodeResolution::Typing { dial_code, .. }
            | DialCodeResolution::Resolved { dial_code, .. } => dial_code.chars().count(),
            DialCodeResolution::Unresolved => 0,
        }
    }

    /// Digits left over after the calling code.
    pub fn remainder(&self) -> &str {
        match self {
            DialCodeResolution::Resolved { remainder, .. } => remainder,
            _ => "",
        }
    }
}

pub(super) fn resolve_dial_code<'a>(
    directory: &'a CountryDirectory,
    dial_digits: &str,
) -> DialCodeResolution<'a> {
    let digits = extract_digits(dial_digits);
    let digit_count = digits.chars().count();

    if digit_count <= MAX_DIRECT_DIAL_CODE_LENGTH {
        let country = directory.lookup_by_code(&digits, None);
        let should_advance_focus = directory.lookup_all_by_code(&digits, true).len() == 1;
        return DialCodeResolution::Typing {
            country,
            dial_code: digits.into_owned(),
            should_advance_focus,
        };
    }

    // Candidates are tried shortest first, so a one digit code beats a longer
    // code starting with the same digit.
    for length in 1..=digit_count {
        let (candidate, rest) = split_at_char(&digits, length);
        let (carrier_prefix, _) = split_at_char(rest, 1);
        if let Some(country) = directory.lookup_by_code(candidate, Some(carrier_prefix)) {
            trace!(
                "Dial code {} resolved to {} as +{} {}",
                digits,
                country.id(),
                candidate,
                rest
            );
            return DialCodeResolution::Resolved {
                country,
                dial_code: candidate.to_owned(),
                remainder: rest.to_owned(),
            };
        }
    }
    trace!("Dial code {} did not resolve", digits);
    DialCodeResolution::Unresolved
}
