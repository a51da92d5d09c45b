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

use std::borrow::Cow;

use dec_from_char::DecimalExtended;

/// Keeps only the decimal digits of `input`, converting non ASCII decimal
/// digits (Arabic-Indic, full width, ...) to their ASCII form.
///
/// Returns the input borrowed when it already consists of ASCII digits only.
pub fn extract_digits(input: &str) -> Cow<'_, str> {
    if input.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .chars()
            .filter_map(|c| c.to_decimal_utf8())
            .map(|digit| char::from(b'0' + digit as u8))
            .collect(),
    )
}

/// Cuts `s` to at most `max_chars` characters. Calls `truncate` if string is
/// longer, otherwise returns it untouched.
pub fn truncate_chars(mut s: String, max_chars: usize) -> String {
    if let Some((byte_index, _)) = s.char_indices().nth(max_chars) {
        s.truncate(byte_index);
    }
    s
}

/// Splits `s` after its first `count` characters.
pub fn split_at_char(s: &str, count: usize) -> (&str, &str) {
    let byte_index = s
        .char_indices()
        .nth(count)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s.split_at(byte_index)
}
