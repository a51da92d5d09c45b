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

use crate::countries::helper_constants::{PLACEHOLDER_DIGIT, PLACEHOLDER_FILL};

/// Renders `input` through `pattern` in a single pass.
///
/// Every input character is consumed exactly once:
/// - against a digit slot (`X`) it is copied;
/// - against a space literal the space is written, then the character, and
///   the slot after the space is skipped;
/// - against any other literal only the literal is written and the
///   character is dropped;
/// - past the end of the pattern it is copied as is.
///
/// When the pattern continues with a space after the last character, that
/// space is appended so the next digit lands in a new group.
pub fn render(input: &str, pattern: &str) -> String {
    let pattern: Vec<char> = pattern.chars().collect();
    let mut formatted = String::with_capacity(input.len() + pattern.len());
    let mut cursor = 0;

    for c in input.chars() {
        match pattern.get(cursor) {
            Some(&PLACEHOLDER_DIGIT) => formatted.push(c),
            Some(&literal) => {
                formatted.push(literal);
                if literal == ' ' {
                    formatted.push(c);
                    cursor += 1;
                }
            }
            None => {
                formatted.push(c);
                continue;
            }
        }
        cursor += 1;
    }
    if pattern.get(cursor) == Some(&' ') {
        formatted.push(' ');
    }
    formatted
}

/// Picks the pattern used for `digits` from a country's ordered list.
///
/// For an empty buffer the first pattern without leading or trailing fixed
/// digits is preferred, otherwise the first pattern starting with the same
/// character as the buffer. The last pattern is the fallback. `None` only
/// when there are no patterns at all.
pub fn select_pattern<'a>(patterns: &'a [String], digits: &str) -> Option<&'a str> {
    let preferred = match digits.chars().next() {
        None => patterns.iter().find(|pattern| is_pure_mask(pattern)),
        Some(first) => patterns
            .iter()
            .find(|pattern| pattern.chars().next() == Some(first)),
    };
    preferred.or_else(|| patterns.last()).map(String::as_str)
}

fn is_pure_mask(pattern: &str) -> bool {
    pattern.trim_matches(|c: char| c.is_ascii_digit()).len() == pattern.len()
}

/// Turns a pattern into an input hint by blanking its digit slots.
pub(super) fn hint_for_pattern(pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| if c == PLACEHOLDER_DIGIT { PLACEHOLDER_FILL } else { c })
        .collect()
}
