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

use std::str::FromStr;

use super::SpecialRegion;
use crate::countries::helper_constants::REGIONAL_INDICATOR_OFFSET;

/// Returns the flag glyph for a two character region id.
///
/// Special (non ISO) regions map to fixed glyphs. Every other id is turned
/// into a pair of regional indicator symbols by shifting each character by
/// [`REGIONAL_INDICATOR_OFFSET`], which renders as a flag for ISO 3166 codes.
/// Ids that are not two uppercase letters produce meaningless glyphs; that is
/// accepted, not an error. Ids whose length is not 2 yield an empty string.
pub fn emoji_flag_for_region(region_id: &str) -> String {
    if region_id.chars().count() != 2 {
        return String::new();
    }
    if let Ok(special) = SpecialRegion::from_str(region_id) {
        return special.glyph().to_owned();
    }
    region_id
        .chars()
        .map(|c| {
            char::from_u32(c as u32 + REGIONAL_INDICATOR_OFFSET)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect()
}
