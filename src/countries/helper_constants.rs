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

/// Calling code of the synthetic test country. Always resolves, whatever the
/// loaded table contains.
pub const TEST_CALLING_CODE: &'static str = "999";
pub const TEST_REGION_ID: &'static str = "TG";
pub const TEST_COUNTRY_NAME: &'static str = "Test";
pub const TEST_NUMBER_PATTERN: &'static str = "XXXX X XX";

// Up to this many digits the dial code is looked up as typed. Longer buffers
// are re-segmented into code + remainder.
pub const MAX_DIRECT_DIAL_CODE_LENGTH: usize = 4;
// Formatted phone numbers are cut to this many characters.
pub const MAX_FORMATTED_NUMBER_LENGTH: usize = 17;

pub const DATASET_DELIMITER: char = ';';

pub const PLUS_SIGN: &'static str = "+";

/// Digit slot in a formatting pattern.
pub const PLACEHOLDER_DIGIT: char = 'X';
/// Replaces every digit slot when a pattern is shown as an input hint.
pub const PLACEHOLDER_FILL: char = '-';
pub const DEFAULT_NUMBER_PLACEHOLDER: &'static str = "phone number";

/// Distance between an uppercase ASCII letter and its regional indicator
/// symbol ('A' + 127397 == U+1F1E6).
pub const REGIONAL_INDICATOR_OFFSET: u32 = 127397;
