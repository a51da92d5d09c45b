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

use std::collections::HashMap;

/// Source of human readable region names used while loading a dataset.
/// Implementations are free to localize; the directory stores whatever is
/// returned as the country's display name.
pub trait RegionNameProvider {
    /// Returns the display name for `region_id`, or `None` when unknown.
    fn localized_region_name(&self, region_id: &str) -> Option<String>;
}

/// Provider that knows no names. Loaded countries get an empty name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRegionNames;

impl RegionNameProvider for NoRegionNames {
    fn localized_region_name(&self, _region_id: &str) -> Option<String> {
        None
    }
}

impl RegionNameProvider for HashMap<String, String> {
    fn localized_region_name(&self, region_id: &str) -> Option<String> {
        self.get(region_id).cloned()
    }
}

impl<F> RegionNameProvider for F
where
    F: Fn(&str) -> Option<String>,
{
    fn localized_region_name(&self, region_id: &str) -> Option<String> {
        self(region_id)
    }
}
