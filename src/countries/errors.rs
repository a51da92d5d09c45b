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

use thiserror::Error;

/// Failures of the outer loading surface. Lookups and formatting never fail.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read country dataset: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("Invalid country list: {0}")]
    Json(#[from] serde_json::Error),
}
