// Copyright 2024 the glue-model authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The Glue model surface, one flat namespace.
//!
//! The implementation is split across per-domain source files, but every
//! public type is re-exported here so users address them uniformly as
//! `glue_model::model::*`.

mod classifiers;
mod connections;
mod crawlers;
mod databases;
mod dev_endpoints;
mod jobs;
mod partitions;
mod statistics;
mod tables;
mod tags;
mod transforms;
mod triggers;
mod workflows;

pub use classifiers::*;
pub use connections::*;
pub use crawlers::*;
pub use databases::*;
pub use dev_endpoints::*;
pub use jobs::*;
pub use partitions::*;
pub use statistics::*;
pub use tables::*;
pub use tags::*;
pub use transforms::*;
pub use triggers::*;
pub use workflows::*;

/// Contains details about an error, reported inline for the member of a
/// batch operation that failed.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ErrorDetail {
    /// The code associated with this error.
    ///
    /// Constraints: length 1-255, single-line identifier
    /// (`[A-Za-z0-9_]+`).
    pub error_code: Option<String>,

    /// A message describing the error.
    pub error_message: Option<String>,
}

impl ErrorDetail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [error_code][ErrorDetail::error_code].
    pub fn set_error_code<T: Into<String>>(mut self, v: T) -> Self {
        self.error_code = Some(v.into());
        self
    }

    /// Sets the value of [error_message][ErrorDetail::error_message].
    pub fn set_error_message<T: Into<String>>(mut self, v: T) -> Self {
        self.error_message = Some(v.into());
        self
    }
}
