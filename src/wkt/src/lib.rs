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

//! Well-known wire types for the Glue model crates.
//!
//! The AWS JSON protocol has a handful of scalar representations that do not
//! map directly onto Rust primitives: timestamps travel as epoch-seconds
//! numbers with millisecond precision, and opaque byte sequences travel as
//! base64 strings. This crate defines those types once so every model field
//! serializes consistently.

mod blob;
mod timestamp;

pub use crate::blob::Blob;
pub use crate::timestamp::Timestamp;
