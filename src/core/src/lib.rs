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

//! Support types for the Glue model crates.
//!
//! This crate contains types used in the implementation of the Glue client
//! model surface. It carries no service-specific knowledge of its own.

/// The core error types used by the model crates.
pub mod error;
