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

//! Typed request and response models for the AWS Glue data catalog and ETL
//! orchestration API: jobs, crawlers, classifiers, triggers, workflows,
//! machine-learning transforms, partitions, and column statistics.
//!
//! Every type here is a plain value object mirroring one wire shape of the
//! service. Construction starts from [`new`](model::Job::new) (or
//! `Default`), fields are populated with the consuming `set_*` / `add_*`
//! builders, and reads are direct field accesses. Serialization with
//! [serde] produces the AWS JSON wire form: `PascalCase` member names,
//! unset fields omitted, timestamps as epoch-seconds numbers, and binary
//! payloads as base64.
//!
//! This crate is the serialization contract only. The transport that signs,
//! sends, retries, and pages requests is a separate concern and not
//! provided here.
//!
//! # Example
//! ```
//! use glue_model::model::BatchDeleteConnectionRequest;
//! let req = BatchDeleteConnectionRequest::new()
//!     .set_catalog_id("123456789012")
//!     .set_connection_name_list(["conn-a", "conn-b"]);
//! assert_eq!(req.connection_name_list.as_deref(), Some(&["conn-a".to_string(), "conn-b".to_string()][..]));
//! ```

/// The messages and enums that make up the Glue model surface.
pub mod model;

/// The error type returned by fallible builder methods.
pub use glue_core::error::Error;
