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

use std::collections::HashMap;

use glue_core::error::{Error, FieldViolation};

use super::tables::StorageDescriptor;
use super::ErrorDetail;

/// Represents a slice of table data.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Partition {
    /// The values of the partition.
    pub values: Option<Vec<String>>,

    /// The name of the catalog database in which to create the partition.
    pub database_name: Option<String>,

    /// The name of the database table in which to create the partition.
    pub table_name: Option<String>,

    /// The time at which the partition was created.
    pub creation_time: Option<wkt::Timestamp>,

    /// The last time at which the partition was accessed.
    pub last_access_time: Option<wkt::Timestamp>,

    /// Provides information about the physical location where the partition
    /// is stored.
    pub storage_descriptor: Option<StorageDescriptor>,

    /// These key-value pairs define partition parameters.
    pub parameters: Option<HashMap<String, String>>,

    /// The last time at which column statistics were computed for this
    /// partition.
    pub last_analyzed_time: Option<wkt::Timestamp>,
}

impl Partition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [values][Partition::values].
    pub fn set_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [values][Partition::values], creating the list if unset.
    pub fn add_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [database_name][Partition::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][Partition::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets the value of [creation_time][Partition::creation_time].
    pub fn set_creation_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.creation_time = Some(v.into());
        self
    }

    /// Sets the value of [last_access_time][Partition::last_access_time].
    pub fn set_last_access_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_access_time = Some(v.into());
        self
    }

    /// Sets the value of [storage_descriptor][Partition::storage_descriptor].
    pub fn set_storage_descriptor<T: Into<StorageDescriptor>>(mut self, v: T) -> Self {
        self.storage_descriptor = Some(v.into());
        self
    }

    /// Replaces the contents of [parameters][Partition::parameters].
    pub fn set_parameters<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [parameters][Partition::parameters], failing on a duplicate key.
    pub fn add_parameters_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.parameters.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "Parameters",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [parameters][Partition::parameters] to unset.
    pub fn clear_parameters(mut self) -> Self {
        self.parameters = None;
        self
    }

    /// Sets the value of [last_analyzed_time][Partition::last_analyzed_time].
    pub fn set_last_analyzed_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_analyzed_time = Some(v.into());
        self
    }
}

/// The structure used to create and update a partition.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct PartitionInput {
    /// The values of the partition. Although this parameter is not required
    /// by the SDK, you must specify this parameter for a valid input.
    pub values: Option<Vec<String>>,

    /// The last time at which the partition was accessed.
    pub last_access_time: Option<wkt::Timestamp>,

    /// Provides information about the physical location where the partition
    /// is stored.
    pub storage_descriptor: Option<StorageDescriptor>,

    /// These key-value pairs define partition parameters.
    pub parameters: Option<HashMap<String, String>>,

    /// The last time at which column statistics were computed for this
    /// partition.
    pub last_analyzed_time: Option<wkt::Timestamp>,
}

impl PartitionInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [values][PartitionInput::values].
    pub fn set_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [values][PartitionInput::values], creating the list if unset.
    pub fn add_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [last_access_time][PartitionInput::last_access_time].
    pub fn set_last_access_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_access_time = Some(v.into());
        self
    }

    /// Sets the value of [storage_descriptor][PartitionInput::storage_descriptor].
    pub fn set_storage_descriptor<T: Into<StorageDescriptor>>(mut self, v: T) -> Self {
        self.storage_descriptor = Some(v.into());
        self
    }

    /// Replaces the contents of [parameters][PartitionInput::parameters].
    pub fn set_parameters<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [parameters][PartitionInput::parameters], failing on a duplicate key.
    pub fn add_parameters_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.parameters.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "Parameters",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [parameters][PartitionInput::parameters] to unset.
    pub fn clear_parameters(mut self) -> Self {
        self.parameters = None;
        self
    }

    /// Sets the value of [last_analyzed_time][PartitionInput::last_analyzed_time].
    pub fn set_last_analyzed_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_analyzed_time = Some(v.into());
        self
    }
}

/// Contains a list of values defining partitions.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct PartitionValueList {
    /// The list of values.
    ///
    /// Constraints: at most 100 entries.
    pub values: Option<Vec<String>>,
}

impl PartitionValueList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [values][PartitionValueList::values].
    pub fn set_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [values][PartitionValueList::values], creating the list if unset.
    pub fn add_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Contains information about a partition error.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct PartitionError {
    /// The values that define the partition.
    pub partition_values: Option<Vec<String>>,

    /// The details about the partition error.
    pub error_detail: Option<ErrorDetail>,
}

impl PartitionError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [partition_values][PartitionError::partition_values].
    pub fn set_partition_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.partition_values = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [partition_values][PartitionError::partition_values], creating the list if unset.
    pub fn add_partition_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.partition_values
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [error_detail][PartitionError::error_detail].
    pub fn set_error_detail<T: Into<ErrorDetail>>(mut self, v: T) -> Self {
        self.error_detail = Some(v.into());
        self
    }
}

/// Defines a non-overlapping region of a table's partitions, allowing
/// multiple requests to be executed in parallel.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Segment {
    /// The zero-based index number of the segment. For example, if the
    /// total number of segments is 4, `SegmentNumber` values range from 0
    /// through 3.
    pub segment_number: Option<i32>,

    /// The total number of segments.
    ///
    /// Constraints: 1-10.
    pub total_segments: Option<i32>,
}

impl Segment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [segment_number][Segment::segment_number].
    pub fn set_segment_number<T: Into<i32>>(mut self, v: T) -> Self {
        self.segment_number = Some(v.into());
        self
    }

    /// Sets the value of [total_segments][Segment::total_segments].
    pub fn set_total_segments<T: Into<i32>>(mut self, v: T) -> Self {
        self.total_segments = Some(v.into());
        self
    }
}

/// Request message for `CreatePartition`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreatePartitionRequest {
    /// The ID of the catalog in which the partition is to be created.
    pub catalog_id: Option<String>,

    /// The name of the metadata database in which the partition is to be
    /// created.
    pub database_name: Option<String>,

    /// The name of the metadata table in which the partition is to be
    /// created.
    pub table_name: Option<String>,

    /// A `PartitionInput` structure defining the partition to be created.
    pub partition_input: Option<PartitionInput>,
}

impl CreatePartitionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][CreatePartitionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][CreatePartitionRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][CreatePartitionRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets the value of [partition_input][CreatePartitionRequest::partition_input].
    pub fn set_partition_input<T: Into<PartitionInput>>(mut self, v: T) -> Self {
        self.partition_input = Some(v.into());
        self
    }
}

/// Response message for `CreatePartition`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreatePartitionResult {}

impl CreatePartitionResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `BatchCreatePartition`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchCreatePartitionRequest {
    /// The ID of the catalog in which the partition is to be created.
    pub catalog_id: Option<String>,

    /// The name of the metadata database in which the partition is to be
    /// created.
    pub database_name: Option<String>,

    /// The name of the metadata table in which the partition is to be
    /// created.
    pub table_name: Option<String>,

    /// A list of `PartitionInput` structures that define the partitions to
    /// be created.
    ///
    /// Constraints: at most 100 entries.
    pub partition_input_list: Option<Vec<PartitionInput>>,
}

impl BatchCreatePartitionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][BatchCreatePartitionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][BatchCreatePartitionRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][BatchCreatePartitionRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Replaces the contents of [partition_input_list][BatchCreatePartitionRequest::partition_input_list].
    pub fn set_partition_input_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PartitionInput>,
    {
        self.partition_input_list = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [partition_input_list][BatchCreatePartitionRequest::partition_input_list], creating the list if unset.
    pub fn add_partition_input_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PartitionInput>,
    {
        self.partition_input_list
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `BatchCreatePartition`.
///
/// Per-partition failures are reported inline in [errors]
/// [BatchCreatePartitionResult::errors] rather than failing the whole
/// request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchCreatePartitionResult {
    /// The errors encountered when trying to create the requested
    /// partitions.
    pub errors: Option<Vec<PartitionError>>,
}

impl BatchCreatePartitionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [errors][BatchCreatePartitionResult::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PartitionError>,
    {
        self.errors = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [errors][BatchCreatePartitionResult::errors], creating the list if unset.
    pub fn add_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PartitionError>,
    {
        self.errors
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Request message for `GetPartition`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetPartitionRequest {
    /// The ID of the Data Catalog where the partition in question resides.
    pub catalog_id: Option<String>,

    /// The name of the catalog database where the partition resides.
    pub database_name: Option<String>,

    /// The name of the partition's table.
    pub table_name: Option<String>,

    /// The values that define the partition.
    pub partition_values: Option<Vec<String>>,
}

impl GetPartitionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][GetPartitionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][GetPartitionRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][GetPartitionRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Replaces the contents of [partition_values][GetPartitionRequest::partition_values].
    pub fn set_partition_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.partition_values = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [partition_values][GetPartitionRequest::partition_values], creating the list if unset.
    pub fn add_partition_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.partition_values
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `GetPartition`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetPartitionResult {
    /// The requested information, in the form of a `Partition` object.
    pub partition: Option<Partition>,
}

impl GetPartitionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [partition][GetPartitionResult::partition].
    pub fn set_partition<T: Into<Partition>>(mut self, v: T) -> Self {
        self.partition = Some(v.into());
        self
    }
}

/// Request message for `GetPartitions`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetPartitionsRequest {
    /// The ID of the Data Catalog where the partitions in question reside.
    pub catalog_id: Option<String>,

    /// The name of the catalog database where the partitions reside.
    pub database_name: Option<String>,

    /// The name of the partitions' table.
    pub table_name: Option<String>,

    /// An expression that filters the partitions to be returned, using SQL
    /// `WHERE` filter syntax over the partition keys.
    ///
    /// Constraints: length at most 2048.
    pub expression: Option<String>,

    /// A continuation token, if this is not the first call to retrieve
    /// these partitions.
    pub next_token: Option<String>,

    /// The segment of the table's partitions to scan in this request.
    pub segment: Option<Segment>,

    /// The maximum number of partitions to return in a single response.
    pub max_results: Option<i32>,
}

impl GetPartitionsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][GetPartitionsRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][GetPartitionsRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][GetPartitionsRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets the value of [expression][GetPartitionsRequest::expression].
    pub fn set_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.expression = Some(v.into());
        self
    }

    /// Sets the value of [next_token][GetPartitionsRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [segment][GetPartitionsRequest::segment].
    pub fn set_segment<T: Into<Segment>>(mut self, v: T) -> Self {
        self.segment = Some(v.into());
        self
    }

    /// Sets the value of [max_results][GetPartitionsRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }
}

/// Response message for `GetPartitions`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetPartitionsResult {
    /// A list of requested partitions.
    pub partitions: Option<Vec<Partition>>,

    /// A continuation token, if the returned list of partitions does not
    /// include the last one.
    pub next_token: Option<String>,
}

impl GetPartitionsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [partitions][GetPartitionsResult::partitions].
    pub fn set_partitions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Partition>,
    {
        self.partitions = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [partitions][GetPartitionsResult::partitions], creating the list if unset.
    pub fn add_partitions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Partition>,
    {
        self.partitions
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][GetPartitionsResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Request message for `BatchGetPartition`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchGetPartitionRequest {
    /// The ID of the Data Catalog where the partitions in question reside.
    pub catalog_id: Option<String>,

    /// The name of the catalog database where the partitions reside.
    pub database_name: Option<String>,

    /// The name of the partitions' table.
    pub table_name: Option<String>,

    /// A list of partition values identifying the partitions to retrieve.
    ///
    /// Constraints: at most 1000 entries.
    pub partitions_to_get: Option<Vec<PartitionValueList>>,
}

impl BatchGetPartitionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][BatchGetPartitionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][BatchGetPartitionRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][BatchGetPartitionRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Replaces the contents of [partitions_to_get][BatchGetPartitionRequest::partitions_to_get].
    pub fn set_partitions_to_get<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PartitionValueList>,
    {
        self.partitions_to_get = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [partitions_to_get][BatchGetPartitionRequest::partitions_to_get], creating the list if unset.
    pub fn add_partitions_to_get<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PartitionValueList>,
    {
        self.partitions_to_get
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `BatchGetPartition`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchGetPartitionResult {
    /// A list of the requested partitions.
    pub partitions: Option<Vec<Partition>>,

    /// A list of the partition values in the request for which partitions
    /// were not returned.
    pub unprocessed_keys: Option<Vec<PartitionValueList>>,
}

impl BatchGetPartitionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [partitions][BatchGetPartitionResult::partitions].
    pub fn set_partitions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Partition>,
    {
        self.partitions = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [partitions][BatchGetPartitionResult::partitions], creating the list if unset.
    pub fn add_partitions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Partition>,
    {
        self.partitions
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [unprocessed_keys][BatchGetPartitionResult::unprocessed_keys].
    pub fn set_unprocessed_keys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PartitionValueList>,
    {
        self.unprocessed_keys = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [unprocessed_keys][BatchGetPartitionResult::unprocessed_keys], creating the list if unset.
    pub fn add_unprocessed_keys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PartitionValueList>,
    {
        self.unprocessed_keys
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Request message for `UpdatePartition`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdatePartitionRequest {
    /// The ID of the Data Catalog where the partition to be updated
    /// resides.
    pub catalog_id: Option<String>,

    /// The name of the catalog database in which the table in question
    /// resides.
    pub database_name: Option<String>,

    /// The name of the table in which the partition to be updated is
    /// located.
    pub table_name: Option<String>,

    /// A list of the values defining the partition.
    pub partition_value_list: Option<Vec<String>>,

    /// The new partition object to update the partition to.
    pub partition_input: Option<PartitionInput>,
}

impl UpdatePartitionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][UpdatePartitionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][UpdatePartitionRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][UpdatePartitionRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Replaces the contents of [partition_value_list][UpdatePartitionRequest::partition_value_list].
    pub fn set_partition_value_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.partition_value_list = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [partition_value_list][UpdatePartitionRequest::partition_value_list], creating the list if unset.
    pub fn add_partition_value_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.partition_value_list
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [partition_input][UpdatePartitionRequest::partition_input].
    pub fn set_partition_input<T: Into<PartitionInput>>(mut self, v: T) -> Self {
        self.partition_input = Some(v.into());
        self
    }
}

/// Response message for `UpdatePartition`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdatePartitionResult {}

impl UpdatePartitionResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `DeletePartition`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeletePartitionRequest {
    /// The ID of the Data Catalog where the partition to be deleted
    /// resides.
    pub catalog_id: Option<String>,

    /// The name of the catalog database in which the table in question
    /// resides.
    pub database_name: Option<String>,

    /// The name of the table that contains the partition to be deleted.
    pub table_name: Option<String>,

    /// The values that define the partition.
    pub partition_values: Option<Vec<String>>,
}

impl DeletePartitionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][DeletePartitionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][DeletePartitionRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][DeletePartitionRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Replaces the contents of [partition_values][DeletePartitionRequest::partition_values].
    pub fn set_partition_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.partition_values = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [partition_values][DeletePartitionRequest::partition_values], creating the list if unset.
    pub fn add_partition_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.partition_values
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `DeletePartition`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeletePartitionResult {}

impl DeletePartitionResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `BatchDeletePartition`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchDeletePartitionRequest {
    /// The ID of the Data Catalog where the partition to be deleted
    /// resides.
    pub catalog_id: Option<String>,

    /// The name of the catalog database in which the table in question
    /// resides.
    pub database_name: Option<String>,

    /// The name of the table that contains the partitions to be deleted.
    pub table_name: Option<String>,

    /// A list of `PartitionInput` structures that define the partitions to
    /// be deleted.
    ///
    /// Constraints: at most 25 entries.
    pub partitions_to_delete: Option<Vec<PartitionValueList>>,
}

impl BatchDeletePartitionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][BatchDeletePartitionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][BatchDeletePartitionRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][BatchDeletePartitionRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Replaces the contents of [partitions_to_delete][BatchDeletePartitionRequest::partitions_to_delete].
    pub fn set_partitions_to_delete<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PartitionValueList>,
    {
        self.partitions_to_delete = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [partitions_to_delete][BatchDeletePartitionRequest::partitions_to_delete], creating the list if unset.
    pub fn add_partitions_to_delete<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PartitionValueList>,
    {
        self.partitions_to_delete
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `BatchDeletePartition`.
///
/// Per-partition failures are reported inline in [errors]
/// [BatchDeletePartitionResult::errors] rather than failing the whole
/// request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchDeletePartitionResult {
    /// The errors encountered when trying to delete the requested
    /// partitions.
    pub errors: Option<Vec<PartitionError>>,
}

impl BatchDeletePartitionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [errors][BatchDeletePartitionResult::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PartitionError>,
    {
        self.errors = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [errors][BatchDeletePartitionResult::errors], creating the list if unset.
    pub fn add_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PartitionError>,
    {
        self.errors
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}
