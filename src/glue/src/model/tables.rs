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

use super::ErrorDetail;

/// A column in a `Table`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Column {
    /// The name of the `Column`.
    ///
    /// Constraints: length 1-255, single-line text.
    pub name: Option<String>,

    /// The data type of the `Column`.
    #[serde(rename = "Type")]
    pub column_type: Option<String>,

    /// A free-form text comment.
    pub comment: Option<String>,

    /// These key-value pairs define properties associated with the column.
    pub parameters: Option<HashMap<String, String>>,
}

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Column::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [column_type][Column::column_type].
    pub fn set_column_type<T: Into<String>>(mut self, v: T) -> Self {
        self.column_type = Some(v.into());
        self
    }

    /// Sets the value of [comment][Column::comment].
    pub fn set_comment<T: Into<String>>(mut self, v: T) -> Self {
        self.comment = Some(v.into());
        self
    }

    /// Replaces the contents of [parameters][Column::parameters].
    pub fn set_parameters<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [parameters][Column::parameters], failing on a duplicate key.
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

    /// Resets [parameters][Column::parameters] to unset.
    pub fn clear_parameters(mut self) -> Self {
        self.parameters = None;
        self
    }
}

/// Information about a serialization/deserialization program (SerDe) that
/// serves as an extractor and loader.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct SerDeInfo {
    /// The name of the SerDe.
    pub name: Option<String>,

    /// Usually the class that implements the SerDe, such as
    /// `org.apache.hadoop.hive.serde2.columnar.ColumnarSerDe`.
    pub serialization_library: Option<String>,

    /// These key-value pairs define initialization parameters for the
    /// SerDe.
    pub parameters: Option<HashMap<String, String>>,
}

impl SerDeInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][SerDeInfo::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [serialization_library][SerDeInfo::serialization_library].
    pub fn set_serialization_library<T: Into<String>>(mut self, v: T) -> Self {
        self.serialization_library = Some(v.into());
        self
    }

    /// Replaces the contents of [parameters][SerDeInfo::parameters].
    pub fn set_parameters<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [parameters][SerDeInfo::parameters], failing on a duplicate key.
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

    /// Resets [parameters][SerDeInfo::parameters] to unset.
    pub fn clear_parameters(mut self) -> Self {
        self.parameters = None;
        self
    }
}

/// Specifies the sort order of a sorted column.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Order {
    /// The name of the column.
    pub column: Option<String>,

    /// Indicates that the column is sorted in ascending order (`== 1`), or
    /// in descending order (`== 0`).
    pub sort_order: Option<i32>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [column][Order::column].
    pub fn set_column<T: Into<String>>(mut self, v: T) -> Self {
        self.column = Some(v.into());
        self
    }

    /// Sets the value of [sort_order][Order::sort_order].
    pub fn set_sort_order<T: Into<i32>>(mut self, v: T) -> Self {
        self.sort_order = Some(v.into());
        self
    }
}

/// Specifies skewed values in a table. Skewed values are those that occur
/// with very high frequency.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct SkewedInfo {
    /// A list of names of columns that contain skewed values.
    pub skewed_column_names: Option<Vec<String>>,

    /// A list of values that appear so frequently as to be considered
    /// skewed.
    pub skewed_column_values: Option<Vec<String>>,

    /// A mapping of skewed values to the columns that contain them.
    pub skewed_column_value_location_maps: Option<HashMap<String, String>>,
}

impl SkewedInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [skewed_column_names][SkewedInfo::skewed_column_names].
    pub fn set_skewed_column_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.skewed_column_names = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [skewed_column_names][SkewedInfo::skewed_column_names], creating the list if unset.
    pub fn add_skewed_column_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.skewed_column_names
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [skewed_column_values][SkewedInfo::skewed_column_values].
    pub fn set_skewed_column_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.skewed_column_values = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [skewed_column_values][SkewedInfo::skewed_column_values], creating the list if unset.
    pub fn add_skewed_column_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.skewed_column_values
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [skewed_column_value_location_maps][SkewedInfo::skewed_column_value_location_maps].
    pub fn set_skewed_column_value_location_maps<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.skewed_column_value_location_maps =
            Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [skewed_column_value_location_maps][SkewedInfo::skewed_column_value_location_maps], failing on a duplicate key.
    pub fn add_skewed_column_value_location_maps_entry<K, V>(
        mut self,
        key: K,
        value: V,
    ) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self
            .skewed_column_value_location_maps
            .get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "SkewedColumnValueLocationMaps",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [skewed_column_value_location_maps][SkewedInfo::skewed_column_value_location_maps] to unset.
    pub fn clear_skewed_column_value_location_maps(mut self) -> Self {
        self.skewed_column_value_location_maps = None;
        self
    }
}

/// Describes the physical storage of table data.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StorageDescriptor {
    /// A list of the `Columns` in the table.
    pub columns: Option<Vec<Column>>,

    /// The physical location of the table. By default, this takes the form
    /// of the warehouse location, followed by the database location in the
    /// warehouse, followed by the table name.
    pub location: Option<String>,

    /// The input format: `SequenceFileInputFormat` (binary), or
    /// `TextInputFormat`, or a custom format.
    pub input_format: Option<String>,

    /// The output format: `SequenceFileOutputFormat` (binary), or
    /// `IgnoreKeyTextOutputFormat`, or a custom format.
    pub output_format: Option<String>,

    /// `true` if the data in the table is compressed.
    pub compressed: Option<bool>,

    /// Must be specified if the table contains any dimension columns.
    pub number_of_buckets: Option<i32>,

    /// The serialization/deserialization (SerDe) information.
    pub serde_info: Option<SerDeInfo>,

    /// A list of reducer grouping columns, clustering columns, and
    /// bucketing columns in the table.
    pub bucket_columns: Option<Vec<String>>,

    /// A list specifying the sort order of each bucket in the table.
    pub sort_columns: Option<Vec<Order>>,

    /// The user-supplied properties in key-value form.
    pub parameters: Option<HashMap<String, String>>,

    /// The information about values that appear frequently in a column
    /// (skewed values).
    pub skewed_info: Option<SkewedInfo>,

    /// `true` if the table data is stored in subdirectories.
    pub stored_as_sub_directories: Option<bool>,
}

impl StorageDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [columns][StorageDescriptor::columns].
    pub fn set_columns<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Column>,
    {
        self.columns = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [columns][StorageDescriptor::columns], creating the list if unset.
    pub fn add_columns<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Column>,
    {
        self.columns
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [location][StorageDescriptor::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets the value of [input_format][StorageDescriptor::input_format].
    pub fn set_input_format<T: Into<String>>(mut self, v: T) -> Self {
        self.input_format = Some(v.into());
        self
    }

    /// Sets the value of [output_format][StorageDescriptor::output_format].
    pub fn set_output_format<T: Into<String>>(mut self, v: T) -> Self {
        self.output_format = Some(v.into());
        self
    }

    /// Sets the value of [compressed][StorageDescriptor::compressed].
    pub fn set_compressed<T: Into<bool>>(mut self, v: T) -> Self {
        self.compressed = Some(v.into());
        self
    }

    /// Sets the value of [number_of_buckets][StorageDescriptor::number_of_buckets].
    pub fn set_number_of_buckets<T: Into<i32>>(mut self, v: T) -> Self {
        self.number_of_buckets = Some(v.into());
        self
    }

    /// Sets the value of [serde_info][StorageDescriptor::serde_info].
    pub fn set_serde_info<T: Into<SerDeInfo>>(mut self, v: T) -> Self {
        self.serde_info = Some(v.into());
        self
    }

    /// Replaces the contents of [bucket_columns][StorageDescriptor::bucket_columns].
    pub fn set_bucket_columns<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.bucket_columns = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [bucket_columns][StorageDescriptor::bucket_columns], creating the list if unset.
    pub fn add_bucket_columns<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.bucket_columns
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [sort_columns][StorageDescriptor::sort_columns].
    pub fn set_sort_columns<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Order>,
    {
        self.sort_columns = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [sort_columns][StorageDescriptor::sort_columns], creating the list if unset.
    pub fn add_sort_columns<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Order>,
    {
        self.sort_columns
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [parameters][StorageDescriptor::parameters].
    pub fn set_parameters<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [parameters][StorageDescriptor::parameters], failing on a duplicate key.
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

    /// Resets [parameters][StorageDescriptor::parameters] to unset.
    pub fn clear_parameters(mut self) -> Self {
        self.parameters = None;
        self
    }

    /// Sets the value of [skewed_info][StorageDescriptor::skewed_info].
    pub fn set_skewed_info<T: Into<SkewedInfo>>(mut self, v: T) -> Self {
        self.skewed_info = Some(v.into());
        self
    }

    /// Sets the value of [stored_as_sub_directories][StorageDescriptor::stored_as_sub_directories].
    pub fn set_stored_as_sub_directories<T: Into<bool>>(mut self, v: T) -> Self {
        self.stored_as_sub_directories = Some(v.into());
        self
    }
}

/// Represents a collection of related data organized in columns and rows.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Table {
    /// The table name. For Hive compatibility, this must be entirely
    /// lowercase.
    pub name: Option<String>,

    /// The name of the database where the table metadata resides. For Hive
    /// compatibility, this must be all lowercase.
    pub database_name: Option<String>,

    /// A description of the table.
    pub description: Option<String>,

    /// The owner of the table.
    pub owner: Option<String>,

    /// The time when the table definition was created in the Data Catalog.
    pub create_time: Option<wkt::Timestamp>,

    /// The last time that the table was updated.
    pub update_time: Option<wkt::Timestamp>,

    /// The last time that the table was accessed. This is usually taken
    /// from HDFS, and might not be reliable.
    pub last_access_time: Option<wkt::Timestamp>,

    /// The last time that column statistics were computed for this table.
    pub last_analyzed_time: Option<wkt::Timestamp>,

    /// The retention time for this table.
    pub retention: Option<i32>,

    /// A storage descriptor containing information about the physical
    /// storage of this table.
    pub storage_descriptor: Option<StorageDescriptor>,

    /// A list of columns by which the table is partitioned. Only primitive
    /// types are supported as partition keys.
    pub partition_keys: Option<Vec<Column>>,

    /// If the table is a view, the original text of the view; otherwise
    /// `None`.
    pub view_original_text: Option<String>,

    /// If the table is a view, the expanded text of the view; otherwise
    /// `None`.
    pub view_expanded_text: Option<String>,

    /// The type of this table (`EXTERNAL_TABLE`, `VIRTUAL_VIEW`, etc.).
    pub table_type: Option<String>,

    /// These key-value pairs define properties associated with the table.
    pub parameters: Option<HashMap<String, String>>,

    /// The person or entity who created the table.
    pub created_by: Option<String>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Table::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [database_name][Table::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [description][Table::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [owner][Table::owner].
    pub fn set_owner<T: Into<String>>(mut self, v: T) -> Self {
        self.owner = Some(v.into());
        self
    }

    /// Sets the value of [create_time][Table::create_time].
    pub fn set_create_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [update_time][Table::update_time].
    pub fn set_update_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets the value of [last_access_time][Table::last_access_time].
    pub fn set_last_access_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_access_time = Some(v.into());
        self
    }

    /// Sets the value of [last_analyzed_time][Table::last_analyzed_time].
    pub fn set_last_analyzed_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_analyzed_time = Some(v.into());
        self
    }

    /// Sets the value of [retention][Table::retention].
    pub fn set_retention<T: Into<i32>>(mut self, v: T) -> Self {
        self.retention = Some(v.into());
        self
    }

    /// Sets the value of [storage_descriptor][Table::storage_descriptor].
    pub fn set_storage_descriptor<T: Into<StorageDescriptor>>(mut self, v: T) -> Self {
        self.storage_descriptor = Some(v.into());
        self
    }

    /// Replaces the contents of [partition_keys][Table::partition_keys].
    pub fn set_partition_keys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Column>,
    {
        self.partition_keys = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [partition_keys][Table::partition_keys], creating the list if unset.
    pub fn add_partition_keys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Column>,
    {
        self.partition_keys
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [view_original_text][Table::view_original_text].
    pub fn set_view_original_text<T: Into<String>>(mut self, v: T) -> Self {
        self.view_original_text = Some(v.into());
        self
    }

    /// Sets the value of [view_expanded_text][Table::view_expanded_text].
    pub fn set_view_expanded_text<T: Into<String>>(mut self, v: T) -> Self {
        self.view_expanded_text = Some(v.into());
        self
    }

    /// Sets the value of [table_type][Table::table_type].
    pub fn set_table_type<T: Into<String>>(mut self, v: T) -> Self {
        self.table_type = Some(v.into());
        self
    }

    /// Replaces the contents of [parameters][Table::parameters].
    pub fn set_parameters<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [parameters][Table::parameters], failing on a duplicate key.
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

    /// Resets [parameters][Table::parameters] to unset.
    pub fn clear_parameters(mut self) -> Self {
        self.parameters = None;
        self
    }

    /// Sets the value of [created_by][Table::created_by].
    pub fn set_created_by<T: Into<String>>(mut self, v: T) -> Self {
        self.created_by = Some(v.into());
        self
    }
}

/// A structure used to define a table to create or update.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TableInput {
    /// The table name. For Hive compatibility, this is folded to lowercase
    /// when it is stored.
    pub name: Option<String>,

    /// A description of the table.
    pub description: Option<String>,

    /// The table owner.
    pub owner: Option<String>,

    /// The last time that the table was accessed.
    pub last_access_time: Option<wkt::Timestamp>,

    /// The last time that column statistics were computed for this table.
    pub last_analyzed_time: Option<wkt::Timestamp>,

    /// The retention time for this table.
    pub retention: Option<i32>,

    /// A storage descriptor containing information about the physical
    /// storage of this table.
    pub storage_descriptor: Option<StorageDescriptor>,

    /// A list of columns by which the table is partitioned.
    pub partition_keys: Option<Vec<Column>>,

    /// If the table is a view, the original text of the view; otherwise
    /// `None`.
    pub view_original_text: Option<String>,

    /// If the table is a view, the expanded text of the view; otherwise
    /// `None`.
    pub view_expanded_text: Option<String>,

    /// The type of this table (`EXTERNAL_TABLE`, `VIRTUAL_VIEW`, etc.).
    pub table_type: Option<String>,

    /// These key-value pairs define properties associated with the table.
    pub parameters: Option<HashMap<String, String>>,
}

impl TableInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][TableInput::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][TableInput::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [owner][TableInput::owner].
    pub fn set_owner<T: Into<String>>(mut self, v: T) -> Self {
        self.owner = Some(v.into());
        self
    }

    /// Sets the value of [last_access_time][TableInput::last_access_time].
    pub fn set_last_access_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_access_time = Some(v.into());
        self
    }

    /// Sets the value of [last_analyzed_time][TableInput::last_analyzed_time].
    pub fn set_last_analyzed_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_analyzed_time = Some(v.into());
        self
    }

    /// Sets the value of [retention][TableInput::retention].
    pub fn set_retention<T: Into<i32>>(mut self, v: T) -> Self {
        self.retention = Some(v.into());
        self
    }

    /// Sets the value of [storage_descriptor][TableInput::storage_descriptor].
    pub fn set_storage_descriptor<T: Into<StorageDescriptor>>(mut self, v: T) -> Self {
        self.storage_descriptor = Some(v.into());
        self
    }

    /// Replaces the contents of [partition_keys][TableInput::partition_keys].
    pub fn set_partition_keys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Column>,
    {
        self.partition_keys = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [partition_keys][TableInput::partition_keys], creating the list if unset.
    pub fn add_partition_keys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Column>,
    {
        self.partition_keys
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [view_original_text][TableInput::view_original_text].
    pub fn set_view_original_text<T: Into<String>>(mut self, v: T) -> Self {
        self.view_original_text = Some(v.into());
        self
    }

    /// Sets the value of [view_expanded_text][TableInput::view_expanded_text].
    pub fn set_view_expanded_text<T: Into<String>>(mut self, v: T) -> Self {
        self.view_expanded_text = Some(v.into());
        self
    }

    /// Sets the value of [table_type][TableInput::table_type].
    pub fn set_table_type<T: Into<String>>(mut self, v: T) -> Self {
        self.table_type = Some(v.into());
        self
    }

    /// Replaces the contents of [parameters][TableInput::parameters].
    pub fn set_parameters<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [parameters][TableInput::parameters], failing on a duplicate key.
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

    /// Resets [parameters][TableInput::parameters] to unset.
    pub fn clear_parameters(mut self) -> Self {
        self.parameters = None;
        self
    }
}

/// Specifies a version of a table.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TableVersion {
    /// The table in question.
    pub table: Option<Table>,

    /// The ID value that identifies this table version. A `VersionId` is a
    /// string representation of an integer. Each version is incremented by
    /// 1.
    pub version_id: Option<String>,
}

impl TableVersion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [table][TableVersion::table].
    pub fn set_table<T: Into<Table>>(mut self, v: T) -> Self {
        self.table = Some(v.into());
        self
    }

    /// Sets the value of [version_id][TableVersion::version_id].
    pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
        self.version_id = Some(v.into());
        self
    }
}

/// An error record for table operations.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TableError {
    /// The name of the table. For Hive compatibility, this must be entirely
    /// lowercase.
    pub table_name: Option<String>,

    /// The details about the error.
    pub error_detail: Option<ErrorDetail>,
}

impl TableError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [table_name][TableError::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets the value of [error_detail][TableError::error_detail].
    pub fn set_error_detail<T: Into<ErrorDetail>>(mut self, v: T) -> Self {
        self.error_detail = Some(v.into());
        self
    }
}

/// An error record for table-version operations.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TableVersionError {
    /// The name of the table in question.
    pub table_name: Option<String>,

    /// The ID value of the version in question. A `VersionId` is a string
    /// representation of an integer.
    pub version_id: Option<String>,

    /// The details about the error.
    pub error_detail: Option<ErrorDetail>,
}

impl TableVersionError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [table_name][TableVersionError::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets the value of [version_id][TableVersionError::version_id].
    pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
        self.version_id = Some(v.into());
        self
    }

    /// Sets the value of [error_detail][TableVersionError::error_detail].
    pub fn set_error_detail<T: Into<ErrorDetail>>(mut self, v: T) -> Self {
        self.error_detail = Some(v.into());
        self
    }
}

/// Request message for `CreateTable`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateTableRequest {
    /// The ID of the Data Catalog in which to create the `Table`.
    pub catalog_id: Option<String>,

    /// The catalog database in which to create the new table. For Hive
    /// compatibility, this name is entirely lowercase.
    pub database_name: Option<String>,

    /// The `TableInput` object that defines the metadata table to create in
    /// the catalog.
    pub table_input: Option<TableInput>,
}

impl CreateTableRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][CreateTableRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][CreateTableRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_input][CreateTableRequest::table_input].
    pub fn set_table_input<T: Into<TableInput>>(mut self, v: T) -> Self {
        self.table_input = Some(v.into());
        self
    }
}

/// Response message for `CreateTable`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateTableResult {}

impl CreateTableResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `GetTable`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetTableRequest {
    /// The ID of the Data Catalog where the table resides.
    pub catalog_id: Option<String>,

    /// The name of the database in the catalog in which the table resides.
    pub database_name: Option<String>,

    /// The name of the table for which to retrieve the definition.
    pub name: Option<String>,
}

impl GetTableRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][GetTableRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][GetTableRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [name][GetTableRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Response message for `GetTable`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetTableResult {
    /// The `Table` object that defines the specified table.
    pub table: Option<Table>,
}

impl GetTableResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [table][GetTableResult::table].
    pub fn set_table<T: Into<Table>>(mut self, v: T) -> Self {
        self.table = Some(v.into());
        self
    }
}

/// Request message for `GetTables`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetTablesRequest {
    /// The ID of the Data Catalog where the tables reside.
    pub catalog_id: Option<String>,

    /// The database in the catalog whose tables to list.
    pub database_name: Option<String>,

    /// A regular expression pattern. If present, only those tables whose
    /// names match the pattern are returned.
    pub expression: Option<String>,

    /// A continuation token, included if this is a continuation call.
    pub next_token: Option<String>,

    /// The maximum number of tables to return in a single response.
    ///
    /// Constraints: 1-1000.
    pub max_results: Option<i32>,
}

impl GetTablesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][GetTablesRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][GetTablesRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [expression][GetTablesRequest::expression].
    pub fn set_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.expression = Some(v.into());
        self
    }

    /// Sets the value of [next_token][GetTablesRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [max_results][GetTablesRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }
}

/// Response message for `GetTables`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetTablesResult {
    /// A list of the requested `Table` objects.
    pub table_list: Option<Vec<Table>>,

    /// A continuation token, present if the current list segment is not the
    /// last.
    pub next_token: Option<String>,
}

impl GetTablesResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [table_list][GetTablesResult::table_list].
    pub fn set_table_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Table>,
    {
        self.table_list = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [table_list][GetTablesResult::table_list], creating the list if unset.
    pub fn add_table_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Table>,
    {
        self.table_list
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][GetTablesResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Request message for `UpdateTable`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateTableRequest {
    /// The ID of the Data Catalog where the table resides.
    pub catalog_id: Option<String>,

    /// The name of the catalog database in which the table resides.
    pub database_name: Option<String>,

    /// An updated `TableInput` object to define the metadata table in the
    /// catalog.
    pub table_input: Option<TableInput>,

    /// By default, `UpdateTable` always creates an archived version of the
    /// table before updating it. If `skip_archive` is set to true, however,
    /// it does not create the archived version.
    pub skip_archive: Option<bool>,
}

impl UpdateTableRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][UpdateTableRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][UpdateTableRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_input][UpdateTableRequest::table_input].
    pub fn set_table_input<T: Into<TableInput>>(mut self, v: T) -> Self {
        self.table_input = Some(v.into());
        self
    }

    /// Sets the value of [skip_archive][UpdateTableRequest::skip_archive].
    pub fn set_skip_archive<T: Into<bool>>(mut self, v: T) -> Self {
        self.skip_archive = Some(v.into());
        self
    }
}

/// Response message for `UpdateTable`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateTableResult {}

impl UpdateTableResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `DeleteTable`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteTableRequest {
    /// The ID of the Data Catalog where the table resides.
    pub catalog_id: Option<String>,

    /// The name of the catalog database in which the table resides.
    pub database_name: Option<String>,

    /// The name of the table to be deleted. For Hive compatibility, this
    /// name is entirely lowercase.
    pub name: Option<String>,
}

impl DeleteTableRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][DeleteTableRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][DeleteTableRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [name][DeleteTableRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Response message for `DeleteTable`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteTableResult {}

impl DeleteTableResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `BatchDeleteTable`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchDeleteTableRequest {
    /// The ID of the Data Catalog where the table resides.
    pub catalog_id: Option<String>,

    /// The name of the catalog database in which the tables to delete
    /// reside.
    pub database_name: Option<String>,

    /// A list of the table names to delete.
    ///
    /// Constraints: at most 100 entries.
    pub tables_to_delete: Option<Vec<String>>,
}

impl BatchDeleteTableRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][BatchDeleteTableRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][BatchDeleteTableRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Replaces the contents of [tables_to_delete][BatchDeleteTableRequest::tables_to_delete].
    pub fn set_tables_to_delete<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.tables_to_delete = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [tables_to_delete][BatchDeleteTableRequest::tables_to_delete], creating the list if unset.
    pub fn add_tables_to_delete<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.tables_to_delete
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `BatchDeleteTable`.
///
/// Per-table failures are reported inline in [errors]
/// [BatchDeleteTableResult::errors] rather than failing the whole request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchDeleteTableResult {
    /// A list of errors encountered in attempting to delete the specified
    /// tables.
    pub errors: Option<Vec<TableError>>,
}

impl BatchDeleteTableResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [errors][BatchDeleteTableResult::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TableError>,
    {
        self.errors = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [errors][BatchDeleteTableResult::errors], creating the list if unset.
    pub fn add_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TableError>,
    {
        self.errors
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Request message for `GetTableVersion`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetTableVersionRequest {
    /// The ID of the Data Catalog where the tables reside.
    pub catalog_id: Option<String>,

    /// The database in the catalog in which the table resides.
    pub database_name: Option<String>,

    /// The name of the table. For Hive compatibility, this name is entirely
    /// lowercase.
    pub table_name: Option<String>,

    /// The ID value of the table version to be retrieved. A `VersionId` is
    /// a string representation of an integer. Each version is incremented
    /// by 1.
    pub version_id: Option<String>,
}

impl GetTableVersionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][GetTableVersionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][GetTableVersionRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][GetTableVersionRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets the value of [version_id][GetTableVersionRequest::version_id].
    pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
        self.version_id = Some(v.into());
        self
    }
}

/// Response message for `GetTableVersion`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetTableVersionResult {
    /// The requested table version.
    pub table_version: Option<TableVersion>,
}

impl GetTableVersionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [table_version][GetTableVersionResult::table_version].
    pub fn set_table_version<T: Into<TableVersion>>(mut self, v: T) -> Self {
        self.table_version = Some(v.into());
        self
    }
}

/// Request message for `GetTableVersions`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetTableVersionsRequest {
    /// The ID of the Data Catalog where the tables reside.
    pub catalog_id: Option<String>,

    /// The database in the catalog in which the table resides.
    pub database_name: Option<String>,

    /// The name of the table. For Hive compatibility, this name is entirely
    /// lowercase.
    pub table_name: Option<String>,

    /// A continuation token, if this is not the first call.
    pub next_token: Option<String>,

    /// The maximum number of table versions to return in one response.
    pub max_results: Option<i32>,
}

impl GetTableVersionsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][GetTableVersionsRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][GetTableVersionsRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][GetTableVersionsRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets the value of [next_token][GetTableVersionsRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [max_results][GetTableVersionsRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }
}

/// Response message for `GetTableVersions`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetTableVersionsResult {
    /// A list of strings identifying available versions of the specified
    /// table.
    pub table_versions: Option<Vec<TableVersion>>,

    /// A continuation token, if the list of available versions does not
    /// include the last one.
    pub next_token: Option<String>,
}

impl GetTableVersionsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [table_versions][GetTableVersionsResult::table_versions].
    pub fn set_table_versions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TableVersion>,
    {
        self.table_versions = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [table_versions][GetTableVersionsResult::table_versions], creating the list if unset.
    pub fn add_table_versions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TableVersion>,
    {
        self.table_versions
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][GetTableVersionsResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Request message for `DeleteTableVersion`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteTableVersionRequest {
    /// The ID of the Data Catalog where the tables reside.
    pub catalog_id: Option<String>,

    /// The database in the catalog in which the table resides.
    pub database_name: Option<String>,

    /// The name of the table. For Hive compatibility, this name is entirely
    /// lowercase.
    pub table_name: Option<String>,

    /// The ID of the table version to be deleted. A `VersionId` is a string
    /// representation of an integer.
    pub version_id: Option<String>,
}

impl DeleteTableVersionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][DeleteTableVersionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][DeleteTableVersionRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][DeleteTableVersionRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets the value of [version_id][DeleteTableVersionRequest::version_id].
    pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
        self.version_id = Some(v.into());
        self
    }
}

/// Response message for `DeleteTableVersion`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteTableVersionResult {}

impl DeleteTableVersionResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `BatchDeleteTableVersion`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchDeleteTableVersionRequest {
    /// The ID of the Data Catalog where the tables reside.
    pub catalog_id: Option<String>,

    /// The database in the catalog in which the table resides.
    pub database_name: Option<String>,

    /// The name of the table. For Hive compatibility, this name is entirely
    /// lowercase.
    pub table_name: Option<String>,

    /// A list of the IDs of versions to be deleted. A `VersionId` is a
    /// string representation of an integer. Each version is incremented by
    /// 1.
    ///
    /// Constraints: at most 100 entries.
    pub version_ids: Option<Vec<String>>,
}

impl BatchDeleteTableVersionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][BatchDeleteTableVersionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][BatchDeleteTableVersionRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][BatchDeleteTableVersionRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Replaces the contents of [version_ids][BatchDeleteTableVersionRequest::version_ids].
    pub fn set_version_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.version_ids = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [version_ids][BatchDeleteTableVersionRequest::version_ids], creating the list if unset.
    pub fn add_version_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.version_ids
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `BatchDeleteTableVersion`.
///
/// Per-version failures are reported inline in [errors]
/// [BatchDeleteTableVersionResult::errors] rather than failing the whole
/// request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchDeleteTableVersionResult {
    /// A list of errors encountered while trying to delete the specified
    /// table versions.
    pub errors: Option<Vec<TableVersionError>>,
}

impl BatchDeleteTableVersionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [errors][BatchDeleteTableVersionResult::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TableVersionError>,
    {
        self.errors = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [errors][BatchDeleteTableVersionResult::errors], creating the list if unset.
    pub fn add_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TableVersionError>,
    {
        self.errors
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}
