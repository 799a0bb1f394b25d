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

use super::ErrorDetail;

/// The type of a column statistics payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ColumnStatisticsType {
    Boolean,
    Date,
    Decimal,
    Double,
    Long,
    String,
    Binary,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using
    /// [ColumnStatisticsType::as_str].
    UnknownValue(std::string::String),
}

impl ColumnStatisticsType {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Boolean => "BOOLEAN",
            Self::Date => "DATE",
            Self::Decimal => "DECIMAL",
            Self::Double => "DOUBLE",
            Self::Long => "LONG",
            Self::String => "STRING",
            Self::Binary => "BINARY",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for ColumnStatisticsType {
    fn from(value: &str) -> Self {
        match value {
            "BOOLEAN" => Self::Boolean,
            "DATE" => Self::Date,
            "DECIMAL" => Self::Decimal,
            "DOUBLE" => Self::Double,
            "LONG" => Self::Long,
            "STRING" => Self::String,
            "BINARY" => Self::Binary,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for ColumnStatisticsType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for ColumnStatisticsType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for ColumnStatisticsType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// Contains a numeric value in decimal format.
///
/// The value is the unscaled mantissa bytes interpreted as a big-endian
/// two's complement integer, divided by ten to the power of the scale.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DecimalNumber {
    /// The unscaled numeric value.
    pub unscaled_value: Option<wkt::Blob>,

    /// The scale that determines where the decimal point falls in the
    /// unscaled value.
    pub scale: Option<i32>,
}

impl DecimalNumber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [unscaled_value][DecimalNumber::unscaled_value].
    pub fn set_unscaled_value<T: Into<wkt::Blob>>(mut self, v: T) -> Self {
        self.unscaled_value = Some(v.into());
        self
    }

    /// Sets the value of [scale][DecimalNumber::scale].
    pub fn set_scale<T: Into<i32>>(mut self, v: T) -> Self {
        self.scale = Some(v.into());
        self
    }
}

/// Defines column statistics supported for Boolean data columns.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BooleanColumnStatisticsData {
    /// The number of true values in the column.
    pub number_of_trues: Option<i64>,

    /// The number of false values in the column.
    pub number_of_falses: Option<i64>,

    /// The number of null values in the column.
    pub number_of_nulls: Option<i64>,
}

impl BooleanColumnStatisticsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [number_of_trues][BooleanColumnStatisticsData::number_of_trues].
    pub fn set_number_of_trues<T: Into<i64>>(mut self, v: T) -> Self {
        self.number_of_trues = Some(v.into());
        self
    }

    /// Sets the value of [number_of_falses][BooleanColumnStatisticsData::number_of_falses].
    pub fn set_number_of_falses<T: Into<i64>>(mut self, v: T) -> Self {
        self.number_of_falses = Some(v.into());
        self
    }

    /// Sets the value of [number_of_nulls][BooleanColumnStatisticsData::number_of_nulls].
    pub fn set_number_of_nulls<T: Into<i64>>(mut self, v: T) -> Self {
        self.number_of_nulls = Some(v.into());
        self
    }
}

/// Defines column statistics supported for timestamp data columns.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DateColumnStatisticsData {
    /// The lowest value in the column.
    pub minimum_value: Option<wkt::Timestamp>,

    /// The highest value in the column.
    pub maximum_value: Option<wkt::Timestamp>,

    /// The number of null values in the column.
    pub number_of_nulls: Option<i64>,

    /// The number of distinct values in the column.
    pub number_of_distinct_values: Option<i64>,
}

impl DateColumnStatisticsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [minimum_value][DateColumnStatisticsData::minimum_value].
    pub fn set_minimum_value<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.minimum_value = Some(v.into());
        self
    }

    /// Sets the value of [maximum_value][DateColumnStatisticsData::maximum_value].
    pub fn set_maximum_value<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.maximum_value = Some(v.into());
        self
    }

    /// Sets the value of [number_of_nulls][DateColumnStatisticsData::number_of_nulls].
    pub fn set_number_of_nulls<T: Into<i64>>(mut self, v: T) -> Self {
        self.number_of_nulls = Some(v.into());
        self
    }

    /// Sets the value of [number_of_distinct_values][DateColumnStatisticsData::number_of_distinct_values].
    pub fn set_number_of_distinct_values<T: Into<i64>>(mut self, v: T) -> Self {
        self.number_of_distinct_values = Some(v.into());
        self
    }
}

/// Defines column statistics supported for fixed-point number data columns.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DecimalColumnStatisticsData {
    /// The lowest value in the column.
    pub minimum_value: Option<DecimalNumber>,

    /// The highest value in the column.
    pub maximum_value: Option<DecimalNumber>,

    /// The number of null values in the column.
    pub number_of_nulls: Option<i64>,

    /// The number of distinct values in the column.
    pub number_of_distinct_values: Option<i64>,
}

impl DecimalColumnStatisticsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [minimum_value][DecimalColumnStatisticsData::minimum_value].
    pub fn set_minimum_value<T: Into<DecimalNumber>>(mut self, v: T) -> Self {
        self.minimum_value = Some(v.into());
        self
    }

    /// Sets the value of [maximum_value][DecimalColumnStatisticsData::maximum_value].
    pub fn set_maximum_value<T: Into<DecimalNumber>>(mut self, v: T) -> Self {
        self.maximum_value = Some(v.into());
        self
    }

    /// Sets the value of [number_of_nulls][DecimalColumnStatisticsData::number_of_nulls].
    pub fn set_number_of_nulls<T: Into<i64>>(mut self, v: T) -> Self {
        self.number_of_nulls = Some(v.into());
        self
    }

    /// Sets the value of [number_of_distinct_values][DecimalColumnStatisticsData::number_of_distinct_values].
    pub fn set_number_of_distinct_values<T: Into<i64>>(mut self, v: T) -> Self {
        self.number_of_distinct_values = Some(v.into());
        self
    }
}

/// Defines column statistics supported for floating-point number data
/// columns.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DoubleColumnStatisticsData {
    /// The lowest value in the column.
    pub minimum_value: Option<f64>,

    /// The highest value in the column.
    pub maximum_value: Option<f64>,

    /// The number of null values in the column.
    pub number_of_nulls: Option<i64>,

    /// The number of distinct values in the column.
    pub number_of_distinct_values: Option<i64>,
}

impl DoubleColumnStatisticsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [minimum_value][DoubleColumnStatisticsData::minimum_value].
    pub fn set_minimum_value<T: Into<f64>>(mut self, v: T) -> Self {
        self.minimum_value = Some(v.into());
        self
    }

    /// Sets the value of [maximum_value][DoubleColumnStatisticsData::maximum_value].
    pub fn set_maximum_value<T: Into<f64>>(mut self, v: T) -> Self {
        self.maximum_value = Some(v.into());
        self
    }

    /// Sets the value of [number_of_nulls][DoubleColumnStatisticsData::number_of_nulls].
    pub fn set_number_of_nulls<T: Into<i64>>(mut self, v: T) -> Self {
        self.number_of_nulls = Some(v.into());
        self
    }

    /// Sets the value of [number_of_distinct_values][DoubleColumnStatisticsData::number_of_distinct_values].
    pub fn set_number_of_distinct_values<T: Into<i64>>(mut self, v: T) -> Self {
        self.number_of_distinct_values = Some(v.into());
        self
    }
}

/// Defines column statistics supported for integer data columns.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct LongColumnStatisticsData {
    /// The lowest value in the column.
    pub minimum_value: Option<i64>,

    /// The highest value in the column.
    pub maximum_value: Option<i64>,

    /// The number of null values in the column.
    pub number_of_nulls: Option<i64>,

    /// The number of distinct values in the column.
    pub number_of_distinct_values: Option<i64>,
}

impl LongColumnStatisticsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [minimum_value][LongColumnStatisticsData::minimum_value].
    pub fn set_minimum_value<T: Into<i64>>(mut self, v: T) -> Self {
        self.minimum_value = Some(v.into());
        self
    }

    /// Sets the value of [maximum_value][LongColumnStatisticsData::maximum_value].
    pub fn set_maximum_value<T: Into<i64>>(mut self, v: T) -> Self {
        self.maximum_value = Some(v.into());
        self
    }

    /// Sets the value of [number_of_nulls][LongColumnStatisticsData::number_of_nulls].
    pub fn set_number_of_nulls<T: Into<i64>>(mut self, v: T) -> Self {
        self.number_of_nulls = Some(v.into());
        self
    }

    /// Sets the value of [number_of_distinct_values][LongColumnStatisticsData::number_of_distinct_values].
    pub fn set_number_of_distinct_values<T: Into<i64>>(mut self, v: T) -> Self {
        self.number_of_distinct_values = Some(v.into());
        self
    }
}

/// Defines column statistics supported for character sequence data values.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StringColumnStatisticsData {
    /// The size of the longest string in the column.
    pub maximum_length: Option<i64>,

    /// The average string length in the column.
    pub average_length: Option<f64>,

    /// The number of null values in the column.
    pub number_of_nulls: Option<i64>,

    /// The number of distinct values in the column.
    pub number_of_distinct_values: Option<i64>,
}

impl StringColumnStatisticsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [maximum_length][StringColumnStatisticsData::maximum_length].
    pub fn set_maximum_length<T: Into<i64>>(mut self, v: T) -> Self {
        self.maximum_length = Some(v.into());
        self
    }

    /// Sets the value of [average_length][StringColumnStatisticsData::average_length].
    pub fn set_average_length<T: Into<f64>>(mut self, v: T) -> Self {
        self.average_length = Some(v.into());
        self
    }

    /// Sets the value of [number_of_nulls][StringColumnStatisticsData::number_of_nulls].
    pub fn set_number_of_nulls<T: Into<i64>>(mut self, v: T) -> Self {
        self.number_of_nulls = Some(v.into());
        self
    }

    /// Sets the value of [number_of_distinct_values][StringColumnStatisticsData::number_of_distinct_values].
    pub fn set_number_of_distinct_values<T: Into<i64>>(mut self, v: T) -> Self {
        self.number_of_distinct_values = Some(v.into());
        self
    }
}

/// Defines column statistics supported for bit sequence data values.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BinaryColumnStatisticsData {
    /// The size of the longest bit sequence in the column.
    pub maximum_length: Option<i64>,

    /// The average bit sequence length in the column.
    pub average_length: Option<f64>,

    /// The number of null values in the column.
    pub number_of_nulls: Option<i64>,
}

impl BinaryColumnStatisticsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [maximum_length][BinaryColumnStatisticsData::maximum_length].
    pub fn set_maximum_length<T: Into<i64>>(mut self, v: T) -> Self {
        self.maximum_length = Some(v.into());
        self
    }

    /// Sets the value of [average_length][BinaryColumnStatisticsData::average_length].
    pub fn set_average_length<T: Into<f64>>(mut self, v: T) -> Self {
        self.average_length = Some(v.into());
        self
    }

    /// Sets the value of [number_of_nulls][BinaryColumnStatisticsData::number_of_nulls].
    pub fn set_number_of_nulls<T: Into<i64>>(mut self, v: T) -> Self {
        self.number_of_nulls = Some(v.into());
        self
    }
}

/// Contains the individual types of column statistics data. Only one data
/// object should be set, matching [statistics_type]
/// [ColumnStatisticsData::statistics_type].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ColumnStatisticsData {
    /// The type of column statistics data.
    #[serde(rename = "Type")]
    pub statistics_type: Option<ColumnStatisticsType>,

    /// Boolean column statistics data.
    pub boolean_column_statistics_data: Option<BooleanColumnStatisticsData>,

    /// Date column statistics data.
    pub date_column_statistics_data: Option<DateColumnStatisticsData>,

    /// Decimal column statistics data.
    pub decimal_column_statistics_data: Option<DecimalColumnStatisticsData>,

    /// Double column statistics data.
    pub double_column_statistics_data: Option<DoubleColumnStatisticsData>,

    /// Long column statistics data.
    pub long_column_statistics_data: Option<LongColumnStatisticsData>,

    /// String column statistics data.
    pub string_column_statistics_data: Option<StringColumnStatisticsData>,

    /// Binary column statistics data.
    pub binary_column_statistics_data: Option<BinaryColumnStatisticsData>,
}

impl ColumnStatisticsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [statistics_type][ColumnStatisticsData::statistics_type].
    pub fn set_statistics_type<T: Into<ColumnStatisticsType>>(mut self, v: T) -> Self {
        self.statistics_type = Some(v.into());
        self
    }

    /// Sets the value of [boolean_column_statistics_data][ColumnStatisticsData::boolean_column_statistics_data].
    pub fn set_boolean_column_statistics_data<T: Into<BooleanColumnStatisticsData>>(
        mut self,
        v: T,
    ) -> Self {
        self.boolean_column_statistics_data = Some(v.into());
        self
    }

    /// Sets the value of [date_column_statistics_data][ColumnStatisticsData::date_column_statistics_data].
    pub fn set_date_column_statistics_data<T: Into<DateColumnStatisticsData>>(
        mut self,
        v: T,
    ) -> Self {
        self.date_column_statistics_data = Some(v.into());
        self
    }

    /// Sets the value of [decimal_column_statistics_data][ColumnStatisticsData::decimal_column_statistics_data].
    pub fn set_decimal_column_statistics_data<T: Into<DecimalColumnStatisticsData>>(
        mut self,
        v: T,
    ) -> Self {
        self.decimal_column_statistics_data = Some(v.into());
        self
    }

    /// Sets the value of [double_column_statistics_data][ColumnStatisticsData::double_column_statistics_data].
    pub fn set_double_column_statistics_data<T: Into<DoubleColumnStatisticsData>>(
        mut self,
        v: T,
    ) -> Self {
        self.double_column_statistics_data = Some(v.into());
        self
    }

    /// Sets the value of [long_column_statistics_data][ColumnStatisticsData::long_column_statistics_data].
    pub fn set_long_column_statistics_data<T: Into<LongColumnStatisticsData>>(
        mut self,
        v: T,
    ) -> Self {
        self.long_column_statistics_data = Some(v.into());
        self
    }

    /// Sets the value of [string_column_statistics_data][ColumnStatisticsData::string_column_statistics_data].
    pub fn set_string_column_statistics_data<T: Into<StringColumnStatisticsData>>(
        mut self,
        v: T,
    ) -> Self {
        self.string_column_statistics_data = Some(v.into());
        self
    }

    /// Sets the value of [binary_column_statistics_data][ColumnStatisticsData::binary_column_statistics_data].
    pub fn set_binary_column_statistics_data<T: Into<BinaryColumnStatisticsData>>(
        mut self,
        v: T,
    ) -> Self {
        self.binary_column_statistics_data = Some(v.into());
        self
    }
}

/// Represents the generated column-level statistics for a table or
/// partition.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ColumnStatistics {
    /// The name of the column that the statistics belong to.
    pub column_name: Option<String>,

    /// The data type of the column.
    pub column_type: Option<String>,

    /// The timestamp of when column statistics were generated.
    pub analyzed_time: Option<wkt::Timestamp>,

    /// The statistics of the column.
    pub statistics_data: Option<ColumnStatisticsData>,
}

impl ColumnStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [column_name][ColumnStatistics::column_name].
    pub fn set_column_name<T: Into<String>>(mut self, v: T) -> Self {
        self.column_name = Some(v.into());
        self
    }

    /// Sets the value of [column_type][ColumnStatistics::column_type].
    pub fn set_column_type<T: Into<String>>(mut self, v: T) -> Self {
        self.column_type = Some(v.into());
        self
    }

    /// Sets the value of [analyzed_time][ColumnStatistics::analyzed_time].
    pub fn set_analyzed_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.analyzed_time = Some(v.into());
        self
    }

    /// Sets the value of [statistics_data][ColumnStatistics::statistics_data].
    pub fn set_statistics_data<T: Into<ColumnStatisticsData>>(mut self, v: T) -> Self {
        self.statistics_data = Some(v.into());
        self
    }
}

/// Encapsulates a column name that failed and the reason for failure.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ColumnError {
    /// The name of the column that failed.
    pub column_name: Option<String>,

    /// The error message occurred during operation.
    pub error: Option<ErrorDetail>,
}

impl ColumnError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [column_name][ColumnError::column_name].
    pub fn set_column_name<T: Into<String>>(mut self, v: T) -> Self {
        self.column_name = Some(v.into());
        self
    }

    /// Sets the value of [error][ColumnError::error].
    pub fn set_error<T: Into<ErrorDetail>>(mut self, v: T) -> Self {
        self.error = Some(v.into());
        self
    }
}

/// Encapsulates a `ColumnStatistics` object that failed and the reason for
/// failure.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ColumnStatisticsError {
    /// The `ColumnStatistics` of the column.
    pub column_statistics: Option<ColumnStatistics>,

    /// The error message occurred during operation.
    pub error: Option<ErrorDetail>,
}

impl ColumnStatisticsError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [column_statistics][ColumnStatisticsError::column_statistics].
    pub fn set_column_statistics<T: Into<ColumnStatistics>>(mut self, v: T) -> Self {
        self.column_statistics = Some(v.into());
        self
    }

    /// Sets the value of [error][ColumnStatisticsError::error].
    pub fn set_error<T: Into<ErrorDetail>>(mut self, v: T) -> Self {
        self.error = Some(v.into());
        self
    }
}

/// Request message for `GetColumnStatisticsForPartition`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetColumnStatisticsForPartitionRequest {
    /// The ID of the Data Catalog where the partitions in question reside.
    pub catalog_id: Option<String>,

    /// The name of the catalog database where the partitions reside.
    pub database_name: Option<String>,

    /// The name of the partitions' table.
    pub table_name: Option<String>,

    /// A list of partition values identifying the partition.
    pub partition_values: Option<Vec<String>>,

    /// A list of the column names.
    ///
    /// Constraints: at most 100 entries.
    pub column_names: Option<Vec<String>>,
}

impl GetColumnStatisticsForPartitionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][GetColumnStatisticsForPartitionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][GetColumnStatisticsForPartitionRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][GetColumnStatisticsForPartitionRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Replaces the contents of [partition_values][GetColumnStatisticsForPartitionRequest::partition_values].
    pub fn set_partition_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.partition_values = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [partition_values][GetColumnStatisticsForPartitionRequest::partition_values], creating the list if unset.
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

    /// Replaces the contents of [column_names][GetColumnStatisticsForPartitionRequest::column_names].
    pub fn set_column_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.column_names = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [column_names][GetColumnStatisticsForPartitionRequest::column_names], creating the list if unset.
    pub fn add_column_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.column_names
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `GetColumnStatisticsForPartition`.
///
/// Columns that could not be retrieved are reported inline in [errors]
/// [GetColumnStatisticsForPartitionResult::errors].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetColumnStatisticsForPartitionResult {
    /// List of `ColumnStatistics` that failed to be retrieved.
    pub column_statistics_list: Option<Vec<ColumnStatistics>>,

    /// Error occurred during retrieving column statistics data.
    pub errors: Option<Vec<ColumnError>>,
}

impl GetColumnStatisticsForPartitionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [column_statistics_list][GetColumnStatisticsForPartitionResult::column_statistics_list].
    pub fn set_column_statistics_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnStatistics>,
    {
        self.column_statistics_list = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [column_statistics_list][GetColumnStatisticsForPartitionResult::column_statistics_list], creating the list if unset.
    pub fn add_column_statistics_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnStatistics>,
    {
        self.column_statistics_list
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [errors][GetColumnStatisticsForPartitionResult::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnError>,
    {
        self.errors = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [errors][GetColumnStatisticsForPartitionResult::errors], creating the list if unset.
    pub fn add_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnError>,
    {
        self.errors
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Request message for `GetColumnStatisticsForTable`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetColumnStatisticsForTableRequest {
    /// The ID of the Data Catalog where the partitions in question reside.
    pub catalog_id: Option<String>,

    /// The name of the catalog database where the partitions reside.
    pub database_name: Option<String>,

    /// The name of the partitions' table.
    pub table_name: Option<String>,

    /// A list of the column names.
    ///
    /// Constraints: at most 100 entries.
    pub column_names: Option<Vec<String>>,
}

impl GetColumnStatisticsForTableRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][GetColumnStatisticsForTableRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][GetColumnStatisticsForTableRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][GetColumnStatisticsForTableRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Replaces the contents of [column_names][GetColumnStatisticsForTableRequest::column_names].
    pub fn set_column_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.column_names = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [column_names][GetColumnStatisticsForTableRequest::column_names], creating the list if unset.
    pub fn add_column_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.column_names
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `GetColumnStatisticsForTable`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetColumnStatisticsForTableResult {
    /// List of `ColumnStatistics` that failed to be retrieved.
    pub column_statistics_list: Option<Vec<ColumnStatistics>>,

    /// List of `ColumnStatistics` that failed to be retrieved.
    pub errors: Option<Vec<ColumnError>>,
}

impl GetColumnStatisticsForTableResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [column_statistics_list][GetColumnStatisticsForTableResult::column_statistics_list].
    pub fn set_column_statistics_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnStatistics>,
    {
        self.column_statistics_list = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [column_statistics_list][GetColumnStatisticsForTableResult::column_statistics_list], creating the list if unset.
    pub fn add_column_statistics_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnStatistics>,
    {
        self.column_statistics_list
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [errors][GetColumnStatisticsForTableResult::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnError>,
    {
        self.errors = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [errors][GetColumnStatisticsForTableResult::errors], creating the list if unset.
    pub fn add_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnError>,
    {
        self.errors
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Request message for `UpdateColumnStatisticsForPartition`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateColumnStatisticsForPartitionRequest {
    /// The ID of the Data Catalog where the partitions in question reside.
    pub catalog_id: Option<String>,

    /// The name of the catalog database where the partitions reside.
    pub database_name: Option<String>,

    /// The name of the partitions' table.
    pub table_name: Option<String>,

    /// A list of partition values identifying the partition.
    pub partition_values: Option<Vec<String>>,

    /// A list of the column statistics.
    ///
    /// Constraints: at most 25 entries.
    pub column_statistics_list: Option<Vec<ColumnStatistics>>,
}

impl UpdateColumnStatisticsForPartitionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][UpdateColumnStatisticsForPartitionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][UpdateColumnStatisticsForPartitionRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][UpdateColumnStatisticsForPartitionRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Replaces the contents of [partition_values][UpdateColumnStatisticsForPartitionRequest::partition_values].
    pub fn set_partition_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.partition_values = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [partition_values][UpdateColumnStatisticsForPartitionRequest::partition_values], creating the list if unset.
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

    /// Replaces the contents of [column_statistics_list][UpdateColumnStatisticsForPartitionRequest::column_statistics_list].
    pub fn set_column_statistics_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnStatistics>,
    {
        self.column_statistics_list = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [column_statistics_list][UpdateColumnStatisticsForPartitionRequest::column_statistics_list], creating the list if unset.
    pub fn add_column_statistics_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnStatistics>,
    {
        self.column_statistics_list
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `UpdateColumnStatisticsForPartition`.
///
/// Column statistics that could not be updated are reported inline in
/// [errors][UpdateColumnStatisticsForPartitionResult::errors].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateColumnStatisticsForPartitionResult {
    /// Error occurred during updating column statistics data.
    pub errors: Option<Vec<ColumnStatisticsError>>,
}

impl UpdateColumnStatisticsForPartitionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [errors][UpdateColumnStatisticsForPartitionResult::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnStatisticsError>,
    {
        self.errors = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [errors][UpdateColumnStatisticsForPartitionResult::errors], creating the list if unset.
    pub fn add_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnStatisticsError>,
    {
        self.errors
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Request message for `UpdateColumnStatisticsForTable`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateColumnStatisticsForTableRequest {
    /// The ID of the Data Catalog where the partitions in question reside.
    pub catalog_id: Option<String>,

    /// The name of the catalog database where the partitions reside.
    pub database_name: Option<String>,

    /// The name of the partitions' table.
    pub table_name: Option<String>,

    /// A list of the column statistics.
    ///
    /// Constraints: at most 25 entries.
    pub column_statistics_list: Option<Vec<ColumnStatistics>>,
}

impl UpdateColumnStatisticsForTableRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][UpdateColumnStatisticsForTableRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][UpdateColumnStatisticsForTableRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][UpdateColumnStatisticsForTableRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Replaces the contents of [column_statistics_list][UpdateColumnStatisticsForTableRequest::column_statistics_list].
    pub fn set_column_statistics_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnStatistics>,
    {
        self.column_statistics_list = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [column_statistics_list][UpdateColumnStatisticsForTableRequest::column_statistics_list], creating the list if unset.
    pub fn add_column_statistics_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnStatistics>,
    {
        self.column_statistics_list
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `UpdateColumnStatisticsForTable`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateColumnStatisticsForTableResult {
    /// List of `ColumnStatisticsErrors`.
    pub errors: Option<Vec<ColumnStatisticsError>>,
}

impl UpdateColumnStatisticsForTableResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [errors][UpdateColumnStatisticsForTableResult::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnStatisticsError>,
    {
        self.errors = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [errors][UpdateColumnStatisticsForTableResult::errors], creating the list if unset.
    pub fn add_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnStatisticsError>,
    {
        self.errors
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Request message for `DeleteColumnStatisticsForPartition`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteColumnStatisticsForPartitionRequest {
    /// The ID of the Data Catalog where the partitions in question reside.
    pub catalog_id: Option<String>,

    /// The name of the catalog database where the partitions reside.
    pub database_name: Option<String>,

    /// The name of the partitions' table.
    pub table_name: Option<String>,

    /// A list of partition values identifying the partition.
    pub partition_values: Option<Vec<String>>,

    /// Name of the column.
    pub column_name: Option<String>,
}

impl DeleteColumnStatisticsForPartitionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][DeleteColumnStatisticsForPartitionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][DeleteColumnStatisticsForPartitionRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][DeleteColumnStatisticsForPartitionRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Replaces the contents of [partition_values][DeleteColumnStatisticsForPartitionRequest::partition_values].
    pub fn set_partition_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.partition_values = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [partition_values][DeleteColumnStatisticsForPartitionRequest::partition_values], creating the list if unset.
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

    /// Sets the value of [column_name][DeleteColumnStatisticsForPartitionRequest::column_name].
    pub fn set_column_name<T: Into<String>>(mut self, v: T) -> Self {
        self.column_name = Some(v.into());
        self
    }
}

/// Response message for `DeleteColumnStatisticsForPartition`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteColumnStatisticsForPartitionResult {}

impl DeleteColumnStatisticsForPartitionResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `DeleteColumnStatisticsForTable`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteColumnStatisticsForTableRequest {
    /// The ID of the Data Catalog where the partitions in question reside.
    pub catalog_id: Option<String>,

    /// The name of the catalog database where the partitions reside.
    pub database_name: Option<String>,

    /// The name of the partitions' table.
    pub table_name: Option<String>,

    /// The name of the column.
    pub column_name: Option<String>,
}

impl DeleteColumnStatisticsForTableRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][DeleteColumnStatisticsForTableRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][DeleteColumnStatisticsForTableRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][DeleteColumnStatisticsForTableRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets the value of [column_name][DeleteColumnStatisticsForTableRequest::column_name].
    pub fn set_column_name<T: Into<String>>(mut self, v: T) -> Self {
        self.column_name = Some(v.into());
        self
    }
}

/// Response message for `DeleteColumnStatisticsForTable`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteColumnStatisticsForTableResult {}

impl DeleteColumnStatisticsForTableResult {
    pub fn new() -> Self {
        Self::default()
    }
}
