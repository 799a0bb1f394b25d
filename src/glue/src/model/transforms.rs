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

use super::jobs::WorkerType;

/// The type of machine learning transform.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TransformType {
    FindMatches,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [TransformType::as_str].
    UnknownValue(String),
}

impl TransformType {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::FindMatches => "FIND_MATCHES",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for TransformType {
    fn from(value: &str) -> Self {
        match value {
            "FIND_MATCHES" => Self::FindMatches,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for TransformType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for TransformType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for TransformType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The last known status of a machine learning transform.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TransformStatusType {
    NotReady,
    Ready,
    Deleting,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [TransformStatusType::as_str].
    UnknownValue(String),
}

impl TransformStatusType {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotReady => "NOT_READY",
            Self::Ready => "READY",
            Self::Deleting => "DELETING",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for TransformStatusType {
    fn from(value: &str) -> Self {
        match value {
            "NOT_READY" => Self::NotReady,
            "READY" => Self::Ready,
            "DELETING" => Self::Deleting,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for TransformStatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for TransformStatusType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for TransformStatusType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The column to be used to sort a list of machine learning transforms.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TransformSortColumnType {
    Name,
    TransformType,
    Status,
    Created,
    LastModified,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [TransformSortColumnType::as_str].
    UnknownValue(String),
}

impl TransformSortColumnType {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Name => "NAME",
            Self::TransformType => "TRANSFORM_TYPE",
            Self::Status => "STATUS",
            Self::Created => "CREATED",
            Self::LastModified => "LAST_MODIFIED",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for TransformSortColumnType {
    fn from(value: &str) -> Self {
        match value {
            "NAME" => Self::Name,
            "TRANSFORM_TYPE" => Self::TransformType,
            "STATUS" => Self::Status,
            "CREATED" => Self::Created,
            "LAST_MODIFIED" => Self::LastModified,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for TransformSortColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for TransformSortColumnType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for TransformSortColumnType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The direction in which sorted results are returned.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SortDirectionType {
    Descending,
    Ascending,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [SortDirectionType::as_str].
    UnknownValue(String),
}

impl SortDirectionType {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Descending => "DESCENDING",
            Self::Ascending => "ASCENDING",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for SortDirectionType {
    fn from(value: &str) -> Self {
        match value {
            "DESCENDING" => Self::Descending,
            "ASCENDING" => Self::Ascending,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for SortDirectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for SortDirectionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for SortDirectionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The type of task run.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TaskType {
    Evaluation,
    LabelingSetGeneration,
    ImportLabels,
    ExportLabels,
    FindMatches,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [TaskType::as_str].
    UnknownValue(String),
}

impl TaskType {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Evaluation => "EVALUATION",
            Self::LabelingSetGeneration => "LABELING_SET_GENERATION",
            Self::ImportLabels => "IMPORT_LABELS",
            Self::ExportLabels => "EXPORT_LABELS",
            Self::FindMatches => "FIND_MATCHES",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for TaskType {
    fn from(value: &str) -> Self {
        match value {
            "EVALUATION" => Self::Evaluation,
            "LABELING_SET_GENERATION" => Self::LabelingSetGeneration,
            "IMPORT_LABELS" => Self::ImportLabels,
            "EXPORT_LABELS" => Self::ExportLabels,
            "FIND_MATCHES" => Self::FindMatches,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for TaskType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for TaskType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The current status of a task run.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TaskStatusType {
    Starting,
    Running,
    Stopping,
    Stopped,
    Succeeded,
    Failed,
    Timeout,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [TaskStatusType::as_str].
    UnknownValue(String),
}

impl TaskStatusType {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Starting => "STARTING",
            Self::Running => "RUNNING",
            Self::Stopping => "STOPPING",
            Self::Stopped => "STOPPED",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::Timeout => "TIMEOUT",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for TaskStatusType {
    fn from(value: &str) -> Self {
        match value {
            "STARTING" => Self::Starting,
            "RUNNING" => Self::Running,
            "STOPPING" => Self::Stopping,
            "STOPPED" => Self::Stopped,
            "SUCCEEDED" => Self::Succeeded,
            "FAILED" => Self::Failed,
            "TIMEOUT" => Self::Timeout,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for TaskStatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for TaskStatusType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for TaskStatusType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The column to be used to sort a list of task runs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TaskRunSortColumnType {
    TaskRunType,
    Status,
    Started,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [TaskRunSortColumnType::as_str].
    UnknownValue(String),
}

impl TaskRunSortColumnType {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::TaskRunType => "TASK_RUN_TYPE",
            Self::Status => "STATUS",
            Self::Started => "STARTED",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for TaskRunSortColumnType {
    fn from(value: &str) -> Self {
        match value {
            "TASK_RUN_TYPE" => Self::TaskRunType,
            "STATUS" => Self::Status,
            "STARTED" => Self::Started,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for TaskRunSortColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for TaskRunSortColumnType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for TaskRunSortColumnType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The database and table in the Glue Data Catalog that is used for input
/// or output data.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GlueTable {
    /// A database name in the Glue Data Catalog.
    pub database_name: Option<String>,

    /// A table name in the Glue Data Catalog.
    pub table_name: Option<String>,

    /// A unique identifier for the Glue Data Catalog.
    pub catalog_id: Option<String>,

    /// The name of the connection to the Glue Data Catalog.
    pub connection_name: Option<String>,
}

impl GlueTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [database_name][GlueTable::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [table_name][GlueTable::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets the value of [catalog_id][GlueTable::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [connection_name][GlueTable::connection_name].
    pub fn set_connection_name<T: Into<String>>(mut self, v: T) -> Self {
        self.connection_name = Some(v.into());
        self
    }
}

/// A key-value pair representing a column and data type that this
/// transform can run against.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct SchemaColumn {
    /// The name of the column.
    pub name: Option<String>,

    /// The type of data in the column.
    pub data_type: Option<String>,
}

impl SchemaColumn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][SchemaColumn::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [data_type][SchemaColumn::data_type].
    pub fn set_data_type<T: Into<String>>(mut self, v: T) -> Self {
        self.data_type = Some(v.into());
        self
    }
}

/// The parameters to configure the find matches transform.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct FindMatchesParameters {
    /// The name of a column that uniquely identifies rows in the source
    /// table.
    pub primary_key_column_name: Option<String>,

    /// The value selected when tuning your transform for a balance between
    /// precision and recall. A value of 0.5 means no preference, a value of
    /// 1.0 means a bias purely for precision, and a value of 0.0 means a
    /// bias for recall.
    pub precision_recall_tradeoff: Option<f64>,

    /// The value that is selected when tuning your transform for a balance
    /// between accuracy and cost.
    pub accuracy_cost_tradeoff: Option<f64>,

    /// The value to switch on or off to force the output to match the
    /// provided labels from users.
    pub enforce_provided_labels: Option<bool>,
}

impl FindMatchesParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [primary_key_column_name][FindMatchesParameters::primary_key_column_name].
    pub fn set_primary_key_column_name<T: Into<String>>(mut self, v: T) -> Self {
        self.primary_key_column_name = Some(v.into());
        self
    }

    /// Sets the value of [precision_recall_tradeoff][FindMatchesParameters::precision_recall_tradeoff].
    pub fn set_precision_recall_tradeoff<T: Into<f64>>(mut self, v: T) -> Self {
        self.precision_recall_tradeoff = Some(v.into());
        self
    }

    /// Sets the value of [accuracy_cost_tradeoff][FindMatchesParameters::accuracy_cost_tradeoff].
    pub fn set_accuracy_cost_tradeoff<T: Into<f64>>(mut self, v: T) -> Self {
        self.accuracy_cost_tradeoff = Some(v.into());
        self
    }

    /// Sets the value of [enforce_provided_labels][FindMatchesParameters::enforce_provided_labels].
    pub fn set_enforce_provided_labels<T: Into<bool>>(mut self, v: T) -> Self {
        self.enforce_provided_labels = Some(v.into());
        self
    }
}

/// The algorithm-specific parameters that are associated with the machine
/// learning transform.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TransformParameters {
    /// The type of machine learning transform.
    pub transform_type: Option<TransformType>,

    /// The parameters for the find matches algorithm.
    pub find_matches_parameters: Option<FindMatchesParameters>,
}

impl TransformParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_type][TransformParameters::transform_type].
    pub fn set_transform_type<T: Into<TransformType>>(mut self, v: T) -> Self {
        self.transform_type = Some(v.into());
        self
    }

    /// Sets the value of [find_matches_parameters][TransformParameters::find_matches_parameters].
    pub fn set_find_matches_parameters<T: Into<FindMatchesParameters>>(mut self, v: T) -> Self {
        self.find_matches_parameters = Some(v.into());
        self
    }
}

/// The confusion matrix shows you what your transform is predicting
/// accurately and what types of errors it is making.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ConfusionMatrix {
    /// The number of matches in the data that the transform correctly
    /// found, in the confusion matrix for your transform.
    pub num_true_positives: Option<i64>,

    /// The number of nonmatches in the data that the transform incorrectly
    /// classified as a match, in the confusion matrix for your transform.
    pub num_false_positives: Option<i64>,

    /// The number of nonmatches in the data that the transform correctly
    /// rejected, in the confusion matrix for your transform.
    pub num_true_negatives: Option<i64>,

    /// The number of matches in the data that the transform didn't find, in
    /// the confusion matrix for your transform.
    pub num_false_negatives: Option<i64>,
}

impl ConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [num_true_positives][ConfusionMatrix::num_true_positives].
    pub fn set_num_true_positives<T: Into<i64>>(mut self, v: T) -> Self {
        self.num_true_positives = Some(v.into());
        self
    }

    /// Sets the value of [num_false_positives][ConfusionMatrix::num_false_positives].
    pub fn set_num_false_positives<T: Into<i64>>(mut self, v: T) -> Self {
        self.num_false_positives = Some(v.into());
        self
    }

    /// Sets the value of [num_true_negatives][ConfusionMatrix::num_true_negatives].
    pub fn set_num_true_negatives<T: Into<i64>>(mut self, v: T) -> Self {
        self.num_true_negatives = Some(v.into());
        self
    }

    /// Sets the value of [num_false_negatives][ConfusionMatrix::num_false_negatives].
    pub fn set_num_false_negatives<T: Into<i64>>(mut self, v: T) -> Self {
        self.num_false_negatives = Some(v.into());
        self
    }
}

/// The evaluation metrics for the find matches algorithm. The quality of
/// your machine learning transform is measured by getting your transform
/// to predict some matches and comparing the results to known matches from
/// the same dataset.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct FindMatchesMetrics {
    /// The area under the precision/recall curve (AUPRC) is a single number
    /// measuring the overall quality of the transform, that is independent
    /// of the choice made for precision vs. recall.
    #[serde(rename = "AreaUnderPRCurve")]
    pub area_under_pr_curve: Option<f64>,

    /// The precision metric indicates when often your transform is correct
    /// when it predicts a match.
    pub precision: Option<f64>,

    /// The recall metric indicates that for an actual match, how often your
    /// transform predicts the match.
    pub recall: Option<f64>,

    /// The maximum F1 metric indicates the transform's accuracy between 0
    /// and 1, where 1 is the best accuracy.
    pub f1: Option<f64>,

    /// The confusion matrix shows you what your transform is predicting
    /// accurately and what types of errors it is making.
    pub confusion_matrix: Option<ConfusionMatrix>,
}

impl FindMatchesMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [area_under_pr_curve][FindMatchesMetrics::area_under_pr_curve].
    pub fn set_area_under_pr_curve<T: Into<f64>>(mut self, v: T) -> Self {
        self.area_under_pr_curve = Some(v.into());
        self
    }

    /// Sets the value of [precision][FindMatchesMetrics::precision].
    pub fn set_precision<T: Into<f64>>(mut self, v: T) -> Self {
        self.precision = Some(v.into());
        self
    }

    /// Sets the value of [recall][FindMatchesMetrics::recall].
    pub fn set_recall<T: Into<f64>>(mut self, v: T) -> Self {
        self.recall = Some(v.into());
        self
    }

    /// Sets the value of [f1][FindMatchesMetrics::f1].
    pub fn set_f1<T: Into<f64>>(mut self, v: T) -> Self {
        self.f1 = Some(v.into());
        self
    }

    /// Sets the value of [confusion_matrix][FindMatchesMetrics::confusion_matrix].
    pub fn set_confusion_matrix<T: Into<ConfusionMatrix>>(mut self, v: T) -> Self {
        self.confusion_matrix = Some(v.into());
        self
    }
}

/// Evaluation metrics provide an estimate of the quality of your machine
/// learning transform.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct EvaluationMetrics {
    /// The type of machine learning transform.
    pub transform_type: Option<TransformType>,

    /// The evaluation metrics for the find matches algorithm.
    pub find_matches_metrics: Option<FindMatchesMetrics>,
}

impl EvaluationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_type][EvaluationMetrics::transform_type].
    pub fn set_transform_type<T: Into<TransformType>>(mut self, v: T) -> Self {
        self.transform_type = Some(v.into());
        self
    }

    /// Sets the value of [find_matches_metrics][EvaluationMetrics::find_matches_metrics].
    pub fn set_find_matches_metrics<T: Into<FindMatchesMetrics>>(mut self, v: T) -> Self {
        self.find_matches_metrics = Some(v.into());
        self
    }
}

/// A structure for a machine learning transform.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct MLTransform {
    /// The unique transform ID that is generated for the machine learning
    /// transform. The ID is guaranteed to be unique and does not change.
    pub transform_id: Option<String>,

    /// A user-defined name for the machine learning transform.
    pub name: Option<String>,

    /// A user-defined, long-form description text for the machine learning
    /// transform.
    pub description: Option<String>,

    /// The current status of the machine learning transform.
    pub status: Option<TransformStatusType>,

    /// A timestamp. The time and date that this machine learning transform
    /// was created.
    pub created_on: Option<wkt::Timestamp>,

    /// A timestamp. The last point in time when this machine learning
    /// transform was modified.
    pub last_modified_on: Option<wkt::Timestamp>,

    /// A list of Glue table definitions used by the transform.
    pub input_record_tables: Option<Vec<GlueTable>>,

    /// A `TransformParameters` object. You can use parameters to tune
    /// (customize) the behavior of the machine learning transform.
    pub parameters: Option<TransformParameters>,

    /// An `EvaluationMetrics` object. Evaluation metrics provide an
    /// estimate of the quality of your machine learning transform.
    pub evaluation_metrics: Option<EvaluationMetrics>,

    /// A count identifier for the labeling files generated by Glue for
    /// this transform.
    pub label_count: Option<i32>,

    /// A map of key-value pairs representing the columns and data types
    /// that this transform can run against.
    pub schema: Option<Vec<SchemaColumn>>,

    /// The name or Amazon Resource Name (ARN) of the IAM role with the
    /// required permissions.
    pub role: Option<String>,

    /// This value determines which version of Glue this machine learning
    /// transform is compatible with.
    pub glue_version: Option<String>,

    /// The number of Glue data processing units (DPUs) that are allocated
    /// to task runs for this transform.
    pub max_capacity: Option<f64>,

    /// The type of predefined worker that is allocated when a task of this
    /// transform runs.
    pub worker_type: Option<WorkerType>,

    /// The number of workers of a defined `workerType` that are allocated
    /// when a task of the transform runs.
    pub number_of_workers: Option<i32>,

    /// The timeout in minutes of the machine learning transform.
    pub timeout: Option<i32>,

    /// The maximum number of times to retry after an `MLTaskRun` of the
    /// machine learning transform fails.
    pub max_retries: Option<i32>,
}

impl MLTransform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][MLTransform::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }

    /// Sets the value of [name][MLTransform::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][MLTransform::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [status][MLTransform::status].
    pub fn set_status<T: Into<TransformStatusType>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [created_on][MLTransform::created_on].
    pub fn set_created_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.created_on = Some(v.into());
        self
    }

    /// Sets the value of [last_modified_on][MLTransform::last_modified_on].
    pub fn set_last_modified_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_modified_on = Some(v.into());
        self
    }

    /// Replaces the contents of [input_record_tables][MLTransform::input_record_tables].
    pub fn set_input_record_tables<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<GlueTable>,
    {
        self.input_record_tables = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [input_record_tables][MLTransform::input_record_tables], creating the list if unset.
    pub fn add_input_record_tables<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<GlueTable>,
    {
        self.input_record_tables
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [parameters][MLTransform::parameters].
    pub fn set_parameters<T: Into<TransformParameters>>(mut self, v: T) -> Self {
        self.parameters = Some(v.into());
        self
    }

    /// Sets the value of [evaluation_metrics][MLTransform::evaluation_metrics].
    pub fn set_evaluation_metrics<T: Into<EvaluationMetrics>>(mut self, v: T) -> Self {
        self.evaluation_metrics = Some(v.into());
        self
    }

    /// Sets the value of [label_count][MLTransform::label_count].
    pub fn set_label_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.label_count = Some(v.into());
        self
    }

    /// Replaces the contents of [schema][MLTransform::schema].
    pub fn set_schema<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SchemaColumn>,
    {
        self.schema = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [schema][MLTransform::schema], creating the list if unset.
    pub fn add_schema<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SchemaColumn>,
    {
        self.schema
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [role][MLTransform::role].
    pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
        self.role = Some(v.into());
        self
    }

    /// Sets the value of [glue_version][MLTransform::glue_version].
    pub fn set_glue_version<T: Into<String>>(mut self, v: T) -> Self {
        self.glue_version = Some(v.into());
        self
    }

    /// Sets the value of [max_capacity][MLTransform::max_capacity].
    pub fn set_max_capacity<T: Into<f64>>(mut self, v: T) -> Self {
        self.max_capacity = Some(v.into());
        self
    }

    /// Sets the value of [worker_type][MLTransform::worker_type].
    pub fn set_worker_type<T: Into<WorkerType>>(mut self, v: T) -> Self {
        self.worker_type = Some(v.into());
        self
    }

    /// Sets the value of [number_of_workers][MLTransform::number_of_workers].
    pub fn set_number_of_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.number_of_workers = Some(v.into());
        self
    }

    /// Sets the value of [timeout][MLTransform::timeout].
    pub fn set_timeout<T: Into<i32>>(mut self, v: T) -> Self {
        self.timeout = Some(v.into());
        self
    }

    /// Sets the value of [max_retries][MLTransform::max_retries].
    pub fn set_max_retries<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_retries = Some(v.into());
        self
    }
}

/// Specifies configuration properties for an importing labels task run.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ImportLabelsTaskRunProperties {
    /// The Amazon Simple Storage Service (Amazon S3) path from where you
    /// will import the labels.
    pub input_s3_path: Option<String>,

    /// Indicates whether to overwrite your existing labels.
    pub replace: Option<bool>,
}

impl ImportLabelsTaskRunProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [input_s3_path][ImportLabelsTaskRunProperties::input_s3_path].
    pub fn set_input_s3_path<T: Into<String>>(mut self, v: T) -> Self {
        self.input_s3_path = Some(v.into());
        self
    }

    /// Sets the value of [replace][ImportLabelsTaskRunProperties::replace].
    pub fn set_replace<T: Into<bool>>(mut self, v: T) -> Self {
        self.replace = Some(v.into());
        self
    }
}

/// Specifies configuration properties for an exporting labels task run.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ExportLabelsTaskRunProperties {
    /// The Amazon Simple Storage Service (Amazon S3) path where you will
    /// export the labels.
    pub output_s3_path: Option<String>,
}

impl ExportLabelsTaskRunProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [output_s3_path][ExportLabelsTaskRunProperties::output_s3_path].
    pub fn set_output_s3_path<T: Into<String>>(mut self, v: T) -> Self {
        self.output_s3_path = Some(v.into());
        self
    }
}

/// Specifies configuration properties for a labeling set generation task
/// run.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct LabelingSetGenerationTaskRunProperties {
    /// The Amazon Simple Storage Service (Amazon S3) path where you will
    /// generate the labeling set.
    pub output_s3_path: Option<String>,
}

impl LabelingSetGenerationTaskRunProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [output_s3_path][LabelingSetGenerationTaskRunProperties::output_s3_path].
    pub fn set_output_s3_path<T: Into<String>>(mut self, v: T) -> Self {
        self.output_s3_path = Some(v.into());
        self
    }
}

/// Specifies configuration properties for a Find Matches task run.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct FindMatchesTaskRunProperties {
    /// The job ID for the Find Matches task run.
    pub job_id: Option<String>,

    /// The name assigned to the job of the Find Matches task run.
    pub job_name: Option<String>,

    /// The job run ID for the Find Matches task run.
    pub job_run_id: Option<String>,
}

impl FindMatchesTaskRunProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_id][FindMatchesTaskRunProperties::job_id].
    pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
        self.job_id = Some(v.into());
        self
    }

    /// Sets the value of [job_name][FindMatchesTaskRunProperties::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Sets the value of [job_run_id][FindMatchesTaskRunProperties::job_run_id].
    pub fn set_job_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.job_run_id = Some(v.into());
        self
    }
}

/// The configuration properties for the task run.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TaskRunProperties {
    /// The type of task run.
    pub task_type: Option<TaskType>,

    /// The configuration properties for an importing labels task run.
    pub import_labels_task_run_properties: Option<ImportLabelsTaskRunProperties>,

    /// The configuration properties for an exporting labels task run.
    pub export_labels_task_run_properties: Option<ExportLabelsTaskRunProperties>,

    /// The configuration properties for a labeling set generation task run.
    pub labeling_set_generation_task_run_properties:
        Option<LabelingSetGenerationTaskRunProperties>,

    /// The configuration properties for a find matches task run.
    pub find_matches_task_run_properties: Option<FindMatchesTaskRunProperties>,
}

impl TaskRunProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [task_type][TaskRunProperties::task_type].
    pub fn set_task_type<T: Into<TaskType>>(mut self, v: T) -> Self {
        self.task_type = Some(v.into());
        self
    }

    /// Sets the value of [import_labels_task_run_properties][TaskRunProperties::import_labels_task_run_properties].
    pub fn set_import_labels_task_run_properties<T: Into<ImportLabelsTaskRunProperties>>(
        mut self,
        v: T,
    ) -> Self {
        self.import_labels_task_run_properties = Some(v.into());
        self
    }

    /// Sets the value of [export_labels_task_run_properties][TaskRunProperties::export_labels_task_run_properties].
    pub fn set_export_labels_task_run_properties<T: Into<ExportLabelsTaskRunProperties>>(
        mut self,
        v: T,
    ) -> Self {
        self.export_labels_task_run_properties = Some(v.into());
        self
    }

    /// Sets the value of [labeling_set_generation_task_run_properties][TaskRunProperties::labeling_set_generation_task_run_properties].
    pub fn set_labeling_set_generation_task_run_properties<
        T: Into<LabelingSetGenerationTaskRunProperties>,
    >(
        mut self,
        v: T,
    ) -> Self {
        self.labeling_set_generation_task_run_properties = Some(v.into());
        self
    }

    /// Sets the value of [find_matches_task_run_properties][TaskRunProperties::find_matches_task_run_properties].
    pub fn set_find_matches_task_run_properties<T: Into<FindMatchesTaskRunProperties>>(
        mut self,
        v: T,
    ) -> Self {
        self.find_matches_task_run_properties = Some(v.into());
        self
    }
}

/// The sampling parameters that are associated with the machine learning
/// transform.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TaskRun {
    /// The unique identifier for the transform.
    pub transform_id: Option<String>,

    /// The unique identifier for this task run.
    pub task_run_id: Option<String>,

    /// The current status of the requested task run.
    pub status: Option<TaskStatusType>,

    /// The names of the log group for secure logging, associated with this
    /// task run.
    pub log_group_name: Option<String>,

    /// Specifies configuration properties associated with this task run.
    pub properties: Option<TaskRunProperties>,

    /// The list of error strings associated with this task run.
    pub error_string: Option<String>,

    /// The date and time that this task run started.
    pub started_on: Option<wkt::Timestamp>,

    /// The last point in time that the requested task run was updated.
    pub last_modified_on: Option<wkt::Timestamp>,

    /// The last point in time that the requested task run was completed.
    pub completed_on: Option<wkt::Timestamp>,

    /// The amount of time (in seconds) that the task run consumed
    /// resources.
    pub execution_time: Option<i32>,
}

impl TaskRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][TaskRun::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }

    /// Sets the value of [task_run_id][TaskRun::task_run_id].
    pub fn set_task_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.task_run_id = Some(v.into());
        self
    }

    /// Sets the value of [status][TaskRun::status].
    pub fn set_status<T: Into<TaskStatusType>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [log_group_name][TaskRun::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [properties][TaskRun::properties].
    pub fn set_properties<T: Into<TaskRunProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }

    /// Sets the value of [error_string][TaskRun::error_string].
    pub fn set_error_string<T: Into<String>>(mut self, v: T) -> Self {
        self.error_string = Some(v.into());
        self
    }

    /// Sets the value of [started_on][TaskRun::started_on].
    pub fn set_started_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.started_on = Some(v.into());
        self
    }

    /// Sets the value of [last_modified_on][TaskRun::last_modified_on].
    pub fn set_last_modified_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_modified_on = Some(v.into());
        self
    }

    /// Sets the value of [completed_on][TaskRun::completed_on].
    pub fn set_completed_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.completed_on = Some(v.into());
        self
    }

    /// Sets the value of [execution_time][TaskRun::execution_time].
    pub fn set_execution_time<T: Into<i32>>(mut self, v: T) -> Self {
        self.execution_time = Some(v.into());
        self
    }
}

/// The criteria that are used to filter the task runs for the machine
/// learning transform.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TaskRunFilterCriteria {
    /// The type of task run.
    pub task_run_type: Option<TaskType>,

    /// The current status of the task run.
    pub status: Option<TaskStatusType>,

    /// Filter on task runs started before this date.
    pub started_before: Option<wkt::Timestamp>,

    /// Filter on task runs started after this date.
    pub started_after: Option<wkt::Timestamp>,
}

impl TaskRunFilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [task_run_type][TaskRunFilterCriteria::task_run_type].
    pub fn set_task_run_type<T: Into<TaskType>>(mut self, v: T) -> Self {
        self.task_run_type = Some(v.into());
        self
    }

    /// Sets the value of [status][TaskRunFilterCriteria::status].
    pub fn set_status<T: Into<TaskStatusType>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [started_before][TaskRunFilterCriteria::started_before].
    pub fn set_started_before<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.started_before = Some(v.into());
        self
    }

    /// Sets the value of [started_after][TaskRunFilterCriteria::started_after].
    pub fn set_started_after<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.started_after = Some(v.into());
        self
    }
}

/// The sorting criteria that are used to sort the list of task runs for
/// the machine learning transform.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TaskRunSortCriteria {
    /// The column to be used to sort the list of task runs for the machine
    /// learning transform.
    pub column: Option<TaskRunSortColumnType>,

    /// The sort direction to be used to sort the list of task runs for the
    /// machine learning transform.
    pub sort_direction: Option<SortDirectionType>,
}

impl TaskRunSortCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [column][TaskRunSortCriteria::column].
    pub fn set_column<T: Into<TaskRunSortColumnType>>(mut self, v: T) -> Self {
        self.column = Some(v.into());
        self
    }

    /// Sets the value of [sort_direction][TaskRunSortCriteria::sort_direction].
    pub fn set_sort_direction<T: Into<SortDirectionType>>(mut self, v: T) -> Self {
        self.sort_direction = Some(v.into());
        self
    }
}

/// The criteria used to filter the machine learning transforms.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TransformFilterCriteria {
    /// A unique transform name that is used to filter the machine learning
    /// transforms.
    pub name: Option<String>,

    /// The type of machine learning transform that is used to filter the
    /// machine learning transforms.
    pub transform_type: Option<TransformType>,

    /// Filters the list of machine learning transforms by the last known
    /// status of the transforms (to indicate whether a transform can be
    /// used or not).
    pub status: Option<TransformStatusType>,

    /// This value determines which version of Glue this machine learning
    /// transform is compatible with.
    pub glue_version: Option<String>,

    /// The time and date before which the transforms were created.
    pub created_before: Option<wkt::Timestamp>,

    /// The time and date after which the transforms were created.
    pub created_after: Option<wkt::Timestamp>,

    /// Filter on transforms last modified before this date.
    pub last_modified_before: Option<wkt::Timestamp>,

    /// Filter on transforms last modified after this date.
    pub last_modified_after: Option<wkt::Timestamp>,

    /// Filters on datasets with a specific schema. The `Map<Column,
    /// Type>` object is an array of key-value pairs representing the schema
    /// this transform accepts, where `Column` is the name of a column, and
    /// `Type` is the type of the data such as an integer or string.
    pub schema: Option<Vec<SchemaColumn>>,
}

impl TransformFilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][TransformFilterCriteria::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [transform_type][TransformFilterCriteria::transform_type].
    pub fn set_transform_type<T: Into<TransformType>>(mut self, v: T) -> Self {
        self.transform_type = Some(v.into());
        self
    }

    /// Sets the value of [status][TransformFilterCriteria::status].
    pub fn set_status<T: Into<TransformStatusType>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [glue_version][TransformFilterCriteria::glue_version].
    pub fn set_glue_version<T: Into<String>>(mut self, v: T) -> Self {
        self.glue_version = Some(v.into());
        self
    }

    /// Sets the value of [created_before][TransformFilterCriteria::created_before].
    pub fn set_created_before<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.created_before = Some(v.into());
        self
    }

    /// Sets the value of [created_after][TransformFilterCriteria::created_after].
    pub fn set_created_after<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.created_after = Some(v.into());
        self
    }

    /// Sets the value of [last_modified_before][TransformFilterCriteria::last_modified_before].
    pub fn set_last_modified_before<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_modified_before = Some(v.into());
        self
    }

    /// Sets the value of [last_modified_after][TransformFilterCriteria::last_modified_after].
    pub fn set_last_modified_after<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_modified_after = Some(v.into());
        self
    }

    /// Replaces the contents of [schema][TransformFilterCriteria::schema].
    pub fn set_schema<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SchemaColumn>,
    {
        self.schema = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [schema][TransformFilterCriteria::schema], creating the list if unset.
    pub fn add_schema<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SchemaColumn>,
    {
        self.schema
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// The sorting criteria that are associated with the machine learning
/// transform.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TransformSortCriteria {
    /// The column to be used in the sorting criteria that are associated
    /// with the machine learning transform.
    pub column: Option<TransformSortColumnType>,

    /// The sort direction to be used in the sorting criteria that are
    /// associated with the machine learning transform.
    pub sort_direction: Option<SortDirectionType>,
}

impl TransformSortCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [column][TransformSortCriteria::column].
    pub fn set_column<T: Into<TransformSortColumnType>>(mut self, v: T) -> Self {
        self.column = Some(v.into());
        self
    }

    /// Sets the value of [sort_direction][TransformSortCriteria::sort_direction].
    pub fn set_sort_direction<T: Into<SortDirectionType>>(mut self, v: T) -> Self {
        self.sort_direction = Some(v.into());
        self
    }
}

/// Request message for `CreateMLTransform`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateMLTransformRequest {
    /// The unique name that you give the transform when you create it.
    pub name: Option<String>,

    /// A description of the machine learning transform that is being
    /// defined. The default is an empty string.
    pub description: Option<String>,

    /// A list of Glue table definitions used by the transform.
    pub input_record_tables: Option<Vec<GlueTable>>,

    /// The algorithmic parameters that are specific to the transform type
    /// used. Conditionally dependent on the transform type.
    pub parameters: Option<TransformParameters>,

    /// The name or Amazon Resource Name (ARN) of the IAM role with the
    /// required permissions.
    pub role: Option<String>,

    /// This value determines which version of Glue this machine learning
    /// transform is compatible with.
    pub glue_version: Option<String>,

    /// The number of Glue data processing units (DPUs) that are allocated
    /// to task runs for this transform.
    pub max_capacity: Option<f64>,

    /// The type of predefined worker that is allocated when this task runs.
    pub worker_type: Option<WorkerType>,

    /// The number of workers of a defined `workerType` that are allocated
    /// when this task runs.
    pub number_of_workers: Option<i32>,

    /// The timeout of the task run for this transform in minutes.
    pub timeout: Option<i32>,

    /// The maximum number of times to retry a task for this transform
    /// after a task run fails.
    pub max_retries: Option<i32>,

    /// The tags to use with this machine learning transform.
    pub tags: Option<HashMap<String, String>>,
}

impl CreateMLTransformRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][CreateMLTransformRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][CreateMLTransformRequest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Replaces the contents of [input_record_tables][CreateMLTransformRequest::input_record_tables].
    pub fn set_input_record_tables<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<GlueTable>,
    {
        self.input_record_tables = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [input_record_tables][CreateMLTransformRequest::input_record_tables], creating the list if unset.
    pub fn add_input_record_tables<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<GlueTable>,
    {
        self.input_record_tables
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [parameters][CreateMLTransformRequest::parameters].
    pub fn set_parameters<T: Into<TransformParameters>>(mut self, v: T) -> Self {
        self.parameters = Some(v.into());
        self
    }

    /// Sets the value of [role][CreateMLTransformRequest::role].
    pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
        self.role = Some(v.into());
        self
    }

    /// Sets the value of [glue_version][CreateMLTransformRequest::glue_version].
    pub fn set_glue_version<T: Into<String>>(mut self, v: T) -> Self {
        self.glue_version = Some(v.into());
        self
    }

    /// Sets the value of [max_capacity][CreateMLTransformRequest::max_capacity].
    pub fn set_max_capacity<T: Into<f64>>(mut self, v: T) -> Self {
        self.max_capacity = Some(v.into());
        self
    }

    /// Sets the value of [worker_type][CreateMLTransformRequest::worker_type].
    pub fn set_worker_type<T: Into<WorkerType>>(mut self, v: T) -> Self {
        self.worker_type = Some(v.into());
        self
    }

    /// Sets the value of [number_of_workers][CreateMLTransformRequest::number_of_workers].
    pub fn set_number_of_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.number_of_workers = Some(v.into());
        self
    }

    /// Sets the value of [timeout][CreateMLTransformRequest::timeout].
    pub fn set_timeout<T: Into<i32>>(mut self, v: T) -> Self {
        self.timeout = Some(v.into());
        self
    }

    /// Sets the value of [max_retries][CreateMLTransformRequest::max_retries].
    pub fn set_max_retries<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_retries = Some(v.into());
        self
    }

    /// Replaces the contents of [tags][CreateMLTransformRequest::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [tags][CreateMLTransformRequest::tags], failing on a duplicate key.
    pub fn add_tags_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.tags.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "Tags",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [tags][CreateMLTransformRequest::tags] to unset.
    pub fn clear_tags(mut self) -> Self {
        self.tags = None;
        self
    }
}

/// Response message for `CreateMLTransform`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateMLTransformResult {
    /// A unique identifier that is generated for the transform.
    pub transform_id: Option<String>,
}

impl CreateMLTransformResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][CreateMLTransformResult::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }
}

/// Request message for `GetMLTransform`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetMLTransformRequest {
    /// The unique identifier of the transform, generated at the time that
    /// the transform was created.
    pub transform_id: Option<String>,
}

impl GetMLTransformRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][GetMLTransformRequest::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }
}

/// Response message for `GetMLTransform`.
///
/// The transform attributes come back at the top level rather than nested
/// in an `MLTransform` value.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetMLTransformResult {
    /// The unique identifier of the transform, generated at the time that
    /// the transform was created.
    pub transform_id: Option<String>,

    /// The unique name given to the transform when it was created.
    pub name: Option<String>,

    /// A description of the transform.
    pub description: Option<String>,

    /// The last known status of the transform (to indicate whether it can
    /// be used or not).
    pub status: Option<TransformStatusType>,

    /// The date and time when the transform was created.
    pub created_on: Option<wkt::Timestamp>,

    /// The date and time when the transform was last modified.
    pub last_modified_on: Option<wkt::Timestamp>,

    /// A list of Glue table definitions used by the transform.
    pub input_record_tables: Option<Vec<GlueTable>>,

    /// The configuration parameters that are specific to the algorithm
    /// used.
    pub parameters: Option<TransformParameters>,

    /// The latest evaluation metrics.
    pub evaluation_metrics: Option<EvaluationMetrics>,

    /// The number of labels available for this transform.
    pub label_count: Option<i32>,

    /// The `Map<Column, Type>` object that represents the schema that this
    /// transform accepts. Has an upper bound of 100 columns.
    pub schema: Option<Vec<SchemaColumn>>,

    /// The name or Amazon Resource Name (ARN) of the IAM role with the
    /// required permissions.
    pub role: Option<String>,

    /// This value determines which version of Glue this machine learning
    /// transform is compatible with.
    pub glue_version: Option<String>,

    /// The number of Glue data processing units (DPUs) that are allocated
    /// to task runs for this transform.
    pub max_capacity: Option<f64>,

    /// The type of predefined worker that is allocated when this task runs.
    pub worker_type: Option<WorkerType>,

    /// The number of workers of a defined `workerType` that are allocated
    /// when this task runs.
    pub number_of_workers: Option<i32>,

    /// The timeout for a task run for this transform in minutes.
    pub timeout: Option<i32>,

    /// The maximum number of times to retry a task for this transform
    /// after a task run fails.
    pub max_retries: Option<i32>,
}

impl GetMLTransformResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][GetMLTransformResult::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }

    /// Sets the value of [name][GetMLTransformResult::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][GetMLTransformResult::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [status][GetMLTransformResult::status].
    pub fn set_status<T: Into<TransformStatusType>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [created_on][GetMLTransformResult::created_on].
    pub fn set_created_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.created_on = Some(v.into());
        self
    }

    /// Sets the value of [last_modified_on][GetMLTransformResult::last_modified_on].
    pub fn set_last_modified_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_modified_on = Some(v.into());
        self
    }

    /// Replaces the contents of [input_record_tables][GetMLTransformResult::input_record_tables].
    pub fn set_input_record_tables<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<GlueTable>,
    {
        self.input_record_tables = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [input_record_tables][GetMLTransformResult::input_record_tables], creating the list if unset.
    pub fn add_input_record_tables<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<GlueTable>,
    {
        self.input_record_tables
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [parameters][GetMLTransformResult::parameters].
    pub fn set_parameters<T: Into<TransformParameters>>(mut self, v: T) -> Self {
        self.parameters = Some(v.into());
        self
    }

    /// Sets the value of [evaluation_metrics][GetMLTransformResult::evaluation_metrics].
    pub fn set_evaluation_metrics<T: Into<EvaluationMetrics>>(mut self, v: T) -> Self {
        self.evaluation_metrics = Some(v.into());
        self
    }

    /// Sets the value of [label_count][GetMLTransformResult::label_count].
    pub fn set_label_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.label_count = Some(v.into());
        self
    }

    /// Replaces the contents of [schema][GetMLTransformResult::schema].
    pub fn set_schema<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SchemaColumn>,
    {
        self.schema = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [schema][GetMLTransformResult::schema], creating the list if unset.
    pub fn add_schema<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SchemaColumn>,
    {
        self.schema
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [role][GetMLTransformResult::role].
    pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
        self.role = Some(v.into());
        self
    }

    /// Sets the value of [glue_version][GetMLTransformResult::glue_version].
    pub fn set_glue_version<T: Into<String>>(mut self, v: T) -> Self {
        self.glue_version = Some(v.into());
        self
    }

    /// Sets the value of [max_capacity][GetMLTransformResult::max_capacity].
    pub fn set_max_capacity<T: Into<f64>>(mut self, v: T) -> Self {
        self.max_capacity = Some(v.into());
        self
    }

    /// Sets the value of [worker_type][GetMLTransformResult::worker_type].
    pub fn set_worker_type<T: Into<WorkerType>>(mut self, v: T) -> Self {
        self.worker_type = Some(v.into());
        self
    }

    /// Sets the value of [number_of_workers][GetMLTransformResult::number_of_workers].
    pub fn set_number_of_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.number_of_workers = Some(v.into());
        self
    }

    /// Sets the value of [timeout][GetMLTransformResult::timeout].
    pub fn set_timeout<T: Into<i32>>(mut self, v: T) -> Self {
        self.timeout = Some(v.into());
        self
    }

    /// Sets the value of [max_retries][GetMLTransformResult::max_retries].
    pub fn set_max_retries<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_retries = Some(v.into());
        self
    }
}

/// Request message for `GetMLTransforms`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetMLTransformsRequest {
    /// A paginated token to offset the results.
    pub next_token: Option<String>,

    /// The maximum number of results to return.
    pub max_results: Option<i32>,

    /// The filter transformation criteria.
    pub filter: Option<TransformFilterCriteria>,

    /// The sorting criteria.
    pub sort: Option<TransformSortCriteria>,
}

impl GetMLTransformsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [next_token][GetMLTransformsRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [max_results][GetMLTransformsRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }

    /// Sets the value of [filter][GetMLTransformsRequest::filter].
    pub fn set_filter<T: Into<TransformFilterCriteria>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets the value of [sort][GetMLTransformsRequest::sort].
    pub fn set_sort<T: Into<TransformSortCriteria>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }
}

/// Response message for `GetMLTransforms`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetMLTransformsResult {
    /// A list of machine learning transforms.
    pub transforms: Option<Vec<MLTransform>>,

    /// A pagination token, if more results are available.
    pub next_token: Option<String>,
}

impl GetMLTransformsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [transforms][GetMLTransformsResult::transforms].
    pub fn set_transforms<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<MLTransform>,
    {
        self.transforms = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [transforms][GetMLTransformsResult::transforms], creating the list if unset.
    pub fn add_transforms<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<MLTransform>,
    {
        self.transforms
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][GetMLTransformsResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Request message for `UpdateMLTransform`.
///
/// After calling this operation, you can call the `StartMLEvaluationTaskRun`
/// operation to assess how well your new parameters achieved your goals
/// (such as improving the quality of your machine learning transform, or
/// making it more cost-effective).
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateMLTransformRequest {
    /// A unique identifier that was generated when the transform was
    /// created.
    pub transform_id: Option<String>,

    /// The unique name that you gave the transform when you created it.
    pub name: Option<String>,

    /// A description of the transform. The default is an empty string.
    pub description: Option<String>,

    /// The configuration parameters that are specific to the transform
    /// type (algorithm) used. Conditionally dependent on the transform
    /// type.
    pub parameters: Option<TransformParameters>,

    /// The name or Amazon Resource Name (ARN) of the IAM role with the
    /// required permissions.
    pub role: Option<String>,

    /// This value determines which version of Glue this machine learning
    /// transform is compatible with.
    pub glue_version: Option<String>,

    /// The number of Glue data processing units (DPUs) that are allocated
    /// to task runs for this transform.
    pub max_capacity: Option<f64>,

    /// The type of predefined worker that is allocated when this task runs.
    pub worker_type: Option<WorkerType>,

    /// The number of workers of a defined `workerType` that are allocated
    /// when this task runs.
    pub number_of_workers: Option<i32>,

    /// The timeout for a task run for this transform in minutes.
    pub timeout: Option<i32>,

    /// The maximum number of times to retry a task for this transform
    /// after a task run fails.
    pub max_retries: Option<i32>,
}

impl UpdateMLTransformRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][UpdateMLTransformRequest::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }

    /// Sets the value of [name][UpdateMLTransformRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][UpdateMLTransformRequest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [parameters][UpdateMLTransformRequest::parameters].
    pub fn set_parameters<T: Into<TransformParameters>>(mut self, v: T) -> Self {
        self.parameters = Some(v.into());
        self
    }

    /// Sets the value of [role][UpdateMLTransformRequest::role].
    pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
        self.role = Some(v.into());
        self
    }

    /// Sets the value of [glue_version][UpdateMLTransformRequest::glue_version].
    pub fn set_glue_version<T: Into<String>>(mut self, v: T) -> Self {
        self.glue_version = Some(v.into());
        self
    }

    /// Sets the value of [max_capacity][UpdateMLTransformRequest::max_capacity].
    pub fn set_max_capacity<T: Into<f64>>(mut self, v: T) -> Self {
        self.max_capacity = Some(v.into());
        self
    }

    /// Sets the value of [worker_type][UpdateMLTransformRequest::worker_type].
    pub fn set_worker_type<T: Into<WorkerType>>(mut self, v: T) -> Self {
        self.worker_type = Some(v.into());
        self
    }

    /// Sets the value of [number_of_workers][UpdateMLTransformRequest::number_of_workers].
    pub fn set_number_of_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.number_of_workers = Some(v.into());
        self
    }

    /// Sets the value of [timeout][UpdateMLTransformRequest::timeout].
    pub fn set_timeout<T: Into<i32>>(mut self, v: T) -> Self {
        self.timeout = Some(v.into());
        self
    }

    /// Sets the value of [max_retries][UpdateMLTransformRequest::max_retries].
    pub fn set_max_retries<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_retries = Some(v.into());
        self
    }
}

/// Response message for `UpdateMLTransform`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateMLTransformResult {
    /// The unique identifier for the transform that was updated.
    pub transform_id: Option<String>,
}

impl UpdateMLTransformResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][UpdateMLTransformResult::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }
}

/// Request message for `DeleteMLTransform`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteMLTransformRequest {
    /// The unique identifier of the transform to delete.
    pub transform_id: Option<String>,
}

impl DeleteMLTransformRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][DeleteMLTransformRequest::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }
}

/// Response message for `DeleteMLTransform`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteMLTransformResult {
    /// The unique identifier of the transform that was deleted.
    pub transform_id: Option<String>,
}

impl DeleteMLTransformResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][DeleteMLTransformResult::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }
}

/// Request message for `ListMLTransforms`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListMLTransformsRequest {
    /// A continuation token, if this is a continuation request.
    pub next_token: Option<String>,

    /// The maximum size of a list to return.
    pub max_results: Option<i32>,

    /// A `TransformFilterCriteria` used to filter the machine learning
    /// transforms.
    pub filter: Option<TransformFilterCriteria>,

    /// A `TransformSortCriteria` used to sort the machine learning
    /// transforms.
    pub sort: Option<TransformSortCriteria>,

    /// Specifies to return only these tagged resources.
    pub tags: Option<HashMap<String, String>>,
}

impl ListMLTransformsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [next_token][ListMLTransformsRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [max_results][ListMLTransformsRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }

    /// Sets the value of [filter][ListMLTransformsRequest::filter].
    pub fn set_filter<T: Into<TransformFilterCriteria>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets the value of [sort][ListMLTransformsRequest::sort].
    pub fn set_sort<T: Into<TransformSortCriteria>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }

    /// Replaces the contents of [tags][ListMLTransformsRequest::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [tags][ListMLTransformsRequest::tags], failing on a duplicate key.
    pub fn add_tags_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.tags.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "Tags",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [tags][ListMLTransformsRequest::tags] to unset.
    pub fn clear_tags(mut self) -> Self {
        self.tags = None;
        self
    }
}

/// Response message for `ListMLTransforms`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListMLTransformsResult {
    /// The identifiers of all the machine learning transforms in the
    /// account, or the machine learning transforms with the specified tags.
    pub transform_ids: Option<Vec<String>>,

    /// A continuation token, if the returned list does not contain the
    /// last metric available.
    pub next_token: Option<String>,
}

impl ListMLTransformsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [transform_ids][ListMLTransformsResult::transform_ids].
    pub fn set_transform_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.transform_ids = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [transform_ids][ListMLTransformsResult::transform_ids], creating the list if unset.
    pub fn add_transform_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.transform_ids
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][ListMLTransformsResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Request message for `GetMLTaskRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetMLTaskRunRequest {
    /// The unique identifier of the machine learning transform.
    pub transform_id: Option<String>,

    /// The unique identifier of the task run.
    pub task_run_id: Option<String>,
}

impl GetMLTaskRunRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][GetMLTaskRunRequest::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }

    /// Sets the value of [task_run_id][GetMLTaskRunRequest::task_run_id].
    pub fn set_task_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.task_run_id = Some(v.into());
        self
    }
}

/// Response message for `GetMLTaskRun`.
///
/// The task run attributes come back at the top level rather than nested
/// in a `TaskRun` value.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetMLTaskRunResult {
    /// The unique identifier of the task run.
    pub transform_id: Option<String>,

    /// The unique run identifier associated with this run.
    pub task_run_id: Option<String>,

    /// The status for this task run.
    pub status: Option<TaskStatusType>,

    /// The names of the log groups that are associated with the task run.
    pub log_group_name: Option<String>,

    /// The list of properties that are associated with the task run.
    pub properties: Option<TaskRunProperties>,

    /// The error strings that are associated with the task run.
    pub error_string: Option<String>,

    /// The date and time when this task run started.
    pub started_on: Option<wkt::Timestamp>,

    /// The date and time when this task run was last modified.
    pub last_modified_on: Option<wkt::Timestamp>,

    /// The date and time when this task run was completed.
    pub completed_on: Option<wkt::Timestamp>,

    /// The amount of time (in seconds) that the task run consumed
    /// resources.
    pub execution_time: Option<i32>,
}

impl GetMLTaskRunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][GetMLTaskRunResult::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }

    /// Sets the value of [task_run_id][GetMLTaskRunResult::task_run_id].
    pub fn set_task_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.task_run_id = Some(v.into());
        self
    }

    /// Sets the value of [status][GetMLTaskRunResult::status].
    pub fn set_status<T: Into<TaskStatusType>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [log_group_name][GetMLTaskRunResult::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [properties][GetMLTaskRunResult::properties].
    pub fn set_properties<T: Into<TaskRunProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }

    /// Sets the value of [error_string][GetMLTaskRunResult::error_string].
    pub fn set_error_string<T: Into<String>>(mut self, v: T) -> Self {
        self.error_string = Some(v.into());
        self
    }

    /// Sets the value of [started_on][GetMLTaskRunResult::started_on].
    pub fn set_started_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.started_on = Some(v.into());
        self
    }

    /// Sets the value of [last_modified_on][GetMLTaskRunResult::last_modified_on].
    pub fn set_last_modified_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_modified_on = Some(v.into());
        self
    }

    /// Sets the value of [completed_on][GetMLTaskRunResult::completed_on].
    pub fn set_completed_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.completed_on = Some(v.into());
        self
    }

    /// Sets the value of [execution_time][GetMLTaskRunResult::execution_time].
    pub fn set_execution_time<T: Into<i32>>(mut self, v: T) -> Self {
        self.execution_time = Some(v.into());
        self
    }
}

/// Request message for `GetMLTaskRuns`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetMLTaskRunsRequest {
    /// The unique identifier of the machine learning transform.
    pub transform_id: Option<String>,

    /// A token for pagination of the results. The default is empty.
    pub next_token: Option<String>,

    /// The maximum number of results to return.
    pub max_results: Option<i32>,

    /// The filter criteria, in the `TaskRunFilterCriteria` structure, for
    /// the task run.
    pub filter: Option<TaskRunFilterCriteria>,

    /// The sorting criteria, in the `TaskRunSortCriteria` structure, for
    /// the task run.
    pub sort: Option<TaskRunSortCriteria>,
}

impl GetMLTaskRunsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][GetMLTaskRunsRequest::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }

    /// Sets the value of [next_token][GetMLTaskRunsRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [max_results][GetMLTaskRunsRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }

    /// Sets the value of [filter][GetMLTaskRunsRequest::filter].
    pub fn set_filter<T: Into<TaskRunFilterCriteria>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets the value of [sort][GetMLTaskRunsRequest::sort].
    pub fn set_sort<T: Into<TaskRunSortCriteria>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }
}

/// Response message for `GetMLTaskRuns`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetMLTaskRunsResult {
    /// A list of task runs that are associated with the transform.
    pub task_runs: Option<Vec<TaskRun>>,

    /// A pagination token, if more results are available.
    pub next_token: Option<String>,
}

impl GetMLTaskRunsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [task_runs][GetMLTaskRunsResult::task_runs].
    pub fn set_task_runs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TaskRun>,
    {
        self.task_runs = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [task_runs][GetMLTaskRunsResult::task_runs], creating the list if unset.
    pub fn add_task_runs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TaskRun>,
    {
        self.task_runs
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][GetMLTaskRunsResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Request message for `CancelMLTaskRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CancelMLTaskRunRequest {
    /// The unique identifier of the machine learning transform.
    pub transform_id: Option<String>,

    /// A unique identifier for the task run.
    pub task_run_id: Option<String>,
}

impl CancelMLTaskRunRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][CancelMLTaskRunRequest::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }

    /// Sets the value of [task_run_id][CancelMLTaskRunRequest::task_run_id].
    pub fn set_task_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.task_run_id = Some(v.into());
        self
    }
}

/// Response message for `CancelMLTaskRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CancelMLTaskRunResult {
    /// The unique identifier of the machine learning transform.
    pub transform_id: Option<String>,

    /// The unique identifier for the task run.
    pub task_run_id: Option<String>,

    /// The status for this run.
    pub status: Option<TaskStatusType>,
}

impl CancelMLTaskRunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][CancelMLTaskRunResult::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }

    /// Sets the value of [task_run_id][CancelMLTaskRunResult::task_run_id].
    pub fn set_task_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.task_run_id = Some(v.into());
        self
    }

    /// Sets the value of [status][CancelMLTaskRunResult::status].
    pub fn set_status<T: Into<TaskStatusType>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }
}

/// Request message for `StartMLEvaluationTaskRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartMLEvaluationTaskRunRequest {
    /// The unique identifier of the machine learning transform.
    pub transform_id: Option<String>,
}

impl StartMLEvaluationTaskRunRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][StartMLEvaluationTaskRunRequest::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }
}

/// Response message for `StartMLEvaluationTaskRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartMLEvaluationTaskRunResult {
    /// The unique identifier associated with this run.
    pub task_run_id: Option<String>,
}

impl StartMLEvaluationTaskRunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [task_run_id][StartMLEvaluationTaskRunResult::task_run_id].
    pub fn set_task_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.task_run_id = Some(v.into());
        self
    }
}

/// Request message for `StartMLLabelingSetGenerationTaskRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartMLLabelingSetGenerationTaskRunRequest {
    /// The unique identifier of the machine learning transform.
    pub transform_id: Option<String>,

    /// The Amazon Simple Storage Service (Amazon S3) path where you
    /// generate the labeling set.
    pub output_s3_path: Option<String>,
}

impl StartMLLabelingSetGenerationTaskRunRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][StartMLLabelingSetGenerationTaskRunRequest::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }

    /// Sets the value of [output_s3_path][StartMLLabelingSetGenerationTaskRunRequest::output_s3_path].
    pub fn set_output_s3_path<T: Into<String>>(mut self, v: T) -> Self {
        self.output_s3_path = Some(v.into());
        self
    }
}

/// Response message for `StartMLLabelingSetGenerationTaskRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartMLLabelingSetGenerationTaskRunResult {
    /// The unique run identifier that is associated with this task run.
    pub task_run_id: Option<String>,
}

impl StartMLLabelingSetGenerationTaskRunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [task_run_id][StartMLLabelingSetGenerationTaskRunResult::task_run_id].
    pub fn set_task_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.task_run_id = Some(v.into());
        self
    }
}

/// Request message for `StartImportLabelsTaskRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartImportLabelsTaskRunRequest {
    /// The unique identifier of the machine learning transform.
    pub transform_id: Option<String>,

    /// The Amazon Simple Storage Service (Amazon S3) path from where you
    /// import the labels.
    pub input_s3_path: Option<String>,

    /// Indicates whether to overwrite your existing labels.
    pub replace_all_labels: Option<bool>,
}

impl StartImportLabelsTaskRunRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][StartImportLabelsTaskRunRequest::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }

    /// Sets the value of [input_s3_path][StartImportLabelsTaskRunRequest::input_s3_path].
    pub fn set_input_s3_path<T: Into<String>>(mut self, v: T) -> Self {
        self.input_s3_path = Some(v.into());
        self
    }

    /// Sets the value of [replace_all_labels][StartImportLabelsTaskRunRequest::replace_all_labels].
    pub fn set_replace_all_labels<T: Into<bool>>(mut self, v: T) -> Self {
        self.replace_all_labels = Some(v.into());
        self
    }
}

/// Response message for `StartImportLabelsTaskRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartImportLabelsTaskRunResult {
    /// The unique identifier for the task run.
    pub task_run_id: Option<String>,
}

impl StartImportLabelsTaskRunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [task_run_id][StartImportLabelsTaskRunResult::task_run_id].
    pub fn set_task_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.task_run_id = Some(v.into());
        self
    }
}

/// Request message for `StartExportLabelsTaskRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartExportLabelsTaskRunRequest {
    /// The unique identifier of the machine learning transform.
    pub transform_id: Option<String>,

    /// The Amazon S3 path where you export the labels.
    pub output_s3_path: Option<String>,
}

impl StartExportLabelsTaskRunRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [transform_id][StartExportLabelsTaskRunRequest::transform_id].
    pub fn set_transform_id<T: Into<String>>(mut self, v: T) -> Self {
        self.transform_id = Some(v.into());
        self
    }

    /// Sets the value of [output_s3_path][StartExportLabelsTaskRunRequest::output_s3_path].
    pub fn set_output_s3_path<T: Into<String>>(mut self, v: T) -> Self {
        self.output_s3_path = Some(v.into());
        self
    }
}

/// Response message for `StartExportLabelsTaskRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartExportLabelsTaskRunResult {
    /// The unique identifier for the task run.
    pub task_run_id: Option<String>,
}

impl StartExportLabelsTaskRunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [task_run_id][StartExportLabelsTaskRunResult::task_run_id].
    pub fn set_task_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.task_run_id = Some(v.into());
        self
    }
}
