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

/// The state of a crawler.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrawlerState {
    Ready,
    Running,
    Stopping,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [CrawlerState::as_str].
    UnknownValue(String),
}

impl CrawlerState {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ready => "READY",
            Self::Running => "RUNNING",
            Self::Stopping => "STOPPING",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for CrawlerState {
    fn from(value: &str) -> Self {
        match value {
            "READY" => Self::Ready,
            "RUNNING" => Self::Running,
            "STOPPING" => Self::Stopping,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for CrawlerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for CrawlerState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for CrawlerState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The state of a crawler schedule.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ScheduleState {
    Scheduled,
    NotScheduled,
    Transitioning,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [ScheduleState::as_str].
    UnknownValue(String),
}

impl ScheduleState {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::NotScheduled => "NOT_SCHEDULED",
            Self::Transitioning => "TRANSITIONING",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for ScheduleState {
    fn from(value: &str) -> Self {
        match value {
            "SCHEDULED" => Self::Scheduled,
            "NOT_SCHEDULED" => Self::NotScheduled,
            "TRANSITIONING" => Self::Transitioning,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for ScheduleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for ScheduleState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for ScheduleState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The status of the last crawl.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LastCrawlStatus {
    Succeeded,
    Cancelled,
    Failed,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [LastCrawlStatus::as_str].
    UnknownValue(String),
}

impl LastCrawlStatus {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Succeeded => "SUCCEEDED",
            Self::Cancelled => "CANCELLED",
            Self::Failed => "FAILED",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for LastCrawlStatus {
    fn from(value: &str) -> Self {
        match value {
            "SUCCEEDED" => Self::Succeeded,
            "CANCELLED" => Self::Cancelled,
            "FAILED" => Self::Failed,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for LastCrawlStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for LastCrawlStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for LastCrawlStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The update behavior when the crawler finds a changed schema.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum UpdateBehavior {
    Log,
    UpdateInDatabase,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [UpdateBehavior::as_str].
    UnknownValue(String),
}

impl UpdateBehavior {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Log => "LOG",
            Self::UpdateInDatabase => "UPDATE_IN_DATABASE",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for UpdateBehavior {
    fn from(value: &str) -> Self {
        match value {
            "LOG" => Self::Log,
            "UPDATE_IN_DATABASE" => Self::UpdateInDatabase,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for UpdateBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for UpdateBehavior {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for UpdateBehavior {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The deletion behavior when the crawler finds a deleted object.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DeleteBehavior {
    Log,
    DeleteFromDatabase,
    DeprecateInDatabase,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [DeleteBehavior::as_str].
    UnknownValue(String),
}

impl DeleteBehavior {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Log => "LOG",
            Self::DeleteFromDatabase => "DELETE_FROM_DATABASE",
            Self::DeprecateInDatabase => "DEPRECATE_IN_DATABASE",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for DeleteBehavior {
    fn from(value: &str) -> Self {
        match value {
            "LOG" => Self::Log,
            "DELETE_FROM_DATABASE" => Self::DeleteFromDatabase,
            "DEPRECATE_IN_DATABASE" => Self::DeprecateInDatabase,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for DeleteBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for DeleteBehavior {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for DeleteBehavior {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// Specifies a data store in Amazon S3.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct S3Target {
    /// The path to the Amazon S3 target.
    pub path: Option<String>,

    /// A list of glob patterns used to exclude from the crawl.
    pub exclusions: Option<Vec<String>>,
}

impl S3Target {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [path][S3Target::path].
    pub fn set_path<T: Into<String>>(mut self, v: T) -> Self {
        self.path = Some(v.into());
        self
    }

    /// Replaces the contents of [exclusions][S3Target::exclusions].
    pub fn set_exclusions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.exclusions = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [exclusions][S3Target::exclusions], creating the list if unset.
    pub fn add_exclusions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.exclusions
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Specifies a JDBC data store to crawl.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct JdbcTarget {
    /// The name of the connection to use to connect to the JDBC target.
    pub connection_name: Option<String>,

    /// The path of the JDBC target.
    pub path: Option<String>,

    /// A list of glob patterns used to exclude from the crawl.
    pub exclusions: Option<Vec<String>>,
}

impl JdbcTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [connection_name][JdbcTarget::connection_name].
    pub fn set_connection_name<T: Into<String>>(mut self, v: T) -> Self {
        self.connection_name = Some(v.into());
        self
    }

    /// Sets the value of [path][JdbcTarget::path].
    pub fn set_path<T: Into<String>>(mut self, v: T) -> Self {
        self.path = Some(v.into());
        self
    }

    /// Replaces the contents of [exclusions][JdbcTarget::exclusions].
    pub fn set_exclusions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.exclusions = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [exclusions][JdbcTarget::exclusions], creating the list if unset.
    pub fn add_exclusions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.exclusions
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Specifies an Amazon DynamoDB table to crawl.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DynamoDbTarget {
    /// The name of the DynamoDB table to crawl.
    pub path: Option<String>,
}

impl DynamoDbTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [path][DynamoDbTarget::path].
    pub fn set_path<T: Into<String>>(mut self, v: T) -> Self {
        self.path = Some(v.into());
        self
    }
}

/// Specifies a Data Catalog target.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CatalogTarget {
    /// The name of the database to be synchronized.
    pub database_name: Option<String>,

    /// A list of the tables to be synchronized.
    pub tables: Option<Vec<String>>,
}

impl CatalogTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [database_name][CatalogTarget::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Replaces the contents of [tables][CatalogTarget::tables].
    pub fn set_tables<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.tables = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [tables][CatalogTarget::tables], creating the list if unset.
    pub fn add_tables<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.tables
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Specifies data stores to crawl.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CrawlerTargets {
    /// Specifies Amazon Simple Storage Service (Amazon S3) targets.
    pub s3_targets: Option<Vec<S3Target>>,

    /// Specifies JDBC targets.
    pub jdbc_targets: Option<Vec<JdbcTarget>>,

    /// Specifies Amazon DynamoDB targets.
    #[serde(rename = "DynamoDBTargets")]
    pub dynamo_db_targets: Option<Vec<DynamoDbTarget>>,

    /// Specifies Glue Data Catalog targets.
    pub catalog_targets: Option<Vec<CatalogTarget>>,
}

impl CrawlerTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [s3_targets][CrawlerTargets::s3_targets].
    pub fn set_s3_targets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<S3Target>,
    {
        self.s3_targets = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [s3_targets][CrawlerTargets::s3_targets], creating the list if unset.
    pub fn add_s3_targets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<S3Target>,
    {
        self.s3_targets
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [jdbc_targets][CrawlerTargets::jdbc_targets].
    pub fn set_jdbc_targets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<JdbcTarget>,
    {
        self.jdbc_targets = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [jdbc_targets][CrawlerTargets::jdbc_targets], creating the list if unset.
    pub fn add_jdbc_targets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<JdbcTarget>,
    {
        self.jdbc_targets
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [dynamo_db_targets][CrawlerTargets::dynamo_db_targets].
    pub fn set_dynamo_db_targets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<DynamoDbTarget>,
    {
        self.dynamo_db_targets = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [dynamo_db_targets][CrawlerTargets::dynamo_db_targets], creating the list if unset.
    pub fn add_dynamo_db_targets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<DynamoDbTarget>,
    {
        self.dynamo_db_targets
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [catalog_targets][CrawlerTargets::catalog_targets].
    pub fn set_catalog_targets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<CatalogTarget>,
    {
        self.catalog_targets = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [catalog_targets][CrawlerTargets::catalog_targets], creating the list if unset.
    pub fn add_catalog_targets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<CatalogTarget>,
    {
        self.catalog_targets
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// A scheduling object using a `cron` statement to schedule an event.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Schedule {
    /// A `cron` expression used to specify the schedule. For example, to
    /// run something every day at 12:15 UTC, specify
    /// `cron(15 12 * * ? *)`.
    pub schedule_expression: Option<String>,

    /// The state of the schedule.
    pub state: Option<ScheduleState>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [schedule_expression][Schedule::schedule_expression].
    pub fn set_schedule_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.schedule_expression = Some(v.into());
        self
    }

    /// Sets the value of [state][Schedule::state].
    pub fn set_state<T: Into<ScheduleState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }
}

/// A policy that specifies update and deletion behaviors for the crawler.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct SchemaChangePolicy {
    /// The update behavior when the crawler finds a changed schema.
    pub update_behavior: Option<UpdateBehavior>,

    /// The deletion behavior when the crawler finds a deleted object.
    pub delete_behavior: Option<DeleteBehavior>,
}

impl SchemaChangePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [update_behavior][SchemaChangePolicy::update_behavior].
    pub fn set_update_behavior<T: Into<UpdateBehavior>>(mut self, v: T) -> Self {
        self.update_behavior = Some(v.into());
        self
    }

    /// Sets the value of [delete_behavior][SchemaChangePolicy::delete_behavior].
    pub fn set_delete_behavior<T: Into<DeleteBehavior>>(mut self, v: T) -> Self {
        self.delete_behavior = Some(v.into());
        self
    }
}

/// Status and error information about the most recent crawl.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct LastCrawlInfo {
    /// Status of the last crawl.
    pub status: Option<LastCrawlStatus>,

    /// If an error occurred, the error information about the last crawl.
    pub error_message: Option<String>,

    /// The log group for the last crawl.
    pub log_group: Option<String>,

    /// The log stream for the last crawl.
    pub log_stream: Option<String>,

    /// The prefix for a message about this crawl.
    pub message_prefix: Option<String>,

    /// The time at which the crawl started.
    pub start_time: Option<wkt::Timestamp>,
}

impl LastCrawlInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [status][LastCrawlInfo::status].
    pub fn set_status<T: Into<LastCrawlStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [error_message][LastCrawlInfo::error_message].
    pub fn set_error_message<T: Into<String>>(mut self, v: T) -> Self {
        self.error_message = Some(v.into());
        self
    }

    /// Sets the value of [log_group][LastCrawlInfo::log_group].
    pub fn set_log_group<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group = Some(v.into());
        self
    }

    /// Sets the value of [log_stream][LastCrawlInfo::log_stream].
    pub fn set_log_stream<T: Into<String>>(mut self, v: T) -> Self {
        self.log_stream = Some(v.into());
        self
    }

    /// Sets the value of [message_prefix][LastCrawlInfo::message_prefix].
    pub fn set_message_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.message_prefix = Some(v.into());
        self
    }

    /// Sets the value of [start_time][LastCrawlInfo::start_time].
    pub fn set_start_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }
}

/// Specifies a crawler program that examines a data source and uses
/// classifiers to try to determine its schema. If successful, the crawler
/// records metadata concerning the data source in the Data Catalog.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Crawler {
    /// The name of the crawler.
    pub name: Option<String>,

    /// The Amazon Resource Name (ARN) of an IAM role that's used to access
    /// customer resources, such as Amazon S3 data.
    pub role: Option<String>,

    /// A collection of targets to crawl.
    pub targets: Option<CrawlerTargets>,

    /// The name of the database in which the crawler's output is stored.
    pub database_name: Option<String>,

    /// A description of the crawler.
    pub description: Option<String>,

    /// A list of UTF-8 strings that specify the custom classifiers that are
    /// associated with the crawler.
    pub classifiers: Option<Vec<String>>,

    /// The policy that specifies update and delete behaviors for the
    /// crawler.
    pub schema_change_policy: Option<SchemaChangePolicy>,

    /// Indicates whether the crawler is running, or whether a run is
    /// pending.
    pub state: Option<CrawlerState>,

    /// The prefix added to the names of tables that are created.
    pub table_prefix: Option<String>,

    /// For scheduled crawlers, the schedule when the crawler runs.
    pub schedule: Option<Schedule>,

    /// If the crawler is running, contains the total time elapsed since the
    /// last crawl began.
    pub crawl_elapsed_time: Option<i64>,

    /// The time that the crawler was created.
    pub creation_time: Option<wkt::Timestamp>,

    /// The time that the crawler was last updated.
    pub last_updated: Option<wkt::Timestamp>,

    /// The status of the last crawl, and potentially error information if
    /// an error occurred.
    pub last_crawl: Option<LastCrawlInfo>,

    /// The version of the crawler.
    pub version: Option<i64>,

    /// Crawler configuration information. This versioned JSON string allows
    /// users to specify aspects of a crawler's behavior.
    pub configuration: Option<String>,

    /// The name of the `SecurityConfiguration` structure to be used by this
    /// crawler.
    pub crawler_security_configuration: Option<String>,
}

impl Crawler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Crawler::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [role][Crawler::role].
    pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
        self.role = Some(v.into());
        self
    }

    /// Sets the value of [targets][Crawler::targets].
    pub fn set_targets<T: Into<CrawlerTargets>>(mut self, v: T) -> Self {
        self.targets = Some(v.into());
        self
    }

    /// Sets the value of [database_name][Crawler::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [description][Crawler::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Replaces the contents of [classifiers][Crawler::classifiers].
    pub fn set_classifiers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.classifiers = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [classifiers][Crawler::classifiers], creating the list if unset.
    pub fn add_classifiers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.classifiers
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [schema_change_policy][Crawler::schema_change_policy].
    pub fn set_schema_change_policy<T: Into<SchemaChangePolicy>>(mut self, v: T) -> Self {
        self.schema_change_policy = Some(v.into());
        self
    }

    /// Sets the value of [state][Crawler::state].
    pub fn set_state<T: Into<CrawlerState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [table_prefix][Crawler::table_prefix].
    pub fn set_table_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.table_prefix = Some(v.into());
        self
    }

    /// Sets the value of [schedule][Crawler::schedule].
    pub fn set_schedule<T: Into<Schedule>>(mut self, v: T) -> Self {
        self.schedule = Some(v.into());
        self
    }

    /// Sets the value of [crawl_elapsed_time][Crawler::crawl_elapsed_time].
    pub fn set_crawl_elapsed_time<T: Into<i64>>(mut self, v: T) -> Self {
        self.crawl_elapsed_time = Some(v.into());
        self
    }

    /// Sets the value of [creation_time][Crawler::creation_time].
    pub fn set_creation_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.creation_time = Some(v.into());
        self
    }

    /// Sets the value of [last_updated][Crawler::last_updated].
    pub fn set_last_updated<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_updated = Some(v.into());
        self
    }

    /// Sets the value of [last_crawl][Crawler::last_crawl].
    pub fn set_last_crawl<T: Into<LastCrawlInfo>>(mut self, v: T) -> Self {
        self.last_crawl = Some(v.into());
        self
    }

    /// Sets the value of [version][Crawler::version].
    pub fn set_version<T: Into<i64>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }

    /// Sets the value of [configuration][Crawler::configuration].
    pub fn set_configuration<T: Into<String>>(mut self, v: T) -> Self {
        self.configuration = Some(v.into());
        self
    }

    /// Sets the value of [crawler_security_configuration][Crawler::crawler_security_configuration].
    pub fn set_crawler_security_configuration<T: Into<String>>(mut self, v: T) -> Self {
        self.crawler_security_configuration = Some(v.into());
        self
    }
}

/// Metrics for a specified crawler.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CrawlerMetrics {
    /// The name of the crawler.
    pub crawler_name: Option<String>,

    /// The estimated time left to complete a running crawl.
    pub time_left_seconds: Option<f64>,

    /// True if the crawler is still estimating how long it will take to
    /// complete this run.
    pub still_estimating: Option<bool>,

    /// The duration of the crawler's most recent run, in seconds.
    pub last_runtime_seconds: Option<f64>,

    /// The median duration of this crawler's runs, in seconds.
    pub median_runtime_seconds: Option<f64>,

    /// The number of tables created by this crawler.
    pub tables_created: Option<i32>,

    /// The number of tables updated by this crawler.
    pub tables_updated: Option<i32>,

    /// The number of tables deleted by this crawler.
    pub tables_deleted: Option<i32>,
}

impl CrawlerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [crawler_name][CrawlerMetrics::crawler_name].
    pub fn set_crawler_name<T: Into<String>>(mut self, v: T) -> Self {
        self.crawler_name = Some(v.into());
        self
    }

    /// Sets the value of [time_left_seconds][CrawlerMetrics::time_left_seconds].
    pub fn set_time_left_seconds<T: Into<f64>>(mut self, v: T) -> Self {
        self.time_left_seconds = Some(v.into());
        self
    }

    /// Sets the value of [still_estimating][CrawlerMetrics::still_estimating].
    pub fn set_still_estimating<T: Into<bool>>(mut self, v: T) -> Self {
        self.still_estimating = Some(v.into());
        self
    }

    /// Sets the value of [last_runtime_seconds][CrawlerMetrics::last_runtime_seconds].
    pub fn set_last_runtime_seconds<T: Into<f64>>(mut self, v: T) -> Self {
        self.last_runtime_seconds = Some(v.into());
        self
    }

    /// Sets the value of [median_runtime_seconds][CrawlerMetrics::median_runtime_seconds].
    pub fn set_median_runtime_seconds<T: Into<f64>>(mut self, v: T) -> Self {
        self.median_runtime_seconds = Some(v.into());
        self
    }

    /// Sets the value of [tables_created][CrawlerMetrics::tables_created].
    pub fn set_tables_created<T: Into<i32>>(mut self, v: T) -> Self {
        self.tables_created = Some(v.into());
        self
    }

    /// Sets the value of [tables_updated][CrawlerMetrics::tables_updated].
    pub fn set_tables_updated<T: Into<i32>>(mut self, v: T) -> Self {
        self.tables_updated = Some(v.into());
        self
    }

    /// Sets the value of [tables_deleted][CrawlerMetrics::tables_deleted].
    pub fn set_tables_deleted<T: Into<i32>>(mut self, v: T) -> Self {
        self.tables_deleted = Some(v.into());
        self
    }
}

/// Request message for `CreateCrawler`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateCrawlerRequest {
    /// Name of the new crawler.
    pub name: Option<String>,

    /// The IAM role or ARN of an IAM role used by the new crawler to access
    /// customer resources.
    pub role: Option<String>,

    /// The Glue database where results are written, such as
    /// `arn:aws:daylight:us-east-1::database/sometable/*`.
    pub database_name: Option<String>,

    /// A description of the new crawler.
    pub description: Option<String>,

    /// A list of collection of targets to crawl.
    pub targets: Option<CrawlerTargets>,

    /// A `cron` expression used to specify the schedule.
    pub schedule: Option<String>,

    /// A list of custom classifiers that the user has registered. By
    /// default, all built-in classifiers are included in a crawl, but these
    /// custom classifiers always override the default classifiers for a
    /// given classification.
    pub classifiers: Option<Vec<String>>,

    /// The table prefix used for catalog tables that are created.
    pub table_prefix: Option<String>,

    /// The policy for the crawler's update and deletion behavior.
    pub schema_change_policy: Option<SchemaChangePolicy>,

    /// The crawler configuration information. This versioned JSON string
    /// allows users to specify aspects of a crawler's behavior.
    pub configuration: Option<String>,

    /// The name of the `SecurityConfiguration` structure to be used by this
    /// crawler.
    pub crawler_security_configuration: Option<String>,

    /// The tags to use with this crawler request.
    pub tags: Option<HashMap<String, String>>,
}

impl CreateCrawlerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][CreateCrawlerRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [role][CreateCrawlerRequest::role].
    pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
        self.role = Some(v.into());
        self
    }

    /// Sets the value of [database_name][CreateCrawlerRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [description][CreateCrawlerRequest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [targets][CreateCrawlerRequest::targets].
    pub fn set_targets<T: Into<CrawlerTargets>>(mut self, v: T) -> Self {
        self.targets = Some(v.into());
        self
    }

    /// Sets the value of [schedule][CreateCrawlerRequest::schedule].
    pub fn set_schedule<T: Into<String>>(mut self, v: T) -> Self {
        self.schedule = Some(v.into());
        self
    }

    /// Replaces the contents of [classifiers][CreateCrawlerRequest::classifiers].
    pub fn set_classifiers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.classifiers = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [classifiers][CreateCrawlerRequest::classifiers], creating the list if unset.
    pub fn add_classifiers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.classifiers
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [table_prefix][CreateCrawlerRequest::table_prefix].
    pub fn set_table_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.table_prefix = Some(v.into());
        self
    }

    /// Sets the value of [schema_change_policy][CreateCrawlerRequest::schema_change_policy].
    pub fn set_schema_change_policy<T: Into<SchemaChangePolicy>>(mut self, v: T) -> Self {
        self.schema_change_policy = Some(v.into());
        self
    }

    /// Sets the value of [configuration][CreateCrawlerRequest::configuration].
    pub fn set_configuration<T: Into<String>>(mut self, v: T) -> Self {
        self.configuration = Some(v.into());
        self
    }

    /// Sets the value of [crawler_security_configuration][CreateCrawlerRequest::crawler_security_configuration].
    pub fn set_crawler_security_configuration<T: Into<String>>(mut self, v: T) -> Self {
        self.crawler_security_configuration = Some(v.into());
        self
    }

    /// Replaces the contents of [tags][CreateCrawlerRequest::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [tags][CreateCrawlerRequest::tags], failing on a duplicate key.
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

    /// Resets [tags][CreateCrawlerRequest::tags] to unset.
    pub fn clear_tags(mut self) -> Self {
        self.tags = None;
        self
    }
}

/// Response message for `CreateCrawler`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateCrawlerResult {}

impl CreateCrawlerResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `GetCrawler`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetCrawlerRequest {
    /// The name of the crawler to retrieve metadata for.
    pub name: Option<String>,
}

impl GetCrawlerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][GetCrawlerRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Response message for `GetCrawler`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetCrawlerResult {
    /// The metadata for the specified crawler.
    pub crawler: Option<Crawler>,
}

impl GetCrawlerResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [crawler][GetCrawlerResult::crawler].
    pub fn set_crawler<T: Into<Crawler>>(mut self, v: T) -> Self {
        self.crawler = Some(v.into());
        self
    }
}

/// Request message for `GetCrawlers`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetCrawlersRequest {
    /// The number of crawlers to return on each call.
    pub max_results: Option<i32>,

    /// A continuation token, if this is a continuation request.
    pub next_token: Option<String>,
}

impl GetCrawlersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [max_results][GetCrawlersRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }

    /// Sets the value of [next_token][GetCrawlersRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Response message for `GetCrawlers`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetCrawlersResult {
    /// A list of crawler metadata.
    pub crawlers: Option<Vec<Crawler>>,

    /// A continuation token, if the returned list has not reached the end
    /// of those defined in this customer account.
    pub next_token: Option<String>,
}

impl GetCrawlersResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [crawlers][GetCrawlersResult::crawlers].
    pub fn set_crawlers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Crawler>,
    {
        self.crawlers = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [crawlers][GetCrawlersResult::crawlers], creating the list if unset.
    pub fn add_crawlers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Crawler>,
    {
        self.crawlers
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][GetCrawlersResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Request message for `BatchGetCrawlers`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchGetCrawlersRequest {
    /// A list of crawler names, which might be the names returned from the
    /// `ListCrawlers` operation.
    pub crawler_names: Option<Vec<String>>,
}

impl BatchGetCrawlersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [crawler_names][BatchGetCrawlersRequest::crawler_names].
    pub fn set_crawler_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.crawler_names = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [crawler_names][BatchGetCrawlersRequest::crawler_names], creating the list if unset.
    pub fn add_crawler_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.crawler_names
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `BatchGetCrawlers`.
///
/// Names that could not be resolved come back in [crawlers_not_found]
/// [BatchGetCrawlersResult::crawlers_not_found].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchGetCrawlersResult {
    /// A list of crawler definitions.
    pub crawlers: Option<Vec<Crawler>>,

    /// A list of names of crawlers that were not found.
    pub crawlers_not_found: Option<Vec<String>>,
}

impl BatchGetCrawlersResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [crawlers][BatchGetCrawlersResult::crawlers].
    pub fn set_crawlers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Crawler>,
    {
        self.crawlers = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [crawlers][BatchGetCrawlersResult::crawlers], creating the list if unset.
    pub fn add_crawlers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Crawler>,
    {
        self.crawlers
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [crawlers_not_found][BatchGetCrawlersResult::crawlers_not_found].
    pub fn set_crawlers_not_found<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.crawlers_not_found = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [crawlers_not_found][BatchGetCrawlersResult::crawlers_not_found], creating the list if unset.
    pub fn add_crawlers_not_found<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.crawlers_not_found
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Request message for `UpdateCrawler`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateCrawlerRequest {
    /// Name of the new crawler.
    pub name: Option<String>,

    /// The IAM role or ARN of an IAM role used by the new crawler to access
    /// customer resources.
    pub role: Option<String>,

    /// The Glue database where results are stored.
    pub database_name: Option<String>,

    /// A description of the new crawler.
    pub description: Option<String>,

    /// A list of targets to crawl.
    pub targets: Option<CrawlerTargets>,

    /// A `cron` expression used to specify the schedule.
    pub schedule: Option<String>,

    /// A list of custom classifiers that the user has registered.
    pub classifiers: Option<Vec<String>>,

    /// The table prefix used for catalog tables that are created.
    pub table_prefix: Option<String>,

    /// The policy for the crawler's update and deletion behavior.
    pub schema_change_policy: Option<SchemaChangePolicy>,

    /// The crawler configuration information.
    pub configuration: Option<String>,

    /// The name of the `SecurityConfiguration` structure to be used by this
    /// crawler.
    pub crawler_security_configuration: Option<String>,
}

impl UpdateCrawlerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][UpdateCrawlerRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [role][UpdateCrawlerRequest::role].
    pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
        self.role = Some(v.into());
        self
    }

    /// Sets the value of [database_name][UpdateCrawlerRequest::database_name].
    pub fn set_database_name<T: Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [description][UpdateCrawlerRequest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [targets][UpdateCrawlerRequest::targets].
    pub fn set_targets<T: Into<CrawlerTargets>>(mut self, v: T) -> Self {
        self.targets = Some(v.into());
        self
    }

    /// Sets the value of [schedule][UpdateCrawlerRequest::schedule].
    pub fn set_schedule<T: Into<String>>(mut self, v: T) -> Self {
        self.schedule = Some(v.into());
        self
    }

    /// Replaces the contents of [classifiers][UpdateCrawlerRequest::classifiers].
    pub fn set_classifiers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.classifiers = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [classifiers][UpdateCrawlerRequest::classifiers], creating the list if unset.
    pub fn add_classifiers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.classifiers
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [table_prefix][UpdateCrawlerRequest::table_prefix].
    pub fn set_table_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.table_prefix = Some(v.into());
        self
    }

    /// Sets the value of [schema_change_policy][UpdateCrawlerRequest::schema_change_policy].
    pub fn set_schema_change_policy<T: Into<SchemaChangePolicy>>(mut self, v: T) -> Self {
        self.schema_change_policy = Some(v.into());
        self
    }

    /// Sets the value of [configuration][UpdateCrawlerRequest::configuration].
    pub fn set_configuration<T: Into<String>>(mut self, v: T) -> Self {
        self.configuration = Some(v.into());
        self
    }

    /// Sets the value of [crawler_security_configuration][UpdateCrawlerRequest::crawler_security_configuration].
    pub fn set_crawler_security_configuration<T: Into<String>>(mut self, v: T) -> Self {
        self.crawler_security_configuration = Some(v.into());
        self
    }
}

/// Response message for `UpdateCrawler`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateCrawlerResult {}

impl UpdateCrawlerResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `DeleteCrawler`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteCrawlerRequest {
    /// The name of the crawler to remove.
    pub name: Option<String>,
}

impl DeleteCrawlerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][DeleteCrawlerRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Response message for `DeleteCrawler`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteCrawlerResult {}

impl DeleteCrawlerResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `StartCrawler`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartCrawlerRequest {
    /// Name of the crawler to start.
    pub name: Option<String>,
}

impl StartCrawlerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][StartCrawlerRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Response message for `StartCrawler`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartCrawlerResult {}

impl StartCrawlerResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `StopCrawler`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StopCrawlerRequest {
    /// Name of the crawler to stop.
    pub name: Option<String>,
}

impl StopCrawlerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][StopCrawlerRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Response message for `StopCrawler`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StopCrawlerResult {}

impl StopCrawlerResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `StartCrawlerSchedule`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartCrawlerScheduleRequest {
    /// Name of the crawler to schedule.
    pub crawler_name: Option<String>,
}

impl StartCrawlerScheduleRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [crawler_name][StartCrawlerScheduleRequest::crawler_name].
    pub fn set_crawler_name<T: Into<String>>(mut self, v: T) -> Self {
        self.crawler_name = Some(v.into());
        self
    }
}

/// Response message for `StartCrawlerSchedule`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartCrawlerScheduleResult {}

impl StartCrawlerScheduleResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `StopCrawlerSchedule`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StopCrawlerScheduleRequest {
    /// Name of the crawler whose schedule state to set.
    pub crawler_name: Option<String>,
}

impl StopCrawlerScheduleRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [crawler_name][StopCrawlerScheduleRequest::crawler_name].
    pub fn set_crawler_name<T: Into<String>>(mut self, v: T) -> Self {
        self.crawler_name = Some(v.into());
        self
    }
}

/// Response message for `StopCrawlerSchedule`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StopCrawlerScheduleResult {}

impl StopCrawlerScheduleResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `UpdateCrawlerSchedule`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateCrawlerScheduleRequest {
    /// The name of the crawler whose schedule to update.
    pub crawler_name: Option<String>,

    /// The updated `cron` expression used to specify the schedule.
    pub schedule: Option<String>,
}

impl UpdateCrawlerScheduleRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [crawler_name][UpdateCrawlerScheduleRequest::crawler_name].
    pub fn set_crawler_name<T: Into<String>>(mut self, v: T) -> Self {
        self.crawler_name = Some(v.into());
        self
    }

    /// Sets the value of [schedule][UpdateCrawlerScheduleRequest::schedule].
    pub fn set_schedule<T: Into<String>>(mut self, v: T) -> Self {
        self.schedule = Some(v.into());
        self
    }
}

/// Response message for `UpdateCrawlerSchedule`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateCrawlerScheduleResult {}

impl UpdateCrawlerScheduleResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `GetCrawlerMetrics`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetCrawlerMetricsRequest {
    /// A list of the names of crawlers about which to retrieve metrics.
    pub crawler_name_list: Option<Vec<String>>,

    /// The maximum size of a list to return.
    pub max_results: Option<i32>,

    /// A continuation token, if this is a continuation call.
    pub next_token: Option<String>,
}

impl GetCrawlerMetricsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [crawler_name_list][GetCrawlerMetricsRequest::crawler_name_list].
    pub fn set_crawler_name_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.crawler_name_list = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [crawler_name_list][GetCrawlerMetricsRequest::crawler_name_list], creating the list if unset.
    pub fn add_crawler_name_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.crawler_name_list
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [max_results][GetCrawlerMetricsRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }

    /// Sets the value of [next_token][GetCrawlerMetricsRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Response message for `GetCrawlerMetrics`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetCrawlerMetricsResult {
    /// A list of metrics for the specified crawler.
    pub crawler_metrics_list: Option<Vec<CrawlerMetrics>>,

    /// A continuation token, if the returned list does not contain the last
    /// metric available.
    pub next_token: Option<String>,
}

impl GetCrawlerMetricsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [crawler_metrics_list][GetCrawlerMetricsResult::crawler_metrics_list].
    pub fn set_crawler_metrics_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<CrawlerMetrics>,
    {
        self.crawler_metrics_list = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [crawler_metrics_list][GetCrawlerMetricsResult::crawler_metrics_list], creating the list if unset.
    pub fn add_crawler_metrics_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<CrawlerMetrics>,
    {
        self.crawler_metrics_list
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][GetCrawlerMetricsResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Request message for `ListCrawlers`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListCrawlersRequest {
    /// The maximum size of a list to return.
    pub max_results: Option<i32>,

    /// A continuation token, if this is a continuation request.
    pub next_token: Option<String>,

    /// Specifies to return only these tagged resources.
    pub tags: Option<HashMap<String, String>>,
}

impl ListCrawlersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [max_results][ListCrawlersRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }

    /// Sets the value of [next_token][ListCrawlersRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Replaces the contents of [tags][ListCrawlersRequest::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [tags][ListCrawlersRequest::tags], failing on a duplicate key.
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

    /// Resets [tags][ListCrawlersRequest::tags] to unset.
    pub fn clear_tags(mut self) -> Self {
        self.tags = None;
        self
    }
}

/// Response message for `ListCrawlers`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListCrawlersResult {
    /// The names of all crawlers in the account, or the crawlers with the
    /// specified tags.
    pub crawler_names: Option<Vec<String>>,

    /// A continuation token, if the returned list does not contain the last
    /// metric available.
    pub next_token: Option<String>,
}

impl ListCrawlersResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [crawler_names][ListCrawlersResult::crawler_names].
    pub fn set_crawler_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.crawler_names = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [crawler_names][ListCrawlersResult::crawler_names], creating the list if unset.
    pub fn add_crawler_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.crawler_names
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][ListCrawlersResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}
