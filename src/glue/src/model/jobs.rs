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

/// The condition state of a job run.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum JobRunState {
    Starting,
    Running,
    Stopping,
    Stopped,
    Succeeded,
    Failed,
    Timeout,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [JobRunState::as_str].
    UnknownValue(String),
}

impl JobRunState {
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

impl From<&str> for JobRunState {
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

impl std::fmt::Display for JobRunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for JobRunState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for JobRunState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The type of predefined worker that is allocated when a job runs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum WorkerType {
    /// Each worker provides 4 vCPU, 16 GB of memory and a 50GB disk, and 2
    /// executors per worker.
    Standard,
    /// Each worker maps to 1 DPU (4 vCPU, 16 GB of memory, 64 GB disk), and
    /// provides 1 executor per worker.
    G1X,
    /// Each worker maps to 2 DPU (8 vCPU, 32 GB of memory, 128 GB disk),
    /// and provides 1 executor per worker.
    G2X,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [WorkerType::as_str].
    UnknownValue(String),
}

impl WorkerType {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Standard => "Standard",
            Self::G1X => "G.1X",
            Self::G2X => "G.2X",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for WorkerType {
    fn from(value: &str) -> Self {
        match value {
            "Standard" => Self::Standard,
            "G.1X" => Self::G1X,
            "G.2X" => Self::G2X,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for WorkerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for WorkerType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for WorkerType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// Specifies code executed when a job is run.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct JobCommand {
    /// The name of the job command. For an Apache Spark ETL job, this must
    /// be `glueetl`. For a Python shell job, it must be `pythonshell`.
    pub name: Option<String>,

    /// Specifies the Amazon S3 path to a script that executes a job.
    pub script_location: Option<String>,

    /// The Python version being used to execute a Python shell job.
    /// Allowed values are 2 or 3.
    pub python_version: Option<String>,
}

impl JobCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][JobCommand::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [script_location][JobCommand::script_location].
    pub fn set_script_location<T: Into<String>>(mut self, v: T) -> Self {
        self.script_location = Some(v.into());
        self
    }

    /// Sets the value of [python_version][JobCommand::python_version].
    pub fn set_python_version<T: Into<String>>(mut self, v: T) -> Self {
        self.python_version = Some(v.into());
        self
    }
}

/// An execution property of a job.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ExecutionProperty {
    /// The maximum number of concurrent runs allowed for the job. The
    /// default is 1. An error is returned when this threshold is reached.
    pub max_concurrent_runs: Option<i32>,
}

impl ExecutionProperty {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [max_concurrent_runs][ExecutionProperty::max_concurrent_runs].
    pub fn set_max_concurrent_runs<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_concurrent_runs = Some(v.into());
        self
    }
}

/// Specifies the connections used by a job.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ConnectionsList {
    /// A list of connections used by the job.
    pub connections: Option<Vec<String>>,
}

impl ConnectionsList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [connections][ConnectionsList::connections].
    pub fn set_connections<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.connections = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [connections][ConnectionsList::connections], creating the list if unset.
    pub fn add_connections<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.connections
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Specifies configuration properties of a notification.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct NotificationProperty {
    /// After a job run starts, the number of minutes to wait before sending
    /// a job run delay notification.
    pub notify_delay_after: Option<i32>,
}

impl NotificationProperty {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [notify_delay_after][NotificationProperty::notify_delay_after].
    pub fn set_notify_delay_after<T: Into<i32>>(mut self, v: T) -> Self {
        self.notify_delay_after = Some(v.into());
        self
    }
}

/// Specifies a job definition.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Job {
    /// The name you assign to this job definition.
    pub name: Option<String>,

    /// A description of the job.
    pub description: Option<String>,

    /// This field is reserved for future use.
    pub log_uri: Option<String>,

    /// The name or Amazon Resource Name (ARN) of the IAM role associated
    /// with this job.
    pub role: Option<String>,

    /// The time and date that this job definition was created.
    pub created_on: Option<wkt::Timestamp>,

    /// The last point in time when this job definition was modified.
    pub last_modified_on: Option<wkt::Timestamp>,

    /// An `ExecutionProperty` specifying the maximum number of concurrent
    /// runs allowed for this job.
    pub execution_property: Option<ExecutionProperty>,

    /// The `JobCommand` that executes this job.
    pub command: Option<JobCommand>,

    /// The default arguments for this job, specified as name-value pairs.
    pub default_arguments: Option<HashMap<String, String>>,

    /// Non-overridable arguments for this job, specified as name-value
    /// pairs.
    pub non_overridable_arguments: Option<HashMap<String, String>>,

    /// The connections used for this job.
    pub connections: Option<ConnectionsList>,

    /// The maximum number of times to retry this job after a JobRun fails.
    pub max_retries: Option<i32>,

    /// This field is deprecated. Use `MaxCapacity` instead.
    pub allocated_capacity: Option<i32>,

    /// The job timeout in minutes. This is the maximum time that a job run
    /// can consume resources before it is terminated and enters `TIMEOUT`
    /// status. The default is 2,880 minutes (48 hours).
    pub timeout: Option<i32>,

    /// The number of Glue data processing units (DPUs) that can be
    /// allocated when this job runs. A DPU is a relative measure of
    /// processing power that consists of 4 vCPUs of compute capacity and 16
    /// GB of memory.
    pub max_capacity: Option<f64>,

    /// The type of predefined worker that is allocated when a job runs.
    pub worker_type: Option<WorkerType>,

    /// The number of workers of a defined `workerType` that are allocated
    /// when a job runs.
    pub number_of_workers: Option<i32>,

    /// The name of the `SecurityConfiguration` structure to be used with
    /// this job.
    pub security_configuration: Option<String>,

    /// Specifies configuration properties of a job notification.
    pub notification_property: Option<NotificationProperty>,

    /// Glue version determines the versions of Apache Spark and Python
    /// that Glue supports.
    pub glue_version: Option<String>,
}

impl Job {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Job::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][Job::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [log_uri][Job::log_uri].
    pub fn set_log_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.log_uri = Some(v.into());
        self
    }

    /// Sets the value of [role][Job::role].
    pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
        self.role = Some(v.into());
        self
    }

    /// Sets the value of [created_on][Job::created_on].
    pub fn set_created_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.created_on = Some(v.into());
        self
    }

    /// Sets the value of [last_modified_on][Job::last_modified_on].
    pub fn set_last_modified_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_modified_on = Some(v.into());
        self
    }

    /// Sets the value of [execution_property][Job::execution_property].
    pub fn set_execution_property<T: Into<ExecutionProperty>>(mut self, v: T) -> Self {
        self.execution_property = Some(v.into());
        self
    }

    /// Sets the value of [command][Job::command].
    pub fn set_command<T: Into<JobCommand>>(mut self, v: T) -> Self {
        self.command = Some(v.into());
        self
    }

    /// Replaces the contents of [default_arguments][Job::default_arguments].
    pub fn set_default_arguments<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.default_arguments = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [default_arguments][Job::default_arguments], failing on a duplicate key.
    pub fn add_default_arguments_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.default_arguments.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "DefaultArguments",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [default_arguments][Job::default_arguments] to unset.
    pub fn clear_default_arguments(mut self) -> Self {
        self.default_arguments = None;
        self
    }

    /// Replaces the contents of [non_overridable_arguments][Job::non_overridable_arguments].
    pub fn set_non_overridable_arguments<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.non_overridable_arguments =
            Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [non_overridable_arguments][Job::non_overridable_arguments], failing on a duplicate key.
    pub fn add_non_overridable_arguments_entry<K, V>(
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
            .non_overridable_arguments
            .get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "NonOverridableArguments",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [non_overridable_arguments][Job::non_overridable_arguments] to unset.
    pub fn clear_non_overridable_arguments(mut self) -> Self {
        self.non_overridable_arguments = None;
        self
    }

    /// Sets the value of [connections][Job::connections].
    pub fn set_connections<T: Into<ConnectionsList>>(mut self, v: T) -> Self {
        self.connections = Some(v.into());
        self
    }

    /// Sets the value of [max_retries][Job::max_retries].
    pub fn set_max_retries<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_retries = Some(v.into());
        self
    }

    /// Sets the value of [allocated_capacity][Job::allocated_capacity].
    pub fn set_allocated_capacity<T: Into<i32>>(mut self, v: T) -> Self {
        self.allocated_capacity = Some(v.into());
        self
    }

    /// Sets the value of [timeout][Job::timeout].
    pub fn set_timeout<T: Into<i32>>(mut self, v: T) -> Self {
        self.timeout = Some(v.into());
        self
    }

    /// Sets the value of [max_capacity][Job::max_capacity].
    pub fn set_max_capacity<T: Into<f64>>(mut self, v: T) -> Self {
        self.max_capacity = Some(v.into());
        self
    }

    /// Sets the value of [worker_type][Job::worker_type].
    pub fn set_worker_type<T: Into<WorkerType>>(mut self, v: T) -> Self {
        self.worker_type = Some(v.into());
        self
    }

    /// Sets the value of [number_of_workers][Job::number_of_workers].
    pub fn set_number_of_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.number_of_workers = Some(v.into());
        self
    }

    /// Sets the value of [security_configuration][Job::security_configuration].
    pub fn set_security_configuration<T: Into<String>>(mut self, v: T) -> Self {
        self.security_configuration = Some(v.into());
        self
    }

    /// Sets the value of [notification_property][Job::notification_property].
    pub fn set_notification_property<T: Into<NotificationProperty>>(mut self, v: T) -> Self {
        self.notification_property = Some(v.into());
        self
    }

    /// Sets the value of [glue_version][Job::glue_version].
    pub fn set_glue_version<T: Into<String>>(mut self, v: T) -> Self {
        self.glue_version = Some(v.into());
        self
    }
}

/// Specifies information used to update an existing job definition. The
/// previous job definition is completely overwritten by this information.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct JobUpdate {
    /// A description of the job being defined.
    pub description: Option<String>,

    /// This field is reserved for future use.
    pub log_uri: Option<String>,

    /// The name or Amazon Resource Name (ARN) of the IAM role associated
    /// with this job (required).
    pub role: Option<String>,

    /// An `ExecutionProperty` specifying the maximum number of concurrent
    /// runs allowed for this job.
    pub execution_property: Option<ExecutionProperty>,

    /// The `JobCommand` that executes this job (required).
    pub command: Option<JobCommand>,

    /// The default arguments for this job.
    pub default_arguments: Option<HashMap<String, String>>,

    /// Non-overridable arguments for this job, specified as name-value
    /// pairs.
    pub non_overridable_arguments: Option<HashMap<String, String>>,

    /// The connections used for this job.
    pub connections: Option<ConnectionsList>,

    /// The maximum number of times to retry this job if it fails.
    pub max_retries: Option<i32>,

    /// This field is deprecated. Use `MaxCapacity` instead.
    pub allocated_capacity: Option<i32>,

    /// The job timeout in minutes.
    pub timeout: Option<i32>,

    /// The number of Glue data processing units (DPUs) that can be
    /// allocated when this job runs.
    pub max_capacity: Option<f64>,

    /// The type of predefined worker that is allocated when a job runs.
    pub worker_type: Option<WorkerType>,

    /// The number of workers of a defined `workerType` that are allocated
    /// when a job runs.
    pub number_of_workers: Option<i32>,

    /// The name of the `SecurityConfiguration` structure to be used with
    /// this job.
    pub security_configuration: Option<String>,

    /// Specifies the configuration properties of a job notification.
    pub notification_property: Option<NotificationProperty>,

    /// Glue version determines the versions of Apache Spark and Python
    /// that Glue supports.
    pub glue_version: Option<String>,
}

impl JobUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [description][JobUpdate::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [log_uri][JobUpdate::log_uri].
    pub fn set_log_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.log_uri = Some(v.into());
        self
    }

    /// Sets the value of [role][JobUpdate::role].
    pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
        self.role = Some(v.into());
        self
    }

    /// Sets the value of [execution_property][JobUpdate::execution_property].
    pub fn set_execution_property<T: Into<ExecutionProperty>>(mut self, v: T) -> Self {
        self.execution_property = Some(v.into());
        self
    }

    /// Sets the value of [command][JobUpdate::command].
    pub fn set_command<T: Into<JobCommand>>(mut self, v: T) -> Self {
        self.command = Some(v.into());
        self
    }

    /// Replaces the contents of [default_arguments][JobUpdate::default_arguments].
    pub fn set_default_arguments<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.default_arguments = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [default_arguments][JobUpdate::default_arguments], failing on a duplicate key.
    pub fn add_default_arguments_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.default_arguments.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "DefaultArguments",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [default_arguments][JobUpdate::default_arguments] to unset.
    pub fn clear_default_arguments(mut self) -> Self {
        self.default_arguments = None;
        self
    }

    /// Replaces the contents of [non_overridable_arguments][JobUpdate::non_overridable_arguments].
    pub fn set_non_overridable_arguments<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.non_overridable_arguments =
            Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [non_overridable_arguments][JobUpdate::non_overridable_arguments], failing on a duplicate key.
    pub fn add_non_overridable_arguments_entry<K, V>(
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
            .non_overridable_arguments
            .get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "NonOverridableArguments",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [non_overridable_arguments][JobUpdate::non_overridable_arguments] to unset.
    pub fn clear_non_overridable_arguments(mut self) -> Self {
        self.non_overridable_arguments = None;
        self
    }

    /// Sets the value of [connections][JobUpdate::connections].
    pub fn set_connections<T: Into<ConnectionsList>>(mut self, v: T) -> Self {
        self.connections = Some(v.into());
        self
    }

    /// Sets the value of [max_retries][JobUpdate::max_retries].
    pub fn set_max_retries<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_retries = Some(v.into());
        self
    }

    /// Sets the value of [allocated_capacity][JobUpdate::allocated_capacity].
    pub fn set_allocated_capacity<T: Into<i32>>(mut self, v: T) -> Self {
        self.allocated_capacity = Some(v.into());
        self
    }

    /// Sets the value of [timeout][JobUpdate::timeout].
    pub fn set_timeout<T: Into<i32>>(mut self, v: T) -> Self {
        self.timeout = Some(v.into());
        self
    }

    /// Sets the value of [max_capacity][JobUpdate::max_capacity].
    pub fn set_max_capacity<T: Into<f64>>(mut self, v: T) -> Self {
        self.max_capacity = Some(v.into());
        self
    }

    /// Sets the value of [worker_type][JobUpdate::worker_type].
    pub fn set_worker_type<T: Into<WorkerType>>(mut self, v: T) -> Self {
        self.worker_type = Some(v.into());
        self
    }

    /// Sets the value of [number_of_workers][JobUpdate::number_of_workers].
    pub fn set_number_of_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.number_of_workers = Some(v.into());
        self
    }

    /// Sets the value of [security_configuration][JobUpdate::security_configuration].
    pub fn set_security_configuration<T: Into<String>>(mut self, v: T) -> Self {
        self.security_configuration = Some(v.into());
        self
    }

    /// Sets the value of [notification_property][JobUpdate::notification_property].
    pub fn set_notification_property<T: Into<NotificationProperty>>(mut self, v: T) -> Self {
        self.notification_property = Some(v.into());
        self
    }

    /// Sets the value of [glue_version][JobUpdate::glue_version].
    pub fn set_glue_version<T: Into<String>>(mut self, v: T) -> Self {
        self.glue_version = Some(v.into());
        self
    }
}

/// A job run that was used in the predicate of a conditional trigger that
/// triggered this job run.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Predecessor {
    /// The name of the job definition used by the predecessor job run.
    pub job_name: Option<String>,

    /// The job-run ID of the predecessor job run.
    pub run_id: Option<String>,
}

impl Predecessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_name][Predecessor::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Sets the value of [run_id][Predecessor::run_id].
    pub fn set_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.run_id = Some(v.into());
        self
    }
}

/// Contains information about a job run.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct JobRun {
    /// The ID of this job run.
    pub id: Option<String>,

    /// The number of the attempt to run this job.
    pub attempt: Option<i32>,

    /// The ID of the previous run of this job. For example, the `JobRunId`
    /// specified in the `StartJobRun` action.
    pub previous_run_id: Option<String>,

    /// The name of the trigger that started this job run.
    pub trigger_name: Option<String>,

    /// The name of the job definition being used in this run.
    pub job_name: Option<String>,

    /// The date and time at which this job run was started.
    pub started_on: Option<wkt::Timestamp>,

    /// The last time that this job run was modified.
    pub last_modified_on: Option<wkt::Timestamp>,

    /// The date and time that this job run completed.
    pub completed_on: Option<wkt::Timestamp>,

    /// The current state of the job run.
    pub job_run_state: Option<JobRunState>,

    /// The job arguments associated with this run. For this job run, they
    /// replace the default arguments set in the job definition itself.
    pub arguments: Option<HashMap<String, String>>,

    /// An error message associated with this job run.
    pub error_message: Option<String>,

    /// A list of predecessors to this job run.
    pub predecessor_runs: Option<Vec<Predecessor>>,

    /// This field is deprecated. Use `MaxCapacity` instead.
    pub allocated_capacity: Option<i32>,

    /// The amount of time (in seconds) that the job run consumed resources.
    pub execution_time: Option<i32>,

    /// The `JobRun` timeout in minutes.
    pub timeout: Option<i32>,

    /// The number of Glue data processing units (DPUs) that can be
    /// allocated when this job runs.
    pub max_capacity: Option<f64>,

    /// The type of predefined worker that is allocated when a job runs.
    pub worker_type: Option<WorkerType>,

    /// The number of workers of a defined `workerType` that are allocated
    /// when a job runs.
    pub number_of_workers: Option<i32>,

    /// The name of the `SecurityConfiguration` structure to be used with
    /// this job run.
    pub security_configuration: Option<String>,

    /// The name of the log group for secure logging that can be server-side
    /// encrypted in Amazon CloudWatch using KMS.
    pub log_group_name: Option<String>,

    /// Specifies configuration properties of a job run notification.
    pub notification_property: Option<NotificationProperty>,

    /// Glue version determines the versions of Apache Spark and Python
    /// that Glue supports.
    pub glue_version: Option<String>,
}

impl JobRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][JobRun::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [attempt][JobRun::attempt].
    pub fn set_attempt<T: Into<i32>>(mut self, v: T) -> Self {
        self.attempt = Some(v.into());
        self
    }

    /// Sets the value of [previous_run_id][JobRun::previous_run_id].
    pub fn set_previous_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.previous_run_id = Some(v.into());
        self
    }

    /// Sets the value of [trigger_name][JobRun::trigger_name].
    pub fn set_trigger_name<T: Into<String>>(mut self, v: T) -> Self {
        self.trigger_name = Some(v.into());
        self
    }

    /// Sets the value of [job_name][JobRun::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Sets the value of [started_on][JobRun::started_on].
    pub fn set_started_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.started_on = Some(v.into());
        self
    }

    /// Sets the value of [last_modified_on][JobRun::last_modified_on].
    pub fn set_last_modified_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_modified_on = Some(v.into());
        self
    }

    /// Sets the value of [completed_on][JobRun::completed_on].
    pub fn set_completed_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.completed_on = Some(v.into());
        self
    }

    /// Sets the value of [job_run_state][JobRun::job_run_state].
    pub fn set_job_run_state<T: Into<JobRunState>>(mut self, v: T) -> Self {
        self.job_run_state = Some(v.into());
        self
    }

    /// Replaces the contents of [arguments][JobRun::arguments].
    pub fn set_arguments<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.arguments = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [arguments][JobRun::arguments], failing on a duplicate key.
    pub fn add_arguments_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.arguments.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "Arguments",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [arguments][JobRun::arguments] to unset.
    pub fn clear_arguments(mut self) -> Self {
        self.arguments = None;
        self
    }

    /// Sets the value of [error_message][JobRun::error_message].
    pub fn set_error_message<T: Into<String>>(mut self, v: T) -> Self {
        self.error_message = Some(v.into());
        self
    }

    /// Replaces the contents of [predecessor_runs][JobRun::predecessor_runs].
    pub fn set_predecessor_runs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Predecessor>,
    {
        self.predecessor_runs = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [predecessor_runs][JobRun::predecessor_runs], creating the list if unset.
    pub fn add_predecessor_runs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Predecessor>,
    {
        self.predecessor_runs
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [allocated_capacity][JobRun::allocated_capacity].
    pub fn set_allocated_capacity<T: Into<i32>>(mut self, v: T) -> Self {
        self.allocated_capacity = Some(v.into());
        self
    }

    /// Sets the value of [execution_time][JobRun::execution_time].
    pub fn set_execution_time<T: Into<i32>>(mut self, v: T) -> Self {
        self.execution_time = Some(v.into());
        self
    }

    /// Sets the value of [timeout][JobRun::timeout].
    pub fn set_timeout<T: Into<i32>>(mut self, v: T) -> Self {
        self.timeout = Some(v.into());
        self
    }

    /// Sets the value of [max_capacity][JobRun::max_capacity].
    pub fn set_max_capacity<T: Into<f64>>(mut self, v: T) -> Self {
        self.max_capacity = Some(v.into());
        self
    }

    /// Sets the value of [worker_type][JobRun::worker_type].
    pub fn set_worker_type<T: Into<WorkerType>>(mut self, v: T) -> Self {
        self.worker_type = Some(v.into());
        self
    }

    /// Sets the value of [number_of_workers][JobRun::number_of_workers].
    pub fn set_number_of_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.number_of_workers = Some(v.into());
        self
    }

    /// Sets the value of [security_configuration][JobRun::security_configuration].
    pub fn set_security_configuration<T: Into<String>>(mut self, v: T) -> Self {
        self.security_configuration = Some(v.into());
        self
    }

    /// Sets the value of [log_group_name][JobRun::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [notification_property][JobRun::notification_property].
    pub fn set_notification_property<T: Into<NotificationProperty>>(mut self, v: T) -> Self {
        self.notification_property = Some(v.into());
        self
    }

    /// Sets the value of [glue_version][JobRun::glue_version].
    pub fn set_glue_version<T: Into<String>>(mut self, v: T) -> Self {
        self.glue_version = Some(v.into());
        self
    }
}

/// Defines a point that a job can resume processing.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct JobBookmarkEntry {
    /// The name of the job in question.
    pub job_name: Option<String>,

    /// The version of the job.
    pub version: Option<i32>,

    /// The run ID number.
    pub run: Option<i32>,

    /// The attempt ID number.
    pub attempt: Option<i32>,

    /// The unique run identifier associated with the previous job run.
    pub previous_run_id: Option<String>,

    /// The run ID number.
    pub run_id: Option<String>,

    /// The bookmark itself.
    pub job_bookmark: Option<String>,
}

impl JobBookmarkEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_name][JobBookmarkEntry::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Sets the value of [version][JobBookmarkEntry::version].
    pub fn set_version<T: Into<i32>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }

    /// Sets the value of [run][JobBookmarkEntry::run].
    pub fn set_run<T: Into<i32>>(mut self, v: T) -> Self {
        self.run = Some(v.into());
        self
    }

    /// Sets the value of [attempt][JobBookmarkEntry::attempt].
    pub fn set_attempt<T: Into<i32>>(mut self, v: T) -> Self {
        self.attempt = Some(v.into());
        self
    }

    /// Sets the value of [previous_run_id][JobBookmarkEntry::previous_run_id].
    pub fn set_previous_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.previous_run_id = Some(v.into());
        self
    }

    /// Sets the value of [run_id][JobBookmarkEntry::run_id].
    pub fn set_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.run_id = Some(v.into());
        self
    }

    /// Sets the value of [job_bookmark][JobBookmarkEntry::job_bookmark].
    pub fn set_job_bookmark<T: Into<String>>(mut self, v: T) -> Self {
        self.job_bookmark = Some(v.into());
        self
    }
}

/// Request message for `CreateJob`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateJobRequest {
    /// The name you assign to this job definition. It must be unique in
    /// your account.
    pub name: Option<String>,

    /// Description of the job being defined.
    pub description: Option<String>,

    /// This field is reserved for future use.
    pub log_uri: Option<String>,

    /// The name or Amazon Resource Name (ARN) of the IAM role associated
    /// with this job.
    pub role: Option<String>,

    /// An `ExecutionProperty` specifying the maximum number of concurrent
    /// runs allowed for this job.
    pub execution_property: Option<ExecutionProperty>,

    /// The `JobCommand` that executes this job.
    pub command: Option<JobCommand>,

    /// The default arguments for this job.
    pub default_arguments: Option<HashMap<String, String>>,

    /// Non-overridable arguments for this job, specified as name-value
    /// pairs.
    pub non_overridable_arguments: Option<HashMap<String, String>>,

    /// The connections used for this job.
    pub connections: Option<ConnectionsList>,

    /// The maximum number of times to retry this job if it fails.
    pub max_retries: Option<i32>,

    /// This parameter is deprecated. Use `MaxCapacity` instead.
    pub allocated_capacity: Option<i32>,

    /// The job timeout in minutes.
    pub timeout: Option<i32>,

    /// The number of Glue data processing units (DPUs) that can be
    /// allocated when this job runs.
    pub max_capacity: Option<f64>,

    /// The name of the `SecurityConfiguration` structure to be used with
    /// this job.
    pub security_configuration: Option<String>,

    /// The tags to use with this job. You may use tags to limit access to
    /// the job.
    pub tags: Option<HashMap<String, String>>,

    /// Specifies configuration properties of a job notification.
    pub notification_property: Option<NotificationProperty>,

    /// Glue version determines the versions of Apache Spark and Python
    /// that Glue supports.
    pub glue_version: Option<String>,

    /// The number of workers of a defined `workerType` that are allocated
    /// when a job runs.
    pub number_of_workers: Option<i32>,

    /// The type of predefined worker that is allocated when a job runs.
    pub worker_type: Option<WorkerType>,
}

impl CreateJobRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][CreateJobRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][CreateJobRequest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [log_uri][CreateJobRequest::log_uri].
    pub fn set_log_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.log_uri = Some(v.into());
        self
    }

    /// Sets the value of [role][CreateJobRequest::role].
    pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
        self.role = Some(v.into());
        self
    }

    /// Sets the value of [execution_property][CreateJobRequest::execution_property].
    pub fn set_execution_property<T: Into<ExecutionProperty>>(mut self, v: T) -> Self {
        self.execution_property = Some(v.into());
        self
    }

    /// Sets the value of [command][CreateJobRequest::command].
    pub fn set_command<T: Into<JobCommand>>(mut self, v: T) -> Self {
        self.command = Some(v.into());
        self
    }

    /// Replaces the contents of [default_arguments][CreateJobRequest::default_arguments].
    pub fn set_default_arguments<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.default_arguments = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [default_arguments][CreateJobRequest::default_arguments], failing on a duplicate key.
    pub fn add_default_arguments_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.default_arguments.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "DefaultArguments",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [default_arguments][CreateJobRequest::default_arguments] to unset.
    pub fn clear_default_arguments(mut self) -> Self {
        self.default_arguments = None;
        self
    }

    /// Replaces the contents of [non_overridable_arguments][CreateJobRequest::non_overridable_arguments].
    pub fn set_non_overridable_arguments<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.non_overridable_arguments =
            Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [non_overridable_arguments][CreateJobRequest::non_overridable_arguments], failing on a duplicate key.
    pub fn add_non_overridable_arguments_entry<K, V>(
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
            .non_overridable_arguments
            .get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "NonOverridableArguments",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [non_overridable_arguments][CreateJobRequest::non_overridable_arguments] to unset.
    pub fn clear_non_overridable_arguments(mut self) -> Self {
        self.non_overridable_arguments = None;
        self
    }

    /// Sets the value of [connections][CreateJobRequest::connections].
    pub fn set_connections<T: Into<ConnectionsList>>(mut self, v: T) -> Self {
        self.connections = Some(v.into());
        self
    }

    /// Sets the value of [max_retries][CreateJobRequest::max_retries].
    pub fn set_max_retries<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_retries = Some(v.into());
        self
    }

    /// Sets the value of [allocated_capacity][CreateJobRequest::allocated_capacity].
    pub fn set_allocated_capacity<T: Into<i32>>(mut self, v: T) -> Self {
        self.allocated_capacity = Some(v.into());
        self
    }

    /// Sets the value of [timeout][CreateJobRequest::timeout].
    pub fn set_timeout<T: Into<i32>>(mut self, v: T) -> Self {
        self.timeout = Some(v.into());
        self
    }

    /// Sets the value of [max_capacity][CreateJobRequest::max_capacity].
    pub fn set_max_capacity<T: Into<f64>>(mut self, v: T) -> Self {
        self.max_capacity = Some(v.into());
        self
    }

    /// Sets the value of [security_configuration][CreateJobRequest::security_configuration].
    pub fn set_security_configuration<T: Into<String>>(mut self, v: T) -> Self {
        self.security_configuration = Some(v.into());
        self
    }

    /// Replaces the contents of [tags][CreateJobRequest::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [tags][CreateJobRequest::tags], failing on a duplicate key.
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

    /// Resets [tags][CreateJobRequest::tags] to unset.
    pub fn clear_tags(mut self) -> Self {
        self.tags = None;
        self
    }

    /// Sets the value of [notification_property][CreateJobRequest::notification_property].
    pub fn set_notification_property<T: Into<NotificationProperty>>(mut self, v: T) -> Self {
        self.notification_property = Some(v.into());
        self
    }

    /// Sets the value of [glue_version][CreateJobRequest::glue_version].
    pub fn set_glue_version<T: Into<String>>(mut self, v: T) -> Self {
        self.glue_version = Some(v.into());
        self
    }

    /// Sets the value of [number_of_workers][CreateJobRequest::number_of_workers].
    pub fn set_number_of_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.number_of_workers = Some(v.into());
        self
    }

    /// Sets the value of [worker_type][CreateJobRequest::worker_type].
    pub fn set_worker_type<T: Into<WorkerType>>(mut self, v: T) -> Self {
        self.worker_type = Some(v.into());
        self
    }
}

/// Response message for `CreateJob`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateJobResult {
    /// The unique name that was provided for this job definition.
    pub name: Option<String>,
}

impl CreateJobResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][CreateJobResult::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Request message for `GetJob`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetJobRequest {
    /// The name of the job definition to retrieve.
    pub job_name: Option<String>,
}

impl GetJobRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_name][GetJobRequest::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }
}

/// Response message for `GetJob`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetJobResult {
    /// The requested job definition.
    pub job: Option<Job>,
}

impl GetJobResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job][GetJobResult::job].
    pub fn set_job<T: Into<Job>>(mut self, v: T) -> Self {
        self.job = Some(v.into());
        self
    }
}

/// Request message for `GetJobs`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetJobsRequest {
    /// A continuation token, if this is a continuation call.
    pub next_token: Option<String>,

    /// The maximum size of the response.
    pub max_results: Option<i32>,
}

impl GetJobsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [next_token][GetJobsRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [max_results][GetJobsRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }
}

/// Response message for `GetJobs`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetJobsResult {
    /// A list of job definitions.
    pub jobs: Option<Vec<Job>>,

    /// A continuation token, if not all job definitions have yet been
    /// returned.
    pub next_token: Option<String>,
}

impl GetJobsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [jobs][GetJobsResult::jobs].
    pub fn set_jobs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Job>,
    {
        self.jobs = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [jobs][GetJobsResult::jobs], creating the list if unset.
    pub fn add_jobs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Job>,
    {
        self.jobs
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][GetJobsResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Request message for `BatchGetJobs`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchGetJobsRequest {
    /// A list of job names, which might be the names returned from the
    /// `ListJobs` operation.
    pub job_names: Option<Vec<String>>,
}

impl BatchGetJobsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [job_names][BatchGetJobsRequest::job_names].
    pub fn set_job_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.job_names = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [job_names][BatchGetJobsRequest::job_names], creating the list if unset.
    pub fn add_job_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.job_names
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `BatchGetJobs`.
///
/// Names that could not be resolved come back in [jobs_not_found]
/// [BatchGetJobsResult::jobs_not_found].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchGetJobsResult {
    /// A list of job definitions.
    pub jobs: Option<Vec<Job>>,

    /// A list of names of jobs not found.
    pub jobs_not_found: Option<Vec<String>>,
}

impl BatchGetJobsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [jobs][BatchGetJobsResult::jobs].
    pub fn set_jobs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Job>,
    {
        self.jobs = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [jobs][BatchGetJobsResult::jobs], creating the list if unset.
    pub fn add_jobs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Job>,
    {
        self.jobs
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [jobs_not_found][BatchGetJobsResult::jobs_not_found].
    pub fn set_jobs_not_found<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.jobs_not_found = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [jobs_not_found][BatchGetJobsResult::jobs_not_found], creating the list if unset.
    pub fn add_jobs_not_found<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.jobs_not_found
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Request message for `UpdateJob`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateJobRequest {
    /// The name of the job definition to update.
    pub job_name: Option<String>,

    /// Specifies the values with which to update the job definition.
    pub job_update: Option<JobUpdate>,
}

impl UpdateJobRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_name][UpdateJobRequest::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Sets the value of [job_update][UpdateJobRequest::job_update].
    pub fn set_job_update<T: Into<JobUpdate>>(mut self, v: T) -> Self {
        self.job_update = Some(v.into());
        self
    }
}

/// Response message for `UpdateJob`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateJobResult {
    /// Returns the name of the updated job definition.
    pub job_name: Option<String>,
}

impl UpdateJobResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_name][UpdateJobResult::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }
}

/// Request message for `DeleteJob`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteJobRequest {
    /// The name of the job definition to delete.
    pub job_name: Option<String>,
}

impl DeleteJobRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_name][DeleteJobRequest::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }
}

/// Response message for `DeleteJob`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteJobResult {
    /// The name of the job definition that was deleted.
    pub job_name: Option<String>,
}

impl DeleteJobResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_name][DeleteJobResult::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }
}

/// Request message for `ListJobs`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListJobsRequest {
    /// A continuation token, if this is a continuation request.
    pub next_token: Option<String>,

    /// The maximum size of a list to return.
    pub max_results: Option<i32>,

    /// Specifies to return only these tagged resources.
    pub tags: Option<HashMap<String, String>>,
}

impl ListJobsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [next_token][ListJobsRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [max_results][ListJobsRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }

    /// Replaces the contents of [tags][ListJobsRequest::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [tags][ListJobsRequest::tags], failing on a duplicate key.
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

    /// Resets [tags][ListJobsRequest::tags] to unset.
    pub fn clear_tags(mut self) -> Self {
        self.tags = None;
        self
    }
}

/// Response message for `ListJobs`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListJobsResult {
    /// The names of all jobs in the account, or the jobs with the specified
    /// tags.
    pub job_names: Option<Vec<String>>,

    /// A continuation token, if the returned list does not contain the last
    /// metric available.
    pub next_token: Option<String>,
}

impl ListJobsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [job_names][ListJobsResult::job_names].
    pub fn set_job_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.job_names = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [job_names][ListJobsResult::job_names], creating the list if unset.
    pub fn add_job_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.job_names
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][ListJobsResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Request message for `StartJobRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartJobRunRequest {
    /// The name of the job definition to use.
    pub job_name: Option<String>,

    /// The ID of a previous `JobRun` to retry.
    pub job_run_id: Option<String>,

    /// The job arguments specifically for this run. For this job run, they
    /// replace the default arguments set in the job definition itself.
    pub arguments: Option<HashMap<String, String>>,

    /// This field is deprecated. Use `MaxCapacity` instead.
    pub allocated_capacity: Option<i32>,

    /// The `JobRun` timeout in minutes.
    pub timeout: Option<i32>,

    /// The number of Glue data processing units (DPUs) that can be
    /// allocated when this job runs.
    pub max_capacity: Option<f64>,

    /// The name of the `SecurityConfiguration` structure to be used with
    /// this job run.
    pub security_configuration: Option<String>,

    /// Specifies configuration properties of a job run notification.
    pub notification_property: Option<NotificationProperty>,

    /// The type of predefined worker that is allocated when a job runs.
    pub worker_type: Option<WorkerType>,

    /// The number of workers of a defined `workerType` that are allocated
    /// when a job runs.
    pub number_of_workers: Option<i32>,
}

impl StartJobRunRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_name][StartJobRunRequest::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Sets the value of [job_run_id][StartJobRunRequest::job_run_id].
    pub fn set_job_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.job_run_id = Some(v.into());
        self
    }

    /// Replaces the contents of [arguments][StartJobRunRequest::arguments].
    pub fn set_arguments<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.arguments = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [arguments][StartJobRunRequest::arguments], failing on a duplicate key.
    pub fn add_arguments_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.arguments.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "Arguments",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [arguments][StartJobRunRequest::arguments] to unset.
    pub fn clear_arguments(mut self) -> Self {
        self.arguments = None;
        self
    }

    /// Sets the value of [allocated_capacity][StartJobRunRequest::allocated_capacity].
    pub fn set_allocated_capacity<T: Into<i32>>(mut self, v: T) -> Self {
        self.allocated_capacity = Some(v.into());
        self
    }

    /// Sets the value of [timeout][StartJobRunRequest::timeout].
    pub fn set_timeout<T: Into<i32>>(mut self, v: T) -> Self {
        self.timeout = Some(v.into());
        self
    }

    /// Sets the value of [max_capacity][StartJobRunRequest::max_capacity].
    pub fn set_max_capacity<T: Into<f64>>(mut self, v: T) -> Self {
        self.max_capacity = Some(v.into());
        self
    }

    /// Sets the value of [security_configuration][StartJobRunRequest::security_configuration].
    pub fn set_security_configuration<T: Into<String>>(mut self, v: T) -> Self {
        self.security_configuration = Some(v.into());
        self
    }

    /// Sets the value of [notification_property][StartJobRunRequest::notification_property].
    pub fn set_notification_property<T: Into<NotificationProperty>>(mut self, v: T) -> Self {
        self.notification_property = Some(v.into());
        self
    }

    /// Sets the value of [worker_type][StartJobRunRequest::worker_type].
    pub fn set_worker_type<T: Into<WorkerType>>(mut self, v: T) -> Self {
        self.worker_type = Some(v.into());
        self
    }

    /// Sets the value of [number_of_workers][StartJobRunRequest::number_of_workers].
    pub fn set_number_of_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.number_of_workers = Some(v.into());
        self
    }
}

/// Response message for `StartJobRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartJobRunResult {
    /// The ID assigned to this job run.
    pub job_run_id: Option<String>,
}

impl StartJobRunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_run_id][StartJobRunResult::job_run_id].
    pub fn set_job_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.job_run_id = Some(v.into());
        self
    }
}

/// Request message for `GetJobRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetJobRunRequest {
    /// Name of the job definition being run.
    pub job_name: Option<String>,

    /// The ID of the job run.
    pub run_id: Option<String>,

    /// True if a list of predecessor runs should be returned.
    pub predecessors_included: Option<bool>,
}

impl GetJobRunRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_name][GetJobRunRequest::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Sets the value of [run_id][GetJobRunRequest::run_id].
    pub fn set_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.run_id = Some(v.into());
        self
    }

    /// Sets the value of [predecessors_included][GetJobRunRequest::predecessors_included].
    pub fn set_predecessors_included<T: Into<bool>>(mut self, v: T) -> Self {
        self.predecessors_included = Some(v.into());
        self
    }
}

/// Response message for `GetJobRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetJobRunResult {
    /// The requested job-run metadata.
    pub job_run: Option<JobRun>,
}

impl GetJobRunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_run][GetJobRunResult::job_run].
    pub fn set_job_run<T: Into<JobRun>>(mut self, v: T) -> Self {
        self.job_run = Some(v.into());
        self
    }
}

/// Request message for `GetJobRuns`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetJobRunsRequest {
    /// The name of the job definition for which to retrieve all job runs.
    pub job_name: Option<String>,

    /// A continuation token, if this is a continuation call.
    pub next_token: Option<String>,

    /// The maximum size of the response.
    pub max_results: Option<i32>,
}

impl GetJobRunsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_name][GetJobRunsRequest::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Sets the value of [next_token][GetJobRunsRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [max_results][GetJobRunsRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }
}

/// Response message for `GetJobRuns`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetJobRunsResult {
    /// A list of job-run metadata objects.
    pub job_runs: Option<Vec<JobRun>>,

    /// A continuation token, if not all requested job runs have been
    /// returned.
    pub next_token: Option<String>,
}

impl GetJobRunsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [job_runs][GetJobRunsResult::job_runs].
    pub fn set_job_runs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<JobRun>,
    {
        self.job_runs = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [job_runs][GetJobRunsResult::job_runs], creating the list if unset.
    pub fn add_job_runs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<JobRun>,
    {
        self.job_runs
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][GetJobRunsResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Records a successful request to stop a specified `JobRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchStopJobRunSuccessfulSubmission {
    /// The name of the job definition used in the job run that was stopped.
    pub job_name: Option<String>,

    /// The `JobRunId` of the job run that was stopped.
    pub job_run_id: Option<String>,
}

impl BatchStopJobRunSuccessfulSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_name][BatchStopJobRunSuccessfulSubmission::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Sets the value of [job_run_id][BatchStopJobRunSuccessfulSubmission::job_run_id].
    pub fn set_job_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.job_run_id = Some(v.into());
        self
    }
}

/// Records an error that occurred when attempting to stop a specified job
/// run.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchStopJobRunError {
    /// The name of the job definition that is used in the job run in
    /// question.
    pub job_name: Option<String>,

    /// The `JobRunId` of the job run in question.
    pub job_run_id: Option<String>,

    /// Specifies details about the error that was encountered.
    pub error_detail: Option<ErrorDetail>,
}

impl BatchStopJobRunError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_name][BatchStopJobRunError::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Sets the value of [job_run_id][BatchStopJobRunError::job_run_id].
    pub fn set_job_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.job_run_id = Some(v.into());
        self
    }

    /// Sets the value of [error_detail][BatchStopJobRunError::error_detail].
    pub fn set_error_detail<T: Into<ErrorDetail>>(mut self, v: T) -> Self {
        self.error_detail = Some(v.into());
        self
    }
}

/// Request message for `BatchStopJobRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchStopJobRunRequest {
    /// The name of the job definition for which to stop job runs.
    pub job_name: Option<String>,

    /// A list of the `JobRunIds` that should be stopped for that job
    /// definition.
    pub job_run_ids: Option<Vec<String>>,
}

impl BatchStopJobRunRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_name][BatchStopJobRunRequest::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Replaces the contents of [job_run_ids][BatchStopJobRunRequest::job_run_ids].
    pub fn set_job_run_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.job_run_ids = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [job_run_ids][BatchStopJobRunRequest::job_run_ids], creating the list if unset.
    pub fn add_job_run_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.job_run_ids
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `BatchStopJobRun`.
///
/// Runs that could not be stopped are reported in [errors]
/// [BatchStopJobRunResult::errors] rather than failing the whole request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchStopJobRunResult {
    /// A list of the JobRuns that were successfully submitted for stopping.
    pub successful_submissions: Option<Vec<BatchStopJobRunSuccessfulSubmission>>,

    /// A list of the errors that were encountered in trying to stop
    /// `JobRuns`, including the `JobRunId` for which each error was
    /// encountered and details about the error.
    pub errors: Option<Vec<BatchStopJobRunError>>,
}

impl BatchStopJobRunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [successful_submissions][BatchStopJobRunResult::successful_submissions].
    pub fn set_successful_submissions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<BatchStopJobRunSuccessfulSubmission>,
    {
        self.successful_submissions = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [successful_submissions][BatchStopJobRunResult::successful_submissions], creating the list if unset.
    pub fn add_successful_submissions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<BatchStopJobRunSuccessfulSubmission>,
    {
        self.successful_submissions
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [errors][BatchStopJobRunResult::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<BatchStopJobRunError>,
    {
        self.errors = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [errors][BatchStopJobRunResult::errors], creating the list if unset.
    pub fn add_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<BatchStopJobRunError>,
    {
        self.errors
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Request message for `GetJobBookmark`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetJobBookmarkRequest {
    /// The name of the job in question.
    pub job_name: Option<String>,

    /// The unique run identifier associated with this job run.
    pub run_id: Option<String>,
}

impl GetJobBookmarkRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_name][GetJobBookmarkRequest::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Sets the value of [run_id][GetJobBookmarkRequest::run_id].
    pub fn set_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.run_id = Some(v.into());
        self
    }
}

/// Response message for `GetJobBookmark`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetJobBookmarkResult {
    /// A structure that defines a point that a job can resume processing.
    pub job_bookmark_entry: Option<JobBookmarkEntry>,
}

impl GetJobBookmarkResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_bookmark_entry][GetJobBookmarkResult::job_bookmark_entry].
    pub fn set_job_bookmark_entry<T: Into<JobBookmarkEntry>>(mut self, v: T) -> Self {
        self.job_bookmark_entry = Some(v.into());
        self
    }
}

/// Request message for `ResetJobBookmark`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ResetJobBookmarkRequest {
    /// The name of the job in question.
    pub job_name: Option<String>,

    /// The unique run identifier associated with this job run.
    pub run_id: Option<String>,
}

impl ResetJobBookmarkRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_name][ResetJobBookmarkRequest::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Sets the value of [run_id][ResetJobBookmarkRequest::run_id].
    pub fn set_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.run_id = Some(v.into());
        self
    }
}

/// Response message for `ResetJobBookmark`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ResetJobBookmarkResult {
    /// The reset bookmark entry.
    pub job_bookmark_entry: Option<JobBookmarkEntry>,
}

impl ResetJobBookmarkResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_bookmark_entry][ResetJobBookmarkResult::job_bookmark_entry].
    pub fn set_job_bookmark_entry<T: Into<JobBookmarkEntry>>(mut self, v: T) -> Self {
        self.job_bookmark_entry = Some(v.into());
        self
    }
}
