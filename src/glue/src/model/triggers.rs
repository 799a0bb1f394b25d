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

use super::jobs::{JobRunState, NotificationProperty};

/// The type of trigger.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TriggerType {
    Scheduled,
    Conditional,
    OnDemand,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [TriggerType::as_str].
    UnknownValue(String),
}

impl TriggerType {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Conditional => "CONDITIONAL",
            Self::OnDemand => "ON_DEMAND",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for TriggerType {
    fn from(value: &str) -> Self {
        match value {
            "SCHEDULED" => Self::Scheduled,
            "CONDITIONAL" => Self::Conditional,
            "ON_DEMAND" => Self::OnDemand,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for TriggerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for TriggerType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for TriggerType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The current state of a trigger.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TriggerState {
    Creating,
    Created,
    Activating,
    Activated,
    Deactivating,
    Deactivated,
    Deleting,
    Updating,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [TriggerState::as_str].
    UnknownValue(String),
}

impl TriggerState {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Creating => "CREATING",
            Self::Created => "CREATED",
            Self::Activating => "ACTIVATING",
            Self::Activated => "ACTIVATED",
            Self::Deactivating => "DEACTIVATING",
            Self::Deactivated => "DEACTIVATED",
            Self::Deleting => "DELETING",
            Self::Updating => "UPDATING",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for TriggerState {
    fn from(value: &str) -> Self {
        match value {
            "CREATING" => Self::Creating,
            "CREATED" => Self::Created,
            "ACTIVATING" => Self::Activating,
            "ACTIVATED" => Self::Activated,
            "DEACTIVATING" => Self::Deactivating,
            "DEACTIVATED" => Self::Deactivated,
            "DELETING" => Self::Deleting,
            "UPDATING" => Self::Updating,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for TriggerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for TriggerState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for TriggerState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// How a predicate combines its conditions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Logical {
    /// All conditions must be true for the trigger to fire.
    And,
    /// Any one condition firing is enough.
    Any,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [Logical::as_str].
    UnknownValue(String),
}

impl Logical {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::And => "AND",
            Self::Any => "ANY",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for Logical {
    fn from(value: &str) -> Self {
        match value {
            "AND" => Self::And,
            "ANY" => Self::Any,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for Logical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for Logical {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for Logical {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The comparison operator used by a condition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LogicalOperator {
    Equals,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [LogicalOperator::as_str].
    UnknownValue(String),
}

impl LogicalOperator {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Equals => "EQUALS",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for LogicalOperator {
    fn from(value: &str) -> Self {
        match value {
            "EQUALS" => Self::Equals,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for LogicalOperator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for LogicalOperator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The state of a crawl watched by a condition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrawlState {
    Running,
    Cancelling,
    Cancelled,
    Succeeded,
    Failed,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [CrawlState::as_str].
    UnknownValue(String),
}

impl CrawlState {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => "RUNNING",
            Self::Cancelling => "CANCELLING",
            Self::Cancelled => "CANCELLED",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for CrawlState {
    fn from(value: &str) -> Self {
        match value {
            "RUNNING" => Self::Running,
            "CANCELLING" => Self::Cancelling,
            "CANCELLED" => Self::Cancelled,
            "SUCCEEDED" => Self::Succeeded,
            "FAILED" => Self::Failed,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for CrawlState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for CrawlState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for CrawlState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// Defines a condition under which a trigger fires.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Condition {
    /// A logical operator.
    pub logical_operator: Option<LogicalOperator>,

    /// The name of the job whose `JobRuns` this condition applies to, and
    /// on which this trigger waits.
    pub job_name: Option<String>,

    /// The condition state. Currently, the only job states that a trigger
    /// can listen for are `SUCCEEDED`, `STOPPED`, `FAILED`, and `TIMEOUT`.
    pub state: Option<JobRunState>,

    /// The name of the crawler to which this condition applies.
    pub crawler_name: Option<String>,

    /// The state of the crawler to which this condition applies.
    pub crawl_state: Option<CrawlState>,
}

impl Condition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [logical_operator][Condition::logical_operator].
    pub fn set_logical_operator<T: Into<LogicalOperator>>(mut self, v: T) -> Self {
        self.logical_operator = Some(v.into());
        self
    }

    /// Sets the value of [job_name][Condition::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Sets the value of [state][Condition::state].
    pub fn set_state<T: Into<JobRunState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [crawler_name][Condition::crawler_name].
    pub fn set_crawler_name<T: Into<String>>(mut self, v: T) -> Self {
        self.crawler_name = Some(v.into());
        self
    }

    /// Sets the value of [crawl_state][Condition::crawl_state].
    pub fn set_crawl_state<T: Into<CrawlState>>(mut self, v: T) -> Self {
        self.crawl_state = Some(v.into());
        self
    }
}

/// Defines the predicate of the trigger, which determines when it fires.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Predicate {
    /// An optional field if only one condition is listed. If multiple
    /// conditions are listed, then this field is required.
    pub logical: Option<Logical>,

    /// A list of the conditions that determine when the trigger will fire.
    pub conditions: Option<Vec<Condition>>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [logical][Predicate::logical].
    pub fn set_logical<T: Into<Logical>>(mut self, v: T) -> Self {
        self.logical = Some(v.into());
        self
    }

    /// Replaces the contents of [conditions][Predicate::conditions].
    pub fn set_conditions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Condition>,
    {
        self.conditions = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [conditions][Predicate::conditions], creating the list if unset.
    pub fn add_conditions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Condition>,
    {
        self.conditions
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Defines an action to be initiated by a trigger.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Action {
    /// The name of a job to be executed.
    pub job_name: Option<String>,

    /// The job arguments used when this trigger fires. For this job run,
    /// they replace the default arguments set in the job definition itself.
    pub arguments: Option<HashMap<String, String>>,

    /// The `JobRun` timeout in minutes.
    pub timeout: Option<i32>,

    /// The name of the `SecurityConfiguration` structure to be used with
    /// this action.
    pub security_configuration: Option<String>,

    /// Specifies configuration properties of a job run notification.
    pub notification_property: Option<NotificationProperty>,

    /// The name of the crawler to be used with this action.
    pub crawler_name: Option<String>,
}

impl Action {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_name][Action::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Replaces the contents of [arguments][Action::arguments].
    pub fn set_arguments<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.arguments = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [arguments][Action::arguments], failing on a duplicate key.
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

    /// Resets [arguments][Action::arguments] to unset.
    pub fn clear_arguments(mut self) -> Self {
        self.arguments = None;
        self
    }

    /// Sets the value of [timeout][Action::timeout].
    pub fn set_timeout<T: Into<i32>>(mut self, v: T) -> Self {
        self.timeout = Some(v.into());
        self
    }

    /// Sets the value of [security_configuration][Action::security_configuration].
    pub fn set_security_configuration<T: Into<String>>(mut self, v: T) -> Self {
        self.security_configuration = Some(v.into());
        self
    }

    /// Sets the value of [notification_property][Action::notification_property].
    pub fn set_notification_property<T: Into<NotificationProperty>>(mut self, v: T) -> Self {
        self.notification_property = Some(v.into());
        self
    }

    /// Sets the value of [crawler_name][Action::crawler_name].
    pub fn set_crawler_name<T: Into<String>>(mut self, v: T) -> Self {
        self.crawler_name = Some(v.into());
        self
    }
}

/// Information about a specific trigger.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Trigger {
    /// The name of the trigger.
    pub name: Option<String>,

    /// The name of the workflow associated with the trigger.
    pub workflow_name: Option<String>,

    /// Reserved for future use.
    pub id: Option<String>,

    /// The type of trigger that this is.
    #[serde(rename = "Type")]
    pub trigger_type: Option<TriggerType>,

    /// The current state of the trigger.
    pub state: Option<TriggerState>,

    /// A description of this trigger.
    pub description: Option<String>,

    /// A `cron` expression used to specify the schedule. For example, to
    /// run something every day at 12:15 UTC, specify
    /// `cron(15 12 * * ? *)`.
    pub schedule: Option<String>,

    /// The actions initiated by this trigger.
    pub actions: Option<Vec<Action>>,

    /// The predicate of this trigger, which defines when it will fire.
    pub predicate: Option<Predicate>,
}

impl Trigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Trigger::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [workflow_name][Trigger::workflow_name].
    pub fn set_workflow_name<T: Into<String>>(mut self, v: T) -> Self {
        self.workflow_name = Some(v.into());
        self
    }

    /// Sets the value of [id][Trigger::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [trigger_type][Trigger::trigger_type].
    pub fn set_trigger_type<T: Into<TriggerType>>(mut self, v: T) -> Self {
        self.trigger_type = Some(v.into());
        self
    }

    /// Sets the value of [state][Trigger::state].
    pub fn set_state<T: Into<TriggerState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [description][Trigger::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [schedule][Trigger::schedule].
    pub fn set_schedule<T: Into<String>>(mut self, v: T) -> Self {
        self.schedule = Some(v.into());
        self
    }

    /// Replaces the contents of [actions][Trigger::actions].
    pub fn set_actions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Action>,
    {
        self.actions = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [actions][Trigger::actions], creating the list if unset.
    pub fn add_actions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Action>,
    {
        self.actions
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [predicate][Trigger::predicate].
    pub fn set_predicate<T: Into<Predicate>>(mut self, v: T) -> Self {
        self.predicate = Some(v.into());
        self
    }
}

/// A structure used to provide information used to update a trigger. This
/// object updates the previous trigger definition by overwriting it
/// completely.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TriggerUpdate {
    /// Reserved for future use.
    pub name: Option<String>,

    /// A description of this trigger.
    pub description: Option<String>,

    /// A `cron` expression used to specify the schedule.
    pub schedule: Option<String>,

    /// The actions initiated by this trigger.
    pub actions: Option<Vec<Action>>,

    /// The predicate of this trigger, which defines when it will fire.
    pub predicate: Option<Predicate>,
}

impl TriggerUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][TriggerUpdate::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][TriggerUpdate::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [schedule][TriggerUpdate::schedule].
    pub fn set_schedule<T: Into<String>>(mut self, v: T) -> Self {
        self.schedule = Some(v.into());
        self
    }

    /// Replaces the contents of [actions][TriggerUpdate::actions].
    pub fn set_actions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Action>,
    {
        self.actions = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [actions][TriggerUpdate::actions], creating the list if unset.
    pub fn add_actions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Action>,
    {
        self.actions
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [predicate][TriggerUpdate::predicate].
    pub fn set_predicate<T: Into<Predicate>>(mut self, v: T) -> Self {
        self.predicate = Some(v.into());
        self
    }
}

/// Request message for `CreateTrigger`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateTriggerRequest {
    /// The name of the trigger.
    pub name: Option<String>,

    /// The name of the workflow associated with the trigger.
    pub workflow_name: Option<String>,

    /// The type of the new trigger.
    #[serde(rename = "Type")]
    pub trigger_type: Option<TriggerType>,

    /// A `cron` expression used to specify the schedule. This field is
    /// required when the trigger type is `SCHEDULED`.
    pub schedule: Option<String>,

    /// A predicate to specify when the new trigger should fire. This field
    /// is required when the trigger type is `CONDITIONAL`.
    pub predicate: Option<Predicate>,

    /// The actions initiated by this trigger when it fires.
    pub actions: Option<Vec<Action>>,

    /// A description of the new trigger.
    pub description: Option<String>,

    /// Set to `true` to start `SCHEDULED` and `CONDITIONAL` triggers when
    /// created. True is not supported for `ON_DEMAND` triggers.
    pub start_on_creation: Option<bool>,

    /// The tags to use with this trigger.
    pub tags: Option<HashMap<String, String>>,
}

impl CreateTriggerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][CreateTriggerRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [workflow_name][CreateTriggerRequest::workflow_name].
    pub fn set_workflow_name<T: Into<String>>(mut self, v: T) -> Self {
        self.workflow_name = Some(v.into());
        self
    }

    /// Sets the value of [trigger_type][CreateTriggerRequest::trigger_type].
    pub fn set_trigger_type<T: Into<TriggerType>>(mut self, v: T) -> Self {
        self.trigger_type = Some(v.into());
        self
    }

    /// Sets the value of [schedule][CreateTriggerRequest::schedule].
    pub fn set_schedule<T: Into<String>>(mut self, v: T) -> Self {
        self.schedule = Some(v.into());
        self
    }

    /// Sets the value of [predicate][CreateTriggerRequest::predicate].
    pub fn set_predicate<T: Into<Predicate>>(mut self, v: T) -> Self {
        self.predicate = Some(v.into());
        self
    }

    /// Replaces the contents of [actions][CreateTriggerRequest::actions].
    pub fn set_actions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Action>,
    {
        self.actions = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [actions][CreateTriggerRequest::actions], creating the list if unset.
    pub fn add_actions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Action>,
    {
        self.actions
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [description][CreateTriggerRequest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [start_on_creation][CreateTriggerRequest::start_on_creation].
    pub fn set_start_on_creation<T: Into<bool>>(mut self, v: T) -> Self {
        self.start_on_creation = Some(v.into());
        self
    }

    /// Replaces the contents of [tags][CreateTriggerRequest::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [tags][CreateTriggerRequest::tags], failing on a duplicate key.
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

    /// Resets [tags][CreateTriggerRequest::tags] to unset.
    pub fn clear_tags(mut self) -> Self {
        self.tags = None;
        self
    }
}

/// Response message for `CreateTrigger`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateTriggerResult {
    /// The name of the trigger.
    pub name: Option<String>,
}

impl CreateTriggerResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][CreateTriggerResult::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Request message for `GetTrigger`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetTriggerRequest {
    /// The name of the trigger to retrieve.
    pub name: Option<String>,
}

impl GetTriggerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][GetTriggerRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Response message for `GetTrigger`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetTriggerResult {
    /// The requested trigger definition.
    pub trigger: Option<Trigger>,
}

impl GetTriggerResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [trigger][GetTriggerResult::trigger].
    pub fn set_trigger<T: Into<Trigger>>(mut self, v: T) -> Self {
        self.trigger = Some(v.into());
        self
    }
}

/// Request message for `GetTriggers`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetTriggersRequest {
    /// A continuation token, if this is a continuation call.
    pub next_token: Option<String>,

    /// The name of the job to retrieve triggers for. The trigger that can
    /// start this job is returned, and if there is no such trigger, all
    /// triggers are returned.
    pub dependent_job_name: Option<String>,

    /// The maximum size of the response.
    pub max_results: Option<i32>,
}

impl GetTriggersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [next_token][GetTriggersRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [dependent_job_name][GetTriggersRequest::dependent_job_name].
    pub fn set_dependent_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.dependent_job_name = Some(v.into());
        self
    }

    /// Sets the value of [max_results][GetTriggersRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }
}

/// Response message for `GetTriggers`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetTriggersResult {
    /// A list of triggers for the specified job.
    pub triggers: Option<Vec<Trigger>>,

    /// A continuation token, if not all the requested triggers have yet
    /// been returned.
    pub next_token: Option<String>,
}

impl GetTriggersResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [triggers][GetTriggersResult::triggers].
    pub fn set_triggers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Trigger>,
    {
        self.triggers = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [triggers][GetTriggersResult::triggers], creating the list if unset.
    pub fn add_triggers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Trigger>,
    {
        self.triggers
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][GetTriggersResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Request message for `BatchGetTriggers`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchGetTriggersRequest {
    /// A list of trigger names, which may be the names returned from the
    /// `ListTriggers` operation.
    pub trigger_names: Option<Vec<String>>,
}

impl BatchGetTriggersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [trigger_names][BatchGetTriggersRequest::trigger_names].
    pub fn set_trigger_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.trigger_names = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [trigger_names][BatchGetTriggersRequest::trigger_names], creating the list if unset.
    pub fn add_trigger_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.trigger_names
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `BatchGetTriggers`.
///
/// Names that could not be resolved come back in [triggers_not_found]
/// [BatchGetTriggersResult::triggers_not_found].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchGetTriggersResult {
    /// A list of trigger definitions.
    pub triggers: Option<Vec<Trigger>>,

    /// A list of names of triggers not found.
    pub triggers_not_found: Option<Vec<String>>,
}

impl BatchGetTriggersResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [triggers][BatchGetTriggersResult::triggers].
    pub fn set_triggers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Trigger>,
    {
        self.triggers = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [triggers][BatchGetTriggersResult::triggers], creating the list if unset.
    pub fn add_triggers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Trigger>,
    {
        self.triggers
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [triggers_not_found][BatchGetTriggersResult::triggers_not_found].
    pub fn set_triggers_not_found<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.triggers_not_found = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [triggers_not_found][BatchGetTriggersResult::triggers_not_found], creating the list if unset.
    pub fn add_triggers_not_found<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.triggers_not_found
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Request message for `UpdateTrigger`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateTriggerRequest {
    /// The name of the trigger to update.
    pub name: Option<String>,

    /// The new values with which to update the trigger.
    pub trigger_update: Option<TriggerUpdate>,
}

impl UpdateTriggerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][UpdateTriggerRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [trigger_update][UpdateTriggerRequest::trigger_update].
    pub fn set_trigger_update<T: Into<TriggerUpdate>>(mut self, v: T) -> Self {
        self.trigger_update = Some(v.into());
        self
    }
}

/// Response message for `UpdateTrigger`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateTriggerResult {
    /// The resulting trigger definition.
    pub trigger: Option<Trigger>,
}

impl UpdateTriggerResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [trigger][UpdateTriggerResult::trigger].
    pub fn set_trigger<T: Into<Trigger>>(mut self, v: T) -> Self {
        self.trigger = Some(v.into());
        self
    }
}

/// Request message for `DeleteTrigger`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteTriggerRequest {
    /// The name of the trigger to delete.
    pub name: Option<String>,
}

impl DeleteTriggerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][DeleteTriggerRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Response message for `DeleteTrigger`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteTriggerResult {
    /// The name of the trigger that was deleted.
    pub name: Option<String>,
}

impl DeleteTriggerResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][DeleteTriggerResult::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Request message for `StartTrigger`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartTriggerRequest {
    /// The name of the trigger to start.
    pub name: Option<String>,
}

impl StartTriggerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][StartTriggerRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Response message for `StartTrigger`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartTriggerResult {
    /// The name of the trigger that was started.
    pub name: Option<String>,
}

impl StartTriggerResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][StartTriggerResult::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Request message for `StopTrigger`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StopTriggerRequest {
    /// The name of the trigger to stop.
    pub name: Option<String>,
}

impl StopTriggerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][StopTriggerRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Response message for `StopTrigger`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StopTriggerResult {
    /// The name of the trigger that was stopped.
    pub name: Option<String>,
}

impl StopTriggerResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][StopTriggerResult::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Request message for `ListTriggers`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListTriggersRequest {
    /// A continuation token, if this is a continuation request.
    pub next_token: Option<String>,

    /// The name of the job for which to retrieve triggers. The trigger
    /// that can start this job is returned. If there is no such trigger,
    /// all triggers are returned.
    pub dependent_job_name: Option<String>,

    /// The maximum size of a list to return.
    pub max_results: Option<i32>,

    /// Specifies to return only these tagged resources.
    pub tags: Option<HashMap<String, String>>,
}

impl ListTriggersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [next_token][ListTriggersRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [dependent_job_name][ListTriggersRequest::dependent_job_name].
    pub fn set_dependent_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.dependent_job_name = Some(v.into());
        self
    }

    /// Sets the value of [max_results][ListTriggersRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }

    /// Replaces the contents of [tags][ListTriggersRequest::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [tags][ListTriggersRequest::tags], failing on a duplicate key.
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

    /// Resets [tags][ListTriggersRequest::tags] to unset.
    pub fn clear_tags(mut self) -> Self {
        self.tags = None;
        self
    }
}

/// Response message for `ListTriggers`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListTriggersResult {
    /// The names of all triggers in the account, or the triggers with the
    /// specified tags.
    pub trigger_names: Option<Vec<String>>,

    /// A continuation token, if the returned list does not contain the
    /// last metric available.
    pub next_token: Option<String>,
}

impl ListTriggersResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [trigger_names][ListTriggersResult::trigger_names].
    pub fn set_trigger_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.trigger_names = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [trigger_names][ListTriggersResult::trigger_names], creating the list if unset.
    pub fn add_trigger_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.trigger_names
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][ListTriggersResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}
