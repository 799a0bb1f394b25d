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

use super::jobs::JobRun;
use super::triggers::{CrawlState, Trigger};

/// The status of a workflow run.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum WorkflowRunStatus {
    Running,
    Completed,
    Stopping,
    Stopped,
    Error,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [WorkflowRunStatus::as_str].
    UnknownValue(String),
}

impl WorkflowRunStatus {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => "RUNNING",
            Self::Completed => "COMPLETED",
            Self::Stopping => "STOPPING",
            Self::Stopped => "STOPPED",
            Self::Error => "ERROR",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for WorkflowRunStatus {
    fn from(value: &str) -> Self {
        match value {
            "RUNNING" => Self::Running,
            "COMPLETED" => Self::Completed,
            "STOPPING" => Self::Stopping,
            "STOPPED" => Self::Stopped,
            "ERROR" => Self::Error,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for WorkflowRunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for WorkflowRunStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for WorkflowRunStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The type of a node in a workflow graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NodeType {
    Crawler,
    Job,
    Trigger,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [NodeType::as_str].
    UnknownValue(String),
}

impl NodeType {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Crawler => "CRAWLER",
            Self::Job => "JOB",
            Self::Trigger => "TRIGGER",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for NodeType {
    fn from(value: &str) -> Self {
        match value {
            "CRAWLER" => Self::Crawler,
            "JOB" => Self::Job,
            "TRIGGER" => Self::Trigger,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for NodeType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for NodeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The details of a crawl in the workflow.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Crawl {
    /// The state of the crawler.
    pub state: Option<CrawlState>,

    /// The date and time on which the crawl started.
    pub started_on: Option<wkt::Timestamp>,

    /// The date and time on which the crawl completed.
    pub completed_on: Option<wkt::Timestamp>,

    /// The error message associated with the crawl.
    pub error_message: Option<String>,

    /// The log group associated with the crawl.
    pub log_group: Option<String>,

    /// The log stream associated with the crawl.
    pub log_stream: Option<String>,
}

impl Crawl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [state][Crawl::state].
    pub fn set_state<T: Into<CrawlState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [started_on][Crawl::started_on].
    pub fn set_started_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.started_on = Some(v.into());
        self
    }

    /// Sets the value of [completed_on][Crawl::completed_on].
    pub fn set_completed_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.completed_on = Some(v.into());
        self
    }

    /// Sets the value of [error_message][Crawl::error_message].
    pub fn set_error_message<T: Into<String>>(mut self, v: T) -> Self {
        self.error_message = Some(v.into());
        self
    }

    /// Sets the value of [log_group][Crawl::log_group].
    pub fn set_log_group<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group = Some(v.into());
        self
    }

    /// Sets the value of [log_stream][Crawl::log_stream].
    pub fn set_log_stream<T: Into<String>>(mut self, v: T) -> Self {
        self.log_stream = Some(v.into());
        self
    }
}

/// The details of a Job node present in the workflow.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct JobNodeDetails {
    /// The information for the job runs represented by the job node.
    pub job_runs: Option<Vec<JobRun>>,
}

impl JobNodeDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [job_runs][JobNodeDetails::job_runs].
    pub fn set_job_runs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<JobRun>,
    {
        self.job_runs = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [job_runs][JobNodeDetails::job_runs], creating the list if unset.
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
}

/// The details of a Crawler node present in the workflow.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CrawlerNodeDetails {
    /// A list of crawls represented by the crawl node.
    pub crawls: Option<Vec<Crawl>>,
}

impl CrawlerNodeDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [crawls][CrawlerNodeDetails::crawls].
    pub fn set_crawls<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Crawl>,
    {
        self.crawls = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [crawls][CrawlerNodeDetails::crawls], creating the list if unset.
    pub fn add_crawls<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Crawl>,
    {
        self.crawls
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// The details of a Trigger node present in the workflow.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TriggerNodeDetails {
    /// The information of the trigger represented by the trigger node.
    pub trigger: Option<Trigger>,
}

impl TriggerNodeDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [trigger][TriggerNodeDetails::trigger].
    pub fn set_trigger<T: Into<Trigger>>(mut self, v: T) -> Self {
        self.trigger = Some(v.into());
        self
    }
}

/// A node represents a Glue component like a trigger, job or crawler that
/// is part of a workflow.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Node {
    /// The type of Glue component represented by the node.
    #[serde(rename = "Type")]
    pub node_type: Option<NodeType>,

    /// The name of the Glue component represented by the node.
    pub name: Option<String>,

    /// The unique Id assigned to the node within the workflow.
    pub unique_id: Option<String>,

    /// Details of the Trigger when the node represents a Trigger.
    pub trigger_details: Option<TriggerNodeDetails>,

    /// Details of the Job when the node represents a Job.
    pub job_details: Option<JobNodeDetails>,

    /// Details of the crawler when the node represents a crawler.
    pub crawler_details: Option<CrawlerNodeDetails>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [node_type][Node::node_type].
    pub fn set_node_type<T: Into<NodeType>>(mut self, v: T) -> Self {
        self.node_type = Some(v.into());
        self
    }

    /// Sets the value of [name][Node::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [unique_id][Node::unique_id].
    pub fn set_unique_id<T: Into<String>>(mut self, v: T) -> Self {
        self.unique_id = Some(v.into());
        self
    }

    /// Sets the value of [trigger_details][Node::trigger_details].
    pub fn set_trigger_details<T: Into<TriggerNodeDetails>>(mut self, v: T) -> Self {
        self.trigger_details = Some(v.into());
        self
    }

    /// Sets the value of [job_details][Node::job_details].
    pub fn set_job_details<T: Into<JobNodeDetails>>(mut self, v: T) -> Self {
        self.job_details = Some(v.into());
        self
    }

    /// Sets the value of [crawler_details][Node::crawler_details].
    pub fn set_crawler_details<T: Into<CrawlerNodeDetails>>(mut self, v: T) -> Self {
        self.crawler_details = Some(v.into());
        self
    }
}

/// An edge represents a directed connection between two Glue components
/// which are part of the workflow the edge belongs to.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Edge {
    /// The unique of the node within the workflow where the edge starts.
    pub source_id: Option<String>,

    /// The unique of the node within the workflow where the edge ends.
    pub destination_id: Option<String>,
}

impl Edge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [source_id][Edge::source_id].
    pub fn set_source_id<T: Into<String>>(mut self, v: T) -> Self {
        self.source_id = Some(v.into());
        self
    }

    /// Sets the value of [destination_id][Edge::destination_id].
    pub fn set_destination_id<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_id = Some(v.into());
        self
    }
}

/// A workflow graph represents the complete workflow containing all the
/// Glue components present in the workflow and all the directed
/// connections between them.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct WorkflowGraph {
    /// A list of the the Glue components belong to the workflow
    /// represented as nodes.
    pub nodes: Option<Vec<Node>>,

    /// A list of all the directed connections between the nodes belonging
    /// to the workflow.
    pub edges: Option<Vec<Edge>>,
}

impl WorkflowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [nodes][WorkflowGraph::nodes].
    pub fn set_nodes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Node>,
    {
        self.nodes = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [nodes][WorkflowGraph::nodes], creating the list if unset.
    pub fn add_nodes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Node>,
    {
        self.nodes
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [edges][WorkflowGraph::edges].
    pub fn set_edges<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Edge>,
    {
        self.edges = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [edges][WorkflowGraph::edges], creating the list if unset.
    pub fn add_edges<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Edge>,
    {
        self.edges
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Workflow run statistics provides statistics about the workflow run.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct WorkflowRunStatistics {
    /// Total number of Actions in the workflow run.
    pub total_actions: Option<i32>,

    /// Total number of Actions which timed out.
    pub timeout_actions: Option<i32>,

    /// Total number of Actions which have failed.
    pub failed_actions: Option<i32>,

    /// Total number of Actions which have stopped.
    pub stopped_actions: Option<i32>,

    /// Total number of Actions which have succeeded.
    pub succeeded_actions: Option<i32>,

    /// Total number Actions in running state.
    pub running_actions: Option<i32>,
}

impl WorkflowRunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [total_actions][WorkflowRunStatistics::total_actions].
    pub fn set_total_actions<T: Into<i32>>(mut self, v: T) -> Self {
        self.total_actions = Some(v.into());
        self
    }

    /// Sets the value of [timeout_actions][WorkflowRunStatistics::timeout_actions].
    pub fn set_timeout_actions<T: Into<i32>>(mut self, v: T) -> Self {
        self.timeout_actions = Some(v.into());
        self
    }

    /// Sets the value of [failed_actions][WorkflowRunStatistics::failed_actions].
    pub fn set_failed_actions<T: Into<i32>>(mut self, v: T) -> Self {
        self.failed_actions = Some(v.into());
        self
    }

    /// Sets the value of [stopped_actions][WorkflowRunStatistics::stopped_actions].
    pub fn set_stopped_actions<T: Into<i32>>(mut self, v: T) -> Self {
        self.stopped_actions = Some(v.into());
        self
    }

    /// Sets the value of [succeeded_actions][WorkflowRunStatistics::succeeded_actions].
    pub fn set_succeeded_actions<T: Into<i32>>(mut self, v: T) -> Self {
        self.succeeded_actions = Some(v.into());
        self
    }

    /// Sets the value of [running_actions][WorkflowRunStatistics::running_actions].
    pub fn set_running_actions<T: Into<i32>>(mut self, v: T) -> Self {
        self.running_actions = Some(v.into());
        self
    }
}

/// A workflow run is an execution of a workflow providing all the runtime
/// information.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct WorkflowRun {
    /// Name of the workflow which was executed.
    pub name: Option<String>,

    /// The ID of this workflow run.
    pub workflow_run_id: Option<String>,

    /// The workflow run properties which were set during the run.
    pub workflow_run_properties: Option<HashMap<String, String>>,

    /// The date and time when the workflow run was started.
    pub started_on: Option<wkt::Timestamp>,

    /// The date and time when the workflow run completed.
    pub completed_on: Option<wkt::Timestamp>,

    /// The status of the workflow run.
    pub status: Option<WorkflowRunStatus>,

    /// The statistics of the run.
    pub statistics: Option<WorkflowRunStatistics>,

    /// The graph representing all the Glue components that belong to the
    /// workflow as nodes and directed connections between them as edges.
    pub graph: Option<WorkflowGraph>,
}

impl WorkflowRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][WorkflowRun::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [workflow_run_id][WorkflowRun::workflow_run_id].
    pub fn set_workflow_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.workflow_run_id = Some(v.into());
        self
    }

    /// Replaces the contents of [workflow_run_properties][WorkflowRun::workflow_run_properties].
    pub fn set_workflow_run_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.workflow_run_properties =
            Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [workflow_run_properties][WorkflowRun::workflow_run_properties], failing on a duplicate key.
    pub fn add_workflow_run_properties_entry<K, V>(
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
            .workflow_run_properties
            .get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "WorkflowRunProperties",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [workflow_run_properties][WorkflowRun::workflow_run_properties] to unset.
    pub fn clear_workflow_run_properties(mut self) -> Self {
        self.workflow_run_properties = None;
        self
    }

    /// Sets the value of [started_on][WorkflowRun::started_on].
    pub fn set_started_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.started_on = Some(v.into());
        self
    }

    /// Sets the value of [completed_on][WorkflowRun::completed_on].
    pub fn set_completed_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.completed_on = Some(v.into());
        self
    }

    /// Sets the value of [status][WorkflowRun::status].
    pub fn set_status<T: Into<WorkflowRunStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [statistics][WorkflowRun::statistics].
    pub fn set_statistics<T: Into<WorkflowRunStatistics>>(mut self, v: T) -> Self {
        self.statistics = Some(v.into());
        self
    }

    /// Sets the value of [graph][WorkflowRun::graph].
    pub fn set_graph<T: Into<WorkflowGraph>>(mut self, v: T) -> Self {
        self.graph = Some(v.into());
        self
    }
}

/// A workflow represents a flow in which Glue components should be
/// executed to complete a logical task.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Workflow {
    /// The name of the workflow representing the flow.
    pub name: Option<String>,

    /// A description of the workflow.
    pub description: Option<String>,

    /// A collection of properties to be used as part of each execution of
    /// the workflow.
    pub default_run_properties: Option<HashMap<String, String>>,

    /// The date and time when the workflow was created.
    pub created_on: Option<wkt::Timestamp>,

    /// The date and time when the workflow was last modified.
    pub last_modified_on: Option<wkt::Timestamp>,

    /// The information about the last execution of the workflow.
    pub last_run: Option<WorkflowRun>,

    /// The graph representing all the Glue components that belong to the
    /// workflow as nodes and directed connections between them as edges.
    pub graph: Option<WorkflowGraph>,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Workflow::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][Workflow::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Replaces the contents of [default_run_properties][Workflow::default_run_properties].
    pub fn set_default_run_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.default_run_properties =
            Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [default_run_properties][Workflow::default_run_properties], failing on a duplicate key.
    pub fn add_default_run_properties_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.default_run_properties.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "DefaultRunProperties",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [default_run_properties][Workflow::default_run_properties] to unset.
    pub fn clear_default_run_properties(mut self) -> Self {
        self.default_run_properties = None;
        self
    }

    /// Sets the value of [created_on][Workflow::created_on].
    pub fn set_created_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.created_on = Some(v.into());
        self
    }

    /// Sets the value of [last_modified_on][Workflow::last_modified_on].
    pub fn set_last_modified_on<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_modified_on = Some(v.into());
        self
    }

    /// Sets the value of [last_run][Workflow::last_run].
    pub fn set_last_run<T: Into<WorkflowRun>>(mut self, v: T) -> Self {
        self.last_run = Some(v.into());
        self
    }

    /// Sets the value of [graph][Workflow::graph].
    pub fn set_graph<T: Into<WorkflowGraph>>(mut self, v: T) -> Self {
        self.graph = Some(v.into());
        self
    }
}

/// Request message for `CreateWorkflow`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateWorkflowRequest {
    /// The name to be assigned to the workflow. It should be unique within
    /// your account.
    pub name: Option<String>,

    /// A description of the workflow.
    pub description: Option<String>,

    /// A collection of properties to be used as part of each execution of
    /// the workflow.
    pub default_run_properties: Option<HashMap<String, String>>,

    /// The tags to be used with this workflow.
    pub tags: Option<HashMap<String, String>>,
}

impl CreateWorkflowRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][CreateWorkflowRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][CreateWorkflowRequest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Replaces the contents of [default_run_properties][CreateWorkflowRequest::default_run_properties].
    pub fn set_default_run_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.default_run_properties =
            Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [default_run_properties][CreateWorkflowRequest::default_run_properties], failing on a duplicate key.
    pub fn add_default_run_properties_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.default_run_properties.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "DefaultRunProperties",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [default_run_properties][CreateWorkflowRequest::default_run_properties] to unset.
    pub fn clear_default_run_properties(mut self) -> Self {
        self.default_run_properties = None;
        self
    }

    /// Replaces the contents of [tags][CreateWorkflowRequest::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [tags][CreateWorkflowRequest::tags], failing on a duplicate key.
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

    /// Resets [tags][CreateWorkflowRequest::tags] to unset.
    pub fn clear_tags(mut self) -> Self {
        self.tags = None;
        self
    }
}

/// Response message for `CreateWorkflow`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateWorkflowResult {
    /// The name of the workflow which was provided as part of the request.
    pub name: Option<String>,
}

impl CreateWorkflowResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][CreateWorkflowResult::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Request message for `GetWorkflow`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetWorkflowRequest {
    /// The name of the workflow to retrieve.
    pub name: Option<String>,

    /// Specifies whether to include a graph when returning the workflow
    /// resource metadata.
    pub include_graph: Option<bool>,
}

impl GetWorkflowRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][GetWorkflowRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [include_graph][GetWorkflowRequest::include_graph].
    pub fn set_include_graph<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_graph = Some(v.into());
        self
    }
}

/// Response message for `GetWorkflow`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetWorkflowResult {
    /// The resource metadata for the workflow.
    pub workflow: Option<Workflow>,
}

impl GetWorkflowResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [workflow][GetWorkflowResult::workflow].
    pub fn set_workflow<T: Into<Workflow>>(mut self, v: T) -> Self {
        self.workflow = Some(v.into());
        self
    }
}

/// Request message for `GetWorkflowRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetWorkflowRunRequest {
    /// Name of the workflow being run.
    pub name: Option<String>,

    /// The ID of the workflow run.
    pub run_id: Option<String>,

    /// Specifies whether to include the workflow graph in response or not.
    pub include_graph: Option<bool>,
}

impl GetWorkflowRunRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][GetWorkflowRunRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [run_id][GetWorkflowRunRequest::run_id].
    pub fn set_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.run_id = Some(v.into());
        self
    }

    /// Sets the value of [include_graph][GetWorkflowRunRequest::include_graph].
    pub fn set_include_graph<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_graph = Some(v.into());
        self
    }
}

/// Response message for `GetWorkflowRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetWorkflowRunResult {
    /// The requested workflow run metadata.
    pub run: Option<WorkflowRun>,
}

impl GetWorkflowRunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [run][GetWorkflowRunResult::run].
    pub fn set_run<T: Into<WorkflowRun>>(mut self, v: T) -> Self {
        self.run = Some(v.into());
        self
    }
}

/// Request message for `GetWorkflowRuns`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetWorkflowRunsRequest {
    /// Name of the workflow whose metadata of runs should be returned.
    pub name: Option<String>,

    /// Specifies whether to include the workflow graph in response or not.
    pub include_graph: Option<bool>,

    /// The maximum size of the response.
    pub next_token: Option<String>,

    /// The maximum number of workflow runs to be included in the response.
    pub max_results: Option<i32>,
}

impl GetWorkflowRunsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][GetWorkflowRunsRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [include_graph][GetWorkflowRunsRequest::include_graph].
    pub fn set_include_graph<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_graph = Some(v.into());
        self
    }

    /// Sets the value of [next_token][GetWorkflowRunsRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [max_results][GetWorkflowRunsRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }
}

/// Response message for `GetWorkflowRuns`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetWorkflowRunsResult {
    /// A list of workflow run metadata objects.
    pub runs: Option<Vec<WorkflowRun>>,

    /// A continuation token, if not all requested workflow runs have been
    /// returned.
    pub next_token: Option<String>,
}

impl GetWorkflowRunsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [runs][GetWorkflowRunsResult::runs].
    pub fn set_runs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<WorkflowRun>,
    {
        self.runs = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [runs][GetWorkflowRunsResult::runs], creating the list if unset.
    pub fn add_runs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<WorkflowRun>,
    {
        self.runs
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][GetWorkflowRunsResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Request message for `UpdateWorkflow`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateWorkflowRequest {
    /// Name of the workflow to be updated.
    pub name: Option<String>,

    /// The description of the workflow.
    pub description: Option<String>,

    /// A collection of properties to be used as part of each execution of
    /// the workflow.
    pub default_run_properties: Option<HashMap<String, String>>,
}

impl UpdateWorkflowRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][UpdateWorkflowRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][UpdateWorkflowRequest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Replaces the contents of [default_run_properties][UpdateWorkflowRequest::default_run_properties].
    pub fn set_default_run_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.default_run_properties =
            Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [default_run_properties][UpdateWorkflowRequest::default_run_properties], failing on a duplicate key.
    pub fn add_default_run_properties_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.default_run_properties.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "DefaultRunProperties",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [default_run_properties][UpdateWorkflowRequest::default_run_properties] to unset.
    pub fn clear_default_run_properties(mut self) -> Self {
        self.default_run_properties = None;
        self
    }
}

/// Response message for `UpdateWorkflow`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateWorkflowResult {
    /// The name of the workflow which was specified in input.
    pub name: Option<String>,
}

impl UpdateWorkflowResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][UpdateWorkflowResult::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Request message for `DeleteWorkflow`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteWorkflowRequest {
    /// Name of the workflow to be deleted.
    pub name: Option<String>,
}

impl DeleteWorkflowRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][DeleteWorkflowRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Response message for `DeleteWorkflow`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteWorkflowResult {
    /// Name of the workflow specified in input.
    pub name: Option<String>,
}

impl DeleteWorkflowResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][DeleteWorkflowResult::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Request message for `BatchGetWorkflows`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchGetWorkflowsRequest {
    /// A list of workflow names, which may be the names returned from the
    /// `ListWorkflows` operation.
    pub names: Option<Vec<String>>,

    /// Specifies whether to include a graph when returning the workflow
    /// resource metadata.
    pub include_graph: Option<bool>,
}

impl BatchGetWorkflowsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [names][BatchGetWorkflowsRequest::names].
    pub fn set_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.names = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [names][BatchGetWorkflowsRequest::names], creating the list if unset.
    pub fn add_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.names
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [include_graph][BatchGetWorkflowsRequest::include_graph].
    pub fn set_include_graph<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_graph = Some(v.into());
        self
    }
}

/// Response message for `BatchGetWorkflows`.
///
/// Names that could not be resolved come back in [missing_workflows]
/// [BatchGetWorkflowsResult::missing_workflows].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchGetWorkflowsResult {
    /// A list of workflow resource metadata.
    pub workflows: Option<Vec<Workflow>>,

    /// A list of names of workflows not found.
    pub missing_workflows: Option<Vec<String>>,
}

impl BatchGetWorkflowsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [workflows][BatchGetWorkflowsResult::workflows].
    pub fn set_workflows<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Workflow>,
    {
        self.workflows = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [workflows][BatchGetWorkflowsResult::workflows], creating the list if unset.
    pub fn add_workflows<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Workflow>,
    {
        self.workflows
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [missing_workflows][BatchGetWorkflowsResult::missing_workflows].
    pub fn set_missing_workflows<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.missing_workflows = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [missing_workflows][BatchGetWorkflowsResult::missing_workflows], creating the list if unset.
    pub fn add_missing_workflows<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.missing_workflows
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Request message for `StartWorkflowRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartWorkflowRunRequest {
    /// The name of the workflow to start.
    pub name: Option<String>,
}

impl StartWorkflowRunRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][StartWorkflowRunRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Response message for `StartWorkflowRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartWorkflowRunResult {
    /// An Id for the new run.
    pub run_id: Option<String>,
}

impl StartWorkflowRunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [run_id][StartWorkflowRunResult::run_id].
    pub fn set_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.run_id = Some(v.into());
        self
    }
}

/// Request message for `StopWorkflowRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StopWorkflowRunRequest {
    /// The name of the workflow to stop.
    pub name: Option<String>,

    /// The ID of the workflow run to stop.
    pub run_id: Option<String>,
}

impl StopWorkflowRunRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][StopWorkflowRunRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [run_id][StopWorkflowRunRequest::run_id].
    pub fn set_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.run_id = Some(v.into());
        self
    }
}

/// Response message for `StopWorkflowRun`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StopWorkflowRunResult {}

impl StopWorkflowRunResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `GetWorkflowRunProperties`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetWorkflowRunPropertiesRequest {
    /// Name of the workflow which was run.
    pub name: Option<String>,

    /// The ID of the workflow run whose run properties should be returned.
    pub run_id: Option<String>,
}

impl GetWorkflowRunPropertiesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][GetWorkflowRunPropertiesRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [run_id][GetWorkflowRunPropertiesRequest::run_id].
    pub fn set_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.run_id = Some(v.into());
        self
    }
}

/// Response message for `GetWorkflowRunProperties`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetWorkflowRunPropertiesResult {
    /// The workflow run properties which were set during the specified run.
    pub run_properties: Option<HashMap<String, String>>,
}

impl GetWorkflowRunPropertiesResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [run_properties][GetWorkflowRunPropertiesResult::run_properties].
    pub fn set_run_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.run_properties = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [run_properties][GetWorkflowRunPropertiesResult::run_properties], failing on a duplicate key.
    pub fn add_run_properties_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.run_properties.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "RunProperties",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [run_properties][GetWorkflowRunPropertiesResult::run_properties] to unset.
    pub fn clear_run_properties(mut self) -> Self {
        self.run_properties = None;
        self
    }
}

/// Request message for `PutWorkflowRunProperties`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct PutWorkflowRunPropertiesRequest {
    /// Name of the workflow which was run.
    pub name: Option<String>,

    /// The ID of the workflow run for which the run properties should be
    /// updated.
    pub run_id: Option<String>,

    /// The properties to put for the specified run. If a run property
    /// already exists, its value is overridden.
    pub run_properties: Option<HashMap<String, String>>,
}

impl PutWorkflowRunPropertiesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][PutWorkflowRunPropertiesRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [run_id][PutWorkflowRunPropertiesRequest::run_id].
    pub fn set_run_id<T: Into<String>>(mut self, v: T) -> Self {
        self.run_id = Some(v.into());
        self
    }

    /// Replaces the contents of [run_properties][PutWorkflowRunPropertiesRequest::run_properties].
    pub fn set_run_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.run_properties = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [run_properties][PutWorkflowRunPropertiesRequest::run_properties], failing on a duplicate key.
    pub fn add_run_properties_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.run_properties.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "RunProperties",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [run_properties][PutWorkflowRunPropertiesRequest::run_properties] to unset.
    pub fn clear_run_properties(mut self) -> Self {
        self.run_properties = None;
        self
    }
}

/// Response message for `PutWorkflowRunProperties`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct PutWorkflowRunPropertiesResult {}

impl PutWorkflowRunPropertiesResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `ListWorkflows`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListWorkflowsRequest {
    /// A continuation token, if this is a continuation request.
    pub next_token: Option<String>,

    /// The maximum size of a list to return.
    pub max_results: Option<i32>,
}

impl ListWorkflowsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [next_token][ListWorkflowsRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [max_results][ListWorkflowsRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }
}

/// Response message for `ListWorkflows`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListWorkflowsResult {
    /// List of names of workflows in the account.
    pub workflows: Option<Vec<String>>,

    /// A continuation token, if not all workflow names have been returned.
    pub next_token: Option<String>,
}

impl ListWorkflowsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [workflows][ListWorkflowsResult::workflows].
    pub fn set_workflows<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.workflows = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [workflows][ListWorkflowsResult::workflows], creating the list if unset.
    pub fn add_workflows<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.workflows
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][ListWorkflowsResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}
