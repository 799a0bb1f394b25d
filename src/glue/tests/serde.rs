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

//! Verify the wire mapping of the generated model types.

use anyhow::Result;
use glue_model::model::*;
use serde_json::json;
use test_case::test_case;

#[test]
fn members_are_pascal_case_and_none_is_omitted() -> Result<()> {
    let request = BatchDeleteConnectionRequest::new()
        .set_catalog_id("123456789012")
        .set_connection_name_list(["conn-a", "conn-b"]);
    let got = serde_json::to_value(&request)?;
    let want = json!({
        "CatalogId": "123456789012",
        "ConnectionNameList": ["conn-a", "conn-b"],
    });
    assert_eq!(got, want);

    let empty = BatchDeleteConnectionRequest::new();
    assert_eq!(serde_json::to_value(&empty)?, json!({}));
    Ok(())
}

#[test]
fn absent_members_deserialize_as_none() -> Result<()> {
    let got = serde_json::from_value::<BatchDeleteConnectionRequest>(json!({
        "ConnectionNameList": ["conn-a"],
    }))?;
    assert_eq!(got.catalog_id, None);
    assert_eq!(got.connection_name_list, Some(vec!["conn-a".to_string()]));
    Ok(())
}

#[test]
fn batch_errors_round_trip() -> Result<()> {
    let value = json!({
        "Errors": [{
            "TableName": "t1",
            "VersionId": "3",
            "ErrorDetail": {
                "ErrorCode": "EntityNotFoundException",
                "ErrorMessage": "Version not found",
            },
        }],
    });
    let got = serde_json::from_value::<BatchDeleteTableVersionResult>(value.clone())?;
    let errors = got.errors.as_ref().expect("errors must be present");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].table_name.as_deref(), Some("t1"));
    assert_eq!(errors[0].version_id.as_deref(), Some("3"));
    assert_eq!(
        errors[0]
            .error_detail
            .as_ref()
            .and_then(|d| d.error_code.as_deref()),
        Some("EntityNotFoundException")
    );
    assert_eq!(serde_json::to_value(&got)?, value);
    Ok(())
}

#[test]
fn dynamo_db_targets_rename() -> Result<()> {
    let targets =
        CrawlerTargets::new().set_dynamo_db_targets([DynamoDbTarget::new().set_path("orders")]);
    let got = serde_json::to_value(&targets)?;
    let want = json!({
        "DynamoDBTargets": [{ "Path": "orders" }],
    });
    assert_eq!(got, want);

    let roundtrip = serde_json::from_value::<CrawlerTargets>(got)?;
    assert_eq!(roundtrip, targets);
    Ok(())
}

#[test]
fn xml_classifier_rename() -> Result<()> {
    let classifier = Classifier::new().set_xml_classifier(
        XmlClassifier::new()
            .set_name("invoices")
            .set_classification("xml")
            .set_row_tag("Invoice"),
    );
    let got = serde_json::to_value(&classifier)?;
    let want = json!({
        "XMLClassifier": {
            "Name": "invoices",
            "Classification": "xml",
            "RowTag": "Invoice",
        },
    });
    assert_eq!(got, want);
    Ok(())
}

#[test]
fn trigger_type_member_is_type() -> Result<()> {
    let trigger = Trigger::new()
        .set_name("nightly")
        .set_trigger_type(TriggerType::Scheduled)
        .set_schedule("cron(0 2 * * ? *)");
    let got = serde_json::to_value(&trigger)?;
    let want = json!({
        "Name": "nightly",
        "Type": "SCHEDULED",
        "Schedule": "cron(0 2 * * ? *)",
    });
    assert_eq!(got, want);
    Ok(())
}

#[test]
fn area_under_pr_curve_rename() -> Result<()> {
    let metrics = FindMatchesMetrics::new()
        .set_area_under_pr_curve(0.92)
        .set_precision(0.95);
    let got = serde_json::to_value(&metrics)?;
    let want = json!({
        "AreaUnderPRCurve": 0.92,
        "Precision": 0.95,
    });
    assert_eq!(got, want);
    Ok(())
}

#[test_case(ConnectionType::Jdbc, "JDBC")]
#[test_case(ConnectionType::Sftp, "SFTP")]
#[test_case(ConnectionType::Mongodb, "MONGODB")]
#[test_case(ConnectionType::Kafka, "KAFKA")]
#[test_case(ConnectionType::Network, "NETWORK")]
fn connection_type_wire_strings(value: ConnectionType, wire: &str) -> Result<()> {
    assert_eq!(value.as_str(), wire);
    assert_eq!(serde_json::to_value(&value)?, json!(wire));
    assert_eq!(serde_json::from_value::<ConnectionType>(json!(wire))?, value);
    Ok(())
}

#[test_case(WorkerType::Standard, "Standard")]
#[test_case(WorkerType::G1X, "G.1X")]
#[test_case(WorkerType::G2X, "G.2X")]
fn worker_type_wire_strings(value: WorkerType, wire: &str) -> Result<()> {
    assert_eq!(value.as_str(), wire);
    assert_eq!(serde_json::to_value(&value)?, json!(wire));
    assert_eq!(serde_json::from_value::<WorkerType>(json!(wire))?, value);
    Ok(())
}

#[test]
fn unknown_enum_value_passes_through() -> Result<()> {
    let got = serde_json::from_value::<JobRun>(json!({
        "Id": "jr_1",
        "JobRunState": "WAITING",
    }))?;
    assert_eq!(
        got.job_run_state,
        Some(JobRunState::UnknownValue("WAITING".to_string()))
    );
    assert_eq!(
        got.job_run_state.as_ref().map(|s| s.as_str()),
        Some("WAITING")
    );

    // Re-serialization preserves the original string.
    let value = serde_json::to_value(&got)?;
    assert_eq!(value["JobRunState"], json!("WAITING"));
    Ok(())
}

#[test]
fn enum_display_matches_wire() {
    assert_eq!(TriggerType::OnDemand.to_string(), "ON_DEMAND");
    assert_eq!(
        JobRunState::UnknownValue("WAITING".to_string()).to_string(),
        "WAITING"
    );
}

#[test]
fn timestamps_are_epoch_seconds() -> Result<()> {
    let crawler = Crawler::new()
        .set_name("events")
        .set_creation_time(wkt::Timestamp::new(1596236400, 123_000_000));
    let got = serde_json::to_value(&crawler)?;
    let want = json!({
        "Name": "events",
        "CreationTime": 1596236400.123,
    });
    assert_eq!(got, want);

    let roundtrip = serde_json::from_value::<Crawler>(got)?;
    assert_eq!(roundtrip, crawler);
    Ok(())
}

#[test]
fn maps_serialize_as_json_objects() -> Result<()> {
    let request = StartJobRunRequest::new()
        .set_job_name("load-orders")
        .add_arguments_entry("--day", "2020-07-31")?;
    let got = serde_json::to_value(&request)?;
    let want = json!({
        "JobName": "load-orders",
        "Arguments": { "--day": "2020-07-31" },
    });
    assert_eq!(got, want);
    Ok(())
}

#[test]
fn nested_workflow_graph_round_trips() -> Result<()> {
    let value = json!({
        "Name": "etl",
        "Graph": {
            "Nodes": [{
                "Type": "JOB",
                "Name": "load-orders",
                "UniqueId": "node_1",
            }],
            "Edges": [{
                "SourceId": "node_0",
                "DestinationId": "node_1",
            }],
        },
    });
    let got = serde_json::from_value::<Workflow>(value.clone())?;
    let graph = got.graph.as_ref().expect("graph must be present");
    let nodes = graph.nodes.as_ref().expect("nodes must be present");
    assert_eq!(nodes[0].node_type, Some(NodeType::Job));
    assert_eq!(serde_json::to_value(&got)?, value);
    Ok(())
}
