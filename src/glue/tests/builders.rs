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

//! Verify the builder surface of the generated model types.

use anyhow::Result;
use glue_core::error::{ErrorKind, FieldViolation};
use glue_model::model::*;

#[test]
fn new_matches_default() {
    assert_eq!(CreateJobRequest::new(), CreateJobRequest::default());
    assert_eq!(GetTableRequest::new(), GetTableRequest::default());
    assert_eq!(Crawler::new(), Crawler::default());
}

#[test]
fn setters_chain() {
    let request = GetTableRequest::new()
        .set_catalog_id("123456789012")
        .set_database_name("sales")
        .set_name("orders");
    assert_eq!(request.catalog_id.as_deref(), Some("123456789012"));
    assert_eq!(request.database_name.as_deref(), Some("sales"));
    assert_eq!(request.name.as_deref(), Some("orders"));
}

#[test]
fn list_set_replaces() {
    let request = BatchDeleteConnectionRequest::new()
        .set_connection_name_list(["a", "b"])
        .set_connection_name_list(["c"]);
    assert_eq!(request.connection_name_list, Some(vec!["c".to_string()]));
}

#[test]
fn list_add_appends() {
    let request = BatchDeleteConnectionRequest::new()
        .add_connection_name_list(["a"])
        .add_connection_name_list(["b", "c"]);
    assert_eq!(
        request.connection_name_list,
        Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );
}

#[test]
fn list_add_creates_when_unset() {
    let request = BatchGetCrawlersRequest::new().add_crawler_names(["events"]);
    assert_eq!(request.crawler_names, Some(vec!["events".to_string()]));
}

#[test]
fn map_entry_insert() -> Result<()> {
    let request = CreateCrawlerRequest::new()
        .add_tags_entry("team", "data-eng")?
        .add_tags_entry("env", "prod")?;
    let tags = request.tags.as_ref().expect("tags must be set");
    assert_eq!(tags.len(), 2);
    assert_eq!(tags.get("team").map(String::as_str), Some("data-eng"));
    assert_eq!(tags.get("env").map(String::as_str), Some("prod"));
    Ok(())
}

#[test]
fn map_entry_duplicate_key_rejected() -> Result<()> {
    let request = CreateCrawlerRequest::new().add_tags_entry("team", "data-eng")?;
    let err = request
        .clone()
        .add_tags_entry("team", "analytics")
        .expect_err("duplicate key must be rejected");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    let violation = err
        .as_inner::<FieldViolation>()
        .expect("source must be a field violation");
    assert!(
        matches!(violation, FieldViolation::DuplicateKey { field, key } if *field == "Tags" && key == "team"),
        "unexpected violation {violation:?}"
    );

    // The failed insert consumed its copy of the builder. The original still
    // holds the first value.
    let tags = request.tags.as_ref().expect("tags must be set");
    assert_eq!(tags.get("team").map(String::as_str), Some("data-eng"));
    Ok(())
}

#[test]
fn map_clear_resets_to_unset() -> Result<()> {
    let request = CreateCrawlerRequest::new()
        .add_tags_entry("team", "data-eng")?
        .clear_tags();
    assert_eq!(request.tags, None);
    Ok(())
}

#[test]
fn map_set_replaces_whole_map() -> Result<()> {
    let request = CreateJobRequest::new()
        .add_default_arguments_entry("--job-language", "python")?
        .set_default_arguments([("--TempDir", "s3://bucket/tmp")]);
    let arguments = request.default_arguments.as_ref().expect("must be set");
    assert_eq!(arguments.len(), 1);
    assert_eq!(
        arguments.get("--TempDir").map(String::as_str),
        Some("s3://bucket/tmp")
    );
    Ok(())
}

#[test]
fn structural_equality_ignores_field_order() {
    let a = StorageDescriptor::new()
        .set_location("s3://bucket/orders/")
        .set_input_format("org.apache.hadoop.mapred.TextInputFormat");
    let b = StorageDescriptor::new()
        .set_input_format("org.apache.hadoop.mapred.TextInputFormat")
        .set_location("s3://bucket/orders/");
    assert_eq!(a, b);
}

#[test]
fn unset_field_differs_from_empty() {
    let unset = BatchDeleteConnectionRequest::new();
    let empty = BatchDeleteConnectionRequest::new().set_connection_name_list(Vec::<String>::new());
    assert_ne!(unset, empty);
}

#[test]
fn nested_builders_compose() {
    let targets = CrawlerTargets::new()
        .set_s3_targets([S3Target::new()
            .set_path("s3://bucket/raw/")
            .set_exclusions(["**/_temporary/**"])])
        .set_dynamo_db_targets([DynamoDbTarget::new().set_path("orders")]);
    let request = CreateCrawlerRequest::new()
        .set_name("nightly")
        .set_targets(targets.clone());
    assert_eq!(request.targets, Some(targets));
}

#[test]
fn trigger_predicate_round_trips_through_builder() {
    let predicate = Predicate::new().set_logical(Logical::And).set_conditions([
        Condition::new()
            .set_logical_operator(LogicalOperator::Equals)
            .set_job_name("load-orders")
            .set_state(JobRunState::Succeeded),
    ]);
    let trigger = Trigger::new()
        .set_name("after-load")
        .set_trigger_type(TriggerType::Conditional)
        .set_predicate(predicate);
    let conditions = trigger
        .predicate
        .as_ref()
        .and_then(|p| p.conditions.as_ref())
        .expect("conditions must be set");
    assert_eq!(conditions[0].state, Some(JobRunState::Succeeded));
}

#[test]
fn clone_is_deep() -> Result<()> {
    let original = StartJobRunRequest::new()
        .set_job_name("load-orders")
        .add_arguments_entry("--day", "2020-07-31")?;
    let modified = original.clone().add_arguments_entry("--hour", "23")?;
    assert_eq!(
        original.arguments.as_ref().map(|m| m.len()),
        Some(1),
        "clone must not share map storage"
    );
    assert_eq!(modified.arguments.as_ref().map(|m| m.len()), Some(2));
    Ok(())
}
