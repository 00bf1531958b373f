/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Builder round-trip behavior for operation inputs, outputs, and data structures.

use aws_sdk_databasemigration::operation::create_replication_instance::CreateReplicationInstanceInput;
use aws_sdk_databasemigration::operation::create_replication_task::CreateReplicationTaskInput;
use aws_sdk_databasemigration::operation::describe_endpoints::DescribeEndpointsOutput;
use aws_sdk_databasemigration::primitives::DateTime;
use aws_sdk_databasemigration::types::{
    DynamoDbSettings, ElasticsearchSettings, Endpoint, Filter, MigrationTypeValue, NeptuneSettings, ReplicationEndpointTypeValue, Tag,
};

#[test]
fn setters_and_getters_round_trip() {
    let input = CreateReplicationInstanceInput::builder()
        .replication_instance_identifier("test-instance")
        .replication_instance_class("dms.t2.micro")
        .allocated_storage(50)
        .multi_az(true)
        .engine_version("3.4.6")
        .build()
        .unwrap();

    assert_eq!(input.replication_instance_identifier(), Some("test-instance"));
    assert_eq!(input.replication_instance_class(), Some("dms.t2.micro"));
    assert_eq!(input.allocated_storage(), Some(50));
    assert_eq!(input.multi_az(), Some(true));
    assert_eq!(input.engine_version(), Some("3.4.6"));
    // Members that were never set stay absent.
    assert_eq!(input.availability_zone(), None);
    assert_eq!(input.kms_key_id(), None);
}

#[test]
fn fluent_and_explicit_setters_agree() {
    let fluent = CreateReplicationInstanceInput::builder()
        .replication_instance_identifier("test-instance")
        .allocated_storage(100)
        .vpc_security_group_ids("sg-1234")
        .build()
        .unwrap();
    let explicit = CreateReplicationInstanceInput::builder()
        .set_replication_instance_identifier(Some("test-instance".to_string()))
        .set_allocated_storage(Some(100))
        .set_vpc_security_group_ids(Some(vec!["sg-1234".to_string()]))
        .build()
        .unwrap();
    assert_eq!(fluent, explicit);
}

#[test]
fn set_with_none_clears_a_member() {
    let input = CreateReplicationInstanceInput::builder()
        .availability_zone("us-east-1d")
        .set_availability_zone(None)
        .build()
        .unwrap();
    assert_eq!(input.availability_zone(), None);
}

#[test]
fn builder_getters_observe_pending_state() {
    let builder = CreateReplicationTaskInput::builder()
        .replication_task_identifier("task-1")
        .migration_type(MigrationTypeValue::FullLoad);
    assert_eq!(builder.get_replication_task_identifier(), &Some("task-1".to_string()));
    assert_eq!(builder.get_migration_type(), &Some(MigrationTypeValue::FullLoad));
    assert_eq!(builder.get_table_mappings(), &None);
}

#[test]
fn enum_and_timestamp_members_round_trip() {
    let start = DateTime::from_secs(1_590_000_000);
    let input = CreateReplicationTaskInput::builder()
        .migration_type(MigrationTypeValue::FullLoadAndCdc)
        .cdc_start_time(start)
        .build()
        .unwrap();
    assert_eq!(input.migration_type(), Some(&MigrationTypeValue::FullLoadAndCdc));
    assert_eq!(input.cdc_start_time(), Some(&DateTime::from_secs(1_590_000_000)));
}

#[test]
fn list_members_append_one_item_at_a_time() {
    let input = CreateReplicationInstanceInput::builder()
        .vpc_security_group_ids("sg-1234")
        .vpc_security_group_ids("sg-5678")
        .tags(Tag::builder().key("stage").value("prod").build())
        .build()
        .unwrap();

    assert_eq!(input.vpc_security_group_ids(), ["sg-1234".to_string(), "sg-5678".to_string()]);
    assert_eq!(input.tags().len(), 1);
    assert_eq!(input.tags()[0].key(), Some("stage"));
}

#[test]
fn set_list_replaces_previously_appended_items() {
    let input = CreateReplicationInstanceInput::builder()
        .vpc_security_group_ids("sg-1234")
        .set_vpc_security_group_ids(Some(vec!["sg-9999".to_string()]))
        .build()
        .unwrap();
    assert_eq!(input.vpc_security_group_ids(), ["sg-9999".to_string()]);
}

#[test]
fn unset_list_getter_returns_empty_slice() {
    let output = DescribeEndpointsOutput::builder().build();
    // The accessor defaults to an empty slice, while the field itself records
    // that nothing was sent.
    assert!(output.endpoints().is_empty());
    assert!(output.endpoints.is_none());

    let output = DescribeEndpointsOutput::builder().endpoints(Endpoint::builder().build()).build();
    assert_eq!(output.endpoints().len(), 1);
    assert!(output.endpoints.is_some());
}

#[test]
fn operation_input_build_accepts_missing_members() {
    // Inputs do not enforce modeled-required members at build time.
    let input = CreateReplicationTaskInput::builder().build().unwrap();
    assert_eq!(input.replication_task_identifier(), None);
    assert_eq!(input.migration_type(), None);
}

#[test]
fn filter_build_requires_name_and_values() {
    let filter = Filter::builder().name("endpoint-arn").values("arn:aws:dms:us-east-1:123456789012:endpoint:ABC").build().unwrap();
    assert_eq!(filter.name(), "endpoint-arn");
    assert_eq!(filter.values().len(), 1);

    let err = Filter::builder().values("arn:aws:dms:us-east-1:123456789012:endpoint:ABC").build();
    assert!(err.is_err(), "name is required");

    let err = Filter::builder().name("endpoint-arn").build();
    assert!(err.is_err(), "values is required");
}

#[test]
fn settings_builders_enforce_required_members() {
    let err = ElasticsearchSettings::builder().service_access_role_arn("arn:aws:iam::123456789012:role/es-access").build();
    assert!(err.is_err(), "endpoint_uri is required");

    let err = NeptuneSettings::builder().s3_bucket_name("migration-staging").build();
    assert!(err.is_err(), "s3_bucket_folder is required");

    let err = DynamoDbSettings::builder().build();
    assert!(err.is_err(), "service_access_role_arn is required");

    let settings = ElasticsearchSettings::builder()
        .service_access_role_arn("arn:aws:iam::123456789012:role/es-access")
        .endpoint_uri("https://search-dms-target.us-east-1.es.amazonaws.com")
        .build()
        .unwrap();
    assert_eq!(settings.endpoint_uri(), "https://search-dms-target.us-east-1.es.amazonaws.com");
    assert_eq!(settings.full_load_error_percentage(), None);
}

#[test]
fn equality_distinguishes_single_member_changes() {
    let base = || {
        Endpoint::builder()
            .endpoint_identifier("src-1")
            .endpoint_type(ReplicationEndpointTypeValue::Source)
            .engine_name("mysql")
            .port(3306)
    };
    let a = base().build();
    let b = base().build();
    assert_eq!(a, b);

    let c = base().port(3307).build();
    assert_ne!(a, c);

    let d = base().set_engine_name(None).build();
    assert_ne!(a, d);
}

#[test]
fn clone_preserves_all_members() {
    let input = CreateReplicationTaskInput::builder()
        .replication_task_identifier("task-1")
        .source_endpoint_arn("arn:src")
        .target_endpoint_arn("arn:tgt")
        .migration_type(MigrationTypeValue::Cdc)
        .cdc_start_position("checkpoint:V1#27#mysql-bin-changelog.157832:1975")
        .build()
        .unwrap();
    let cloned = input.clone();
    assert_eq!(input, cloned);
}
