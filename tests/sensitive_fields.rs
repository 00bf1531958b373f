/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Debug output must never leak members marked as sensitive in the model.

use aws_sdk_databasemigration::operation::create_endpoint::CreateEndpointInput;
use aws_sdk_databasemigration::operation::modify_endpoint::ModifyEndpointInput;
use aws_sdk_databasemigration::types::{MongoDbSettings, RedshiftSettings};

const REDACTED: &str = "*** Sensitive Data Redacted ***";
const SECRET: &str = "hunter2-secret";

#[test]
fn create_endpoint_input_redacts_password() {
    let input = CreateEndpointInput::builder()
        .endpoint_identifier("src-endpoint")
        .username("admin")
        .password(SECRET)
        .server_name("db.example.com")
        .build()
        .unwrap();

    let rendered = format!("{input:?}");
    assert!(rendered.contains(REDACTED));
    assert!(!rendered.contains(SECRET));
    // Non-sensitive members still show up.
    assert!(rendered.contains("src-endpoint"));
    assert!(rendered.contains("db.example.com"));
}

#[test]
fn create_endpoint_input_builder_redacts_password() {
    let builder = CreateEndpointInput::builder().password(SECRET);
    let rendered = format!("{builder:?}");
    assert!(rendered.contains(REDACTED));
    assert!(!rendered.contains(SECRET));
}

#[test]
fn modify_endpoint_input_redacts_password() {
    let input = ModifyEndpointInput::builder()
        .endpoint_arn("arn:aws:dms:us-east-1:123456789012:endpoint:ABC")
        .password(SECRET)
        .build()
        .unwrap();

    let rendered = format!("{input:?}");
    assert!(rendered.contains(REDACTED));
    assert!(!rendered.contains(SECRET));
    assert!(rendered.contains("arn:aws:dms:us-east-1:123456789012:endpoint:ABC"));
}

#[test]
fn mongo_db_settings_redacts_password() {
    let settings = MongoDbSettings::builder().username("mongo").password(SECRET).server_name("mongo.example.com").build();

    let rendered = format!("{settings:?}");
    assert!(rendered.contains(REDACTED));
    assert!(!rendered.contains(SECRET));
    assert!(rendered.contains("mongo.example.com"));

    let rendered = format!("{:?}", MongoDbSettings::builder().password(SECRET));
    assert!(rendered.contains(REDACTED));
    assert!(!rendered.contains(SECRET));
}

#[test]
fn redshift_settings_redacts_password() {
    let settings = RedshiftSettings::builder().username("redshift").password(SECRET).build();

    let rendered = format!("{settings:?}");
    assert!(rendered.contains(REDACTED));
    assert!(!rendered.contains(SECRET));
}

#[test]
fn redaction_does_not_affect_equality() {
    let a = CreateEndpointInput::builder().password(SECRET).build().unwrap();
    let b = CreateEndpointInput::builder().password(SECRET).build().unwrap();
    let c = CreateEndpointInput::builder().password("other").build().unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}
