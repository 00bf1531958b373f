/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! String conversions and forward compatibility for modeled enums.

use std::collections::HashSet;

use aws_sdk_databasemigration::types::{
    DmsSslModeValue, MigrationTypeValue, ReplicationEndpointTypeValue, StartReplicationTaskTypeValue,
};

#[test]
fn known_values_parse_to_variants() {
    assert_eq!(MigrationTypeValue::from("full-load"), MigrationTypeValue::FullLoad);
    assert_eq!(MigrationTypeValue::from("cdc"), MigrationTypeValue::Cdc);
    assert_eq!(MigrationTypeValue::from("full-load-and-cdc"), MigrationTypeValue::FullLoadAndCdc);
    assert_eq!(ReplicationEndpointTypeValue::from("source"), ReplicationEndpointTypeValue::Source);
    assert_eq!(ReplicationEndpointTypeValue::from("target"), ReplicationEndpointTypeValue::Target);
    assert_eq!(DmsSslModeValue::from("verify-full"), DmsSslModeValue::VerifyFull);
    assert_eq!(
        StartReplicationTaskTypeValue::from("resume-processing"),
        StartReplicationTaskTypeValue::ResumeProcessing
    );
}

#[test]
fn as_str_round_trips_every_known_value() {
    for value in MigrationTypeValue::values() {
        assert_eq!(MigrationTypeValue::from(*value).as_str(), *value);
    }
    for value in DmsSslModeValue::values() {
        assert_eq!(DmsSslModeValue::from(*value).as_str(), *value);
    }
}

#[test]
fn from_str_never_fails() {
    let parsed: MigrationTypeValue = "cdc".parse().unwrap();
    assert_eq!(parsed, MigrationTypeValue::Cdc);
    let parsed: MigrationTypeValue = "not-a-migration-type".parse().unwrap();
    assert_eq!(parsed.as_str(), "not-a-migration-type");
}

#[test]
fn unknown_values_are_retained_not_rejected() {
    let value = ReplicationEndpointTypeValue::from("bidirectional");
    // The raw string survives, so a newer service value still round-trips.
    assert_eq!(value.as_str(), "bidirectional");
    assert_eq!(value.to_string(), "bidirectional");
    assert!(!ReplicationEndpointTypeValue::values().contains(&value.as_str()));
    // An unknown value never compares equal to a modeled variant.
    assert_ne!(value, ReplicationEndpointTypeValue::Source);
    assert_ne!(value, ReplicationEndpointTypeValue::Target);
}

#[test]
fn try_parse_rejects_unknown_values() {
    assert_eq!(MigrationTypeValue::try_parse("full-load").unwrap(), MigrationTypeValue::FullLoad);
    let err = MigrationTypeValue::try_parse("left-to-right").expect_err("unknown variant");
    assert_eq!(format!("{err}"), "unknown enum variant: 'left-to-right'");
}

#[test]
fn equal_values_hash_identically() {
    let mut set = HashSet::new();
    set.insert(DmsSslModeValue::from("require"));
    set.insert(DmsSslModeValue::Require);
    set.insert(DmsSslModeValue::from("verify-ca"));
    assert_eq!(set.len(), 2);
    assert!(set.contains(&DmsSslModeValue::Require));
    assert!(set.contains(&DmsSslModeValue::VerifyCa));
}

#[test]
fn display_matches_wire_value() {
    assert_eq!(StartReplicationTaskTypeValue::StartReplication.to_string(), "start-replication");
    assert_eq!(StartReplicationTaskTypeValue::ReloadTarget.to_string(), "reload-target");
    assert_eq!(MigrationTypeValue::FullLoadAndCdc.to_string(), "full-load-and-cdc");
}
