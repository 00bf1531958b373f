/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Modeled faults, operation error enums, and the service-wide `Error` type.

use aws_sdk_databasemigration::error::{ErrorMetadata, ProvideErrorMetadata};
use aws_sdk_databasemigration::operation::create_endpoint::CreateEndpointError;
use aws_sdk_databasemigration::operation::delete_endpoint::DeleteEndpointError;
use aws_sdk_databasemigration::operation::RequestId;
use aws_sdk_databasemigration::types::error::{InvalidResourceStateFault, ResourceNotFoundFault};
use aws_sdk_databasemigration::Error;

fn not_found() -> ResourceNotFoundFault {
    ResourceNotFoundFault::builder()
        .message("Replication instance not found.")
        .meta(
            ErrorMetadata::builder()
                .code("ResourceNotFoundFault")
                .message("Replication instance not found.")
                .custom("aws_request_id", "amzn-request-1234")
                .build(),
        )
        .build()
}

#[test]
fn fault_display_includes_name_and_message() {
    let fault = not_found();
    assert_eq!(format!("{fault}"), "ResourceNotFoundFault: Replication instance not found.");

    let bare = ResourceNotFoundFault::builder().build();
    assert_eq!(format!("{bare}"), "ResourceNotFoundFault");
}

#[test]
fn fault_exposes_metadata_and_request_id() {
    let fault = not_found();
    assert_eq!(fault.message(), Some("Replication instance not found."));
    assert_eq!(fault.code(), Some("ResourceNotFoundFault"));
    assert_eq!(fault.request_id(), Some("amzn-request-1234"));
}

#[test]
fn operation_error_kind_predicates() {
    let err = CreateEndpointError::ResourceNotFoundFault(not_found());
    assert!(err.is_resource_not_found_fault());
    assert!(!err.is_access_denied_fault());
    assert!(!err.is_resource_quota_exceeded_fault());
    assert_eq!(err.meta().code(), Some("ResourceNotFoundFault"));
    assert_eq!(err.request_id(), Some("amzn-request-1234"));
}

#[test]
fn operation_error_display_delegates_to_fault() {
    let err = DeleteEndpointError::InvalidResourceStateFault(
        InvalidResourceStateFault::builder().message("Endpoint is not active.").build(),
    );
    assert_eq!(format!("{err}"), "InvalidResourceStateFault: Endpoint is not active.");
}

#[test]
fn operation_error_source_is_the_fault() {
    use std::error::Error as _;
    let err = CreateEndpointError::ResourceNotFoundFault(not_found());
    let source = err.source().expect("fault is the source");
    assert!(source.downcast_ref::<ResourceNotFoundFault>().is_some());
}

#[test]
fn unhandled_errors_render_their_code() {
    let err = CreateEndpointError::generic(ErrorMetadata::builder().code("ThrottlingException").build());
    assert_eq!(format!("{err}"), "unhandled error (ThrottlingException)");

    let err = CreateEndpointError::unhandled("something went wrong");
    assert_eq!(format!("{err}"), "unhandled error");
}

#[test]
fn operation_errors_convert_into_the_service_error() {
    let err = CreateEndpointError::ResourceNotFoundFault(not_found());
    let service_err = Error::from(err);
    assert!(matches!(service_err, Error::ResourceNotFoundFault(_)));
    assert_eq!(service_err.meta().code(), Some("ResourceNotFoundFault"));
    assert_eq!(service_err.request_id(), Some("amzn-request-1234"));
    assert_eq!(format!("{service_err}"), "ResourceNotFoundFault: Replication instance not found.");
}

#[test]
fn service_error_preserves_fault_identity_across_operations() {
    // The same fault type routes to the same service-level variant no matter
    // which operation produced it.
    let from_create = Error::from(CreateEndpointError::ResourceNotFoundFault(not_found()));
    let from_delete = Error::from(DeleteEndpointError::ResourceNotFoundFault(not_found()));
    assert!(matches!(from_create, Error::ResourceNotFoundFault(_)));
    assert!(matches!(from_delete, Error::ResourceNotFoundFault(_)));
}
