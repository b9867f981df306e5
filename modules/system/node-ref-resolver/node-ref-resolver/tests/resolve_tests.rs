#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for provider ID resolution
//!
//! These tests drive the resolver through its public client and verify
//! ordering, miss tolerance, failure classification and cancellation.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{
    FailingInventory, FixtureInventory, StalledInventory, client, ids, mixed_provider_nodes,
    scope, service,
};
use node_ref_resolver::domain::DomainError;
use node_ref_resolver_sdk::{
    InventoryError, MemberRecord, NodeRefResolverClient, NodeRefResolverError,
};
use tokio_util::sync::CancellationToken;
use tracing_test::traced_test;

fn names(result: &node_ref_resolver_sdk::ReferenceResult) -> Vec<&str> {
    result.references.iter().map(|r| r.name.as_str()).collect()
}

#[tokio::test]
async fn test_single_provider_id_resolves_per_cloud() {
    let resolver = client(Arc::new(FixtureInventory::new(mixed_provider_nodes())));

    let cases = [
        ("aws://us-east-1/id-node-1", "node-1"),
        ("aws://us-west-2/id-node-2", "node-2"),
        ("gce://us-central1/gce-id-node-2", "gce-node-2"),
        ("azure://westus2/id-node-4", "azure-node-4"),
    ];

    for (provider_id, expected) in cases {
        let result = resolver
            .resolve(&scope(), &ids(&[provider_id]), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(names(&result), vec![expected], "provider ID {provider_id}");
        assert!(result.references[0].namespace.is_empty());
        assert_eq!(result.references[0].kind, "Node");
        assert_eq!(result.references[0].api_version, "v1");
    }
}

#[tokio::test]
async fn test_references_follow_request_order() {
    let resolver = client(Arc::new(FixtureInventory::new(mixed_provider_nodes())));

    let result = resolver
        .resolve(
            &scope(),
            &ids(&["aws://us-east-1/id-node-1", "azure://westus2/id-node-4"]),
            &CancellationToken::new(),
        )
        .await
        .unwrap();
    assert_eq!(names(&result), vec!["node-1", "azure-node-4"]);

    let reversed = resolver
        .resolve(
            &scope(),
            &ids(&[
                "azure://westus2/id-node-4",
                "gce://us-central1/gce-id-node-2",
                "aws://us-west-2/id-node-2",
                "aws://us-east-1/id-node-1",
            ]),
            &CancellationToken::new(),
        )
        .await
        .unwrap();
    assert_eq!(
        names(&reversed),
        vec!["azure-node-4", "gce-node-2", "node-2", "node-1"]
    );
    assert_eq!(reversed.available, 4);
    assert!(reversed.is_complete());
}

#[tokio::test]
async fn test_unknown_provider_id_fails_with_no_available_members() {
    let resolver = client(Arc::new(FixtureInventory::new(mixed_provider_nodes())));

    let err = resolver
        .resolve(
            &scope(),
            &ids(&["aws:///id-node-100"]),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(err, NodeRefResolverError::NoAvailableMembers { requested: 1 });
}

#[tokio::test]
async fn test_partial_match_skips_missing_ids_without_error() {
    let resolver = client(Arc::new(FixtureInventory::new(mixed_provider_nodes())));

    let result = resolver
        .resolve(
            &scope(),
            &ids(&[
                "aws:///id-node-100",
                "gce://us-central1/gce-id-node-2",
                "azure://eastus/id-node-9",
            ]),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(names(&result), vec!["gce-node-2"]);
    assert_eq!(result.available, 1);
    assert_eq!(
        result.unmatched,
        ids(&["aws:///id-node-100", "azure://eastus/id-node-9"])
    );
    assert!(!result.is_complete());
}

#[tokio::test]
async fn test_empty_request_is_vacuous_success() {
    let inventory = Arc::new(FixtureInventory::new(mixed_provider_nodes()));
    let resolver = client(inventory.clone());

    let result = resolver
        .resolve(&scope(), &[], &CancellationToken::new())
        .await
        .unwrap();

    assert!(result.references.is_empty());
    assert!(result.unmatched.is_empty());
    assert_eq!(result.available, 0);
    assert_eq!(inventory.calls(), 1);
}

#[tokio::test]
async fn test_empty_snapshot_with_empty_request_succeeds() {
    let resolver = client(Arc::new(FixtureInventory::new(Vec::new())));

    let result = resolver
        .resolve(&scope(), &[], &CancellationToken::new())
        .await
        .unwrap();

    assert!(result.references.is_empty());
}

#[tokio::test]
async fn test_empty_snapshot_with_request_fails() {
    let resolver = client(Arc::new(FixtureInventory::new(Vec::new())));

    let err = resolver
        .resolve(
            &scope(),
            &ids(&["aws://us-east-1/id-node-1", "aws://us-west-2/id-node-2"]),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(err, NodeRefResolverError::NoAvailableMembers { requested: 2 });
}

#[tokio::test]
async fn test_inventory_is_listed_once_per_resolution() {
    let inventory = Arc::new(FixtureInventory::new(mixed_provider_nodes()));
    let resolver = client(inventory.clone());

    let many: Vec<String> = (0..50)
        .map(|i| format!("aws://us-east-1/id-node-{i}"))
        .collect();
    resolver
        .resolve(&scope(), &many, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(inventory.calls(), 1);
}

#[tokio::test]
async fn test_repeated_resolution_is_idempotent() {
    let inventory = Arc::new(FixtureInventory::new(mixed_provider_nodes()));
    let resolver = client(inventory.clone());
    let request = ids(&[
        "azure://westus2/id-node-4",
        "aws:///id-node-100",
        "aws://us-east-1/id-node-1",
    ]);

    let first = resolver
        .resolve(&scope(), &request, &CancellationToken::new())
        .await
        .unwrap();
    let second = resolver
        .resolve(&scope(), &request, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(inventory.calls(), 2);
}

#[tokio::test]
async fn test_duplicate_requested_ids_yield_duplicate_references() {
    let resolver = client(Arc::new(FixtureInventory::new(mixed_provider_nodes())));

    let result = resolver
        .resolve(
            &scope(),
            &ids(&["aws://us-west-2/id-node-2", "aws://us-west-2/id-node-2"]),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(names(&result), vec!["node-2", "node-2"]);
    assert_eq!(result.available, 2);
}

#[tokio::test]
async fn test_matching_is_exact_string_comparison() {
    let resolver = client(Arc::new(FixtureInventory::new(mixed_provider_nodes())));

    for variant in [
        "AWS://us-east-1/id-node-1",
        "aws://us-east-1/id-node-1 ",
        "aws:///id-node-1",
        "id-node-1",
    ] {
        let err = resolver
            .resolve(&scope(), &ids(&[variant]), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(err.is_no_available_members(), "{variant:?} must not match");
    }
}

#[tokio::test]
async fn test_members_without_provider_id_never_match() {
    let members = vec![
        MemberRecord::new("joining-node", ""),
        MemberRecord::new("node-1", "aws://us-east-1/id-node-1"),
    ];
    let resolver = client(Arc::new(FixtureInventory::new(members)));

    let err = resolver
        .resolve(&scope(), &ids(&[""]), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(err.is_no_available_members());
}

#[tokio::test]
#[traced_test]
async fn test_duplicate_provider_ids_resolve_to_later_member() {
    let members = vec![
        MemberRecord::new("replaced-node", "aws://us-east-1/id-node-1").with_uid("uid-old"),
        MemberRecord::new("node-1", "aws://us-east-1/id-node-1").with_uid("uid-new"),
    ];
    let resolver = client(Arc::new(FixtureInventory::new(members)));

    let result = resolver
        .resolve(
            &scope(),
            &ids(&["aws://us-east-1/id-node-1"]),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(names(&result), vec!["node-1"]);
    assert_eq!(result.references[0].uid.as_deref(), Some("uid-new"));
    assert!(logs_contain("duplicate provider ID"));
}

#[tokio::test]
async fn test_ready_count_and_reference_details() {
    let members = vec![
        MemberRecord::new("node-1", "aws://us-east-1/id-node-1")
            .with_uid("6f1c")
            .with_ready(true),
        MemberRecord::new("node-2", "aws://us-west-2/id-node-2").with_ready(false),
        MemberRecord::new("static-pod-host", "aws://us-west-2/id-node-3")
            .with_namespace("edge")
            .with_ready(true),
    ];
    let resolver = client(Arc::new(FixtureInventory::new(members)));

    let result = resolver
        .resolve(
            &scope(),
            &ids(&[
                "aws://us-east-1/id-node-1",
                "aws://us-west-2/id-node-2",
                "aws://us-west-2/id-node-3",
            ]),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(result.available, 3);
    assert_eq!(result.ready, 2);
    assert_eq!(result.references[0].uid.as_deref(), Some("6f1c"));
    assert_eq!(result.references[2].namespace, "edge");
}

#[tokio::test]
#[traced_test]
async fn test_inventory_failure_is_propagated_unchanged() {
    let failure = InventoryError::Unavailable("connection refused".to_owned());
    let resolver = client(Arc::new(FailingInventory(failure.clone())));

    let err = resolver
        .resolve(
            &scope(),
            &ids(&["aws://us-east-1/id-node-1"]),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(err, NodeRefResolverError::Inventory(failure));
    assert!(!err.is_no_available_members());
    assert!(logs_contain("node-ref-resolver call failed"));
}

#[tokio::test]
async fn test_inventory_failure_wins_over_empty_request() {
    let resolver = client(Arc::new(FailingInventory(InventoryError::UnknownScope {
        cluster: "workload-cluster".to_owned(),
    })));

    let err = resolver
        .resolve(&scope(), &[], &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        NodeRefResolverError::Inventory(InventoryError::UnknownScope { .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_cancellation_aborts_stalled_listing() {
    let resolver = service(Arc::new(StalledInventory));
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(5)).await;
        trigger.cancel();
    });

    let err = resolver
        .resolve(&scope(), &ids(&["aws://us-east-1/id-node-1"]), &cancel)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::Inventory(InventoryError::Cancelled)
    ));
}

#[tokio::test]
async fn test_already_cancelled_token_skips_listing() {
    let inventory = Arc::new(FixtureInventory::new(mixed_provider_nodes()));
    let resolver = client(inventory.clone());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = resolver
        .resolve(&scope(), &ids(&["aws://us-east-1/id-node-1"]), &cancel)
        .await
        .unwrap_err();

    assert_eq!(err, NodeRefResolverError::Inventory(InventoryError::Cancelled));
    assert_eq!(inventory.calls(), 0);
}
