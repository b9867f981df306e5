#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use node_ref_resolver::{NodeRefResolverConfig, NodeRefResolverLocalClient, Service};
use node_ref_resolver_sdk::{InventoryError, ListScope, MemberRecord, NodeInventoryClient};
use tokio_util::sync::CancellationToken;

/// In-memory inventory that counts how often it is listed.
pub struct FixtureInventory {
    members: Vec<MemberRecord>,
    calls: AtomicUsize,
}

impl FixtureInventory {
    pub fn new(members: Vec<MemberRecord>) -> Self {
        Self {
            members,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NodeInventoryClient for FixtureInventory {
    async fn list_members(
        &self,
        _scope: &ListScope,
        _cancel: &CancellationToken,
    ) -> Result<Vec<MemberRecord>, InventoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.members.clone())
    }
}

/// Inventory whose listing always fails with the given error.
pub struct FailingInventory(pub InventoryError);

#[async_trait]
impl NodeInventoryClient for FailingInventory {
    async fn list_members(
        &self,
        _scope: &ListScope,
        _cancel: &CancellationToken,
    ) -> Result<Vec<MemberRecord>, InventoryError> {
        Err(self.0.clone())
    }
}

/// Inventory that never answers, standing in for a hung API server.
pub struct StalledInventory;

#[async_trait]
impl NodeInventoryClient for StalledInventory {
    async fn list_members(
        &self,
        _scope: &ListScope,
        _cancel: &CancellationToken,
    ) -> Result<Vec<MemberRecord>, InventoryError> {
        std::future::pending().await
    }
}

/// The four-node mixed-provider snapshot used across tests.
pub fn mixed_provider_nodes() -> Vec<MemberRecord> {
    vec![
        MemberRecord::new("node-1", "aws://us-east-1/id-node-1"),
        MemberRecord::new("node-2", "aws://us-west-2/id-node-2"),
        MemberRecord::new("gce-node-2", "gce://us-central1/gce-id-node-2"),
        MemberRecord::new("azure-node-4", "azure://westus2/id-node-4"),
    ]
}

pub fn service(inventory: Arc<dyn NodeInventoryClient>) -> Service {
    Service::new(inventory, &NodeRefResolverConfig::default())
}

pub fn client(inventory: Arc<dyn NodeInventoryClient>) -> NodeRefResolverLocalClient {
    NodeRefResolverLocalClient::new(Arc::new(service(inventory)))
}

pub fn scope() -> ListScope {
    ListScope::new("workload-cluster")
}

pub fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}
