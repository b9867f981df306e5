//! Client implementation for the static inventory plugin.
//!
//! Implements `NodeInventoryClient` using the domain service.

use async_trait::async_trait;
use node_ref_resolver_sdk::{InventoryError, ListScope, MemberRecord, NodeInventoryClient};
use tokio_util::sync::CancellationToken;

use super::service::Service;

#[async_trait]
impl NodeInventoryClient for Service {
    async fn list_members(
        &self,
        scope: &ListScope,
        cancel: &CancellationToken,
    ) -> Result<Vec<MemberRecord>, InventoryError> {
        if cancel.is_cancelled() {
            return Err(InventoryError::Cancelled);
        }

        self.clusters
            .get(&scope.cluster)
            .cloned()
            .ok_or_else(|| InventoryError::UnknownScope {
                cluster: scope.cluster.clone(),
            })
    }
}
