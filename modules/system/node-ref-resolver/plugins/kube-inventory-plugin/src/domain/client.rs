//! Client implementation for the Kubernetes inventory plugin.

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
        let cluster =
            self.clusters
                .get(&scope.cluster)
                .ok_or_else(|| InventoryError::UnknownScope {
                    cluster: scope.cluster.clone(),
                })?;

        cluster.list_nodes(cancel).await
    }
}
