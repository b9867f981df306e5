//! Domain service for the node reference resolver.

use std::sync::Arc;

use node_ref_resolver_sdk::{
    InventoryError, ListScope, MemberRecord, NodeInventoryClient, NodeReference, ReferenceResult,
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::error::DomainError;
use super::index::ResolutionIndex;
use crate::config::NodeRefResolverConfig;

/// Node reference resolver service.
///
/// Holds no per-call state: every resolution lists the inventory once,
/// indexes that snapshot and drops it before returning.
pub struct Service {
    inventory: Arc<dyn NodeInventoryClient>,
    api_version: String,
    kind: String,
}

impl Service {
    /// Creates a service resolving against `inventory`.
    #[must_use]
    pub fn new(inventory: Arc<dyn NodeInventoryClient>, cfg: &NodeRefResolverConfig) -> Self {
        Self {
            inventory,
            api_version: cfg.reference_api_version.clone(),
            kind: cfg.reference_kind.clone(),
        }
    }

    /// Resolve provider IDs to references, preserving request order.
    ///
    /// A provider ID with no matching member is skipped and reported in
    /// `unmatched`. Only a non-empty request with zero matches fails.
    ///
    /// # Errors
    ///
    /// - `NoAvailableMembers` if nothing in a non-empty request matched
    /// - `Inventory` if the member listing failed or was cancelled
    #[tracing::instrument(
        skip_all,
        fields(cluster = %scope.cluster, requested = provider_ids.len())
    )]
    pub async fn resolve(
        &self,
        scope: &ListScope,
        provider_ids: &[String],
        cancel: &CancellationToken,
    ) -> Result<ReferenceResult, DomainError> {
        let members = self.list_members(scope, cancel).await?;
        let index = ResolutionIndex::build(&members);
        debug!(
            members = members.len(),
            indexed = index.len(),
            "Indexed member snapshot"
        );

        let mut result = ReferenceResult::default();
        for provider_id in provider_ids {
            match index.get(provider_id) {
                Some(member) => {
                    result.available += 1;
                    if member.ready {
                        result.ready += 1;
                    }
                    result.references.push(self.reference_to(member));
                }
                None => result.unmatched.push(provider_id.clone()),
            }
        }

        if result.references.is_empty() && !provider_ids.is_empty() {
            return Err(DomainError::NoAvailableMembers {
                requested: provider_ids.len(),
            });
        }

        debug!(
            available = result.available,
            ready = result.ready,
            unmatched = result.unmatched.len(),
            "Resolved node references"
        );
        Ok(result)
    }

    /// Single bulk read of the inventory, abandoned as soon as `cancel` fires.
    async fn list_members(
        &self,
        scope: &ListScope,
        cancel: &CancellationToken,
    ) -> Result<Vec<MemberRecord>, DomainError> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(DomainError::Inventory(InventoryError::Cancelled)),
            listed = self.inventory.list_members(scope, cancel) => listed.map_err(DomainError::from),
        }
    }

    fn reference_to(&self, member: &MemberRecord) -> NodeReference {
        NodeReference {
            api_version: self.api_version.clone(),
            kind: self.kind.clone(),
            name: member.name.clone(),
            namespace: member.namespace.clone(),
            uid: member.uid.clone(),
        }
    }
}
