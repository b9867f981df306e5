//! Local (in-process) client for the node reference resolver module.

use std::sync::Arc;

use async_trait::async_trait;
use node_ref_resolver_sdk::{
    ListScope, NodeRefResolverClient, NodeRefResolverError, ReferenceResult,
};
use tokio_util::sync::CancellationToken;

use super::{DomainError, Service};

/// Local client wrapping the resolver service.
///
/// Handed out by [`crate::NodeRefResolverModule::init`].
pub struct NodeRefResolverLocalClient {
    svc: Arc<Service>,
}

impl NodeRefResolverLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> NodeRefResolverError {
    match &e {
        // Instances that have not joined yet are routine during scale-up.
        DomainError::NoAvailableMembers { .. } => {
            tracing::debug!(operation = op, error = %e, "node-ref-resolver found no members");
        }
        DomainError::Inventory(_) => {
            tracing::error!(operation = op, error = ?e, "node-ref-resolver call failed");
        }
    }
    e.into()
}

#[async_trait]
impl NodeRefResolverClient for NodeRefResolverLocalClient {
    async fn resolve(
        &self,
        scope: &ListScope,
        provider_ids: &[String],
        cancel: &CancellationToken,
    ) -> Result<ReferenceResult, NodeRefResolverError> {
        self.svc
            .resolve(scope, provider_ids, cancel)
            .await
            .map_err(|e| log_and_convert("resolve", e))
    }
}
