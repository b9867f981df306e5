//! Public API trait for the node reference resolver.
//!
//! Consumers (typically a machine pool reconciler) use this trait to turn the
//! provider IDs reported by an external scaling group into references to the
//! cluster members that have already registered.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::NodeRefResolverError;
use crate::models::{ListScope, ReferenceResult};

/// Public API trait for the node reference resolver.
///
/// ```ignore
/// let result = resolver.resolve(&scope, &provider_ids, &cancel).await?;
/// if !result.is_complete() {
///     // some instances have not joined yet, requeue later
/// }
/// ```
#[async_trait]
pub trait NodeRefResolverClient: Send + Sync {
    /// Resolve provider IDs to node references.
    ///
    /// The member inventory for `scope` is listed exactly once per call.
    /// Matching is exact string comparison. The returned references follow
    /// the order of `provider_ids`; identifiers without a matching member are
    /// omitted from `references` and reported in `unmatched`.
    ///
    /// An empty `provider_ids` slice yields an empty result.
    ///
    /// # Errors
    ///
    /// - `NoAvailableMembers` if `provider_ids` is non-empty and nothing matched
    /// - `Inventory` if listing members failed or `cancel` fired first
    ///
    /// # Arguments
    ///
    /// * `scope` - Cluster whose members are considered
    /// * `provider_ids` - Provider IDs to resolve, in the caller's order
    /// * `cancel` - Aborts the inventory listing when triggered
    async fn resolve(
        &self,
        scope: &ListScope,
        provider_ids: &[String],
        cancel: &CancellationToken,
    ) -> Result<ReferenceResult, NodeRefResolverError>;
}
