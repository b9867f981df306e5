//! Inventory API trait for member listing backends.
//!
//! Backends implement this trait to expose the members of a cluster as one
//! bulk read. The resolver holds an `Arc<dyn NodeInventoryClient>` and is
//! agnostic to whether members come from configuration or a live API server.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::InventoryError;
use crate::models::{ListScope, MemberRecord};

/// Inventory API trait for member listing backends.
#[async_trait]
pub trait NodeInventoryClient: Send + Sync {
    /// List every member currently known in `scope`.
    ///
    /// Implementations return members in a stable order (configuration order
    /// or server order) and must stop promptly once `cancel` fires.
    ///
    /// # Errors
    ///
    /// - `UnknownScope` if the backend has no such cluster
    /// - `Unavailable`, `Timeout`, `InvalidResponse` for transient read failures
    /// - `Cancelled` if `cancel` fired before the listing completed
    async fn list_members(
        &self,
        scope: &ListScope,
        cancel: &CancellationToken,
    ) -> Result<Vec<MemberRecord>, InventoryError>;
}
