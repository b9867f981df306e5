//! Domain errors for the node reference resolver.

use node_ref_resolver_sdk::{InventoryError, NodeRefResolverError};

/// Domain-level errors for the node reference resolver
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("No available nodes: none of {requested} provider IDs matched")]
    NoAvailableMembers { requested: usize },

    #[error("Failed to list cluster members: {0}")]
    Inventory(#[from] InventoryError),
}

impl From<DomainError> for NodeRefResolverError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NoAvailableMembers { requested } => Self::NoAvailableMembers { requested },
            DomainError::Inventory(source) => Self::Inventory(source),
        }
    }
}
