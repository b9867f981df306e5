//! Error types for the node reference resolver module.

use std::time::Duration;

use thiserror::Error;

/// Errors reported by a [`crate::NodeInventoryClient`].
///
/// The resolver never interprets these; they reach the caller unchanged via
/// [`NodeRefResolverError::Inventory`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// The inventory does not know the requested cluster.
    #[error("unknown cluster scope: {cluster}")]
    UnknownScope {
        /// The cluster name that was not found.
        cluster: String,
    },

    /// The member listing could not be obtained.
    #[error("inventory unavailable: {0}")]
    Unavailable(String),

    /// A listing request did not complete in time.
    #[error("inventory request timed out after {0:?}")]
    Timeout(Duration),

    /// The inventory answered with a payload that could not be decoded.
    #[error("invalid inventory response: {0}")]
    InvalidResponse(String),

    /// The caller cancelled the listing.
    #[error("inventory listing cancelled")]
    Cancelled,
}

/// Errors that can occur when resolving provider IDs to node references.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeRefResolverError {
    /// None of the requested provider IDs matched a registered member.
    ///
    /// Expected while instances are still joining the cluster; the caller
    /// should requeue rather than treat it as fatal.
    #[error("no available nodes: none of {requested} provider IDs matched a cluster member")]
    NoAvailableMembers {
        /// Number of provider IDs in the request.
        requested: usize,
    },

    /// The inventory listing failed.
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl NodeRefResolverError {
    /// Returns `true` when the error means "members have not registered yet"
    /// rather than "the inventory could not be read".
    #[must_use]
    pub fn is_no_available_members(&self) -> bool {
        matches!(self, Self::NoAvailableMembers { .. })
    }
}
