//! Domain models for the node reference resolver module.

use serde::{Deserialize, Serialize};

/// Cluster boundary an inventory listing is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListScope {
    /// Name of the workload cluster whose members are listed.
    pub cluster: String,
}

impl ListScope {
    #[must_use]
    pub fn new(cluster: impl Into<String>) -> Self {
        Self {
            cluster: cluster.into(),
        }
    }
}

/// A cluster member as reported by the inventory.
///
/// Records are produced by a [`crate::NodeInventoryClient`] and are treated as
/// immutable for the duration of a single resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberRecord {
    /// Member name, unique within its namespace.
    pub name: String,
    /// Member namespace. Empty for cluster-scoped members such as nodes.
    #[serde(default)]
    pub namespace: String,
    /// Provider-assigned instance identifier. Empty when the member has not
    /// been tagged by its cloud provider yet.
    #[serde(default)]
    pub provider_id: String,
    /// Server-assigned object UID, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Whether the member reports itself ready to run workloads.
    #[serde(default)]
    pub ready: bool,
}

impl MemberRecord {
    /// Creates a cluster-scoped, not-ready member with no UID.
    #[must_use]
    pub fn new(name: impl Into<String>, provider_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: String::new(),
            provider_id: provider_id.into(),
            uid: None,
            ready: false,
        }
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    #[must_use]
    pub fn with_ready(mut self, ready: bool) -> Self {
        self.ready = ready;
        self
    }
}

/// Stable reference to a resolved cluster member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeReference {
    /// API version of the referenced object (e.g. `v1`).
    pub api_version: String,
    /// Kind of the referenced object (e.g. `Node`).
    pub kind: String,
    /// Name of the referenced member.
    pub name: String,
    /// Namespace of the referenced member, empty when cluster-scoped.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    /// UID of the referenced member, when the inventory reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// Outcome of a successful resolution.
///
/// `references` follows the order of the requested provider IDs. Identifiers
/// that matched no member are left out of `references` and listed in
/// `unmatched` instead, so a partial result is distinguishable from a full one
/// without comparing lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceResult {
    /// References to matched members, in request order.
    pub references: Vec<NodeReference>,
    /// Number of requested identifiers that matched a member.
    pub available: usize,
    /// Number of matched members that are ready.
    pub ready: usize,
    /// Requested identifiers with no matching member, in request order.
    pub unmatched: Vec<String>,
}

impl ReferenceResult {
    /// Returns `true` when every requested identifier was resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }
}
