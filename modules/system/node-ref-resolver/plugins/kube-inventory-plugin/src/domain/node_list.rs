//! Subset of the core `v1` `NodeList` payload the inventory needs.
//!
//! Unknown fields are ignored so newer API servers keep working.

use node_ref_resolver_sdk::MemberRecord;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct NodeList {
    #[serde(default)]
    pub metadata: ListMeta,
    #[serde(default)]
    pub items: Vec<Node>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListMeta {
    /// Opaque token for the next page. Absent or empty on the last page.
    #[serde(rename = "continue", default)]
    pub continue_token: Option<String>,
}

impl ListMeta {
    /// Token to request the next page with, if there is one.
    #[must_use]
    pub fn next_page(&self) -> Option<&str> {
        self.continue_token.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct Node {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: NodeSpec,
    #[serde(default)]
    pub status: NodeStatus,
}

#[derive(Debug, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub uid: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NodeSpec {
    #[serde(rename = "providerID", default)]
    pub provider_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NodeStatus {
    #[serde(default)]
    pub conditions: Vec<NodeCondition>,
}

#[derive(Debug, Deserialize)]
pub struct NodeCondition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
}

impl Node {
    /// A node is ready when its `Ready` condition reports `"True"`.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.status
            .conditions
            .iter()
            .any(|c| c.condition_type == "Ready" && c.status == "True")
    }
}

impl From<Node> for MemberRecord {
    fn from(node: Node) -> Self {
        let ready = node.is_ready();
        Self {
            name: node.metadata.name,
            namespace: node.metadata.namespace.unwrap_or_default(),
            provider_id: node.spec.provider_id.unwrap_or_default(),
            uid: node.metadata.uid,
            ready,
        }
    }
}
