//! Configuration for the static inventory plugin.

use node_ref_resolver_sdk::MemberRecord;
use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticInventoryPluginConfig {
    /// Static cluster definitions.
    pub clusters: Vec<ClusterConfig>,
}

/// Members of a single cluster.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterConfig {
    /// Cluster name, matched against `ListScope::cluster`.
    pub name: String,

    /// Members in listing order.
    #[serde(default)]
    pub members: Vec<MemberRecord>,
}
