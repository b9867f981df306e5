//! Domain service for the static inventory plugin.

use std::collections::HashMap;

use node_ref_resolver_sdk::MemberRecord;

use crate::config::StaticInventoryPluginConfig;

/// Static inventory service.
///
/// Stores member data in memory, loaded from configuration.
pub struct Service {
    /// Members by cluster name, in configuration order.
    pub(super) clusters: HashMap<String, Vec<MemberRecord>>,
}

impl Service {
    /// Creates a new service from configuration.
    ///
    /// A cluster name configured twice keeps the later definition.
    #[must_use]
    pub fn from_config(cfg: &StaticInventoryPluginConfig) -> Self {
        let mut clusters = HashMap::with_capacity(cfg.clusters.len());
        for cluster in &cfg.clusters {
            if clusters
                .insert(cluster.name.clone(), cluster.members.clone())
                .is_some()
            {
                tracing::warn!(
                    cluster = %cluster.name,
                    "cluster configured more than once, keeping the later definition"
                );
            }
        }
        Self { clusters }
    }

    /// Number of configured clusters.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }
}
