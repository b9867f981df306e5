//! Domain service for the Kubernetes inventory plugin.

use std::collections::HashMap;

use crate::config::KubeInventoryPluginConfig;

use super::cluster_client::ClusterClient;

/// Kubernetes inventory service.
///
/// Holds one API server client per configured cluster.
pub struct Service {
    pub(super) clusters: HashMap<String, ClusterClient>,
}

impl Service {
    /// Creates a new service from configuration.
    ///
    /// A cluster name configured twice keeps the later definition.
    ///
    /// # Errors
    ///
    /// Returns an error if any cluster entry is invalid.
    pub fn from_config(cfg: &KubeInventoryPluginConfig) -> anyhow::Result<Self> {
        let mut clusters = HashMap::with_capacity(cfg.clusters.len());
        for cluster in &cfg.clusters {
            let client = ClusterClient::new(cluster)?;
            if clusters.insert(client.name().to_owned(), client).is_some() {
                tracing::warn!(
                    cluster = %cluster.name,
                    "cluster configured more than once, keeping the later definition"
                );
            }
        }
        Ok(Self { clusters })
    }

    /// Number of configured clusters.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }
}
