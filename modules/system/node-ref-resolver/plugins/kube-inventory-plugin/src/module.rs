//! Kubernetes inventory plugin module.

use std::sync::Arc;

use anyhow::Context;
use figment::Figment;
use node_ref_resolver_sdk::NodeInventoryClient;
use tracing::info;

use crate::config::KubeInventoryPluginConfig;
use crate::domain::Service;

/// Kubernetes inventory plugin module.
pub struct KubeInventoryPlugin;

impl KubeInventoryPlugin {
    /// Module name, also the configuration section key.
    pub const NAME: &'static str = "kube_inventory_plugin";

    /// Builds the inventory client from `modules.kube_inventory_plugin.config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is malformed, a cluster entry
    /// fails validation, or TLS setup fails.
    #[tracing::instrument(skip_all)]
    pub fn init(figment: &Figment) -> anyhow::Result<Arc<dyn NodeInventoryClient>> {
        let cfg: KubeInventoryPluginConfig = figment
            .focus(&format!("modules.{}.config", Self::NAME))
            .extract()
            .with_context(|| format!("invalid configuration for module '{}'", Self::NAME))?;

        let svc = Service::from_config(&cfg)
            .with_context(|| format!("failed to initialize module '{}'", Self::NAME))?;
        info!(
            clusters = svc.cluster_count(),
            "Initialized Kubernetes inventory plugin"
        );

        let api: Arc<dyn NodeInventoryClient> = Arc::new(svc);
        Ok(api)
    }
}
