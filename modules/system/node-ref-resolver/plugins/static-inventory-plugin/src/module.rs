//! Static inventory plugin module.

use std::sync::Arc;

use anyhow::Context;
use figment::Figment;
use node_ref_resolver_sdk::NodeInventoryClient;
use tracing::info;

use crate::config::StaticInventoryPluginConfig;
use crate::domain::Service;

/// Static inventory plugin module.
///
/// Loads cluster members from configuration and serves them as an
/// in-memory `NodeInventoryClient`.
pub struct StaticInventoryPlugin;

impl StaticInventoryPlugin {
    /// Module name, also the configuration section key.
    pub const NAME: &'static str = "static_inventory_plugin";

    /// Builds the inventory client from `modules.static_inventory_plugin.config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration section cannot be deserialized.
    #[tracing::instrument(skip_all)]
    pub fn init(figment: &Figment) -> anyhow::Result<Arc<dyn NodeInventoryClient>> {
        let cfg: StaticInventoryPluginConfig = figment
            .focus(&format!("modules.{}.config", Self::NAME))
            .extract()
            .with_context(|| format!("invalid configuration for module '{}'", Self::NAME))?;

        let svc = Service::from_config(&cfg);
        info!(
            clusters = svc.cluster_count(),
            "Initialized static inventory plugin"
        );

        let api: Arc<dyn NodeInventoryClient> = Arc::new(svc);
        Ok(api)
    }
}
