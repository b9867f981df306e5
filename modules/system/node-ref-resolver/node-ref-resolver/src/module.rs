//! Node reference resolver module wiring.

use std::sync::Arc;

use anyhow::Context;
use figment::Figment;
use node_ref_resolver_sdk::{NodeInventoryClient, NodeRefResolverClient};
use tracing::info;

use crate::config::NodeRefResolverConfig;
use crate::domain::{NodeRefResolverLocalClient, Service};

/// Node reference resolver module.
///
/// Reads its section from the host configuration and binds the resolver to
/// the inventory backend the host selected.
pub struct NodeRefResolverModule;

impl NodeRefResolverModule {
    /// Module name, also the configuration section key.
    pub const NAME: &'static str = "node_ref_resolver";

    /// Builds the resolver client.
    ///
    /// Configuration is read from `modules.node_ref_resolver.config`; a
    /// missing section yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration section cannot be deserialized.
    #[tracing::instrument(skip_all)]
    pub fn init(
        figment: &Figment,
        inventory: Arc<dyn NodeInventoryClient>,
    ) -> anyhow::Result<Arc<dyn NodeRefResolverClient>> {
        let cfg: NodeRefResolverConfig = figment
            .focus(&format!("modules.{}.config", Self::NAME))
            .extract()
            .with_context(|| format!("invalid configuration for module '{}'", Self::NAME))?;
        info!(
            api_version = %cfg.reference_api_version,
            kind = %cfg.reference_kind,
            "Initializing node_ref_resolver"
        );

        let svc = Arc::new(Service::new(inventory, &cfg));
        let api: Arc<dyn NodeRefResolverClient> = Arc::new(NodeRefResolverLocalClient::new(svc));
        Ok(api)
    }
}
