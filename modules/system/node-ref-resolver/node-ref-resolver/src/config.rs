//! Configuration for the node reference resolver module.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;

/// Environment variable prefix for configuration overrides.
///
/// `APP__MODULES__NODE_REF_RESOLVER__CONFIG__REFERENCE_KIND=Machine` overrides
/// `modules.node_ref_resolver.config.reference_kind`.
pub const ENV_PREFIX: &str = "APP__";

/// Module configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeRefResolverConfig {
    /// API version written into every produced reference.
    pub reference_api_version: String,

    /// Kind written into every produced reference.
    pub reference_kind: String,
}

impl Default for NodeRefResolverConfig {
    fn default() -> Self {
        Self {
            reference_api_version: "v1".to_owned(),
            reference_kind: "Node".to_owned(),
        }
    }
}

/// Builds the layered configuration source: YAML file first, then
/// `APP__`-prefixed environment variables on top.
#[must_use]
pub fn layered_figment(yaml_path: &Path) -> Figment {
    Figment::new()
        .merge(Yaml::file(yaml_path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}
