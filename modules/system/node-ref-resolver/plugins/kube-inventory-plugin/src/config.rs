//! Configuration for the Kubernetes inventory plugin.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use url::Url;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KubeInventoryPluginConfig {
    /// API server endpoints, one per workload cluster.
    pub clusters: Vec<ClusterEndpointConfig>,
}

/// Connection settings for one workload cluster.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterEndpointConfig {
    /// Cluster name, matched against `ListScope::cluster`.
    pub name: String,

    /// Base URL of the API server, e.g. `https://10.0.0.1:6443`.
    pub api_server: Url,

    /// Bearer token presented on every request.
    #[serde(default)]
    pub bearer_token: Option<SecretString>,

    /// PEM bundle used to verify the API server instead of the public roots.
    #[serde(default)]
    pub certificate_authority: Option<PathBuf>,

    /// Maximum number of Nodes per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Bound on each page request, in humantime form (`"10s"`, `"1m"`).
    #[serde(
        default = "default_request_timeout",
        deserialize_with = "deserialize_duration"
    )]
    pub request_timeout: Duration,

    /// Upper bound on one response body, in bytes.
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,

    /// Upper bound on pages per listing.
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Permit plain `http://` API servers. Only meant for local testing.
    #[serde(default)]
    pub allow_insecure_http: bool,
}

impl ClusterEndpointConfig {
    /// Checks settings that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero limit or timeout, or a URL scheme the
    /// transport security settings do not allow.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.page_size > 0,
            "cluster '{}': page_size must be greater than zero",
            self.name
        );
        anyhow::ensure!(
            self.max_response_bytes > 0,
            "cluster '{}': max_response_bytes must be greater than zero",
            self.name
        );
        anyhow::ensure!(
            self.max_pages > 0,
            "cluster '{}': max_pages must be greater than zero",
            self.name
        );
        anyhow::ensure!(
            !self.request_timeout.is_zero(),
            "cluster '{}': request_timeout must be greater than zero",
            self.name
        );
        match self.api_server.scheme() {
            "https" => Ok(()),
            "http" if self.allow_insecure_http => Ok(()),
            "http" => anyhow::bail!(
                "cluster '{}': plain http API server requires allow_insecure_http",
                self.name
            ),
            other => anyhow::bail!(
                "cluster '{}': unsupported API server scheme '{other}'",
                self.name
            ),
        }
    }
}

fn default_page_size() -> u32 {
    500
}

fn default_max_response_bytes() -> usize {
    16 * 1024 * 1024 // 16 MiB
}

fn default_max_pages() -> usize {
    10_000
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    humantime::parse_duration(&raw).map_err(serde::de::Error::custom)
}
