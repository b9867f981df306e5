//! Domain layer for the Kubernetes inventory plugin.

pub mod client;
pub mod cluster_client;
pub mod node_list;
pub mod service;
pub mod transport;

pub use cluster_client::ClusterClient;
pub use service::Service;
