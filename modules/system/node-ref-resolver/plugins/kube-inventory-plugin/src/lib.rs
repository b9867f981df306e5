//! Kubernetes Node Inventory Plugin
//!
//! This plugin lists the `v1` Nodes of one or more workload clusters straight
//! from their API servers and exposes them as cluster members.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   kube_inventory_plugin:
//!     config:
//!       clusters:
//!         - name: "workload-a"
//!           api_server: "https://10.0.0.1:6443"
//!           bearer_token: "${WORKLOAD_A_TOKEN}"
//!           certificate_authority: "/etc/workload-a/ca.crt"
//!           page_size: 500
//!           request_timeout: "10s"
//! ```
//!
//! Listing follows the API server's `continue` tokens until the last page.
//! Each page request is bounded by `request_timeout`; nothing is retried.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

pub use module::KubeInventoryPlugin;
