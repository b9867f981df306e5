//! Static Node Inventory Plugin
//!
//! This plugin serves cluster members from configuration.
//! Useful for testing, development, and clusters whose membership is fixed.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   static_inventory_plugin:
//!     config:
//!       clusters:
//!         - name: "workload-a"
//!           members:
//!             - name: "node-1"
//!               provider_id: "aws://us-east-1/id-node-1"
//!               ready: true
//!             - name: "azure-node-4"
//!               provider_id: "azure://westus2/id-node-4"
//! ```
//!
//! Members are listed in the order they are configured.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

pub use module::StaticInventoryPlugin;
