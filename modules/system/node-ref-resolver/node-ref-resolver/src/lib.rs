//! Node Reference Resolver Module
//!
//! This module maps the provider IDs reported by a machine pool's scaling
//! group onto the cluster members (nodes) that have already registered, and
//! returns ordered references to them.
//!
//! The member listing is delegated to a `NodeInventoryClient` backend chosen
//! by the host. The module exposes the `NodeRefResolverClient` trait for
//! consumption by the reconciler.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

pub use config::NodeRefResolverConfig;
pub use domain::{NodeRefResolverLocalClient, ResolutionIndex, Service};
pub use module::NodeRefResolverModule;
