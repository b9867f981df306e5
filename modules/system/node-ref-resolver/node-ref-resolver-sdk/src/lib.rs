//! Node Reference Resolver SDK
//!
//! This crate provides the public API for the `node-ref-resolver` module:
//!
//! - [`NodeRefResolverClient`] - Public API trait for consumers (the machine pool reconciler)
//! - [`NodeInventoryClient`] - Inventory API trait for member listing backends
//! - [`MemberRecord`], [`NodeReference`], [`ReferenceResult`] - Domain models
//! - [`NodeRefResolverError`], [`InventoryError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use node_ref_resolver_sdk::{ListScope, NodeRefResolverClient};
//! use tokio_util::sync::CancellationToken;
//!
//! let scope = ListScope::new("workload-cluster-a");
//! let provider_ids = vec!["aws://us-east-1/i-0abc".to_owned()];
//!
//! let result = resolver
//!     .resolve(&scope, &provider_ids, &CancellationToken::new())
//!     .await?;
//!
//! for node_ref in &result.references {
//!     println!("{}", node_ref.name);
//! }
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod inventory_api;
pub mod models;

pub use api::NodeRefResolverClient;
pub use error::{InventoryError, NodeRefResolverError};
pub use inventory_api::NodeInventoryClient;
pub use models::{ListScope, MemberRecord, NodeReference, ReferenceResult};
