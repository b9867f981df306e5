//! Domain layer for the node reference resolver.

pub mod error;
pub mod index;
pub mod local_client;
pub mod service;

pub use error::DomainError;
pub use index::ResolutionIndex;
pub use local_client::NodeRefResolverLocalClient;
pub use service::Service;
