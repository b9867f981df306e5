//! Domain layer for the static inventory plugin.

pub mod client;
pub mod service;

pub use service::Service;
