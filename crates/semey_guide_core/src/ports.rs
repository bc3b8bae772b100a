//! crates/semey_guide_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like local storage or APIs.

use async_trait::async_trait;

use crate::domain::DiscoveryResult;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., storage, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// A durable key-value medium.
///
/// Values are opaque strings and absence of a key is a valid, expected
/// state. The medium offers no transactional guarantee; concurrent writers
/// are not coordinated and the last write wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> PortResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> PortResult<()>;
    async fn remove(&self, key: &str) -> PortResult<()>;
}

/// A one-shot adapter to an external AI place-discovery service.
///
/// `discover` is a single round trip: no retry, no cache, no local timeout,
/// no streaming. Any transport or parse failure is absorbed inside the
/// adapter and surfaces as `None`, never as an error.
#[async_trait]
pub trait DiscoveryService: Send + Sync {
    async fn discover(&self, topic: &str) -> Option<DiscoveryResult>;
}
