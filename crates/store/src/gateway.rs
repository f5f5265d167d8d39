//! The mutation gateway contract.

use telinv_core::{DomainError, Entity};
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failure of a gateway operation.
///
/// Remote failures are non-fatal by design: callers log them and leave the
/// session snapshot untouched.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API error ({0}): {1}")]
    Api(u16, String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Performs create/update/delete against a backing collection.
///
/// Both strategies expose the same contract so a [`crate::DomainStore`] can
/// be pointed at either by configuration:
///
/// - local-authoritative: the gateway owns the collection in memory and
///   operations are effectively synchronous;
/// - remote-authoritative: each operation is one HTTP round-trip and the
///   store resyncs with `fetch_all` after every successful write.
#[async_trait::async_trait]
pub trait MutationGateway<E: Entity>: Send + Sync {
    /// Fetch the full current collection.
    async fn fetch_all(&self) -> GatewayResult<Vec<E>>;

    /// Create a new entity from a draft. The backing collection assigns the
    /// identifier (server-side or a fresh time-ordered id locally).
    async fn create(&self, draft: &E::Draft) -> GatewayResult<()>;

    /// Replace the entity matching `id` with the materialized draft.
    async fn update(&self, id: E::Id, draft: &E::Draft) -> GatewayResult<()>;

    /// Remove the entity matching `id`.
    async fn delete(&self, id: E::Id) -> GatewayResult<()>;
}
