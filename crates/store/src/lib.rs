//! `telinv-store` — domain stores and mutation gateways.
//!
//! A [`DomainStore`] owns the in-memory authoritative snapshot of one entity
//! collection for the current session and routes every mutation through a
//! [`MutationGateway`]. Two interchangeable strategies implement the gateway
//! contract: [`LocalGateway`] (in-memory, synchronous, cannot fail over the
//! wire) and [`RemoteGateway`] (REST calls, refetch-after-write).

#[cfg(test)]
pub(crate) mod fixtures;
pub mod gateway;
pub mod local;
pub mod query;
pub mod remote;
pub mod store;

pub use gateway::{GatewayError, GatewayResult, MutationGateway};
pub use local::LocalGateway;
pub use query::search_by_name;
pub use remote::{RemoteGateway, check_status};
pub use store::DomainStore;
