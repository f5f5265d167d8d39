//! `telinv-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no gateway or transport
//! concerns): identifiers, the domain error model, and the `Entity`/`Draft`
//! seams the store, forms, and feature crates share.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Draft, Entity};
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
