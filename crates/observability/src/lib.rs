//! `telinv-observability` — logging bootstrap.

pub mod tracing;

pub use crate::tracing::init;
