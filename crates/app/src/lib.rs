//! `telinv-app` — composition layer for the two feature areas.
//!
//! Wires the domain stores, form controllers, and derived views into the
//! product and supplier admin sessions, with the mutation strategy (local
//! in-memory vs. remote REST) selected by configuration.

pub mod config;
pub mod orders;
pub mod product_admin;
pub mod supplier_admin;

pub use config::{Config, StoreMode};
pub use orders::{LocalOrderGateway, OrderGateway, RemoteOrderGateway};
pub use product_admin::ProductAdmin;
pub use supplier_admin::SupplierAdmin;
