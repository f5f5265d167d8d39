//! `telinv-suppliers` — supplier and order-history domain.
//!
//! Suppliers own their order history: deleting a supplier cascades to its
//! orders. Grouping orders by supplier is a pure projection recomputed from
//! the flat order list.

pub mod history;
pub mod order;
pub mod supplier;

pub use history::{OrderHistory, group_by_supplier};
pub use order::{Order, OrderDraft, OrderId};
pub use supplier::{Supplier, SupplierBody, SupplierDraft, SupplierId};
