//! `telinv-products` — product stock domain.
//!
//! Products carry a stock level and a reorder point; a product is low-stock
//! when `stock <= reorder_point`. Stock transactions are one-shot signed
//! adjustments, not ledger entries.

pub mod product;
pub mod stock;

pub use product::{Product, ProductBody, ProductDraft, ProductId, low_stock};
pub use stock::{StockDirection, StockTransaction};
