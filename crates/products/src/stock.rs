use serde::{Deserialize, Serialize};

use crate::product::{Product, ProductId};

/// Direction of a stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockDirection {
    In,
    Out,
}

/// One-shot stock mutation request.
///
/// Applied once to the product whose id matches the target, then discarded;
/// no running transaction history is kept. No bound checking is applied, so
/// an `out` movement may take stock negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTransaction {
    pub product_id: ProductId,
    pub direction: StockDirection,
    pub quantity: i64,
}

impl StockTransaction {
    pub fn new(product_id: ProductId, direction: StockDirection, quantity: i64) -> Self {
        Self {
            product_id,
            direction,
            quantity,
        }
    }

    /// Quantity with the direction applied: positive for `in`, negative for
    /// `out`.
    pub fn signed_quantity(&self) -> i64 {
        match self.direction {
            StockDirection::In => self.quantity,
            StockDirection::Out => -self.quantity,
        }
    }
}

impl Product {
    /// Apply a transaction to this product, if it is the target.
    ///
    /// Returns whether the transaction matched (and was applied).
    pub fn apply_transaction(&mut self, tx: &StockTransaction) -> bool {
        if tx.product_id != self.id {
            return false;
        }
        self.stock += tx.signed_quantity();
        true
    }
}
