use serde::{Deserialize, Serialize};

use telinv_core::{DomainError, DomainResult, EntityId, impl_entity_id};

use crate::supplier::SupplierId;

/// Order identifier. Time-ordered, so ids stay unique within a supplier's
/// order list whether assigned locally or by the server.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub EntityId);

impl_entity_id!(OrderId, "OrderId");

/// A purchase order placed with a supplier.
///
/// Status is free text, as entered on the order form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub supplier_id: SupplierId,
    pub description: String,
    pub status: String,
}

/// In-progress order form state. The supplier id is the raw value of the
/// selection field and is parsed on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub supplier_id: String,
    pub description: String,
    pub status: String,
}

impl OrderDraft {
    pub fn set_field(&mut self, name: &str, value: &str) -> DomainResult<()> {
        match name {
            "supplierId" => self.supplier_id = value.to_string(),
            "description" => self.description = value.to_string(),
            "status" => self.status = value.to_string(),
            other => return Err(DomainError::unknown_field(other)),
        }
        Ok(())
    }

    /// Presence check; a submit without a selected supplier is refused.
    pub fn is_complete(&self) -> bool {
        !self.supplier_id.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.status.trim().is_empty()
    }

    /// Parse the selected supplier id.
    pub fn supplier_id(&self) -> DomainResult<SupplierId> {
        self.supplier_id.parse()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Materialize under a fresh order id for the given supplier.
    pub fn into_order(&self, id: OrderId, supplier_id: SupplierId) -> Order {
        Order {
            id,
            supplier_id,
            description: self.description.clone(),
            status: self.status.clone(),
        }
    }
}
