use serde::{Deserialize, Serialize};

use telinv_core::{Draft, DomainError, DomainResult, Entity, EntityId, impl_entity_id};

/// Supplier identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(pub EntityId);

impl_entity_id!(SupplierId, "SupplierId");

/// A supplier the inventory is sourced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub address: String,
}

/// Request body for supplier create/update: the supplier shape minus the
/// server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierBody {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub address: String,
}

/// In-progress supplier form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierDraft {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub address: String,
}

impl Draft for SupplierDraft {
    fn set_field(&mut self, name: &str, value: &str) -> DomainResult<()> {
        match name {
            "name" => self.name = value.to_string(),
            "contact" => self.contact = value.to_string(),
            "email" => self.email = value.to_string(),
            "address" => self.address = value.to_string(),
            other => return Err(DomainError::unknown_field(other)),
        }
        Ok(())
    }

    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.contact.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.address.trim().is_empty()
    }
}

impl Entity for Supplier {
    type Id = SupplierId;
    type Draft = SupplierDraft;
    type Body = SupplierBody;

    const RESOURCE: &'static str = "suppliers";

    fn id(&self) -> SupplierId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_body(draft: &SupplierDraft) -> DomainResult<SupplierBody> {
        Ok(SupplierBody {
            name: draft.name.clone(),
            contact: draft.contact.clone(),
            email: draft.email.clone(),
            address: draft.address.clone(),
        })
    }

    fn from_draft(id: SupplierId, draft: &SupplierDraft) -> DomainResult<Self> {
        let body = Self::to_body(draft)?;
        Ok(Self {
            id,
            name: body.name,
            contact: body.contact,
            email: body.email,
            address: body.address,
        })
    }

    fn to_draft(&self) -> SupplierDraft {
        SupplierDraft {
            name: self.name.clone(),
            contact: self.contact.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }
}
