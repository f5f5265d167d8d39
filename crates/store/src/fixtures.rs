//! Shared test entity for exercising stores and projections.

use serde::{Deserialize, Serialize};

use telinv_core::{Draft, DomainResult, Entity, EntityId, impl_entity_id};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct GadgetId(pub EntityId);

impl_entity_id!(GadgetId, "GadgetId");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Gadget {
    pub id: GadgetId,
    pub name: String,
    pub tier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct GadgetBody {
    pub name: String,
    pub tier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct GadgetDraft {
    pub name: String,
    pub tier: String,
}

impl Draft for GadgetDraft {
    fn set_field(&mut self, name: &str, value: &str) -> DomainResult<()> {
        match name {
            "name" => self.name = value.to_string(),
            "tier" => self.tier = value.to_string(),
            other => return Err(telinv_core::DomainError::unknown_field(other)),
        }
        Ok(())
    }

    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.tier.trim().is_empty()
    }
}

impl Entity for Gadget {
    type Id = GadgetId;
    type Draft = GadgetDraft;
    type Body = GadgetBody;

    const RESOURCE: &'static str = "gadgets";

    fn id(&self) -> GadgetId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_body(draft: &GadgetDraft) -> DomainResult<GadgetBody> {
        Ok(GadgetBody {
            name: draft.name.clone(),
            tier: draft.tier.clone(),
        })
    }

    fn from_draft(id: GadgetId, draft: &GadgetDraft) -> DomainResult<Self> {
        Ok(Self {
            id,
            name: draft.name.clone(),
            tier: draft.tier.clone(),
        })
    }

    fn to_draft(&self) -> GadgetDraft {
        GadgetDraft {
            name: self.name.clone(),
            tier: self.tier.clone(),
        }
    }
}
