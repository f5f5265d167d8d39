//! The `Entity`/`Draft` seams shared by the store, forms, and feature crates.

use core::fmt::Display;
use core::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DomainResult;
use crate::id::EntityId;

/// In-progress, not-yet-submitted form state for one entity.
///
/// Drafts hold raw field values exactly as entered (strings); numeric
/// invariants are enforced when the draft is materialized into an entity.
pub trait Draft: Clone + Default + Send + Sync + 'static {
    /// Update one field of the draft by its form name.
    ///
    /// Field names follow the wire spelling (e.g. `reorderPoint`). Unknown
    /// names are a [`crate::DomainError::UnknownField`].
    fn set_field(&mut self, name: &str, value: &str) -> DomainResult<()>;

    /// Presence check: every required field is non-empty.
    fn is_complete(&self) -> bool;

    /// Reset the draft to its blank state.
    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A domain entity held by a domain store for the lifetime of one session.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Typed identifier for this entity kind.
    type Id: Copy + Eq + Ord + Hash + Display + From<EntityId> + Send + Sync + 'static;

    /// Draft form for creating or editing this entity.
    type Draft: Draft;

    /// Wire body for create and update requests: the entity shape with the
    /// server-assigned identifier omitted and numeric fields already parsed.
    type Body: Serialize + Send + Sync + 'static;

    /// Collection segment of the REST resource (`/api/{RESOURCE}`).
    const RESOURCE: &'static str;

    fn id(&self) -> Self::Id;

    /// Display name, used by the search projection.
    fn name(&self) -> &str;

    /// Materialize a draft into a request body.
    ///
    /// This is where the numeric invariants hold or fail; [`from_draft`]
    /// shares the same parse point.
    ///
    /// [`from_draft`]: Entity::from_draft
    fn to_body(draft: &Self::Draft) -> DomainResult<Self::Body>;

    /// Materialize a draft into an entity under the given identifier.
    fn from_draft(id: Self::Id, draft: &Self::Draft) -> DomainResult<Self>;

    /// Copy this entity back into an editable draft.
    fn to_draft(&self) -> Self::Draft;
}
