//! Local-authoritative gateway strategy.

use std::sync::Mutex;

use telinv_core::{Entity, EntityId};

use crate::gateway::{GatewayResult, MutationGateway};

/// In-memory backing collection.
///
/// Create appends a new entity under a fresh time-ordered identifier, update
/// replaces the entry matching the id, delete filters it out. Operations on
/// ids absent from the collection silently no-op. Nothing here can fail over
/// the wire; the only failure mode is a draft that does not materialize
/// (e.g. non-numeric stock), which surfaces as a domain error.
#[derive(Debug)]
pub struct LocalGateway<E> {
    entries: Mutex<Vec<E>>,
}

impl<E: Entity> LocalGateway<E> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Seed the collection, bypassing draft materialization. Intended for
    /// demo/test setup.
    pub fn seed(&self, entities: impl IntoIterator<Item = E>) {
        let mut entries = self.entries.lock().expect("local gateway poisoned");
        entries.extend(entities);
    }
}

impl<E: Entity> Default for LocalGateway<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<E: Entity> MutationGateway<E> for LocalGateway<E> {
    async fn fetch_all(&self) -> GatewayResult<Vec<E>> {
        let entries = self.entries.lock().expect("local gateway poisoned");
        Ok(entries.clone())
    }

    async fn create(&self, draft: &E::Draft) -> GatewayResult<()> {
        let entity = E::from_draft(E::Id::from(EntityId::new()), draft)?;
        let mut entries = self.entries.lock().expect("local gateway poisoned");
        entries.push(entity);
        Ok(())
    }

    async fn update(&self, id: E::Id, draft: &E::Draft) -> GatewayResult<()> {
        let entity = E::from_draft(id, draft)?;
        let mut entries = self.entries.lock().expect("local gateway poisoned");
        if let Some(slot) = entries.iter_mut().find(|e| e.id() == id) {
            *slot = entity;
        }
        Ok(())
    }

    async fn delete(&self, id: E::Id) -> GatewayResult<()> {
        let mut entries = self.entries.lock().expect("local gateway poisoned");
        entries.retain(|e| e.id() != id);
        Ok(())
    }
}
