//! The session-scoped domain store.

use std::sync::Arc;

use telinv_core::Entity;

use crate::gateway::MutationGateway;

/// In-memory authoritative collection for one entity type within a session.
///
/// The store never mutates its snapshot optimistically: every write goes to
/// the gateway first and, on success, the snapshot is resynced with a full
/// refetch. On failure the error is logged and the snapshot is left exactly
/// as it was — there is nothing to roll back because nothing was applied
/// ahead of confirmation.
pub struct DomainStore<E: Entity> {
    entries: Vec<E>,
    gateway: Arc<dyn MutationGateway<E>>,
}

impl<E: Entity> DomainStore<E> {
    /// Create an empty store over the given gateway. Call [`refresh`]
    /// (or any mutation) to populate the snapshot.
    ///
    /// [`refresh`]: DomainStore::refresh
    pub fn new(gateway: Arc<dyn MutationGateway<E>>) -> Self {
        Self {
            entries: Vec::new(),
            gateway,
        }
    }

    /// Current snapshot. Derived views must recompute from this on every
    /// render; nothing is cached or incrementally maintained.
    pub fn snapshot(&self) -> &[E] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: E::Id) -> Option<&E> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: E::Id) -> bool {
        self.find(id).is_some()
    }

    /// Resync the snapshot from the gateway. On failure the previous
    /// snapshot is kept.
    pub async fn refresh(&mut self) {
        match self.gateway.fetch_all().await {
            Ok(entries) => self.entries = entries,
            Err(err) => {
                tracing::error!("error fetching {}: {}", E::RESOURCE, err);
            }
        }
    }

    /// Create a new entity from the draft, then resync.
    ///
    /// Returns whether the mutation was applied, so callers know whether to
    /// clear their form. A failed follow-up refetch does not retract an
    /// applied write.
    pub async fn create(&mut self, draft: &E::Draft) -> bool {
        match self.gateway.create(draft).await {
            Ok(()) => {
                self.refresh().await;
                true
            }
            Err(err) => {
                tracing::error!("error adding {}: {}", E::RESOURCE, err);
                false
            }
        }
    }

    /// Replace the entity matching `id` with the draft, then resync.
    ///
    /// Ids absent from the current snapshot silently no-op without a
    /// gateway round-trip.
    pub async fn update(&mut self, id: E::Id, draft: &E::Draft) -> bool {
        if !self.contains(id) {
            tracing::debug!("{} {} not in snapshot, skipping update", E::RESOURCE, id);
            return false;
        }
        match self.gateway.update(id, draft).await {
            Ok(()) => {
                self.refresh().await;
                true
            }
            Err(err) => {
                tracing::error!("error updating {}: {}", E::RESOURCE, err);
                false
            }
        }
    }

    /// Remove the entity matching `id`, then resync.
    ///
    /// Ids absent from the current snapshot silently no-op without a
    /// gateway round-trip.
    pub async fn delete(&mut self, id: E::Id) -> bool {
        if !self.contains(id) {
            tracing::debug!("{} {} not in snapshot, skipping delete", E::RESOURCE, id);
            return false;
        }
        match self.gateway.delete(id).await {
            Ok(()) => {
                self.refresh().await;
                true
            }
            Err(err) => {
                tracing::error!("error deleting {}: {}", E::RESOURCE, err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use telinv_core::Draft as _;

    use super::*;
    use crate::fixtures::{Gadget, GadgetDraft};
    use crate::gateway::{GatewayError, GatewayResult};
    use crate::local::LocalGateway;

    fn draft(name: &str, tier: &str) -> GadgetDraft {
        let mut d = GadgetDraft::default();
        d.set_field("name", name).unwrap();
        d.set_field("tier", tier).unwrap();
        d
    }

    /// Wraps a local gateway and fails on demand, to exercise the
    /// leave-state-unchanged failure semantics.
    struct FlakyGateway {
        inner: LocalGateway<Gadget>,
        fail_fetch: AtomicBool,
        fail_writes: AtomicBool,
    }

    impl FlakyGateway {
        fn new() -> Self {
            Self {
                inner: LocalGateway::new(),
                fail_fetch: AtomicBool::new(false),
                fail_writes: AtomicBool::new(false),
            }
        }

        fn refused() -> GatewayError {
            GatewayError::Network("connection refused".to_string())
        }
    }

    #[async_trait::async_trait]
    impl MutationGateway<Gadget> for FlakyGateway {
        async fn fetch_all(&self) -> GatewayResult<Vec<Gadget>> {
            if self.fail_fetch.load(Ordering::SeqCst) {
                return Err(Self::refused());
            }
            self.inner.fetch_all().await
        }

        async fn create(&self, draft: &GadgetDraft) -> GatewayResult<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(Self::refused());
            }
            self.inner.create(draft).await
        }

        async fn update(
            &self,
            id: <Gadget as Entity>::Id,
            draft: &GadgetDraft,
        ) -> GatewayResult<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(Self::refused());
            }
            self.inner.update(id, draft).await
        }

        async fn delete(&self, id: <Gadget as Entity>::Id) -> GatewayResult<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(Self::refused());
            }
            self.inner.delete(id).await
        }
    }

    #[tokio::test]
    async fn create_grows_snapshot_by_exactly_one() {
        let mut store = DomainStore::new(Arc::new(LocalGateway::<Gadget>::new()));
        store.create(&draft("Router X1", "core")).await;

        assert_eq!(store.len(), 1);
        let gadget = &store.snapshot()[0];
        assert_eq!(gadget.name, "Router X1");
        assert_eq!(gadget.tier, "core");
    }

    #[tokio::test]
    async fn update_replaces_entry_in_place() {
        let mut store = DomainStore::new(Arc::new(LocalGateway::<Gadget>::new()));
        store.create(&draft("Router X1", "core")).await;
        store.create(&draft("Switch S9", "edge")).await;

        let id = store.snapshot()[0].id;
        store.update(id, &draft("Router X1 rev B", "core")).await;

        assert_eq!(store.len(), 2, "edit must not append a duplicate");
        assert_eq!(store.snapshot()[0].id, id, "id survives the edit");
        assert_eq!(store.snapshot()[0].name, "Router X1 rev B");
        assert_eq!(store.snapshot()[1].name, "Switch S9");
    }

    #[tokio::test]
    async fn delete_removes_entity() {
        let mut store = DomainStore::new(Arc::new(LocalGateway::<Gadget>::new()));
        store.create(&draft("Router X1", "core")).await;
        store.create(&draft("Switch S9", "edge")).await;

        let id = store.snapshot()[0].id;
        store.delete(id).await;

        assert_eq!(store.len(), 1);
        assert!(store.find(id).is_none());
    }

    #[tokio::test]
    async fn delete_of_unknown_id_silently_no_ops() {
        let mut store = DomainStore::new(Arc::new(LocalGateway::<Gadget>::new()));
        store.create(&draft("Router X1", "core")).await;

        let stranger = <Gadget as Entity>::Id::new();
        assert!(!store.delete(stranger).await);

        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn failed_write_leaves_snapshot_unchanged() {
        let gateway = Arc::new(FlakyGateway::new());
        let mut store = DomainStore::new(gateway.clone());
        store.create(&draft("Router X1", "core")).await;

        gateway.fail_writes.store(true, Ordering::SeqCst);
        assert!(!store.create(&draft("Switch S9", "edge")).await);
        assert!(
            !store
                .update(store.snapshot()[0].id, &draft("Renamed", "core"))
                .await
        );

        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].name, "Router X1");
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_snapshot() {
        let gateway = Arc::new(FlakyGateway::new());
        let mut store = DomainStore::new(gateway.clone());
        store.create(&draft("Router X1", "core")).await;

        gateway.fail_fetch.store(true, Ordering::SeqCst);
        store.refresh().await;

        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].name, "Router X1");
    }
}
