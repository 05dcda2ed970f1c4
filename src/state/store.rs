//! Swappable storage handle installed by the storage supervisor.

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::dao::{
    models::{GroupEntity, MatchEntity, MatchResultUpdate, PointEntity},
    storage::{StorageError, StorageResult},
    tournament_store::TournamentStore,
};

/// [`TournamentStore`] forwarding every call to the currently installed backend.
///
/// Use cases hold this handle from startup on; while no backend is installed every call fails
/// with [`StorageError::Degraded`].
#[derive(Clone, Default)]
pub struct StoreSlot {
    inner: Arc<RwLock<SlotState>>,
}

#[derive(Default)]
struct SlotState {
    store: Option<Arc<dyn TournamentStore>>,
    degraded: bool,
}

impl StoreSlot {
    /// Empty slot, in degraded mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a backend and leave degraded mode.
    pub async fn install(&self, store: Arc<dyn TournamentStore>) {
        let mut guard = self.inner.write().await;
        guard.store = Some(store);
        guard.degraded = false;
    }

    /// Remove the current backend and enter degraded mode.
    pub async fn clear(&self) {
        let mut guard = self.inner.write().await;
        guard.store = None;
        guard.degraded = true;
    }

    /// Flag the installed backend as unhealthy (or healthy again) without removing it.
    pub async fn set_degraded(&self, degraded: bool) {
        self.inner.write().await.degraded = degraded;
    }

    /// True when no backend is installed or the installed one failed its last health check.
    pub async fn is_degraded(&self) -> bool {
        let guard = self.inner.read().await;
        guard.store.is_none() || guard.degraded
    }

    /// The installed backend, or [`StorageError::Degraded`].
    pub async fn current(&self) -> StorageResult<Arc<dyn TournamentStore>> {
        let guard = self.inner.read().await;
        guard.store.clone().ok_or(StorageError::Degraded)
    }
}

impl TournamentStore for StoreSlot {
    fn insert_group(&self, group: GroupEntity) -> BoxFuture<'static, StorageResult<GroupEntity>> {
        let slot = self.clone();
        Box::pin(async move { slot.current().await?.insert_group(group).await })
    }

    fn insert_match(&self, entity: MatchEntity) -> BoxFuture<'static, StorageResult<MatchEntity>> {
        let slot = self.clone();
        Box::pin(async move { slot.current().await?.insert_match(entity).await })
    }

    fn find_match(&self, code: i64) -> BoxFuture<'static, StorageResult<Option<MatchEntity>>> {
        let slot = self.clone();
        Box::pin(async move { slot.current().await?.find_match(code).await })
    }

    fn update_match_by_code(
        &self,
        update: MatchResultUpdate,
    ) -> BoxFuture<'static, StorageResult<MatchEntity>> {
        let slot = self.clone();
        Box::pin(async move { slot.current().await?.update_match_by_code(update).await })
    }

    fn insert_point(&self, point: PointEntity) -> BoxFuture<'static, StorageResult<PointEntity>> {
        let slot = self.clone();
        Box::pin(async move { slot.current().await?.insert_point(point).await })
    }

    fn list_points(&self) -> BoxFuture<'static, StorageResult<Vec<PointEntity>>> {
        let slot = self.clone();
        Box::pin(async move { slot.current().await?.list_points().await })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let slot = self.clone();
        Box::pin(async move { slot.current().await?.health_check().await })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        let slot = self.clone();
        Box::pin(async move { slot.current().await?.try_reconnect().await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::tournament_store::memory::InMemoryTournamentStore;

    #[tokio::test]
    async fn empty_slot_is_degraded() {
        let slot = StoreSlot::new();

        assert!(slot.is_degraded().await);
        assert!(matches!(
            slot.list_points().await,
            Err(StorageError::Degraded)
        ));
    }

    #[tokio::test]
    async fn installed_store_receives_calls() {
        let slot = StoreSlot::new();
        slot.install(Arc::new(InMemoryTournamentStore::new())).await;

        assert!(!slot.is_degraded().await);
        assert_eq!(slot.find_match(1).await.unwrap(), None);

        slot.set_degraded(true).await;
        assert!(slot.is_degraded().await);

        slot.clear().await;
        assert!(matches!(slot.find_match(1).await, Err(StorageError::Degraded)));
    }
}
