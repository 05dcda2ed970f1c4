/// In-memory backend.
pub mod memory;
/// MongoDB backend.
#[cfg(feature = "mongo-store")]
pub mod mongodb;

use crate::dao::models::{GroupEntity, MatchEntity, MatchResultUpdate, PointEntity};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the persistence layer for groups, matches and player points.
pub trait TournamentStore: Send + Sync {
    /// Insert a new group; fails with `DuplicateCode` when the code is taken.
    fn insert_group(&self, group: GroupEntity) -> BoxFuture<'static, StorageResult<GroupEntity>>;
    /// Insert a new match; fails with `DuplicateCode` when the code is taken.
    fn insert_match(&self, entity: MatchEntity) -> BoxFuture<'static, StorageResult<MatchEntity>>;
    /// Fetch a match by code, `None` when unknown.
    fn find_match(&self, code: i64) -> BoxFuture<'static, StorageResult<Option<MatchEntity>>>;
    /// Overwrite the scores and winner of the match identified by `update.code` and return
    /// the stored record as it is after the write.
    fn update_match_by_code(
        &self,
        update: MatchResultUpdate,
    ) -> BoxFuture<'static, StorageResult<MatchEntity>>;
    /// Record a player position.
    fn insert_point(&self, point: PointEntity) -> BoxFuture<'static, StorageResult<PointEntity>>;
    /// Every recorded position, oldest first.
    fn list_points(&self) -> BoxFuture<'static, StorageResult<Vec<PointEntity>>>;
    /// Check that the backend still answers.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Rebuild the backend connection in place.
    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>>;
}
