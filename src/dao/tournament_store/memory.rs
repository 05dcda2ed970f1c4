//! Process-local store used when no database is configured and by the test suites.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use dashmap::{DashMap, mapref::entry::Entry};
use futures::future::{self, BoxFuture};

use crate::dao::{
    models::{GroupEntity, MatchEntity, MatchResultUpdate, PointEntity},
    storage::{StorageError, StorageResult},
    tournament_store::TournamentStore,
};

/// [`TournamentStore`] keeping every record in memory.
#[derive(Clone, Default)]
pub struct InMemoryTournamentStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    groups: DashMap<i64, GroupEntity>,
    matches: DashMap<i64, MatchEntity>,
    points: DashMap<u64, PointEntity>,
    next_point_id: AtomicU64,
}

impl InMemoryTournamentStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert_group(&self, group: GroupEntity) -> StorageResult<GroupEntity> {
        match self.inner.groups.entry(group.code) {
            Entry::Occupied(_) => Err(StorageError::DuplicateCode {
                collection: "group",
                code: group.code,
            }),
            Entry::Vacant(slot) => {
                slot.insert(group.clone());
                Ok(group)
            }
        }
    }

    fn insert_match(&self, entity: MatchEntity) -> StorageResult<MatchEntity> {
        match self.inner.matches.entry(entity.code) {
            Entry::Occupied(_) => Err(StorageError::DuplicateCode {
                collection: "match",
                code: entity.code,
            }),
            Entry::Vacant(slot) => {
                slot.insert(entity.clone());
                Ok(entity)
            }
        }
    }

    fn update_match_by_code(&self, update: MatchResultUpdate) -> StorageResult<MatchEntity> {
        // The shard write lock held by `get_mut` serializes concurrent updates of one code.
        let mut entry = self
            .inner
            .matches
            .get_mut(&update.code)
            .ok_or(StorageError::MatchNotFound { code: update.code })?;
        if entry.team_a != update.team_a || entry.team_b != update.team_b {
            return Err(StorageError::TeamsMismatch {
                code: update.code,
                team_a: update.team_a,
                team_b: update.team_b,
            });
        }
        entry.score_team_a = update.score_team_a;
        entry.score_team_b = update.score_team_b;
        entry.winner = update.winner;
        Ok(entry.clone())
    }

    fn insert_point(&self, point: PointEntity) -> PointEntity {
        let id = self.inner.next_point_id.fetch_add(1, Ordering::Relaxed);
        self.inner.points.insert(id, point.clone());
        point
    }

    fn list_points(&self) -> Vec<PointEntity> {
        let mut points = self
            .inner
            .points
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect::<Vec<_>>();
        points.sort_by_key(|(id, _)| *id);
        points.into_iter().map(|(_, point)| point).collect()
    }
}

impl TournamentStore for InMemoryTournamentStore {
    fn insert_group(&self, group: GroupEntity) -> BoxFuture<'static, StorageResult<GroupEntity>> {
        Box::pin(future::ready(self.insert_group(group)))
    }

    fn insert_match(&self, entity: MatchEntity) -> BoxFuture<'static, StorageResult<MatchEntity>> {
        Box::pin(future::ready(self.insert_match(entity)))
    }

    fn find_match(&self, code: i64) -> BoxFuture<'static, StorageResult<Option<MatchEntity>>> {
        let found = self.inner.matches.get(&code).map(|entry| entry.clone());
        Box::pin(future::ready(Ok(found)))
    }

    fn update_match_by_code(
        &self,
        update: MatchResultUpdate,
    ) -> BoxFuture<'static, StorageResult<MatchEntity>> {
        Box::pin(future::ready(self.update_match_by_code(update)))
    }

    fn insert_point(&self, point: PointEntity) -> BoxFuture<'static, StorageResult<PointEntity>> {
        Box::pin(future::ready(Ok(self.insert_point(point))))
    }

    fn list_points(&self) -> BoxFuture<'static, StorageResult<Vec<PointEntity>>> {
        Box::pin(future::ready(Ok(self.list_points())))
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(future::ready(Ok(())))
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(future::ready(Ok(())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match(code: i64) -> MatchEntity {
        MatchEntity {
            code,
            team_a: "Brazil".into(),
            score_team_a: 0,
            team_b: "Serbia".into(),
            score_team_b: 0,
            winner: "undecided".into(),
            phase: "group".into(),
        }
    }

    #[tokio::test]
    async fn update_overwrites_result_fields_only() {
        let store = InMemoryTournamentStore::new();
        TournamentStore::insert_match(&store, sample_match(7))
            .await
            .unwrap();

        let updated = TournamentStore::update_match_by_code(
            &store,
            MatchResultUpdate {
                code: 7,
                team_a: "Brazil".into(),
                team_b: "Serbia".into(),
                score_team_a: 2,
                score_team_b: 0,
                winner: "Brazil".into(),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.score_team_a, 2);
        assert_eq!(updated.score_team_b, 0);
        assert_eq!(updated.winner, "Brazil");
        assert_eq!(updated.team_a, "Brazil");
        assert_eq!(updated.phase, "group");

        let stored = TournamentStore::find_match(&store, 7).await.unwrap();
        assert_eq!(stored, Some(updated));
    }

    #[tokio::test]
    async fn update_of_unknown_code_is_a_storage_error() {
        let store = InMemoryTournamentStore::new();
        let err = TournamentStore::update_match_by_code(
            &store,
            MatchResultUpdate {
                code: 99,
                team_a: "A".into(),
                team_b: "B".into(),
                score_team_a: 1,
                score_team_b: 0,
                winner: "A".into(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, StorageError::MatchNotFound { code: 99 }));
    }

    #[tokio::test]
    async fn update_naming_other_teams_leaves_the_match_untouched() {
        let store = InMemoryTournamentStore::new();
        TournamentStore::insert_match(&store, sample_match(8))
            .await
            .unwrap();

        for (team_a, team_b) in [("X", "Y"), ("Serbia", "Brazil"), ("Brazil", "Y")] {
            let err = TournamentStore::update_match_by_code(
                &store,
                MatchResultUpdate {
                    code: 8,
                    team_a: team_a.into(),
                    team_b: team_b.into(),
                    score_team_a: 3,
                    score_team_b: 2,
                    winner: team_a.into(),
                },
            )
            .await
            .unwrap_err();

            assert!(matches!(err, StorageError::TeamsMismatch { code: 8, .. }));
        }

        let stored = TournamentStore::find_match(&store, 8).await.unwrap();
        assert_eq!(stored, Some(sample_match(8)));
    }

    #[tokio::test]
    async fn duplicate_match_code_is_rejected() {
        let store = InMemoryTournamentStore::new();
        TournamentStore::insert_match(&store, sample_match(1))
            .await
            .unwrap();
        let err = TournamentStore::insert_match(&store, sample_match(1))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            StorageError::DuplicateCode {
                collection: "match",
                code: 1
            }
        ));
    }

    #[tokio::test]
    async fn points_are_listed_in_insertion_order() {
        let store = InMemoryTournamentStore::new();
        for (position, player) in ["Neymar", "Mbappe", "Messi"].into_iter().enumerate() {
            TournamentStore::insert_point(
                &store,
                PointEntity {
                    player: player.into(),
                    team: "any".into(),
                    position: position as u32 + 1,
                },
            )
            .await
            .unwrap();
        }

        let players = TournamentStore::list_points(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|point| point.player)
            .collect::<Vec<_>>();
        assert_eq!(players, vec!["Neymar", "Mbappe", "Messi"]);
    }
}
