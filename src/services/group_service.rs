use std::sync::Arc;

use tracing::info;

use crate::{
    dao::tournament_store::TournamentStore,
    dto::group::{AddGroupRequest, GroupSummary},
    error::ServiceError,
};

/// Group registration backed by a [`TournamentStore`].
#[derive(Clone)]
pub struct GroupService {
    store: Arc<dyn TournamentStore>,
}

impl GroupService {
    /// Service backed by `store`.
    pub fn new(store: Arc<dyn TournamentStore>) -> Self {
        Self { store }
    }

    /// Store a new group of four teams.
    pub async fn add(&self, request: AddGroupRequest) -> Result<GroupSummary, ServiceError> {
        let mut teams = [
            request.team_a.trim(),
            request.team_b.trim(),
            request.team_c.trim(),
            request.team_d.trim(),
        ];
        teams.sort_unstable();
        if teams.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(ServiceError::InvalidInput(format!(
                "group `{}` lists the same team twice",
                request.code
            )));
        }

        let stored = self.store.insert_group(request.into()).await?;
        info!(code = stored.code, "group registered");
        Ok(stored.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::tournament_store::memory::InMemoryTournamentStore;

    fn request(code: i64) -> AddGroupRequest {
        AddGroupRequest {
            code,
            team_a: "Qatar".into(),
            team_b: "Ecuador".into(),
            team_c: "Senegal".into(),
            team_d: "Netherlands".into(),
        }
    }

    #[tokio::test]
    async fn returns_the_stored_group() {
        let service = GroupService::new(Arc::new(InMemoryTournamentStore::new()));

        let group = service.add(request(1)).await.unwrap();

        assert_eq!(group.code, 1);
        assert_eq!(group.team_d, "Netherlands");
    }

    #[tokio::test]
    async fn duplicate_code_is_a_conflict() {
        let service = GroupService::new(Arc::new(InMemoryTournamentStore::new()));
        service.add(request(1)).await.unwrap();

        let err = service.add(request(1)).await.unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn repeated_team_is_rejected() {
        let service = GroupService::new(Arc::new(InMemoryTournamentStore::new()));
        let mut group = request(2);
        group.team_c = " Qatar".into();

        let err = service.add(group).await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }
}
