use std::sync::Arc;

use tracing::debug;

use crate::{
    dao::tournament_store::TournamentStore,
    dto::point::{AddPointRequest, PointSummary},
    error::ServiceError,
};

/// Player position bookkeeping backed by a [`TournamentStore`].
#[derive(Clone)]
pub struct PointService {
    store: Arc<dyn TournamentStore>,
}

impl PointService {
    /// Service backed by `store`.
    pub fn new(store: Arc<dyn TournamentStore>) -> Self {
        Self { store }
    }

    /// Record a player position.
    pub async fn add(&self, request: AddPointRequest) -> Result<PointSummary, ServiceError> {
        let stored = self.store.insert_point(request.into()).await?;
        debug!(player = %stored.player, position = stored.position, "point recorded");
        Ok(stored.into())
    }

    /// Every recorded position, oldest first.
    pub async fn list(&self) -> Result<Vec<PointSummary>, ServiceError> {
        let points = self.store.list_points().await?;
        Ok(points.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::tournament_store::memory::InMemoryTournamentStore;

    #[tokio::test]
    async fn added_points_are_listed() {
        let service = PointService::new(Arc::new(InMemoryTournamentStore::new()));
        service
            .add(AddPointRequest {
                player: "Modric".into(),
                team: "Croatia".into(),
                position: 3,
            })
            .await
            .unwrap();

        let points = service.list().await.unwrap();

        assert_eq!(
            points,
            vec![PointSummary {
                player: "Modric".into(),
                team: "Croatia".into(),
                position: 3,
            }]
        );
    }
}
