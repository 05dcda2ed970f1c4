//! Match use cases: registration, lookup and the result update orchestrator.

use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::{debug, info};

use crate::{
    config::AppConfig,
    dao::{
        models::{MatchEntity, MatchResultUpdate},
        tournament_store::TournamentStore,
    },
    dto::matches::{AddMatchRequest, MatchSummary, UpdateMatchRequest},
    error::ServiceError,
    services::scoring::{ResultSubmission, ScoreConsistencyRule},
};

/// Applies an already validated result submission to a stored match.
pub trait UpdateMatch: Send + Sync {
    /// Persist the scores and winner of `request` and return the stored record.
    ///
    /// Callers must have checked field presence and score consistency beforehand; storage
    /// failures are returned unchanged.
    fn update(&self, request: UpdateMatchRequest)
    -> BoxFuture<'static, Result<MatchSummary, ServiceError>>;
}

/// Match use cases backed by a [`TournamentStore`].
#[derive(Clone)]
pub struct MatchService {
    store: Arc<dyn TournamentStore>,
    rule: Arc<dyn ScoreConsistencyRule>,
    draw_label: String,
    undecided_label: String,
}

impl MatchService {
    /// Build the service around `store`, checking declared winners with `rule` and taking the
    /// draw and undecided labels from `config`.
    pub fn new(
        store: Arc<dyn TournamentStore>,
        rule: Arc<dyn ScoreConsistencyRule>,
        config: &AppConfig,
    ) -> Self {
        Self {
            store,
            rule,
            draw_label: config.draw_label().to_owned(),
            undecided_label: config.undecided_label().to_owned(),
        }
    }

    fn is_reserved_label(&self, team: &str) -> bool {
        team == self.draw_label || team == self.undecided_label
    }

    /// Register a new match.
    ///
    /// Missing scores default to zero. A match without a declared winner is stored as
    /// undecided, which is only allowed while it has no goals; a declared winner must satisfy
    /// the consistency rule. Teams may not be named after the draw or undecided label.
    pub async fn add(&self, request: AddMatchRequest) -> Result<MatchSummary, ServiceError> {
        let AddMatchRequest {
            code,
            team_a,
            team_b,
            score_team_a,
            score_team_b,
            winner,
            phase,
        } = request;

        if team_a == team_b {
            return Err(ServiceError::InvalidInput(format!(
                "match `{code}` needs two distinct teams"
            )));
        }
        if let Some(team) = [&team_a, &team_b]
            .into_iter()
            .find(|team| self.is_reserved_label(team))
        {
            return Err(ServiceError::InvalidInput(format!(
                "team name `{team}` is reserved for match results"
            )));
        }

        let score_team_a = score_team_a.unwrap_or(0);
        let score_team_b = score_team_b.unwrap_or(0);

        let winner = match winner {
            Some(winner) => {
                let submission = ResultSubmission {
                    code,
                    team_a: &team_a,
                    score_team_a,
                    team_b: &team_b,
                    score_team_b,
                    winner: &winner,
                };
                if !self.rule.is_consistent(&submission) {
                    return Err(ServiceError::InconsistentResult { code });
                }
                winner
            }
            None if score_team_a == 0 && score_team_b == 0 => self.undecided_label.clone(),
            None => return Err(ServiceError::MissingParameter("winner")),
        };

        let entity = MatchEntity {
            code,
            team_a,
            score_team_a,
            team_b,
            score_team_b,
            winner,
            phase,
        };

        let stored = self.store.insert_match(entity).await?;
        info!(code, phase = %stored.phase, "match registered");
        Ok(stored.into())
    }

    /// Fetch the canonical record of a match.
    pub async fn find(&self, code: i64) -> Result<MatchSummary, ServiceError> {
        let Some(entity) = self.store.find_match(code).await? else {
            return Err(ServiceError::NotFound(format!("match `{code}` not found")));
        };
        Ok(entity.into())
    }
}

impl UpdateMatch for MatchService {
    fn update(
        &self,
        request: UpdateMatchRequest,
    ) -> BoxFuture<'static, Result<MatchSummary, ServiceError>> {
        let store = self.store.clone();
        Box::pin(async move {
            let UpdateMatchRequest {
                code,
                team_a,
                score_team_a,
                team_b,
                score_team_b,
                winner,
            } = request;

            debug!(code, score_team_a, score_team_b, "updating match result");
            let updated = store
                .update_match_by_code(MatchResultUpdate {
                    code,
                    team_a,
                    team_b,
                    score_team_a,
                    score_team_b,
                    winner,
                })
                .await?;

            info!(code, winner = %updated.winner, "match result updated");
            Ok(updated.into())
        })
    }
}
