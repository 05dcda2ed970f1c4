//! DTO definitions for match creation, lookup and result updates.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::models::MatchEntity,
    dto::validation::{trimmed_label, trimmed_optional_label, validate_label},
};

/// Body fields of [`UpdateMatchRequest`] in the order their presence is checked.
pub const UPDATE_MATCH_REQUIRED_FIELDS: [&str; 6] = [
    "code",
    "scoreTeamA",
    "scoreTeamB",
    "winner",
    "teamA",
    "teamB",
];

/// Body fields of [`AddMatchRequest`] in the order their presence is checked.
pub const ADD_MATCH_REQUIRED_FIELDS: [&str; 4] = ["code", "teamA", "teamB", "phase"];

/// Result submission for an existing match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatchRequest {
    /// Code of the match.
    pub code: i64,
    /// First team, as registered.
    #[serde(deserialize_with = "trimmed_label")]
    #[validate(custom(function = "validate_label"))]
    pub team_a: String,
    /// Goals of the first team.
    pub score_team_a: u32,
    /// Second team, as registered.
    #[serde(deserialize_with = "trimmed_label")]
    #[validate(custom(function = "validate_label"))]
    pub team_b: String,
    /// Goals of the second team.
    pub score_team_b: u32,
    /// Name of the winning team, or the configured draw label.
    #[serde(deserialize_with = "trimmed_label")]
    #[validate(custom(function = "validate_label"))]
    pub winner: String,
}

/// Payload registering a new match. Scores default to zero and the winner to the undecided
/// label.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddMatchRequest {
    /// Unique match code.
    pub code: i64,
    /// First team.
    #[serde(deserialize_with = "trimmed_label")]
    #[validate(custom(function = "validate_label"))]
    pub team_a: String,
    /// Second team.
    #[serde(deserialize_with = "trimmed_label")]
    #[validate(custom(function = "validate_label"))]
    pub team_b: String,
    /// Goals of the first team, zero when absent.
    #[serde(default)]
    pub score_team_a: Option<u32>,
    /// Goals of the second team, zero when absent.
    #[serde(default)]
    pub score_team_b: Option<u32>,
    /// Declared winner, required once a goal is scored.
    #[serde(default, deserialize_with = "trimmed_optional_label")]
    pub winner: Option<String>,
    /// Tournament stage label.
    #[serde(deserialize_with = "trimmed_label")]
    #[validate(custom(function = "validate_label"))]
    pub phase: String,
}

/// Canonical match record returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    /// Unique match code.
    pub code: i64,
    /// First team.
    pub team_a: String,
    /// Goals of the first team.
    pub score_team_a: u32,
    /// Second team.
    pub team_b: String,
    /// Goals of the second team.
    pub score_team_b: u32,
    /// Winning team, draw label or undecided label.
    pub winner: String,
    /// Tournament stage label.
    pub phase: String,
}

impl From<MatchEntity> for MatchSummary {
    fn from(entity: MatchEntity) -> Self {
        Self {
            code: entity.code,
            team_a: entity.team_a,
            score_team_a: entity.score_team_a,
            team_b: entity.team_b,
            score_team_b: entity.score_team_b,
            winner: entity.winner,
            phase: entity.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{dto::validation::decode, error::ServiceError};

    #[test]
    fn update_request_uses_camel_case_fields() {
        let request: UpdateMatchRequest = decode(json!({
            "code": 2,
            "teamA": "A",
            "scoreTeamA": 1,
            "teamB": "B",
            "scoreTeamB": 2,
            "winner": "B"
        }))
        .unwrap();

        assert_eq!(request.code, 2);
        assert_eq!(request.score_team_a, 1);
        assert_eq!(request.score_team_b, 2);
        assert_eq!(request.winner, "B");
    }

    #[test]
    fn negative_scores_are_invalid_input() {
        let err = decode::<UpdateMatchRequest>(json!({
            "code": 2,
            "teamA": "A",
            "scoreTeamA": -1,
            "teamB": "B",
            "scoreTeamB": 2,
            "winner": "B"
        }))
        .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[test]
    fn blank_team_name_is_invalid_input() {
        let err = decode::<UpdateMatchRequest>(json!({
            "code": 2,
            "teamA": " ",
            "scoreTeamA": 1,
            "teamB": "B",
            "scoreTeamB": 2,
            "winner": "B"
        }))
        .unwrap_err();

        match err {
            ServiceError::InvalidInput(message) => assert!(message.contains("team_a")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn add_request_scores_and_winner_are_optional() {
        let request: AddMatchRequest = decode(json!({
            "code": 9,
            "teamA": "Japan",
            "teamB": "Croatia",
            "phase": "round-of-16"
        }))
        .unwrap();

        assert_eq!(request.score_team_a, None);
        assert_eq!(request.score_team_b, None);
        assert_eq!(request.winner, None);
    }
}
