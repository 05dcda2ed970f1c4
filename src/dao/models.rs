use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Group of four teams playing each other during the group stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupEntity {
    /// Unique group code.
    pub code: i64,
    /// First team.
    pub team_a: String,
    /// Second team.
    pub team_b: String,
    /// Third team.
    pub team_c: String,
    /// Fourth team.
    pub team_d: String,
}

/// Match between two teams, as persisted by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntity {
    /// Unique match code, immutable once created.
    pub code: i64,
    /// Name of the first team.
    pub team_a: String,
    /// Goals scored by the first team.
    pub score_team_a: u32,
    /// Name of the second team.
    pub team_b: String,
    /// Goals scored by the second team.
    pub score_team_b: u32,
    /// Winning team name, or the draw / undecided label.
    pub winner: String,
    /// Tournament stage label (e.g. "group", "quarter-final").
    pub phase: String,
}

/// Player position recorded in the tournament ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointEntity {
    /// Player name.
    pub player: String,
    /// Team the player belongs to.
    pub team: String,
    /// Ranking position, starting at 1.
    pub position: u32,
}

/// Result fields written by a match update.
///
/// `team_a` and `team_b` are not written: they must equal the stored names, so the persisted
/// winner is always derivable from the persisted teams and scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResultUpdate {
    /// Code of the match to update.
    pub code: i64,
    /// Expected name of the first team.
    pub team_a: String,
    /// Expected name of the second team.
    pub team_b: String,
    /// New score of the first team.
    pub score_team_a: u32,
    /// New score of the second team.
    pub score_team_b: u32,
    /// New winner label.
    pub winner: String,
}
