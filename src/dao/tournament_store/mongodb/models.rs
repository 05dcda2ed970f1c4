use mongodb::bson::{Document, doc};

use crate::dao::models::MatchResultUpdate;

pub const GROUP_COLLECTION_NAME: &str = "groups";
pub const MATCH_COLLECTION_NAME: &str = "matches";
pub const POINT_COLLECTION_NAME: &str = "points";

/// Filter selecting a group or match by its business code.
pub fn code_filter(code: i64) -> Document {
    doc! {"code": code}
}

/// Filter selecting a match by code, only when it is played between the submitted teams.
pub fn result_filter(update: &MatchResultUpdate) -> Document {
    doc! {
        "code": update.code,
        "teamA": update.team_a.as_str(),
        "teamB": update.team_b.as_str(),
    }
}

/// `$set` document writing only the result fields of a match.
pub fn result_update(update: &MatchResultUpdate) -> Document {
    doc! {
        "$set": {
            "scoreTeamA": i64::from(update.score_team_a),
            "scoreTeamB": i64::from(update.score_team_b),
            "winner": update.winner.as_str(),
        }
    }
}
