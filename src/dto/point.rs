//! DTO definitions for player positions.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::models::PointEntity,
    dto::validation::{trimmed_label, validate_label},
};

/// Body fields of [`AddPointRequest`] in the order their presence is checked.
pub const ADD_POINT_REQUIRED_FIELDS: [&str; 3] = ["player", "team", "position"];

/// Payload recording the position of a player.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct AddPointRequest {
    /// Player name.
    #[serde(deserialize_with = "trimmed_label")]
    #[validate(custom(function = "validate_label"))]
    pub player: String,
    /// Team of the player.
    #[serde(deserialize_with = "trimmed_label")]
    #[validate(custom(function = "validate_label"))]
    pub team: String,
    /// Ranking position, starting at 1.
    #[validate(range(min = 1))]
    pub position: u32,
}

/// Player position as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PointSummary {
    /// Player name.
    pub player: String,
    /// Team of the player.
    pub team: String,
    /// Ranking position.
    pub position: u32,
}

impl From<AddPointRequest> for PointEntity {
    fn from(request: AddPointRequest) -> Self {
        Self {
            player: request.player,
            team: request.team,
            position: request.position,
        }
    }
}

impl From<PointEntity> for PointSummary {
    fn from(entity: PointEntity) -> Self {
        Self {
            player: entity.player,
            team: entity.team,
            position: entity.position,
        }
    }
}
