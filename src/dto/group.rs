//! DTO definitions for tournament groups.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::models::GroupEntity,
    dto::validation::{trimmed_label, validate_label},
};

/// Body fields of [`AddGroupRequest`] in the order their presence is checked.
pub const ADD_GROUP_REQUIRED_FIELDS: [&str; 5] = ["code", "teamA", "teamB", "teamC", "teamD"];

/// Payload registering a group of four teams.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddGroupRequest {
    /// Unique group code.
    pub code: i64,
    /// First team.
    #[serde(deserialize_with = "trimmed_label")]
    #[validate(custom(function = "validate_label"))]
    pub team_a: String,
    /// Second team.
    #[serde(deserialize_with = "trimmed_label")]
    #[validate(custom(function = "validate_label"))]
    pub team_b: String,
    /// Third team.
    #[serde(deserialize_with = "trimmed_label")]
    #[validate(custom(function = "validate_label"))]
    pub team_c: String,
    /// Fourth team.
    #[serde(deserialize_with = "trimmed_label")]
    #[validate(custom(function = "validate_label"))]
    pub team_d: String,
}

/// Group as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
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

impl From<AddGroupRequest> for GroupEntity {
    fn from(request: AddGroupRequest) -> Self {
        Self {
            code: request.code,
            team_a: request.team_a,
            team_b: request.team_b,
            team_c: request.team_c,
            team_d: request.team_d,
        }
    }
}

impl From<GroupEntity> for GroupSummary {
    fn from(entity: GroupEntity) -> Self {
        Self {
            code: entity.code,
            team_a: entity.team_a,
            team_b: entity.team_b,
            team_c: entity.team_c,
            team_d: entity.team_d,
        }
    }
}
