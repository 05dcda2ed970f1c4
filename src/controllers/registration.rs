//! Controllers creating groups, matches and player points. No business rule beyond field
//! presence and the checks of the services they call.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::{
    controllers::{Controller, HttpRequest, HttpResponse, parse_body},
    dto::{
        group::{ADD_GROUP_REQUIRED_FIELDS, AddGroupRequest},
        matches::{ADD_MATCH_REQUIRED_FIELDS, AddMatchRequest},
        point::{ADD_POINT_REQUIRED_FIELDS, AddPointRequest},
        validation::FieldChain,
    },
    services::{group_service::GroupService, match_service::MatchService, point_service::PointService},
};

/// Registers a match after checking its required fields.
pub struct AddMatchController {
    fields: FieldChain,
    matches: Arc<MatchService>,
}

impl AddMatchController {
    /// Controller backed by `matches`.
    pub fn new(matches: Arc<MatchService>) -> Self {
        Self {
            fields: FieldChain::required(&ADD_MATCH_REQUIRED_FIELDS),
            matches,
        }
    }
}

impl Controller for AddMatchController {
    fn handle(&self, request: HttpRequest) -> BoxFuture<'_, HttpResponse> {
        Box::pin(async move {
            let payload = match parse_body::<AddMatchRequest>(&self.fields, request.body) {
                Ok(payload) => payload,
                Err(err) => return err.into(),
            };
            match self.matches.add(payload).await {
                Ok(summary) => HttpResponse::ok(&summary),
                Err(err) => err.into(),
            }
        })
    }
}

/// Registers a group of four teams.
pub struct AddGroupController {
    fields: FieldChain,
    groups: Arc<GroupService>,
}

impl AddGroupController {
    /// Controller backed by `groups`.
    pub fn new(groups: Arc<GroupService>) -> Self {
        Self {
            fields: FieldChain::required(&ADD_GROUP_REQUIRED_FIELDS),
            groups,
        }
    }
}

impl Controller for AddGroupController {
    fn handle(&self, request: HttpRequest) -> BoxFuture<'_, HttpResponse> {
        Box::pin(async move {
            let payload = match parse_body::<AddGroupRequest>(&self.fields, request.body) {
                Ok(payload) => payload,
                Err(err) => return err.into(),
            };
            match self.groups.add(payload).await {
                Ok(summary) => HttpResponse::ok(&summary),
                Err(err) => err.into(),
            }
        })
    }
}

/// Records the position of a player.
pub struct AddPointController {
    fields: FieldChain,
    points: Arc<PointService>,
}

impl AddPointController {
    /// Controller backed by `points`.
    pub fn new(points: Arc<PointService>) -> Self {
        Self {
            fields: FieldChain::required(&ADD_POINT_REQUIRED_FIELDS),
            points,
        }
    }
}

impl Controller for AddPointController {
    fn handle(&self, request: HttpRequest) -> BoxFuture<'_, HttpResponse> {
        Box::pin(async move {
            let payload = match parse_body::<AddPointRequest>(&self.fields, request.body) {
                Ok(payload) => payload,
                Err(err) => return err.into(),
            };
            match self.points.add(payload).await {
                Ok(summary) => HttpResponse::ok(&summary),
                Err(err) => err.into(),
            }
        })
    }
}
