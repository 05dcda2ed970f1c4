use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the tournament backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::groups::add_group,
        crate::routes::matches::add_match,
        crate::routes::matches::update_match,
        crate::routes::matches::get_match,
        crate::routes::points::add_point,
        crate::routes::points::list_points,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::group::AddGroupRequest,
            crate::dto::group::GroupSummary,
            crate::dto::matches::AddMatchRequest,
            crate::dto::matches::UpdateMatchRequest,
            crate::dto::matches::MatchSummary,
            crate::dto::point::AddPointRequest,
            crate::dto::point::PointSummary,
            crate::error::ErrorBody,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "groups", description = "Group registration"),
        (name = "matches", description = "Match registration and result updates"),
        (name = "points", description = "Player positions"),
    )
)]
pub struct ApiDoc;
