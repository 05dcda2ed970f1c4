/// OpenAPI documentation generation.
pub mod documentation;
/// Group registration.
pub mod group_service;
/// Health check service.
pub mod health_service;
/// Match registration, lookup and result updates.
pub mod match_service;
/// Player position bookkeeping.
pub mod point_service;
/// Score/winner consistency rule.
pub mod scoring;
/// Storage reconnection loop driving degraded mode.
pub mod storage_supervisor;
