mod store;

use std::sync::Arc;

use crate::{
    config::AppConfig,
    controllers::Controllers,
    dao::tournament_store::TournamentStore,
    services::{
        group_service::GroupService,
        match_service::MatchService,
        point_service::PointService,
        scoring::{CountScore, ScoreConsistencyRule},
    },
};

pub use self::store::StoreSlot;

/// Cheaply clonable handle passed to every route.
pub type SharedState = Arc<AppState>;

/// Central application state: the storage slot plus every use case and controller wired to it.
pub struct AppState {
    store: StoreSlot,
    config: AppConfig,
    matches: Arc<MatchService>,
    points: Arc<PointService>,
    controllers: Controllers,
}

impl AppState {
    /// Compose the application around an empty storage slot, wrapped in an [`Arc`] so it can
    /// be cloned cheaply.
    ///
    /// The application starts in degraded mode until a storage backend is installed.
    pub fn new(config: AppConfig) -> SharedState {
        let store = StoreSlot::new();
        let backend: Arc<dyn TournamentStore> = Arc::new(store.clone());
        let rule: Arc<dyn ScoreConsistencyRule> = Arc::new(CountScore::new(config.draw_label()));

        let matches = Arc::new(MatchService::new(
            backend.clone(),
            rule.clone(),
            &config,
        ));
        let groups = Arc::new(GroupService::new(backend.clone()));
        let points = Arc::new(PointService::new(backend));
        let controllers = Controllers::new(matches.clone(), groups, points.clone(), rule);

        Arc::new(Self {
            store,
            config,
            matches,
            points,
            controllers,
        })
    }

    /// Slot holding the active storage backend.
    pub fn store(&self) -> &StoreSlot {
        &self.store
    }

    /// Loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Match use cases.
    pub fn matches(&self) -> &MatchService {
        &self.matches
    }

    /// Player position use cases.
    pub fn points(&self) -> &PointService {
        &self.points
    }

    /// Command controllers.
    pub fn controllers(&self) -> &Controllers {
        &self.controllers
    }
}
