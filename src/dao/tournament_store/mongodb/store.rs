use std::sync::Arc;

use futures::{TryStreamExt, future::BoxFuture};
use mongodb::{
    Client, Collection, Database, IndexModel,
    bson::doc,
    options::{IndexOptions, ReturnDocument},
};
use tokio::sync::RwLock;
use tracing::debug;

use super::{
    config::MongoConfig,
    connection::establish_connection,
    error::{MongoDaoError, MongoResult, is_duplicate_key},
    models::{
        GROUP_COLLECTION_NAME, MATCH_COLLECTION_NAME, POINT_COLLECTION_NAME, code_filter,
        result_filter, result_update,
    },
};
use crate::dao::{
    models::{GroupEntity, MatchEntity, MatchResultUpdate, PointEntity},
    storage::{StorageError, StorageResult},
    tournament_store::TournamentStore,
};

/// [`TournamentStore`] backed by MongoDB. Clones share one connection.
#[derive(Clone)]
pub struct MongoTournamentStore {
    inner: Arc<MongoInner>,
}

struct MongoInner {
    state: RwLock<MongoState>,
    config: MongoConfig,
}

struct MongoState {
    client: Client,
    database: Database,
}

impl MongoInner {
    async fn ping(&self) -> MongoResult<()> {
        let database = {
            let guard = self.state.read().await;
            guard.database.clone()
        };

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| MongoDaoError::HealthPing { source })?;
        Ok(())
    }

    async fn reconnect(&self) -> MongoResult<()> {
        let (client, database) =
            establish_connection(&self.config.options, &self.config.database_name).await?;
        let mut guard = self.state.write().await;
        guard.client = client;
        guard.database = database;
        Ok(())
    }
}

impl MongoTournamentStore {
    /// Establish a connection to MongoDB and ensure indexes are present.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let (client, database) =
            establish_connection(&config.options, &config.database_name).await?;

        let inner = Arc::new(MongoInner {
            state: RwLock::new(MongoState { client, database }),
            config,
        });

        let store = Self { inner };
        store.ensure_indexes().await?;
        Ok(store)
    }

    async fn ensure_indexes(&self) -> MongoResult<()> {
        let database = self.database().await;

        for (collection, index_name) in [
            (GROUP_COLLECTION_NAME, "group_code_idx"),
            (MATCH_COLLECTION_NAME, "match_code_idx"),
        ] {
            let index = IndexModel::builder()
                .keys(doc! {"code": 1})
                .options(
                    IndexOptions::builder()
                        .name(Some(index_name.to_owned()))
                        .unique(Some(true))
                        .build(),
                )
                .build();

            database
                .collection::<mongodb::bson::Document>(collection)
                .create_index(index)
                .await
                .map_err(|source| MongoDaoError::EnsureIndex {
                    collection,
                    index: "code",
                    source,
                })?;
        }

        Ok(())
    }

    async fn database(&self) -> Database {
        let guard = self.inner.state.read().await;
        guard.database.clone()
    }

    async fn group_collection(&self) -> Collection<GroupEntity> {
        self.database()
            .await
            .collection::<GroupEntity>(GROUP_COLLECTION_NAME)
    }

    async fn match_collection(&self) -> Collection<MatchEntity> {
        self.database()
            .await
            .collection::<MatchEntity>(MATCH_COLLECTION_NAME)
    }

    async fn point_collection(&self) -> Collection<PointEntity> {
        self.database()
            .await
            .collection::<PointEntity>(POINT_COLLECTION_NAME)
    }

    async fn insert_group(&self, group: GroupEntity) -> StorageResult<GroupEntity> {
        let code = group.code;
        let collection = self.group_collection().await;
        match collection.insert_one(&group).await {
            Ok(_) => Ok(group),
            Err(source) if is_duplicate_key(&source) => Err(StorageError::DuplicateCode {
                collection: "group",
                code,
            }),
            Err(source) => Err(MongoDaoError::SaveGroup { code, source }.into()),
        }
    }

    async fn insert_match(&self, entity: MatchEntity) -> StorageResult<MatchEntity> {
        let code = entity.code;
        let collection = self.match_collection().await;
        match collection.insert_one(&entity).await {
            Ok(_) => Ok(entity),
            Err(source) if is_duplicate_key(&source) => Err(StorageError::DuplicateCode {
                collection: "match",
                code,
            }),
            Err(source) => Err(MongoDaoError::SaveMatch { code, source }.into()),
        }
    }

    async fn find_match(&self, code: i64) -> MongoResult<Option<MatchEntity>> {
        let collection = self.match_collection().await;
        collection
            .find_one(code_filter(code))
            .await
            .map_err(|source| MongoDaoError::LoadMatch { code, source })
    }

    async fn update_match_by_code(&self, update: MatchResultUpdate) -> StorageResult<MatchEntity> {
        let code = update.code;
        let collection = self.match_collection().await;

        let updated = collection
            .find_one_and_update(result_filter(&update), result_update(&update))
            .return_document(ReturnDocument::After)
            .await
            .map_err(|source| MongoDaoError::UpdateMatch { code, source })?;

        if let Some(entity) = updated {
            debug!(code, winner = %entity.winner, "match result written");
            return Ok(entity);
        }

        // Nothing matched: tell an unknown code apart from a match between other teams.
        match self.find_match(code).await? {
            Some(_) => Err(StorageError::TeamsMismatch {
                code,
                team_a: update.team_a,
                team_b: update.team_b,
            }),
            None => Err(StorageError::MatchNotFound { code }),
        }
    }

    async fn insert_point(&self, point: PointEntity) -> MongoResult<PointEntity> {
        let collection = self.point_collection().await;
        collection
            .insert_one(&point)
            .await
            .map_err(|source| MongoDaoError::SavePoint {
                player: point.player.clone(),
                source,
            })?;
        Ok(point)
    }

    async fn list_points(&self) -> MongoResult<Vec<PointEntity>> {
        let collection = self.point_collection().await;

        collection
            .find(doc! {})
            .sort(doc! {"_id": 1})
            .await
            .map_err(|source| MongoDaoError::ListPoints { source })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::ListPoints { source })
    }
}

impl TournamentStore for MongoTournamentStore {
    fn insert_group(&self, group: GroupEntity) -> BoxFuture<'static, StorageResult<GroupEntity>> {
        let store = self.clone();
        Box::pin(async move { store.insert_group(group).await })
    }

    fn insert_match(&self, entity: MatchEntity) -> BoxFuture<'static, StorageResult<MatchEntity>> {
        let store = self.clone();
        Box::pin(async move { store.insert_match(entity).await })
    }

    fn find_match(&self, code: i64) -> BoxFuture<'static, StorageResult<Option<MatchEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_match(code).await.map_err(Into::into) })
    }

    fn update_match_by_code(
        &self,
        update: MatchResultUpdate,
    ) -> BoxFuture<'static, StorageResult<MatchEntity>> {
        let store = self.clone();
        Box::pin(async move { store.update_match_by_code(update).await })
    }

    fn insert_point(&self, point: PointEntity) -> BoxFuture<'static, StorageResult<PointEntity>> {
        let store = self.clone();
        Box::pin(async move { store.insert_point(point).await.map_err(Into::into) })
    }

    fn list_points(&self) -> BoxFuture<'static, StorageResult<Vec<PointEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_points().await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.ping().await.map_err(Into::into) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.reconnect().await.map_err(Into::into) })
    }
}
