use crate::catalog::{ContentCatalog, filter_by_content_ids, filter_by_topic};
use crate::util::RequireRecord;
use futures_util::future::try_join;
use learnlog_entity::attempt::{Entity as AttemptEntity, Model as Attempt};
use learnlog_entity::content::session::{
    Column, Entity as ContentSessionEntity, Model as ContentSession,
};
use learnlog_entity::{attempt, content::session};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn load<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<ContentSession, DbErr> {
        ContentSessionEntity::find_by_id(id)
            .one(conn)
            .await
            .require()
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %id, "failed to load content session log");
            })
    }

    pub async fn for_user<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
    ) -> Result<Vec<ContentSession>, DbErr> {
        ContentSessionEntity::find()
            .filter(session::Column::UserId.eq(user_id))
            .all(conn)
            .await
    }

    pub async fn find_by_content_ids<C: ConnectionTrait>(
        conn: &C,
        content_ids: impl IntoIterator<Item = Uuid>,
    ) -> Result<Vec<ContentSession>, DbErr> {
        filter_by_content_ids(ContentSessionEntity::find(), Column::ContentId, content_ids)
            .all(conn)
            .await
    }

    pub async fn find_by_topic<C: ConnectionTrait>(
        conn: &C,
        catalog: &impl ContentCatalog,
        topic_id: Uuid,
    ) -> Result<Vec<ContentSession>, DbErr> {
        filter_by_topic(ContentSessionEntity::find(), Column::ContentId, catalog, topic_id)
            .all(conn)
            .await
    }

    /// A visit together with the attempts made during it.
    pub async fn load_with_attempts<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> Result<(ContentSession, Vec<Attempt>), DbErr> {
        let session = Self::load(conn, id);
        let attempts = AttemptEntity::find()
            .filter(attempt::Column::SessionlogId.eq(id))
            .all(conn);
        try_join(session, attempts).await
    }
}
