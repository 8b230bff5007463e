use crate::catalog::{ContentCatalog, filter_by_content_ids, filter_by_topic};
use crate::util::RequireRecord;
use learnlog_entity::content::summary;
use learnlog_entity::content::summary::{
    Column, Entity as ContentSummaryEntity, Model as ContentSummary,
};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn load<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<ContentSummary, DbErr> {
        ContentSummaryEntity::find_by_id(id).one(conn).await.require()
    }

    /// The single summary for a user/content pair, if any engagement has
    /// been recorded yet.
    pub async fn for_user_content<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        content_id: Uuid,
    ) -> Result<Option<ContentSummary>, DbErr> {
        ContentSummaryEntity::find()
            .filter(summary::Column::UserId.eq(user_id))
            .filter(summary::Column::ContentId.eq(content_id))
            .one(conn)
            .await
    }

    pub async fn for_user<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
    ) -> Result<Vec<ContentSummary>, DbErr> {
        ContentSummaryEntity::find()
            .filter(summary::Column::UserId.eq(user_id))
            .all(conn)
            .await
    }

    pub async fn find_by_content_ids<C: ConnectionTrait>(
        conn: &C,
        content_ids: impl IntoIterator<Item = Uuid>,
    ) -> Result<Vec<ContentSummary>, DbErr> {
        filter_by_content_ids(ContentSummaryEntity::find(), Column::ContentId, content_ids)
            .all(conn)
            .await
    }

    pub async fn find_by_topic<C: ConnectionTrait>(
        conn: &C,
        catalog: &impl ContentCatalog,
        topic_id: Uuid,
    ) -> Result<Vec<ContentSummary>, DbErr> {
        filter_by_topic(ContentSummaryEntity::find(), Column::ContentId, catalog, topic_id)
            .all(conn)
            .await
    }
}
