use crate::catalog::{ContentCatalog, filter_by_content_ids, filter_by_topic};
use crate::util::RequireRecord;
use learnlog_entity::content::rating;
use learnlog_entity::content::rating::{Column, Entity as ContentRatingEntity, Model as ContentRating};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn load<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<ContentRating, DbErr> {
        ContentRatingEntity::find_by_id(id).one(conn).await.require()
    }

    pub async fn for_content<C: ConnectionTrait>(
        conn: &C,
        content_id: Uuid,
    ) -> Result<Vec<ContentRating>, DbErr> {
        ContentRatingEntity::find()
            .filter(rating::Column::ContentId.eq(content_id))
            .all(conn)
            .await
    }

    pub async fn find_by_content_ids<C: ConnectionTrait>(
        conn: &C,
        content_ids: impl IntoIterator<Item = Uuid>,
    ) -> Result<Vec<ContentRating>, DbErr> {
        filter_by_content_ids(ContentRatingEntity::find(), Column::ContentId, content_ids)
            .all(conn)
            .await
    }

    pub async fn find_by_topic<C: ConnectionTrait>(
        conn: &C,
        catalog: &impl ContentCatalog,
        topic_id: Uuid,
    ) -> Result<Vec<ContentRating>, DbErr> {
        filter_by_topic(ContentRatingEntity::find(), Column::ContentId, catalog, topic_id)
            .all(conn)
            .await
    }
}
