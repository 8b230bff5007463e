use crate::catalog::{ContentCatalog, filter_by_content_ids, filter_by_topic};
use crate::util::RequireRecord;
use learnlog_entity::exam::attempt;
use learnlog_entity::exam::attempt::{Column, Entity as ExamAttemptEntity, Model as ExamAttempt};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn load<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<ExamAttempt, DbErr> {
        ExamAttemptEntity::find_by_id(id).one(conn).await.require()
    }

    pub async fn for_examlog<C: ConnectionTrait>(
        conn: &C,
        examlog_id: Uuid,
    ) -> Result<Vec<ExamAttempt>, DbErr> {
        ExamAttemptEntity::find()
            .filter(attempt::Column::ExamlogId.eq(examlog_id))
            .all(conn)
            .await
    }

    pub async fn find_by_content_ids<C: ConnectionTrait>(
        conn: &C,
        content_ids: impl IntoIterator<Item = Uuid>,
    ) -> Result<Vec<ExamAttempt>, DbErr> {
        filter_by_content_ids(ExamAttemptEntity::find(), Column::ContentId, content_ids)
            .all(conn)
            .await
    }

    pub async fn find_by_topic<C: ConnectionTrait>(
        conn: &C,
        catalog: &impl ContentCatalog,
        topic_id: Uuid,
    ) -> Result<Vec<ExamAttempt>, DbErr> {
        filter_by_topic(ExamAttemptEntity::find(), Column::ContentId, catalog, topic_id)
            .all(conn)
            .await
    }
}
