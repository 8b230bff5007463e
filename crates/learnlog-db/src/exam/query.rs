use crate::util::RequireRecord;
use learnlog_entity::exam;
use learnlog_entity::exam::{Entity as ExamLogEntity, Model as ExamLog};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn load<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<ExamLog, DbErr> {
        ExamLogEntity::find_by_id(id).one(conn).await.require()
    }

    pub async fn for_user<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
    ) -> Result<Vec<ExamLog>, DbErr> {
        ExamLogEntity::find()
            .filter(exam::Column::UserId.eq(user_id))
            .all(conn)
            .await
    }

    pub async fn for_exam<C: ConnectionTrait>(
        conn: &C,
        exam_id: Uuid,
    ) -> Result<Vec<ExamLog>, DbErr> {
        ExamLogEntity::find()
            .filter(exam::Column::ExamId.eq(exam_id))
            .all(conn)
            .await
    }
}
