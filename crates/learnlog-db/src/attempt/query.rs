use crate::util::RequireRecord;
use learnlog_entity::attempt;
use learnlog_entity::attempt::{Entity as AttemptEntity, Model as Attempt};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn load<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Attempt, DbErr> {
        AttemptEntity::find_by_id(id).one(conn).await.require()
    }

    pub async fn for_masterylog<C: ConnectionTrait>(
        conn: &C,
        masterylog_id: Uuid,
    ) -> Result<Vec<Attempt>, DbErr> {
        AttemptEntity::find()
            .filter(attempt::Column::MasterylogId.eq(masterylog_id))
            .all(conn)
            .await
    }

    pub async fn for_sessionlog<C: ConnectionTrait>(
        conn: &C,
        sessionlog_id: Uuid,
    ) -> Result<Vec<Attempt>, DbErr> {
        AttemptEntity::find()
            .filter(attempt::Column::SessionlogId.eq(sessionlog_id))
            .all(conn)
            .await
    }
}
