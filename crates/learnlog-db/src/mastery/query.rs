use crate::util::RequireRecord;
use learnlog_entity::content::summary::Entity as ContentSummaryEntity;
use learnlog_entity::mastery;
use learnlog_entity::mastery::{Entity as MasteryEntity, Model as Mastery};
use learnlog_entity::permission::{self, Actor, Operation};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn load<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Mastery, DbErr> {
        MasteryEntity::find_by_id(id).one(conn).await.require()
    }

    pub async fn for_summary<C: ConnectionTrait>(
        conn: &C,
        summarylog_id: Uuid,
    ) -> Result<Vec<Mastery>, DbErr> {
        MasteryEntity::find()
            .filter(mastery::Column::SummarylogId.eq(summarylog_id))
            .all(conn)
            .await
    }

    /// Mastery logs carry no user field; their permission policy is scoped
    /// through the parent summary log's user.
    pub async fn can<C: ConnectionTrait>(
        conn: &C,
        op: Operation,
        actor: &Actor,
        log: &Mastery,
    ) -> Result<bool, DbErr> {
        let summary = ContentSummaryEntity::find_by_id(log.summarylog_id)
            .one(conn)
            .await
            .require()?;
        Ok(permission::is_allowed(op, actor, Some(summary.user_id)))
    }
}
