use learnlog_entity::user_session;
use learnlog_entity::user_session::{Entity as UserSessionEntity, Model as UserSession};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub struct Query;

impl Query {
    /// The user's most recently touched session, if any. Finding none is the
    /// ordinary first-visit case, not an error.
    pub async fn latest_for_user<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
    ) -> Result<Option<UserSession>, DbErr> {
        UserSessionEntity::find()
            .filter(user_session::Column::UserId.eq(user_id))
            .order_by_desc(user_session::Column::LastInteractionTimestamp)
            .one(conn)
            .await
    }

    pub async fn for_user<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
    ) -> Result<Vec<UserSession>, DbErr> {
        UserSessionEntity::find()
            .filter(user_session::Column::UserId.eq(user_id))
            .order_by_desc(user_session::Column::LastInteractionTimestamp)
            .all(conn)
            .await
    }
}
