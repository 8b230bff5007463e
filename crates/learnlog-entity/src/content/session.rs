use sea_orm::entity::prelude::*;

/// One visit to one content item. The user reference is optional so that
/// anonymous engagement can still be recorded.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "content_session_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    #[sea_orm(indexed)]
    pub content_id: Uuid,
    pub channel_id: Uuid,
    pub start_timestamp: DateTime,
    pub end_timestamp: Option<DateTime>,
    /// In seconds.
    pub time_spent: f64,
    pub progress: f64,
    pub kind: String,
    /// Opaque JSON blob, rendered by the frontend only.
    pub extra_fields: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::user::Entity",
        from = "Column::UserId",
        to = "crate::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "crate::attempt::Entity")]
    AttemptLog,
}

impl Related<crate::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<crate::attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttemptLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
