use sea_orm::entity::prelude::*;

/// Aggregate of all sessions one user has had with one content item.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "content_summary_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(indexed)]
    pub content_id: Uuid,
    pub channel_id: Uuid,
    pub start_timestamp: DateTime,
    pub end_timestamp: Option<DateTime>,
    pub completion_timestamp: Option<DateTime>,
    /// In seconds.
    pub time_spent: f64,
    /// Fraction of the content completed, within [0, 1].
    pub progress: f64,
    pub kind: String,
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
    #[sea_orm(has_many = "crate::mastery::Entity")]
    MasteryLog,
}

impl Related<crate::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<crate::mastery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MasteryLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
