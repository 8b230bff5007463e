use sea_orm::entity::prelude::*;

/// User feedback on a content item. quality/ease/learning are 1-5 scales,
/// each optional so partial feedback can be stored.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "content_rating_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    #[sea_orm(indexed)]
    pub content_id: Uuid,
    pub channel_id: Uuid,
    pub quality: Option<i32>,
    pub ease: Option<i32>,
    pub learning: Option<i32>,
    pub feedback: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::user::Entity",
        from = "Column::UserId",
        to = "crate::user::Column::Id"
    )]
    User,
}

impl Related<crate::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
