use sea_orm::entity::prelude::*;

#[derive(Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Clone, Copy)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(255))")]
pub enum Role {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "COACH")]
    Coach,
    #[sea_orm(string_value = "LEARNER")]
    Learner,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    pub facility_id: Uuid,
    pub dataset_id: Uuid,
    pub role: Role,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::facility::Entity",
        from = "Column::FacilityId",
        to = "super::facility::Column::Id"
    )]
    Facility,
    #[sea_orm(has_many = "super::content::session::Entity")]
    ContentSessionLog,
    #[sea_orm(has_many = "super::content::summary::Entity")]
    ContentSummaryLog,
    #[sea_orm(has_many = "super::user_session::Entity")]
    UserSessionLog,
}

impl Related<super::facility::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Facility.def()
    }
}

impl Related<super::content::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContentSessionLog.def()
    }
}

impl Related<super::content::summary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContentSummaryLog.def()
    }
}

impl Related<super::user_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserSessionLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
