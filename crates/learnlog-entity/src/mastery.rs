use sea_orm::entity::prelude::*;

/// One mastery-level attempt, tied to the single summary log for the
/// user/content pair. Carries no user reference of its own; ownership and
/// dataset both resolve through the parent summary log.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mastery_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub summarylog_id: Uuid,
    /// Snapshot of the mastery criterion taken when engagement starts, so a
    /// later change to the criterion cannot alter an attempt in flight.
    pub mastery_criterion: String,
    pub start_timestamp: DateTime,
    pub end_timestamp: Option<DateTime>,
    pub completion_timestamp: Option<DateTime>,
    /// The integer mastery level being tracked, within [1, 10].
    pub mastery_level: i32,
    pub complete: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::content::summary::Entity",
        from = "Column::SummarylogId",
        to = "crate::content::summary::Column::Id"
    )]
    SummaryLog,
    #[sea_orm(has_many = "crate::attempt::Entity")]
    AttemptLog,
}

impl Related<crate::content::summary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SummaryLog.def()
    }
}

impl Related<crate::attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttemptLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
