pub mod attempt;

use sea_orm::entity::prelude::*;

/// Summary of one user's engagement with one exam; the aggregation point for
/// the individual attempts on that exam. The exam itself lives with the exam
/// collaborator, so only its id is recorded here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exam_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub exam_id: Uuid,
    pub user_id: Uuid,
    /// Closed exams accept no further engagement.
    pub closed: bool,
    pub completion_timestamp: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::user::Entity",
        from = "Column::UserId",
        to = "crate::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "attempt::Entity")]
    ExamAttemptLog,
}

impl Related<crate::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamAttemptLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
