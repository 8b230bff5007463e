use crate::attempt::AttemptFields;
use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

/// One item interaction within an exam. Exams have no content session log to
/// source content/channel ids from, so both are recorded here directly.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exam_attempt_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub examlog_id: Uuid,
    #[sea_orm(indexed)]
    pub content_id: Uuid,
    pub channel_id: Uuid,
    pub item: String,
    pub start_timestamp: DateTime,
    pub end_timestamp: DateTime,
    pub completion_timestamp: Option<DateTime>,
    pub time_spent: f64,
    pub complete: bool,
    pub correct: f64,
    pub hinted: bool,
    pub answer: String,
    pub simple_answer: String,
    pub interaction_history: String,
    pub user_id: Uuid,
}

impl AttemptFields for Model {
    fn item(&self) -> &str {
        &self.item
    }
    fn start_timestamp(&self) -> NaiveDateTime {
        self.start_timestamp
    }
    fn end_timestamp(&self) -> NaiveDateTime {
        self.end_timestamp
    }
    fn completion_timestamp(&self) -> Option<NaiveDateTime> {
        self.completion_timestamp
    }
    fn time_spent(&self) -> f64 {
        self.time_spent
    }
    fn complete(&self) -> bool {
        self.complete
    }
    fn correct(&self) -> f64 {
        self.correct
    }
    fn hinted(&self) -> bool {
        self.hinted
    }
    fn answer(&self) -> &str {
        &self.answer
    }
    fn simple_answer(&self) -> &str {
        &self.simple_answer
    }
    fn interaction_history(&self) -> &str {
        &self.interaction_history
    }
    fn user_id(&self) -> Uuid {
        self.user_id
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::Entity",
        from = "Column::ExamlogId",
        to = "super::Column::Id"
    )]
    ExamLog,
}

impl Related<super::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
