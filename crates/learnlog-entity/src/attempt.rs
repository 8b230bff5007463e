use crate::validate::FieldViolation;
use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

/// Field contract shared by every attempt record (assessment attempts and
/// exam attempts persist to different tables but carry the same shape).
pub trait AttemptFields {
    /// Identifier of the question/item within the relevant assessment.
    fn item(&self) -> &str;
    fn start_timestamp(&self) -> NaiveDateTime;
    fn end_timestamp(&self) -> NaiveDateTime;
    fn completion_timestamp(&self) -> Option<NaiveDateTime>;
    /// In seconds.
    fn time_spent(&self) -> f64;
    fn complete(&self) -> bool;
    /// How correct the answer was, within [0, 1]. In simple cases just 0 or 1.
    fn correct(&self) -> f64;
    fn hinted(&self) -> bool;
    /// Opaque JSON blob allowing the answer to be rerendered by the frontend.
    fn answer(&self) -> &str;
    /// Human readable answer, suitable for coach reports. May be empty.
    fn simple_answer(&self) -> &str;
    /// Opaque JSON array describing the interaction sequence of this attempt.
    fn interaction_history(&self) -> &str;
    fn user_id(&self) -> Uuid;

    fn attempt_violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        if self.time_spent() < 0.0 {
            violations.push(FieldViolation::Negative {
                field: "time_spent",
                value: self.time_spent(),
            });
        }
        if !(0.0..=1.0).contains(&self.correct()) {
            violations.push(FieldViolation::OutOfRange {
                field: "correct",
                min: 0.0,
                max: 1.0,
                value: self.correct(),
            });
        }
        violations
    }
}

/// One item interaction within an assessment, owned by a content session log
/// and optionally tied to the mastery log it counted towards.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attempt_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub sessionlog_id: Uuid,
    pub masterylog_id: Option<Uuid>,
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
        belongs_to = "crate::content::session::Entity",
        from = "Column::SessionlogId",
        to = "crate::content::session::Column::Id"
    )]
    SessionLog,
    #[sea_orm(
        belongs_to = "crate::mastery::Entity",
        from = "Column::MasterylogId",
        to = "crate::mastery::Column::Id"
    )]
    MasteryLog,
}

impl Related<crate::content::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionLog.def()
    }
}

impl Related<crate::mastery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MasteryLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
