use crate::attempt::AttemptOutcome;
use crate::error::LogWriteError;
use crate::util::RequireRecord;
use chrono::NaiveDateTime;
use learnlog_entity::exam::attempt::{
    ActiveModel as ActiveExamAttempt, Entity as ExamAttemptEntity, Model as ExamAttempt,
};
use learnlog_entity::validate::Validate;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel};
use std::error::Error;
use uuid::Uuid;

pub struct NewExamAttempt {
    pub examlog_id: Uuid,
    pub user_id: Uuid,
    /// Exams have no session log to source these from, so they are recorded
    /// on the attempt itself.
    pub content_id: Uuid,
    pub channel_id: Uuid,
    pub item: String,
    pub start_timestamp: NaiveDateTime,
    pub end_timestamp: NaiveDateTime,
}

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        new: NewExamAttempt,
    ) -> Result<ExamAttempt, LogWriteError> {
        let log = ExamAttempt {
            id: Uuid::new_v4(),
            examlog_id: new.examlog_id,
            content_id: new.content_id,
            channel_id: new.channel_id,
            item: new.item,
            start_timestamp: new.start_timestamp,
            end_timestamp: new.end_timestamp,
            completion_timestamp: None,
            time_spent: 0.0,
            complete: false,
            correct: 0.0,
            hinted: false,
            answer: "{}".to_owned(),
            simple_answer: String::new(),
            interaction_history: "[]".to_owned(),
            user_id: new.user_id,
        };
        log.validate()?;

        let examlog_id = log.examlog_id;
        log.into_active_model()
            .insert(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(
                    error = error as &dyn Error,
                    %examlog_id,
                    "failed to create exam attempt log"
                );
            })
            .map_err(Into::into)
    }

    pub async fn record_outcome<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
        outcome: AttemptOutcome,
    ) -> Result<ExamAttempt, LogWriteError> {
        let log = ExamAttemptEntity::find_by_id(id).one(conn).await.require()?;
        let log = ExamAttempt {
            end_timestamp: outcome.end_timestamp,
            completion_timestamp: outcome.completion_timestamp,
            time_spent: outcome.time_spent,
            complete: outcome.complete,
            correct: outcome.correct,
            hinted: outcome.hinted,
            answer: outcome.answer,
            simple_answer: outcome.simple_answer,
            interaction_history: outcome.interaction_history,
            ..log
        };
        log.validate()?;

        let active = ActiveExamAttempt {
            id: Unchanged(log.id),
            end_timestamp: Set(log.end_timestamp),
            completion_timestamp: Set(log.completion_timestamp),
            time_spent: Set(log.time_spent),
            complete: Set(log.complete),
            correct: Set(log.correct),
            hinted: Set(log.hinted),
            answer: Set(log.answer),
            simple_answer: Set(log.simple_answer),
            interaction_history: Set(log.interaction_history),
            ..Default::default()
        };
        active
            .update(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %id, "failed to update exam attempt log");
            })
            .map_err(Into::into)
    }
}
