use crate::error::LogWriteError;
use crate::util::RequireRecord;
use chrono::NaiveDateTime;
use learnlog_entity::attempt::{ActiveModel as ActiveAttempt, Entity as AttemptEntity, Model as Attempt};
use learnlog_entity::validate::Validate;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel};
use std::error::Error;
use uuid::Uuid;

pub struct NewAttempt {
    pub sessionlog_id: Uuid,
    /// The mastery log this attempt counted towards, if any.
    pub masterylog_id: Option<Uuid>,
    pub user_id: Uuid,
    pub item: String,
    pub start_timestamp: NaiveDateTime,
    pub end_timestamp: NaiveDateTime,
}

/// The result of an attempt once the learner is done with the item.
pub struct AttemptOutcome {
    pub end_timestamp: NaiveDateTime,
    pub completion_timestamp: Option<NaiveDateTime>,
    pub time_spent: f64,
    pub complete: bool,
    pub correct: f64,
    pub hinted: bool,
    pub answer: String,
    pub simple_answer: String,
    pub interaction_history: String,
}

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        new: NewAttempt,
    ) -> Result<Attempt, LogWriteError> {
        let log = Attempt {
            id: Uuid::new_v4(),
            sessionlog_id: new.sessionlog_id,
            masterylog_id: new.masterylog_id,
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

        let sessionlog_id = log.sessionlog_id;
        log.into_active_model()
            .insert(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(
                    error = error as &dyn Error,
                    %sessionlog_id,
                    "failed to create attempt log"
                );
            })
            .map_err(Into::into)
    }

    pub async fn record_outcome<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
        outcome: AttemptOutcome,
    ) -> Result<Attempt, LogWriteError> {
        let log = AttemptEntity::find_by_id(id).one(conn).await.require()?;
        let log = Attempt {
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

        let active = ActiveAttempt {
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
                tracing::error!(error = error as &dyn Error, %id, "failed to update attempt log");
            })
            .map_err(Into::into)
    }
}
