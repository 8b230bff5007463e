use crate::error::LogWriteError;
use chrono::NaiveDateTime;
use learnlog_entity::mastery::{ActiveModel as ActiveMastery, Entity as MasteryEntity, Model as Mastery};
use learnlog_entity::validate::Validate;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Start a mastery-level attempt. The criterion text is snapshotted here
    /// and frozen: no mutation exists that writes it afterwards, so the
    /// criterion cannot change under an attempt in flight.
    pub async fn start<C: ConnectionTrait>(
        conn: &C,
        summarylog_id: Uuid,
        mastery_criterion: String,
        mastery_level: i32,
        start_timestamp: NaiveDateTime,
    ) -> Result<Mastery, LogWriteError> {
        let log = Mastery {
            id: Uuid::new_v4(),
            summarylog_id,
            mastery_criterion,
            start_timestamp,
            end_timestamp: None,
            completion_timestamp: None,
            mastery_level,
            complete: false,
        };
        log.validate()?;

        log.into_active_model()
            .insert(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(
                    error = error as &dyn Error,
                    %summarylog_id,
                    mastery_level,
                    "failed to create mastery log"
                );
            })
            .map_err(Into::into)
    }

    pub async fn complete<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
        completion_timestamp: NaiveDateTime,
    ) -> Result<(), LogWriteError> {
        let active = ActiveMastery {
            id: Unchanged(id),
            complete: Set(true),
            completion_timestamp: Set(Some(completion_timestamp)),
            end_timestamp: Set(Some(completion_timestamp)),
            ..Default::default()
        };
        MasteryEntity::update(active).exec(conn).await?;
        Ok(())
    }
}
