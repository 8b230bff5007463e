use crate::error::LogWriteError;
use crate::util::RequireRecord;
use chrono::NaiveDateTime;
use learnlog_entity::content::summary::{
    ActiveModel as ActiveContentSummary, Entity as ContentSummaryEntity, Model as ContentSummary,
};
use learnlog_entity::validate::Validate;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel};
use std::error::Error;
use uuid::Uuid;

pub struct NewContentSummary {
    pub user_id: Uuid,
    pub content_id: Uuid,
    pub channel_id: Uuid,
    pub start_timestamp: NaiveDateTime,
    pub kind: String,
    pub extra_fields: Option<String>,
}

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        new: NewContentSummary,
    ) -> Result<ContentSummary, LogWriteError> {
        let log = ContentSummary {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            content_id: new.content_id,
            channel_id: new.channel_id,
            start_timestamp: new.start_timestamp,
            end_timestamp: None,
            completion_timestamp: None,
            time_spent: 0.0,
            progress: 0.0,
            kind: new.kind,
            extra_fields: new.extra_fields.unwrap_or_else(|| "{}".to_owned()),
        };
        log.validate()?;

        let user_id = log.user_id;
        log.into_active_model()
            .insert(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(
                    error = error as &dyn Error,
                    %user_id,
                    "failed to create content summary log"
                );
            })
            .map_err(Into::into)
    }

    /// Roll the aggregate forward. Progress outside [0, 1] is rejected, not
    /// clamped.
    pub async fn update_progress<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
        progress: f64,
        time_spent: f64,
        end_timestamp: NaiveDateTime,
    ) -> Result<ContentSummary, LogWriteError> {
        let log = ContentSummaryEntity::find_by_id(id).one(conn).await.require()?;
        let log = ContentSummary {
            progress,
            time_spent,
            end_timestamp: Some(end_timestamp),
            ..log
        };
        log.validate()?;

        let active = ActiveContentSummary {
            id: Unchanged(log.id),
            progress: Set(log.progress),
            time_spent: Set(log.time_spent),
            end_timestamp: Set(log.end_timestamp),
            ..Default::default()
        };
        active
            .update(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %id, "failed to update content summary log");
            })
            .map_err(Into::into)
    }

    pub async fn complete<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
        completion_timestamp: NaiveDateTime,
    ) -> Result<(), LogWriteError> {
        let active = ActiveContentSummary {
            id: Unchanged(id),
            completion_timestamp: Set(Some(completion_timestamp)),
            ..Default::default()
        };
        ContentSummaryEntity::update(active).exec(conn).await?;
        Ok(())
    }
}
