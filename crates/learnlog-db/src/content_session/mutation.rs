use crate::dataset;
use crate::error::LogWriteError;
use crate::util::RequireRecord;
use chrono::NaiveDateTime;
use learnlog_entity::content::session::{
    ActiveModel as ActiveContentSession, Entity as ContentSessionEntity, Model as ContentSession,
};
use learnlog_entity::validate::Validate;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel};
use std::error::Error;
use uuid::Uuid;

pub struct NewContentSession {
    /// Absent for anonymous visits.
    pub user_id: Option<Uuid>,
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
        new: NewContentSession,
    ) -> Result<ContentSession, LogWriteError> {
        let log = ContentSession {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            content_id: new.content_id,
            channel_id: new.channel_id,
            start_timestamp: new.start_timestamp,
            end_timestamp: None,
            time_spent: 0.0,
            progress: 0.0,
            kind: new.kind,
            extra_fields: new.extra_fields.unwrap_or_else(|| "{}".to_owned()),
        };
        log.validate()?;
        // The dataset is derived rather than stored; inferring it up front
        // makes a missing default facility fail before anything is written.
        dataset::Query::for_user(conn, log.user_id).await?;

        let content_id = log.content_id;
        log.into_active_model()
            .insert(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(
                    error = error as &dyn Error,
                    %content_id,
                    "failed to create content session log"
                );
            })
            .map_err(Into::into)
    }

    /// Refresh the running counters of a visit. Values are validated against
    /// the full record before the row is touched.
    pub async fn update_progress<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
        progress: f64,
        time_spent: f64,
        end_timestamp: Option<NaiveDateTime>,
    ) -> Result<ContentSession, LogWriteError> {
        let log = ContentSessionEntity::find_by_id(id).one(conn).await.require()?;
        let log = ContentSession {
            progress,
            time_spent,
            end_timestamp,
            ..log
        };
        log.validate()?;

        let active = ActiveContentSession {
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
                tracing::error!(error = error as &dyn Error, %id, "failed to update content session log");
            })
            .map_err(Into::into)
    }
}
