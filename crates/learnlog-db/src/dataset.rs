//! Dataset (tenant) inference. A log's dataset is derived whenever it is
//! needed, never stored on the log row: logs with a direct user belong to
//! that user's dataset, user-less logs fall back to the default facility,
//! and child logs delegate to their parent log regardless of any user field
//! they carry themselves.

use crate::util::RequireRecord;
use learnlog_entity::{attempt, content, exam, facility, mastery, user, user_session};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error(transparent)]
    Db(#[from] DbErr),
    /// Without a default facility there is no dataset to assign user-less
    /// logs to; this is a deployment configuration error, not retryable.
    #[error("no default facility is configured; logs without a user cannot be stored")]
    NoDefaultFacility,
}

pub struct Query;

impl Query {
    /// The default rule: the user's dataset, or the default facility's for
    /// user-less logs.
    pub async fn for_user<C: ConnectionTrait>(
        conn: &C,
        user_id: Option<Uuid>,
    ) -> Result<Uuid, DatasetError> {
        match user_id {
            Some(user_id) => {
                let user = user::Entity::find_by_id(user_id).one(conn).await.require()?;
                Ok(user.dataset_id)
            }
            None => {
                let facility = facility::Entity::find()
                    .filter(facility::Column::IsDefault.eq(true))
                    .one(conn)
                    .await?
                    .ok_or(DatasetError::NoDefaultFacility)
                    .inspect_err(|error| {
                        tracing::error!(
                            error = error as &dyn Error,
                            "cannot infer a dataset for a user-less log"
                        );
                    })?;
                Ok(facility.dataset_id)
            }
        }
    }

    pub async fn content_session<C: ConnectionTrait>(
        conn: &C,
        log: &content::session::Model,
    ) -> Result<Uuid, DatasetError> {
        Self::for_user(conn, log.user_id).await
    }

    pub async fn content_summary<C: ConnectionTrait>(
        conn: &C,
        log: &content::summary::Model,
    ) -> Result<Uuid, DatasetError> {
        Self::for_user(conn, Some(log.user_id)).await
    }

    pub async fn content_rating<C: ConnectionTrait>(
        conn: &C,
        log: &content::rating::Model,
    ) -> Result<Uuid, DatasetError> {
        Self::for_user(conn, log.user_id).await
    }

    pub async fn user_session<C: ConnectionTrait>(
        conn: &C,
        log: &user_session::Model,
    ) -> Result<Uuid, DatasetError> {
        Self::for_user(conn, Some(log.user_id)).await
    }

    pub async fn exam<C: ConnectionTrait>(
        conn: &C,
        log: &exam::Model,
    ) -> Result<Uuid, DatasetError> {
        Self::for_user(conn, Some(log.user_id)).await
    }

    /// Mastery logs belong to their parent summary log's dataset.
    pub async fn mastery<C: ConnectionTrait>(
        conn: &C,
        log: &mastery::Model,
    ) -> Result<Uuid, DatasetError> {
        let summary = content::summary::Entity::find_by_id(log.summarylog_id)
            .one(conn)
            .await
            .require()?;
        Self::content_summary(conn, &summary).await
    }

    /// Attempt logs belong to their parent session log's dataset, ignoring
    /// the user field recorded on the attempt itself.
    pub async fn attempt<C: ConnectionTrait>(
        conn: &C,
        log: &attempt::Model,
    ) -> Result<Uuid, DatasetError> {
        let session = content::session::Entity::find_by_id(log.sessionlog_id)
            .one(conn)
            .await
            .require()?;
        Self::content_session(conn, &session).await
    }

    /// Exam attempt logs belong to their parent exam log's dataset.
    pub async fn exam_attempt<C: ConnectionTrait>(
        conn: &C,
        log: &exam::attempt::Model,
    ) -> Result<Uuid, DatasetError> {
        let examlog = exam::Entity::find_by_id(log.examlog_id)
            .one(conn)
            .await
            .require()?;
        Self::exam(conn, &examlog).await
    }
}
