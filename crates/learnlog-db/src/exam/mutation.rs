use chrono::Utc;
use learnlog_entity::exam::{ActiveModel as ActiveExamLog, Entity as ExamLogEntity, Model as ExamLog};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Open a user's engagement with an exam.
    pub async fn open<C: ConnectionTrait>(
        conn: &C,
        exam_id: Uuid,
        user_id: Uuid,
    ) -> Result<ExamLog, DbErr> {
        let log = ExamLog {
            id: Uuid::new_v4(),
            exam_id,
            user_id,
            closed: false,
            completion_timestamp: None,
        };
        log.into_active_model()
            .insert(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(
                    error = error as &dyn Error,
                    %exam_id,
                    %user_id,
                    "failed to create exam log"
                );
            })
    }

    /// End engagement with the exam, e.g. when it is deactivated.
    pub async fn close<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<(), DbErr> {
        let active = ActiveExamLog {
            id: Unchanged(id),
            closed: Set(true),
            completion_timestamp: Set(Some(Utc::now().naive_utc())),
            ..Default::default()
        };
        ExamLogEntity::update(active).exec(conn).await?;
        Ok(())
    }
}
