use crate::dataset;
use crate::error::LogWriteError;
use crate::util::RequireRecord;
use learnlog_entity::content::rating::{
    ActiveModel as ActiveContentRating, Entity as ContentRatingEntity, Model as ContentRating,
};
use learnlog_entity::validate::Validate;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel};
use std::error::Error;
use uuid::Uuid;

pub struct NewContentRating {
    pub user_id: Option<Uuid>,
    pub content_id: Uuid,
    pub channel_id: Uuid,
    pub quality: Option<i32>,
    pub ease: Option<i32>,
    pub learning: Option<i32>,
    pub feedback: String,
}

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        new: NewContentRating,
    ) -> Result<ContentRating, LogWriteError> {
        let log = ContentRating {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            content_id: new.content_id,
            channel_id: new.channel_id,
            quality: new.quality,
            ease: new.ease,
            learning: new.learning,
            feedback: new.feedback,
        };
        log.validate()?;
        dataset::Query::for_user(conn, log.user_id).await?;

        let content_id = log.content_id;
        log.into_active_model()
            .insert(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(
                    error = error as &dyn Error,
                    %content_id,
                    "failed to create content rating log"
                );
            })
            .map_err(Into::into)
    }

    pub async fn rate<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
        quality: Option<i32>,
        ease: Option<i32>,
        learning: Option<i32>,
        feedback: String,
    ) -> Result<ContentRating, LogWriteError> {
        let log = ContentRatingEntity::find_by_id(id).one(conn).await.require()?;
        let log = ContentRating {
            quality,
            ease,
            learning,
            feedback,
            ..log
        };
        log.validate()?;

        let active = ActiveContentRating {
            id: Unchanged(log.id),
            quality: Set(log.quality),
            ease: Set(log.ease),
            learning: Set(log.learning),
            feedback: Set(log.feedback),
            ..Default::default()
        };
        active.update(conn).await.map_err(Into::into)
    }
}
