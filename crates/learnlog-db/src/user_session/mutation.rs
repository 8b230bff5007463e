use super::Query;
use chrono::{NaiveDateTime, TimeDelta, Utc};
use learnlog_entity::permission::Actor;
use learnlog_entity::user_session::{ActiveModel as ActiveUserSession, Model as UserSession};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, IntoActiveModel};
use std::error::Error;
use uuid::Uuid;

/// A session is considered over once more than this much time has passed
/// since its last interaction.
const SESSION_IDLE_MINUTES: i64 = 5;

fn session_expired(last_interaction: NaiveDateTime, now: NaiveDateTime) -> bool {
    now - last_interaction > TimeDelta::minutes(SESSION_IDLE_MINUTES)
}

pub struct Mutation;

impl Mutation {
    /// Record platform activity for `actor`. Anonymous callers never get a
    /// session log. A registered user's most recent session is reused (its
    /// last-interaction timestamp refreshed) while it is at most five
    /// minutes stale; otherwise a new session starts.
    ///
    /// Read-then-write without a guard: concurrent calls for the same user
    /// can create duplicate sessions or drop a refresh.
    pub async fn update_log<C: ConnectionTrait>(
        conn: &C,
        actor: &Actor,
    ) -> Result<Option<UserSession>, DbErr> {
        let Actor::User { id: user_id, .. } = actor else {
            return Ok(None);
        };

        let latest = Query::latest_for_user(conn, *user_id).await?;
        let now = Utc::now().naive_utc();
        match latest {
            Some(log) if !session_expired(log.last_interaction_timestamp, now) => {
                let active = ActiveUserSession {
                    id: Unchanged(log.id),
                    last_interaction_timestamp: Set(now),
                    ..Default::default()
                };
                active.update(conn).await.map(Some)
            }
            _ => {
                let log = UserSession {
                    id: Uuid::new_v4(),
                    user_id: *user_id,
                    channels: String::new(),
                    pages: String::new(),
                    start_timestamp: now,
                    last_interaction_timestamp: now,
                };
                log.into_active_model()
                    .insert(conn)
                    .await
                    .inspect_err(|error| {
                        tracing::error!(
                            error = error as &dyn Error,
                            %user_id,
                            "failed to create user session log"
                        );
                    })
                    .map(Some)
            }
        }
    }
}
