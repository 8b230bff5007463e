use chrono::{NaiveDate, NaiveDateTime};
use learnlog_entity::content::{session, summary};
use learnlog_entity::user::Role;
use learnlog_entity::{facility, user};
use sea_orm::{DatabaseConnection, EntityTrait, IntoActiveModel};
use uuid::Uuid;

#[allow(dead_code)]
pub fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, 3, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_facility(db: &DatabaseConnection, is_default: bool) -> facility::Model {
    let facility = facility::Model {
        id: Uuid::new_v4(),
        name: "test facility".to_owned(),
        dataset_id: Uuid::new_v4(),
        is_default,
    };
    facility::Entity::insert(facility.clone().into_active_model())
        .exec(db)
        .await
        .unwrap();
    facility
}

#[allow(dead_code)]
pub async fn create_test_user(db: &DatabaseConnection, facility: &facility::Model) -> user::Model {
    create_test_user_with_role(db, facility, Role::Learner).await
}

#[allow(dead_code)]
pub async fn create_test_user_with_role(
    db: &DatabaseConnection,
    facility: &facility::Model,
    role: Role,
) -> user::Model {
    let user = user::Model {
        id: Uuid::new_v4(),
        username: "learner".to_owned(),
        facility_id: facility.id,
        dataset_id: facility.dataset_id,
        role,
    };
    user::Entity::insert(user.clone().into_active_model())
        .exec(db)
        .await
        .unwrap();
    user
}

#[allow(dead_code)]
pub async fn create_test_session(
    db: &DatabaseConnection,
    user_id: Option<Uuid>,
    content_id: Uuid,
) -> session::Model {
    let log = session::Model {
        id: Uuid::new_v4(),
        user_id,
        content_id,
        channel_id: Uuid::new_v4(),
        start_timestamp: timestamp(),
        end_timestamp: None,
        time_spent: 0.0,
        progress: 0.0,
        kind: "exercise".to_owned(),
        extra_fields: "{}".to_owned(),
    };
    session::Entity::insert(log.clone().into_active_model())
        .exec(db)
        .await
        .unwrap();
    log
}

#[allow(dead_code)]
pub async fn create_test_summary(
    db: &DatabaseConnection,
    user_id: Uuid,
    content_id: Uuid,
) -> summary::Model {
    let log = summary::Model {
        id: Uuid::new_v4(),
        user_id,
        content_id,
        channel_id: Uuid::new_v4(),
        start_timestamp: timestamp(),
        end_timestamp: None,
        completion_timestamp: None,
        time_spent: 0.0,
        progress: 0.0,
        kind: "exercise".to_owned(),
        extra_fields: "{}".to_owned(),
    };
    summary::Entity::insert(log.clone().into_active_model())
        .exec(db)
        .await
        .unwrap();
    log
}
