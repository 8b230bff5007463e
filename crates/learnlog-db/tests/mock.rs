use chrono::NaiveDateTime;
use learnlog_db::content_session;
use learnlog_entity::content::session;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
use test_log::test;
use uuid::Uuid;

#[test(tokio::test)]
async fn for_user_returns_the_mocked_rows() -> Result<(), DbErr> {
    let user_id = Uuid::new_v4();
    let models = [
        session::Model {
            id: Uuid::new_v4(),
            user_id: Some(user_id),
            content_id: Uuid::new_v4(),
            channel_id: Uuid::new_v4(),
            start_timestamp: NaiveDateTime::default(),
            end_timestamp: None,
            time_spent: 3.0,
            progress: 0.2,
            kind: "video".to_owned(),
            extra_fields: "{}".to_owned(),
        },
        session::Model {
            id: Uuid::new_v4(),
            user_id: Some(user_id),
            content_id: Uuid::new_v4(),
            channel_id: Uuid::new_v4(),
            start_timestamp: NaiveDateTime::default(),
            end_timestamp: None,
            time_spent: 8.0,
            progress: 1.0,
            kind: "exercise".to_owned(),
            extra_fields: "{}".to_owned(),
        },
    ];
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([models.clone()])
        .into_connection();

    assert_eq!(
        content_session::Query::for_user(&db, user_id).await?,
        Vec::from(models)
    );

    Ok(())
}
