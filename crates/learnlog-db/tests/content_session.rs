mod common;

use crate::common::fixtures::{create_test_facility, create_test_session, create_test_user, timestamp};
use crate::common::setup_schema;
use learnlog_db::catalog::ContentCatalog;
use learnlog_db::content_session::{Mutation, NewContentSession, Query};
use learnlog_db::dataset;
use learnlog_db::dataset::DatasetError;
use learnlog_db::error::LogWriteError;
use sea_orm::sea_query::{Alias, Expr, SelectStatement, Value};
use sea_orm::{ConnectionTrait, Database};
use test_log::test;
use uuid::Uuid;

#[test(tokio::test)]
async fn create_and_update_progress() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();
    let facility = create_test_facility(db, true).await;
    let user = create_test_user(db, &facility).await;

    let log = Mutation::create(
        db,
        NewContentSession {
            user_id: Some(user.id),
            content_id: Uuid::new_v4(),
            channel_id: Uuid::new_v4(),
            start_timestamp: timestamp(),
            kind: "video".to_owned(),
            extra_fields: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(log.extra_fields, "{}");
    assert_eq!(log.progress, 0.0);

    let updated = Mutation::update_progress(db, log.id, 0.5, 42.0, None).await.unwrap();
    assert_eq!(updated.progress, 0.5);
    assert_eq!(updated.time_spent, 42.0);

    // Negative time is rejected before anything is written.
    let err = Mutation::update_progress(db, log.id, 0.6, -1.0, None)
        .await
        .unwrap_err();
    assert!(matches!(err, LogWriteError::Validation(_)));
    let reloaded = Query::load(db, log.id).await.unwrap();
    assert_eq!(reloaded.progress, 0.5);
    assert_eq!(reloaded.time_spent, 42.0);
}

#[test(tokio::test)]
async fn anonymous_log_needs_a_default_facility() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let new = |content_id| NewContentSession {
        user_id: None,
        content_id,
        channel_id: Uuid::new_v4(),
        start_timestamp: timestamp(),
        kind: "html5".to_owned(),
        extra_fields: None,
    };

    let err = Mutation::create(db, new(Uuid::new_v4())).await.unwrap_err();
    assert!(matches!(
        err,
        LogWriteError::Dataset(DatasetError::NoDefaultFacility)
    ));

    // A non-default facility does not help either.
    create_test_facility(db, false).await;
    let err = Mutation::create(db, new(Uuid::new_v4())).await.unwrap_err();
    assert!(matches!(
        err,
        LogWriteError::Dataset(DatasetError::NoDefaultFacility)
    ));

    let facility = create_test_facility(db, true).await;
    let log = Mutation::create(db, new(Uuid::new_v4())).await.unwrap();
    assert_eq!(
        dataset::Query::content_session(db, &log).await.unwrap(),
        facility.dataset_id
    );
}

struct ListCatalog(Vec<Uuid>);

impl ContentCatalog for ListCatalog {
    fn descendant_content_ids(&self, _topic_id: Uuid) -> Vec<Uuid> {
        self.0.clone()
    }
}

struct JoinedCatalog;

impl ContentCatalog for JoinedCatalog {
    fn descendant_content_ids(&self, _topic_id: Uuid) -> Vec<Uuid> {
        unimplemented!("the joined catalog only serves subqueries")
    }

    fn descendant_subquery(&self, topic_id: Uuid) -> Option<SelectStatement> {
        Some(
            sea_orm::sea_query::Query::select()
                .column(Alias::new("content_id"))
                .from(Alias::new("content_nodes"))
                .and_where(Expr::col(Alias::new("topic_id")).eq(topic_id))
                .to_owned(),
        )
    }
}

#[test(tokio::test)]
async fn topic_filtering_is_identical_on_both_catalog_paths() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();
    let facility = create_test_facility(db, true).await;
    let user = create_test_user(db, &facility).await;

    let (content_a, content_b, content_c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let log_a = create_test_session(db, Some(user.id), content_a).await;
    create_test_session(db, Some(user.id), content_b).await;
    let log_c = create_test_session(db, Some(user.id), content_c).await;

    // Register a and c as descendants of the topic in the catalog table.
    let topic_id = Uuid::new_v4();
    let insert = sea_orm::sea_query::Query::insert()
        .into_table(Alias::new("content_nodes"))
        .columns([Alias::new("content_id"), Alias::new("topic_id")])
        .values_panic([Value::from(content_a).into(), Value::from(topic_id).into()])
        .values_panic([Value::from(content_c).into(), Value::from(topic_id).into()])
        .to_owned();
    db.execute(db.get_database_backend().build(&insert)).await.unwrap();

    let mut expected = vec![log_a.id, log_c.id];
    expected.sort();

    let via_list = Query::find_by_topic(db, &ListCatalog(vec![content_a, content_c]), topic_id)
        .await
        .unwrap();
    let mut via_list: Vec<_> = via_list.into_iter().map(|log| log.id).collect();
    via_list.sort();
    assert_eq!(via_list, expected);

    let via_join = Query::find_by_topic(db, &JoinedCatalog, topic_id).await.unwrap();
    let mut via_join: Vec<_> = via_join.into_iter().map(|log| log.id).collect();
    via_join.sort();
    assert_eq!(via_join, expected);

    let direct = Query::find_by_content_ids(db, [content_a, content_c]).await.unwrap();
    assert_eq!(direct.len(), 2);
}
