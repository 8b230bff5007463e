mod common;

use crate::common::fixtures::{create_test_facility, create_test_user, timestamp};
use crate::common::setup_schema;
use learnlog_db::exam_attempt::NewExamAttempt;
use learnlog_db::{dataset, exam, exam_attempt};
use sea_orm::Database;
use test_log::test;
use uuid::Uuid;

#[test(tokio::test)]
async fn exam_lifecycle_and_attempt_dataset() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();
    let facility = create_test_facility(db, true).await;
    let user = create_test_user(db, &facility).await;
    let exam_id = Uuid::new_v4();

    let examlog = exam::Mutation::open(db, exam_id, user.id).await.unwrap();
    assert!(!examlog.closed);

    let content_id = Uuid::new_v4();
    let attempt = exam_attempt::Mutation::create(
        db,
        NewExamAttempt {
            examlog_id: examlog.id,
            user_id: user.id,
            content_id,
            channel_id: Uuid::new_v4(),
            item: "q1".to_owned(),
            start_timestamp: timestamp(),
            end_timestamp: timestamp(),
        },
    )
    .await
    .unwrap();

    assert_eq!(
        dataset::Query::exam_attempt(db, &attempt).await.unwrap(),
        dataset::Query::exam(db, &examlog).await.unwrap()
    );
    assert_eq!(dataset::Query::exam(db, &examlog).await.unwrap(), user.dataset_id);

    exam::Mutation::close(db, examlog.id).await.unwrap();
    let examlog = exam::Query::load(db, examlog.id).await.unwrap();
    assert!(examlog.closed);
    assert!(examlog.completion_timestamp.is_some());

    assert_eq!(exam::Query::for_exam(db, exam_id).await.unwrap().len(), 1);
    assert_eq!(
        exam_attempt::Query::for_examlog(db, examlog.id).await.unwrap().len(),
        1
    );
    let by_content = exam_attempt::Query::find_by_content_ids(db, [content_id]).await.unwrap();
    assert_eq!(by_content.len(), 1);
    assert_eq!(by_content[0].id, attempt.id);
}
