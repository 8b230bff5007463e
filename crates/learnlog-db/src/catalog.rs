//! Filtering logs down to the content ids below a topic. The content
//! hierarchy lives with an external collaborator; depending on the
//! deployment its catalog either shares a joinable store with the logs or
//! has to hand over a materialized id list.

use sea_orm::sea_query::SelectStatement;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Select};
use uuid::Uuid;

/// The content-hierarchy collaborator, reduced to what log filtering needs.
pub trait ContentCatalog {
    /// Content ids of every descendant of the given topic.
    fn descendant_content_ids(&self, topic_id: Uuid) -> Vec<Uuid>;

    /// A subquery selecting the same descendant content ids, available only
    /// when the catalog shares a joinable store with the log tables.
    fn descendant_subquery(&self, _topic_id: Uuid) -> Option<SelectStatement> {
        None
    }
}

/// Restrict `select` to rows whose content-id column is in `content_ids`.
/// The ids are materialized once so a lazy source is not evaluated per row.
pub(crate) fn filter_by_content_ids<E: EntityTrait, K: ColumnTrait>(
    select: Select<E>,
    column: K,
    content_ids: impl IntoIterator<Item = Uuid>,
) -> Select<E> {
    let content_ids: Vec<Uuid> = content_ids.into_iter().collect();
    select.filter(column.is_in(content_ids))
}

/// Restrict `select` to rows under `topic_id`, joining against the catalog
/// store when possible and falling back to the materialized-list form
/// otherwise. Both paths yield identical result sets.
pub(crate) fn filter_by_topic<E: EntityTrait, K: ColumnTrait>(
    select: Select<E>,
    column: K,
    catalog: &impl ContentCatalog,
    topic_id: Uuid,
) -> Select<E> {
    match catalog.descendant_subquery(topic_id) {
        Some(subquery) => select.filter(column.in_subquery(subquery)),
        None => filter_by_content_ids(select, column, catalog.descendant_content_ids(topic_id)),
    }
}
