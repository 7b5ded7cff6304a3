/// Search history ledger
///
/// A bounded-free, recency-ordered, duplicate-suppressing list per user.
/// Ordering is maintained at write time: `push_recent` removes every entry
/// with the same `(search_term, kind)` pair, then prepends, so the head is
/// always the most recent search and `created_at` reflects the latest one.
use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::UserStore,
    error::AppResult,
    models::HistoryEntry,
};

/// Removes every `(search_term, kind)` match, then prepends the new entry.
///
/// Tolerates zero or more existing matches; this is a remove-then-prepend,
/// not an update in place.
pub fn push_recent(history: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
    history.retain(|e| !(e.search_term == entry.search_term && e.kind == entry.kind));
    history.insert(0, entry);
}

/// Deletes every entry whose embedded catalog id matches.
///
/// Entries for different search terms pointing at the same catalog item
/// are all removed.
pub fn remove_by_catalog_id(history: &mut Vec<HistoryEntry>, id: u64) {
    history.retain(|e| e.id != id);
}

/// Records one search against a user's ledger.
///
/// An unknown user is a no-op; the caller decides whether a failure here
/// may surface (search swallows it).
pub async fn record_search(
    store: &Arc<dyn UserStore>,
    user_id: Uuid,
    entry: HistoryEntry,
) -> AppResult<()> {
    let recorded = store
        .update(user_id, &mut |user| {
            push_recent(&mut user.search_history, entry.clone())
        })
        .await?;

    if !recorded {
        tracing::debug!(user_id = %user_id, "search not recorded for unknown user");
    }
    Ok(())
}

/// Returns the ledger in stored order, head = most recent
pub async fn list(store: &Arc<dyn UserStore>, user_id: Uuid) -> AppResult<Vec<HistoryEntry>> {
    Ok(store
        .find(user_id)
        .await?
        .map(|user| user.search_history)
        .unwrap_or_default())
}

/// Deletes every ledger entry with the given catalog id; idempotent
pub async fn remove(store: &Arc<dyn UserStore>, user_id: Uuid, id: u64) -> AppResult<()> {
    store
        .update(user_id, &mut |user| {
            remove_by_catalog_id(&mut user.search_history, id)
        })
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryUserStore;
    use crate::models::{MediaKind, User};
    use chrono::Utc;

    fn entry(id: u64, term: &str, kind: MediaKind) -> HistoryEntry {
        HistoryEntry {
            id,
            kind,
            image: None,
            title: term.to_string(),
            search_term: term.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_repeat_search_supersedes_and_moves_to_head() {
        let mut history = Vec::new();
        push_recent(&mut history, entry(100, "batman", MediaKind::Movie));
        push_recent(&mut history, entry(101, "superman", MediaKind::Movie));
        push_recent(&mut history, entry(200, "batman", MediaKind::Movie));

        let pairs: Vec<(u64, &str)> = history
            .iter()
            .map(|e| (e.id, e.search_term.as_str()))
            .collect();
        assert_eq!(pairs, vec![(200, "batman"), (101, "superman")]);
    }

    #[test]
    fn test_same_term_different_kind_are_distinct() {
        let mut history = Vec::new();
        push_recent(&mut history, entry(1, "batman", MediaKind::Movie));
        push_recent(&mut history, entry(2, "batman", MediaKind::Tv));

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].kind, MediaKind::Tv);
    }

    #[test]
    fn test_push_recent_tolerates_multiple_existing_matches() {
        // The invariant normally guarantees at most one match, but the
        // operation must clean up any number of them.
        let mut history = vec![
            entry(1, "batman", MediaKind::Movie),
            entry(2, "batman", MediaKind::Movie),
            entry(3, "joker", MediaKind::Movie),
        ];
        push_recent(&mut history, entry(4, "batman", MediaKind::Movie));

        let ids: Vec<u64> = history.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![4, 3]);
    }

    #[test]
    fn test_remove_by_catalog_id_spans_search_terms() {
        let mut history = vec![
            entry(5, "batman", MediaKind::Movie),
            entry(5, "dark knight", MediaKind::Movie),
            entry(6, "heat", MediaKind::Movie),
        ];
        remove_by_catalog_id(&mut history, 5);

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, 6);
    }

    #[test]
    fn test_remove_absent_id_is_a_noop() {
        let mut history = vec![entry(1, "batman", MediaKind::Movie)];
        remove_by_catalog_id(&mut history, 999);
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn test_record_list_remove_round_trip() {
        let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
        let user = User::new(
            "carol".to_string(),
            "carol@example.com".to_string(),
            "secret".to_string(),
        );
        let user_id = user.id;
        store.insert(user).await.unwrap();

        record_search(&store, user_id, entry(1, "alien", MediaKind::Movie))
            .await
            .unwrap();
        record_search(&store, user_id, entry(2, "aliens", MediaKind::Movie))
            .await
            .unwrap();

        let listed = list(&store, user_id).await.unwrap();
        assert_eq!(listed[0].search_term, "aliens");
        assert_eq!(listed.len(), 2);

        remove(&store, user_id, 1).await.unwrap();
        assert_eq!(list(&store, user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_operations_tolerate_unknown_user() {
        let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
        let user_id = Uuid::new_v4();

        record_search(&store, user_id, entry(1, "alien", MediaKind::Movie))
            .await
            .unwrap();
        assert!(list(&store, user_id).await.unwrap().is_empty());
        remove(&store, user_id, 1).await.unwrap();
    }
}
