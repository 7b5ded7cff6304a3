/// Watchlist membership
///
/// A per-user duplicate-free collection keyed by catalog id. Uniqueness is
/// enforced on add; reads return insertion order as stored. Membership of
/// an absent or uninitialized watchlist is `false`, never an error.
use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::UserStore,
    error::{AppError, AppResult},
    models::WatchlistEntry,
};

/// Appends an entry unless its id is already present.
///
/// Duplicate ids are rejected with `AlreadyExists` and leave the list
/// untouched. The key is `id` alone; `kind` is descriptive.
pub fn add_entry(watchlist: &mut Vec<WatchlistEntry>, entry: WatchlistEntry) -> AppResult<()> {
    if watchlist.iter().any(|e| e.id == entry.id) {
        return Err(AppError::AlreadyExists(
            "Item already in watchlist".to_string(),
        ));
    }
    watchlist.push(entry);
    Ok(())
}

/// Removes any entry with the matching id; absent ids are a no-op
pub fn remove_entry(watchlist: &mut Vec<WatchlistEntry>, id: u64) {
    watchlist.retain(|e| e.id != id);
}

/// Membership test by id
pub fn contains(watchlist: &[WatchlistEntry], id: u64) -> bool {
    watchlist.iter().any(|e| e.id == id)
}

/// Adds an entry to a user's watchlist.
///
/// The membership check and the append run inside one serialized store
/// mutation.
pub async fn add(
    store: &Arc<dyn UserStore>,
    user_id: Uuid,
    entry: WatchlistEntry,
) -> AppResult<()> {
    let mut outcome = Ok(());
    let found = store
        .update(user_id, &mut |user| {
            outcome = add_entry(&mut user.watchlist, entry.clone());
        })
        .await?;

    if !found {
        return Err(AppError::NotFound("User not found".to_string()));
    }
    outcome
}

/// Removes an id from a user's watchlist; idempotent, including for
/// unknown users
pub async fn remove(store: &Arc<dyn UserStore>, user_id: Uuid, id: u64) -> AppResult<()> {
    store
        .update(user_id, &mut |user| remove_entry(&mut user.watchlist, id))
        .await?;
    Ok(())
}

/// Returns the watchlist in insertion order; empty for unknown users
pub async fn list(store: &Arc<dyn UserStore>, user_id: Uuid) -> AppResult<Vec<WatchlistEntry>> {
    Ok(store
        .find(user_id)
        .await?
        .map(|user| user.watchlist)
        .unwrap_or_default())
}

/// Membership test; `false` for unknown users
pub async fn status(store: &Arc<dyn UserStore>, user_id: Uuid, id: u64) -> AppResult<bool> {
    Ok(store
        .find(user_id)
        .await?
        .map(|user| contains(&user.watchlist, id))
        .unwrap_or(false))
}
