use uuid::Uuid;

use crate::{error::AppResult, models::User};

pub mod memory;

pub use memory::InMemoryUserStore;

/// Opaque per-user document store.
///
/// History and watchlist mutations are read-then-write sequences, so the
/// store must apply `update` mutations serialized per user; callers never
/// hold locks themselves. All operations are scoped to a single user's
/// document except `all`, which feeds the suggestion sampler.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a new user document; an existing id is rejected
    async fn insert(&self, user: User) -> AppResult<()>;

    /// Loads one user's document
    async fn find(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Loads every user document
    async fn all(&self) -> AppResult<Vec<User>>;

    /// Applies `apply` to one user's document under per-user write
    /// serialization. Returns `false` without calling `apply` when the
    /// user does not exist.
    async fn update(
        &self,
        id: Uuid,
        apply: &mut (dyn for<'u> FnMut(&'u mut User) + Send),
    ) -> AppResult<bool>;
}
