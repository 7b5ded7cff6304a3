/// Suggested users
///
/// Uniform random sample over all users excluding the requester, projected
/// through the public profile so credentials and history never leave the
/// store. Fewer eligible users than requested just returns them all.
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::{
    db::UserStore,
    error::AppResult,
    models::{User, UserProfile},
};

/// Sample size for the suggested-users surface
pub const DEFAULT_SAMPLE_SIZE: usize = 6;

/// Draws up to `n` users uniformly at random, excluding `exclude`
pub fn sample_profiles<R: Rng + ?Sized>(
    users: &[User],
    exclude: Uuid,
    n: usize,
    rng: &mut R,
) -> Vec<UserProfile> {
    let eligible: Vec<&User> = users.iter().filter(|u| u.id != exclude).collect();
    eligible
        .choose_multiple(rng, n)
        .map(|user| UserProfile::public(user))
        .collect()
}

/// Suggested users for one requester
pub async fn suggested(
    store: &Arc<dyn UserStore>,
    exclude: Uuid,
) -> AppResult<Vec<UserProfile>> {
    let users = store.all().await?;
    Ok(sample_profiles(
        &users,
        exclude,
        DEFAULT_SAMPLE_SIZE,
        &mut rand::thread_rng(),
    ))
}
