use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;
use uuid::Uuid;

/// Kind of catalog record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
    Person,
}

impl MediaKind {
    /// Upstream path segment for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
            MediaKind::Person => "person",
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One upstream catalog record (movie, TV show, or person).
///
/// Only the fields the pipelines inspect are typed; everything else the
/// upstream returns is carried through `extra` untouched, so responses
/// remain a faithful pass-through of the upstream JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogItem {
    pub fn is_english(&self) -> bool {
        self.original_language.as_deref() == Some("en")
    }

    /// Display title: movies carry `title`, TV shows and persons carry `name`.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    /// Artwork path: poster for movies/TV, profile still for persons.
    pub fn artwork(&self) -> Option<&str> {
        self.poster_path.as_deref().or(self.profile_path.as_deref())
    }
}

/// One page of a paginated upstream list resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<CatalogItem>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

/// One recorded search, most recent at the head of the user's ledger.
///
/// `id` is the upstream catalog id of the first search result; the
/// deduplication identity is `(search_term, kind)`, not `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: u64,
    pub kind: MediaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub title: String,
    pub search_term: String,
    pub created_at: DateTime<Utc>,
}

/// One saved watchlist item, deduplicated by `id` alone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub kind: MediaKind,
    pub created_at: DateTime<Utc>,
}

/// Aggregate root owning one user's personalization state.
///
/// Invariants maintained at write time: `search_history` is ordered most
/// recent first with no duplicate `(search_term, kind)` pair, and
/// `watchlist` has no duplicate `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub search_history: Vec<HistoryEntry>,
    #[serde(default)]
    pub watchlist: Vec<WatchlistEntry>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with empty personalization state
    pub fn new(username: String, email: String, password: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password,
            image: String::new(),
            bio: String::new(),
            search_history: Vec::new(),
            watchlist: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// Outward projection of a user with credentials stripped.
///
/// The public variant also omits the search history; only the owner's own
/// profile carries it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub image: String,
    pub bio: String,
    pub watchlist: Vec<WatchlistEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_history: Option<Vec<HistoryEntry>>,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Projection for any viewer: no credentials, no search history
    pub fn public(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            image: user.image.clone(),
            bio: user.bio.clone(),
            watchlist: user.watchlist.clone(),
            search_history: None,
            created_at: user.created_at,
        }
    }

    /// Projection for the profile's owner: includes the search history
    pub fn owned(user: &User) -> Self {
        Self {
            search_history: Some(user.search_history.clone()),
            ..Self::public(user)
        }
    }
}
