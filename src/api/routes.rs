use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movie", movie_routes())
        .nest("/tv", tv_routes())
        .nest("/person", person_routes())
        .nest("/search", search_routes())
        .nest("/watchlist", watchlist_routes())
        .nest("/profile", profile_routes())
}

fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/trending", get(handlers::movie::trending))
        .route("/:id/trailers", get(handlers::movie::trailers))
        .route("/:id/details", get(handlers::movie::details))
        .route("/:id/similar", get(handlers::movie::similar))
        .route("/:id/credits", get(handlers::movie::credits))
        // catch-all position: a bare segment names an upstream category
        .route("/:id", get(handlers::movie::by_category))
}

fn tv_routes() -> Router<AppState> {
    Router::new()
        .route("/trending", get(handlers::tv::trending))
        .route("/:id/trailers", get(handlers::tv::trailers))
        .route("/:id/details", get(handlers::tv::details))
        .route("/:id/similar", get(handlers::tv::similar))
        .route("/:id/credits", get(handlers::tv::credits))
        .route("/:id", get(handlers::tv::by_category))
}

fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/details", get(handlers::person::details))
        .route("/:id/movie-credits", get(handlers::person::movie_credits))
        .route("/:id/tv-credits", get(handlers::person::tv_credits))
}

fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/movie/:query", get(handlers::search::movie))
        .route("/tv/:query", get(handlers::search::tv))
        .route("/person/:query", get(handlers::search::person))
        .route("/history", get(handlers::search::list_history))
        .route("/history/:id", delete(handlers::search::remove_history))
}

fn watchlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::watchlist::list))
        .route("/add", post(handlers::watchlist::add))
        .route("/:id", delete(handlers::watchlist::remove))
        .route("/status/:id", get(handlers::watchlist::status))
}

fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(handlers::profile::me))
        .route("/bio", put(handlers::profile::update_bio))
        .route("/users/:id", get(handlers::profile::user_profile))
        .route("/suggested", get(handlers::profile::suggested))
}
