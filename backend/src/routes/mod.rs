//! Route definitions for the Počasie API server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/mesta", get(handlers::list_cities))
        .route("/mesto", post(handlers::create_city))
        .route(
            "/mesto/:id",
            get(handlers::get_city)
                .put(handlers::update_city)
                .delete(handlers::delete_city),
        )
}
