use crate::database::Database;
use crate::handlers;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub database: Database,
}

pub fn router(database: Database) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/entries",
            get(handlers::entry::list).post(handlers::entry::add),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { database })
}
