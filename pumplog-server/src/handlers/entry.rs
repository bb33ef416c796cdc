use crate::handlers::ServerError;
use crate::models::NewEntry;
use crate::router::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use pumplog_common::api::RemoteEntry;
use tracing::error;

/// Batch insert for the sync path. Duplicate submissions (the client's
/// at-least-once delivery) are dropped on the entry id, so re-sending an
/// already-stored batch succeeds without double inserts.
pub async fn add(
    state: State<AppState>,
    Json(req): Json<Vec<RemoteEntry>>,
) -> Result<impl IntoResponse, ServerError> {
    let entries = req.into_iter().map(NewEntry::from).collect::<Vec<_>>();

    state.database.add_entries(&entries).await.map_err(|err| {
        error!("Failed to add entries {err}");
        ServerError::DatabaseError("add entries")
    })?;

    Ok(StatusCode::OK)
}

/// The dashboard read path: every record, newest first.
pub async fn list(state: State<AppState>) -> Result<Json<Vec<RemoteEntry>>, ServerError> {
    let res = state.database.list_entries().await.map_err(|err| {
        error!("Failed to list entries {err}");
        ServerError::DatabaseError("list entries")
    })?;

    Ok(Json(res.into_iter().map(|x| x.into_remote()).collect()))
}
