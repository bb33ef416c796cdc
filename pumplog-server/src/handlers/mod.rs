use axum::response::Json;
use pumplog_common::api::HealthCheckResponse;

pub mod entry;

pub use crate::error::ServerError;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn index() -> Json<HealthCheckResponse> {
    let version = VERSION.to_string();

    Json(HealthCheckResponse {
        status: "Ok".to_string(),
        version,
    })
}
