use axum::{routing::get, Router};

use crate::error::AppError;

/// Builds the liveness router.
///
/// A single unauthenticated route hosting platforms can poll to keep the
/// process alive and to health-check it.
pub fn liveness_router() -> Router {
    Router::new().route("/", get(alive))
}

async fn alive() -> &'static str {
    "giveboard alive"
}

/// Serves the liveness endpoint until the process exits.
pub async fn serve(port: u16) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("Liveness endpoint listening on port {}", port);

    axum::serve(listener, liveness_router()).await?;

    Ok(())
}
