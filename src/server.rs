use crate::error::{ErrorKind, StarsError};
use crate::github::GitHubClient;
use crate::health::{health_check, liveness_check};
use crate::types::StarsResponse;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub github: Arc<GitHubClient>,
    pub start_time: Instant,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(github: GitHubClient) -> Self {
        Self {
            github: Arc::new(github),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }
}

/// Response for errors
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::FailedPrecondition => StatusCode::BAD_REQUEST,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for StarsError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = status_for(kind);

        match kind {
            ErrorKind::NotFound | ErrorKind::FailedPrecondition => {
                warn!(code = %kind, "{}", self);
            }
            ErrorKind::Unavailable | ErrorKind::Internal => {
                error!(code = %kind, error = ?self, "{}", self);
            }
        }

        (
            status,
            Json(ErrorResponse {
                code: kind.as_str().to_string(),
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/livez", get(liveness_check))
        .route("/:owner/:repo", get(get_stars))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /{owner}/{repo}`
async fn get_stars(
    State(state): State<AppState>,
    Path((owner, repo)): Path<(String, String)>,
) -> Result<Json<StarsResponse>, StarsError> {
    let stars = state.github.get_stars(&owner, &repo).await?;
    debug!(%owner, %repo, stars = stars.stars, "Resolved star count");
    Ok(Json(stars))
}

/// Serve the API until `shutdown` resolves.
pub async fn start_server<F>(
    state: AppState,
    addr: SocketAddr,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("GitHub stars API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
