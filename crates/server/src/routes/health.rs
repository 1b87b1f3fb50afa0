//! Health check endpoint

use axum::{Json, extract::State};
use serde::Serialize;
use trials_core::TrialCounts;

use crate::error::AppError;
use crate::skill::IntentRouter;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// GET /health - Probe the data backend and report server health
pub async fn check<B>(
    State(router): State<IntentRouter<B>>,
) -> Result<Json<HealthResponse>, AppError>
where
    B: TrialCounts + Clone + Send + Sync + 'static,
{
    if let Err(e) = router.backend().ping().await {
        tracing::error!(error = %e, "Health check failed");
        return Err(e.into());
    }

    Ok(Json(HealthResponse { status: "healthy" }))
}
