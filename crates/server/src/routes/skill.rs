//! Skill webhook handler

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
};
use trials_core::{Slots, TrialCounts};

use crate::envelope::{RequestEnvelope, ResponseEnvelope, SkillRequest};
use crate::error::AppError;
use crate::middleware::RequestId;
use crate::skill::IntentRouter;

/// POST /skill - Handle one voice-platform request
///
/// Launch and intent requests always answer with a well-formed envelope;
/// only an unparseable body is an HTTP error.
pub async fn invoke<B>(
    State(router): State<IntentRouter<B>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RequestEnvelope>, JsonRejection>,
) -> Result<Json<ResponseEnvelope>, AppError>
where
    B: TrialCounts + Clone + Send + Sync + 'static,
{
    let Json(envelope) = payload
        .map_err(|e| AppError::BadRequest(format!("Invalid request envelope: {e}")))?;

    let session_id = envelope
        .session
        .as_ref()
        .and_then(|s| s.session_id.as_deref())
        .unwrap_or("-")
        .to_string();

    let response = match envelope.request {
        SkillRequest::Launch { request_id: platform_id } => {
            tracing::info!(
                request_id = %request_id.0,
                platform_request_id = platform_id.as_deref().unwrap_or("-"),
                session_id = %session_id,
                "onLaunch"
            );
            ResponseEnvelope::from_response(router.on_launch())
        }
        SkillRequest::Intent { request_id: platform_id, intent } => {
            let name = intent.as_ref().and_then(|i| i.name.as_deref());
            tracing::info!(
                request_id = %request_id.0,
                platform_request_id = platform_id.as_deref().unwrap_or("-"),
                session_id = %session_id,
                intent = name.unwrap_or("-"),
                "onIntent"
            );
            let slots = intent
                .as_ref()
                .map(|i| i.slot_values())
                .unwrap_or_else(Slots::new);
            ResponseEnvelope::from_response(router.handle_intent(name, &slots).await)
        }
        SkillRequest::SessionEnded { request_id: platform_id } => {
            tracing::info!(
                request_id = %request_id.0,
                platform_request_id = platform_id.as_deref().unwrap_or("-"),
                session_id = %session_id,
                "onSessionEnded"
            );
            ResponseEnvelope::session_ended_ack()
        }
    };

    Ok(Json(response))
}
