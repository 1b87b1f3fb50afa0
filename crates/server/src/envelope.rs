//! Wire envelope for the voice-platform webhook.
//!
//! The platform owns the session lifecycle and the NLU step; what reaches
//! this server is an already-parsed request: a launch, an intent with its
//! slot captures, or a session-ended notification.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use trials_core::{SkillResponse, Slots, Speech};

#[derive(Debug, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub session: Option<SessionInfo>,
    pub request: SkillRequest,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum SkillRequest {
    #[serde(rename = "LaunchRequest", rename_all = "camelCase")]
    Launch { request_id: Option<String> },

    #[serde(rename = "IntentRequest", rename_all = "camelCase")]
    Intent {
        request_id: Option<String>,
        intent: Option<IntentPayload>,
    },

    #[serde(rename = "SessionEndedRequest", rename_all = "camelCase")]
    SessionEnded { request_id: Option<String> },
}

/// One parsed utterance: intent name plus slot captures. The platform
/// sends an entry per modeled slot even when nothing was captured.
#[derive(Debug, Deserialize)]
pub struct IntentPayload {
    pub name: Option<String>,
    #[serde(default)]
    pub slots: HashMap<String, SlotPayload>,
}

#[derive(Debug, Deserialize)]
pub struct SlotPayload {
    pub value: Option<String>,
}

impl IntentPayload {
    pub fn slot_values(&self) -> Slots {
        self.slots
            .iter()
            .filter_map(|(name, slot)| slot.value.as_ref().map(|v| (name.clone(), v.clone())))
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    pub version: &'static str,
    pub response: ResponseBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardPayload>,
    pub should_end_session: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "PlainText")]
    Plain { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Serialize)]
pub struct CardPayload {
    #[serde(rename = "type")]
    pub card_type: &'static str,
    pub title: String,
    pub content: String,
}

impl From<Speech> for OutputSpeech {
    fn from(speech: Speech) -> Self {
        match speech {
            Speech::Plain(text) => OutputSpeech::Plain { text },
            Speech::Ssml(ssml) => OutputSpeech::Ssml { ssml },
        }
    }
}

impl ResponseEnvelope {
    pub fn from_response(response: SkillResponse) -> Self {
        Self {
            version: "1.0",
            response: ResponseBody {
                output_speech: Some(response.speech.into()),
                reprompt: response.reprompt.map(|speech| Reprompt {
                    output_speech: speech.into(),
                }),
                card: response.card.map(|card| CardPayload {
                    card_type: "Simple",
                    title: card.title,
                    content: card.content,
                }),
                should_end_session: response.should_end_session,
            },
        }
    }

    /// Acknowledgement for session-ended notifications: no speech at all.
    pub fn session_ended_ack() -> Self {
        Self {
            version: "1.0",
            response: ResponseBody {
                output_speech: None,
                reprompt: None,
                card: None,
                should_end_session: true,
            },
        }
    }
}
