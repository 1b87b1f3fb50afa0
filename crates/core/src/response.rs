//! Spoken and visual response value objects, plus SSML rendering for
//! count answers.

use serde::Serialize;

/// Speech text, either plain or a full SSML `<speak>` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Speech {
    Plain(String),
    Ssml(String),
}

impl Speech {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Wrap an SSML body in a `<speak>` document.
    pub fn ssml(body: impl AsRef<str>) -> Self {
        Self::Ssml(format!("<speak>{}</speak>", body.as_ref()))
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, Self::Ssml(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Ssml(text) => text,
        }
    }
}

/// Visual summary shown on devices with a screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub content: String,
}

/// One complete answer returned to the voice platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillResponse {
    pub speech: Speech,
    pub reprompt: Option<Speech>,
    pub card: Option<Card>,
    pub should_end_session: bool,
}

impl SkillResponse {
    /// A prompting response: the session stays open for a follow-up.
    pub fn ask(speech: Speech, reprompt: Speech) -> Self {
        Self {
            speech,
            reprompt: Some(reprompt),
            card: None,
            should_end_session: false,
        }
    }

    /// A final response: no reprompt, no card, the session ends.
    pub fn tell(speech: Speech) -> Self {
        Self {
            speech,
            reprompt: None,
            card: None,
            should_end_session: true,
        }
    }

    pub fn with_card(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.card = Some(Card {
            title: title.into(),
            content: content.into(),
        });
        self
    }
}

/// Pause between the answer fragment and the spoken count.
const COUNT_PAUSE: &str = r#"<break time="0.2s" />"#;

/// Render the spoken form of a count answer. The count is marked as a
/// cardinal number so the voice reads "forty-two", not "four two".
pub fn count_speech(answer: &str, count: i64) -> Speech {
    Speech::ssml(format!(
        r#"{answer} is {COUNT_PAUSE} <say-as interpret-as="cardinal"> {count}</say-as>"#
    ))
}

/// Render the card form of a count answer.
pub fn count_card(answer: &str, count: i64) -> String {
    format!("{answer} is {count}")
}
