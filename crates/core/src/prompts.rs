//! Canned responses: welcome, help, farewells, reprompts, and the safe
//! fallback used when the data layer is unavailable.

use crate::response::{SkillResponse, Speech};

const SAMPLE_QUESTION: &str =
    "You can ask things like, Give me the number of total studies in phase one <break time=\"0.5s\" />";

/// Launch greeting.
pub fn welcome() -> SkillResponse {
    SkillResponse::ask(
        Speech::plain("Hello there! Welcome to the Clinical Trial Analytics. How can I help you?"),
        Speech::ssml(" "),
    )
}

/// Generic help, also used whenever a required slot is missing.
pub fn help() -> SkillResponse {
    SkillResponse::ask(
        Speech::ssml("Can you please repeat <break time=\"0.2s\" />"),
        Speech::ssml("Can you please repeat <break time=\"0.2s\" />"),
    )
}

/// "Tell me more" prompt with a sample question.
pub fn more_help() -> SkillResponse {
    SkillResponse::ask(
        Speech::plain("Waiting for your query!"),
        Speech::ssml(
            "Here is a sample question <break time=\"0.2s\" /> Give me the number of active trials for a sponsored company <break time=\"0.3s\" />",
        ),
    )
}

pub fn goodbye() -> SkillResponse {
    SkillResponse::tell(Speech::plain("Thanks, Goodbye"))
}

pub fn stop() -> SkillResponse {
    SkillResponse::tell(Speech::plain("Bye, Hope to see you soon!"))
}

pub fn cancel() -> SkillResponse {
    SkillResponse::tell(Speech::plain("Goodbye!"))
}

/// The platform delivered no intent name at all.
pub fn repeat_missing_intent() -> SkillResponse {
    SkillResponse::ask(
        Speech::plain("Can you please repeat"),
        Speech::ssml(SAMPLE_QUESTION),
    )
}

/// The intent name is not in the dispatch table. Expected input
/// variability, answered with a reprompt rather than logged as an error.
pub fn repeat_unrecognized() -> SkillResponse {
    SkillResponse::ask(
        Speech::ssml("Can you please repeat <break time=\"0.8s\" />"),
        Speech::ssml(SAMPLE_QUESTION),
    )
}

/// Safe utterance when the data-access call fails. The session stays open
/// so the user can retry.
pub fn data_unavailable() -> SkillResponse {
    SkillResponse::ask(
        Speech::plain("Sorry, I couldn't retrieve that right now. Please try again."),
        Speech::ssml(SAMPLE_QUESTION),
    )
}
