//! Intent dispatch: maps a parsed intent to a count plan, executes it
//! through the injected data backend, and renders the spoken answer.

use trials_core::{
    CountPlan, IntentKind, SkillResponse, Slots, Speech, TrialCounts, plan, prompts, response,
};

/// The skill's request handler.
///
/// Holds the data backend supplied at startup; concurrent requests share
/// it read-only. Every path, including failures, terminates in a
/// well-formed response — a voice interaction must never end in silence.
#[derive(Clone)]
pub struct IntentRouter<B> {
    backend: B,
}

impl<B: TrialCounts> IntentRouter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Launch greeting.
    pub fn on_launch(&self) -> SkillResponse {
        prompts::welcome()
    }

    /// Dispatch one intent by exact name match.
    pub async fn handle_intent(&self, name: Option<&str>, slots: &Slots) -> SkillResponse {
        let Some(name) = name else {
            tracing::debug!("Intent request without a name");
            return prompts::repeat_missing_intent();
        };

        let Some(kind) = IntentKind::parse(name) else {
            // Expected input variability, not an error
            tracing::debug!(intent = name, "Unrecognized intent");
            metrics::counter!("skill_intents_total", "intent" => "unrecognized").increment(1);
            return prompts::repeat_unrecognized();
        };

        metrics::counter!("skill_intents_total", "intent" => kind.label()).increment(1);

        match kind {
            IntentKind::Enrollment => self.answer(plan::enrollment(slots)).await,
            IntentKind::Gender => self.answer(plan::gender(slots)).await,
            IntentKind::StudyType => self.answer(plan::study_type(slots)).await,
            IntentKind::Phase => self.answer(plan::phase(slots)).await,
            IntentKind::Recruitment => self.answer(plan::recruitment(slots)).await,
            IntentKind::Condition => self.answer(plan::condition(slots)).await,
            IntentKind::HearMore => prompts::more_help(),
            IntentKind::DontHearMore => prompts::goodbye(),
            IntentKind::Help => prompts::help(),
            IntentKind::Stop => prompts::stop(),
            IntentKind::Cancel => prompts::cancel(),
        }
    }

    /// Execute a count plan. A missing plan means a required slot was
    /// absent; the user gets the generic help prompt and no query runs.
    async fn answer(&self, plan: Option<CountPlan>) -> SkillResponse {
        let Some(plan) = plan else {
            return prompts::help();
        };

        tracing::debug!(query = ?plan.query, "Executing count query");

        match self.backend.count(&plan.query).await {
            Ok(count) => SkillResponse::ask(
                response::count_speech(&plan.answer, count),
                Speech::ssml(" "),
            )
            .with_card(plan.card_title, response::count_card(&plan.answer, count)),
            Err(err) => {
                tracing::error!(error = %err, "Count query failed");
                metrics::counter!("skill_query_failures_total").increment(1);
                prompts::data_unavailable()
            }
        }
    }
}
