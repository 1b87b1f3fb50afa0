//! Intent names and slot values as delivered by the platform's
//! language-understanding layer.

use std::collections::HashMap;

/// The slot names defined in the interaction model.
pub mod slot {
    pub const GENDERTYPE: &str = "gendertype";
    pub const SPONSOR: &str = "sponsor";
    pub const STATE: &str = "state";
    pub const STUDYTYPE: &str = "studytype";
    pub const PHASE: &str = "phase";
    pub const STATUS: &str = "status";
    pub const CONDITION: &str = "condition";
}

/// Recognized intents, matched by exact, case-sensitive name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    Enrollment,
    Gender,
    StudyType,
    Phase,
    Recruitment,
    Condition,
    HearMore,
    DontHearMore,
    Help,
    Stop,
    Cancel,
}

impl IntentKind {
    /// Look up an intent by its platform name.
    ///
    /// Unknown names return `None` and are answered with a reprompt rather
    /// than treated as an error; users say unexpected things all the time.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "enrollment" => Some(Self::Enrollment),
            "gender" => Some(Self::Gender),
            "study" => Some(Self::StudyType),
            "TotalStudies" => Some(Self::Phase),
            "Recruitment" => Some(Self::Recruitment),
            "conditions" => Some(Self::Condition),
            "HearMore" => Some(Self::HearMore),
            "DontHearMore" => Some(Self::DontHearMore),
            "AMAZON.HelpIntent" => Some(Self::Help),
            "AMAZON.StopIntent" => Some(Self::Stop),
            "AMAZON.CancelIntent" => Some(Self::Cancel),
            _ => None,
        }
    }

    /// Stable label for logs and metrics.
    pub fn label(self) -> &'static str {
        match self {
            Self::Enrollment => "enrollment",
            Self::Gender => "gender",
            Self::StudyType => "study",
            Self::Phase => "total_studies",
            Self::Recruitment => "recruitment",
            Self::Condition => "conditions",
            Self::HearMore => "hear_more",
            Self::DontHearMore => "dont_hear_more",
            Self::Help => "help",
            Self::Stop => "stop",
            Self::Cancel => "cancel",
        }
    }
}

/// Slot values extracted from one utterance.
///
/// The platform sends a slot entry even when nothing was captured for it,
/// so a missing slot, an empty value, and a whitespace-only value are all
/// treated as absent. A present value is returned verbatim.
#[derive(Debug, Clone, Default)]
pub struct Slots(HashMap<String, String>);

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Fetch a slot value, normalizing empty and whitespace-only captures
    /// to absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Slots {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_dispatchable_name() {
        assert_eq!(IntentKind::parse("enrollment"), Some(IntentKind::Enrollment));
        assert_eq!(IntentKind::parse("gender"), Some(IntentKind::Gender));
        assert_eq!(IntentKind::parse("study"), Some(IntentKind::StudyType));
        assert_eq!(IntentKind::parse("TotalStudies"), Some(IntentKind::Phase));
        assert_eq!(IntentKind::parse("Recruitment"), Some(IntentKind::Recruitment));
        assert_eq!(IntentKind::parse("conditions"), Some(IntentKind::Condition));
        assert_eq!(IntentKind::parse("HearMore"), Some(IntentKind::HearMore));
        assert_eq!(IntentKind::parse("DontHearMore"), Some(IntentKind::DontHearMore));
        assert_eq!(IntentKind::parse("AMAZON.HelpIntent"), Some(IntentKind::Help));
        assert_eq!(IntentKind::parse("AMAZON.StopIntent"), Some(IntentKind::Stop));
        assert_eq!(IntentKind::parse("AMAZON.CancelIntent"), Some(IntentKind::Cancel));
    }

    #[test]
    fn name_matching_is_case_sensitive() {
        assert_eq!(IntentKind::parse("Enrollment"), None);
        assert_eq!(IntentKind::parse("totalstudies"), None);
        assert_eq!(IntentKind::parse("amazon.stopintent"), None);
    }

    #[test]
    fn empty_and_whitespace_slots_are_absent() {
        let slots: Slots = [
            (slot::SPONSOR, "Pfizer"),
            (slot::STATE, ""),
            (slot::CONDITION, "   "),
        ]
        .into_iter()
        .collect();

        assert_eq!(slots.get(slot::SPONSOR), Some("Pfizer"));
        assert_eq!(slots.get(slot::STATE), None);
        assert_eq!(slots.get(slot::CONDITION), None);
        assert_eq!(slots.get(slot::PHASE), None);
    }

    #[test]
    fn present_values_come_back_verbatim() {
        let slots: Slots = [(slot::SPONSOR, " Otsuka Pharmaceutical ")].into_iter().collect();
        assert_eq!(slots.get(slot::SPONSOR), Some(" Otsuka Pharmaceutical "));
    }
}
