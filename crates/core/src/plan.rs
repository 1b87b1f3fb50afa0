//! Per-intent count planning: which predicates to build from which slots,
//! and how to phrase the spoken answer.
//!
//! Every builder follows the same composition rule: one required filter
//! plus every present optional filter. A builder returns `None` when its
//! required slot is absent, and the router answers with the generic help
//! prompt instead of running an under-parameterized query.

use crate::intent::{Slots, slot};
use crate::query::{CountQuery, Field, Predicate};

/// Everything the router needs to answer a data intent: the structured
/// query, the answer fragment to speak, and the card title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountPlan {
    pub card_title: &'static str,
    pub answer: String,
    pub query: CountQuery,
}

/// Total enrollment count for a sponsor, optionally narrowed to a state.
pub fn enrollment(slots: &Slots) -> Option<CountPlan> {
    let sponsor = slots.get(slot::SPONSOR)?;
    let state = slots.get(slot::STATE);

    let answer = match state {
        Some(state) => format!("The count of clinical studies for {sponsor} in state {state}"),
        None => format!("The count of clinical studies for {sponsor}"),
    };

    Some(CountPlan {
        card_title: ":: Enrollment ::",
        answer,
        query: CountQuery::new(Predicate::contains(Field::Sponsor, sponsor))
            .and_when(state.map(|v| Predicate::equals(Field::State, v))),
    })
}

/// Trial count for a gender.
pub fn gender(slots: &Slots) -> Option<CountPlan> {
    let gendertype = slots.get(slot::GENDERTYPE)?;

    Some(CountPlan {
        card_title: ":: Gender ::",
        answer: format!("The Number of Total Trials for Gender Type {gendertype}"),
        query: CountQuery::new(Predicate::equals(Field::Gender, gendertype)),
    })
}

/// Trial count for a study type, optionally narrowed by sponsor and
/// condition.
pub fn study_type(slots: &Slots) -> Option<CountPlan> {
    let studytype = slots.get(slot::STUDYTYPE)?;
    let sponsor = slots.get(slot::SPONSOR);
    let condition = slots.get(slot::CONDITION);

    let answer = match (sponsor, condition) {
        (None, None) => format!("The Number of Total Trials for {studytype}"),
        (Some(sponsor), None) => {
            format!("The Number of Total Trials for {studytype} and for {sponsor}")
        }
        (Some(sponsor), Some(condition)) => {
            format!("The Number of Total Studies for {condition} for {sponsor} for {studytype}")
        }
        (None, Some(condition)) => {
            format!("The Number of Total Trials for {studytype} and for {condition}")
        }
    };

    Some(CountPlan {
        card_title: ":: Study Type ::",
        answer,
        query: CountQuery::new(Predicate::equals(Field::StudyType, studytype))
            .and_when(sponsor.map(|v| Predicate::contains(Field::Sponsor, v)))
            .and_when(condition.map(|v| Predicate::contains(Field::Condition, v))),
    })
}

/// Study count for a phase, optionally narrowed to a sponsor.
pub fn phase(slots: &Slots) -> Option<CountPlan> {
    let phase = slots.get(slot::PHASE)?;
    let sponsor = slots.get(slot::SPONSOR);

    let answer = match sponsor {
        Some(sponsor) => format!("The Number of Total Studies in {phase} and by {sponsor}"),
        None => format!("The Number of Total Studies in {phase}"),
    };

    Some(CountPlan {
        card_title: ":: Total Studies ::",
        answer,
        query: CountQuery::new(Predicate::equals(Field::Phase, phase))
            .and_when(sponsor.map(|v| Predicate::contains(Field::Sponsor, v))),
    })
}

/// Trial count for a recruitment status, optionally narrowed to a sponsor.
/// Status values like "Recruiting" arrive in free form, so they match on
/// prefix rather than exactly.
pub fn recruitment(slots: &Slots) -> Option<CountPlan> {
    let status = slots.get(slot::STATUS)?;
    let sponsor = slots.get(slot::SPONSOR);

    let answer = match sponsor {
        Some(sponsor) => format!("The number of {status} trials for {sponsor}"),
        None => format!("The number of {status} trials"),
    };

    Some(CountPlan {
        card_title: ":: Recruitment Count ::",
        answer,
        query: CountQuery::new(Predicate::starts_with(Field::Recruitment, status))
            .and_when(sponsor.map(|v| Predicate::contains(Field::Sponsor, v))),
    })
}

/// Study count for a condition, optionally narrowed to a sponsor.
pub fn condition(slots: &Slots) -> Option<CountPlan> {
    let condition = slots.get(slot::CONDITION)?;
    let sponsor = slots.get(slot::SPONSOR);

    let answer = match sponsor {
        Some(sponsor) => format!("The Number of Total Studies for {condition} and for {sponsor}"),
        None => format!("The Number of Total Studies for {condition}"),
    };

    Some(CountPlan {
        card_title: ":: Condition ::",
        answer,
        query: CountQuery::new(Predicate::contains(Field::Condition, condition))
            .and_when(sponsor.map(|v| Predicate::contains(Field::Sponsor, v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Comparator;

    fn slots(pairs: &[(&str, &str)]) -> Slots {
        pairs.iter().copied().collect()
    }

    #[test]
    fn every_builder_requires_its_mandatory_slot() {
        let empty = Slots::new();
        assert_eq!(enrollment(&empty), None);
        assert_eq!(gender(&empty), None);
        assert_eq!(study_type(&empty), None);
        assert_eq!(phase(&empty), None);
        assert_eq!(recruitment(&empty), None);
        assert_eq!(condition(&empty), None);

        // Optional slots alone do not satisfy a builder
        let only_sponsor = slots(&[(slot::SPONSOR, "Otsuka")]);
        assert_eq!(enrollment(&slots(&[(slot::STATE, "Ohio")])), None);
        assert_eq!(study_type(&only_sponsor), None);
        assert_eq!(phase(&only_sponsor), None);
        assert_eq!(recruitment(&only_sponsor), None);
        assert_eq!(condition(&only_sponsor), None);
    }

    #[test]
    fn blank_required_slot_counts_as_absent() {
        assert_eq!(gender(&slots(&[(slot::GENDERTYPE, "  ")])), None);
        assert_eq!(phase(&slots(&[(slot::PHASE, "")])), None);
    }

    #[test]
    fn study_type_alone() {
        let plan = study_type(&slots(&[(slot::STUDYTYPE, "Interventional")])).unwrap();
        assert_eq!(plan.answer, "The Number of Total Trials for Interventional");
        assert_eq!(
            plan.query.predicates,
            vec![Predicate::equals(Field::StudyType, "Interventional")]
        );
    }

    #[test]
    fn study_type_with_sponsor() {
        let plan = study_type(&slots(&[
            (slot::STUDYTYPE, "Interventional"),
            (slot::SPONSOR, "Otsuka"),
        ]))
        .unwrap();
        assert_eq!(
            plan.answer,
            "The Number of Total Trials for Interventional and for Otsuka"
        );
        assert_eq!(
            plan.query.predicates,
            vec![
                Predicate::equals(Field::StudyType, "Interventional"),
                Predicate::contains(Field::Sponsor, "Otsuka"),
            ]
        );
    }

    #[test]
    fn study_type_with_sponsor_and_condition() {
        let plan = study_type(&slots(&[
            (slot::STUDYTYPE, "Interventional"),
            (slot::SPONSOR, "Otsuka"),
            (slot::CONDITION, "Diabetes"),
        ]))
        .unwrap();
        assert_eq!(
            plan.answer,
            "The Number of Total Studies for Diabetes for Otsuka for Interventional"
        );
        assert_eq!(
            plan.query.predicates,
            vec![
                Predicate::equals(Field::StudyType, "Interventional"),
                Predicate::contains(Field::Sponsor, "Otsuka"),
                Predicate::contains(Field::Condition, "Diabetes"),
            ]
        );
    }

    #[test]
    fn study_type_with_condition_only() {
        let plan = study_type(&slots(&[
            (slot::STUDYTYPE, "Observational"),
            (slot::CONDITION, "Asthma"),
        ]))
        .unwrap();
        assert_eq!(
            plan.answer,
            "The Number of Total Trials for Observational and for Asthma"
        );
        assert_eq!(
            plan.query.predicates,
            vec![
                Predicate::equals(Field::StudyType, "Observational"),
                Predicate::contains(Field::Condition, "Asthma"),
            ]
        );
    }

    #[test]
    fn enrollment_with_and_without_state() {
        let plan = enrollment(&slots(&[(slot::SPONSOR, "Otsuka")])).unwrap();
        assert_eq!(plan.answer, "The count of clinical studies for Otsuka");
        assert_eq!(
            plan.query.predicates,
            vec![Predicate::contains(Field::Sponsor, "Otsuka")]
        );

        let plan = enrollment(&slots(&[(slot::SPONSOR, "Otsuka"), (slot::STATE, "Ohio")])).unwrap();
        assert_eq!(
            plan.answer,
            "The count of clinical studies for Otsuka in state Ohio"
        );
        assert_eq!(
            plan.query.predicates,
            vec![
                Predicate::contains(Field::Sponsor, "Otsuka"),
                Predicate::equals(Field::State, "Ohio"),
            ]
        );
    }

    #[test]
    fn recruitment_status_matches_on_prefix() {
        let plan = recruitment(&slots(&[(slot::STATUS, "Recruiting")])).unwrap();
        assert_eq!(plan.answer, "The number of Recruiting trials");
        assert_eq!(plan.query.predicates[0].comparator, Comparator::StartsWith);
    }

    #[test]
    fn slot_values_pass_through_verbatim() {
        // No escaping or trimming happens at this layer, even for values
        // that look meaningful to SQL.
        let tricky = "50% effective'; drop--";
        let plan = condition(&slots(&[(slot::CONDITION, tricky)])).unwrap();
        assert_eq!(plan.query.predicates[0].value, tricky);
    }

    #[test]
    fn phase_and_condition_phrasings() {
        let plan = phase(&slots(&[(slot::PHASE, "Phase 1"), (slot::SPONSOR, "Pfizer")])).unwrap();
        assert_eq!(
            plan.answer,
            "The Number of Total Studies in Phase 1 and by Pfizer"
        );

        let plan = condition(&slots(&[(slot::CONDITION, "Diabetes"), (slot::SPONSOR, "Pfizer")]))
            .unwrap();
        assert_eq!(
            plan.answer,
            "The Number of Total Studies for Diabetes and for Pfizer"
        );
    }
}
