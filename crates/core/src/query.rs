//! Structured count-query model passed to the data-access layer.
//!
//! A query is the fixed clinical-trials dataset plus a list of
//! (field, comparator, value) predicates, all of which must hold. Slot
//! values are carried verbatim; the data layer binds them as statement
//! parameters, never by string interpolation.

use std::future::Future;

use serde::Serialize;

use crate::error::QueryError;

/// Queryable fields of the clinical-trials dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Sponsor,
    State,
    Condition,
    StudyType,
    Phase,
    Gender,
    Recruitment,
}

/// How a predicate value is matched against its field.
///
/// Free-text fields (sponsor, condition) use substring matching,
/// categorical fields match exactly, and recruitment status matches on
/// its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    Equals,
    Contains,
    StartsWith,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Predicate {
    pub field: Field,
    pub comparator: Comparator,
    pub value: String,
}

impl Predicate {
    pub fn equals(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            comparator: Comparator::Equals,
            value: value.into(),
        }
    }

    pub fn contains(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            comparator: Comparator::Contains,
            value: value.into(),
        }
    }

    pub fn starts_with(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            comparator: Comparator::StartsWith,
            value: value.into(),
        }
    }
}

/// An aggregate count request against the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountQuery {
    pub predicates: Vec<Predicate>,
}

impl CountQuery {
    /// Start a query from its required predicate.
    pub fn new(required: Predicate) -> Self {
        Self {
            predicates: vec![required],
        }
    }

    /// Append an optional predicate when its slot was present. An absent
    /// slot contributes nothing; omission means unconstrained.
    pub fn and_when(mut self, optional: Option<Predicate>) -> Self {
        if let Some(predicate) = optional {
            self.predicates.push(predicate);
        }
        self
    }
}

/// The data-access seam: turns a [`CountQuery`] into a scalar count.
///
/// The server implements this against Postgres; tests substitute stubs.
/// The router calls `count` at most once per request.
pub trait TrialCounts {
    fn count(&self, query: &CountQuery) -> impl Future<Output = Result<i64, QueryError>> + Send;

    /// Cheap connectivity probe for health reporting.
    fn ping(&self) -> impl Future<Output = Result<(), QueryError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_when_skips_absent_optionals() {
        let query = CountQuery::new(Predicate::equals(Field::Phase, "Phase 1"))
            .and_when(None)
            .and_when(Some(Predicate::contains(Field::Sponsor, "Otsuka")));

        assert_eq!(
            query.predicates,
            vec![
                Predicate::equals(Field::Phase, "Phase 1"),
                Predicate::contains(Field::Sponsor, "Otsuka"),
            ]
        );
    }

    #[test]
    fn predicate_order_follows_composition_order() {
        let query = CountQuery::new(Predicate::equals(Field::StudyType, "Interventional"))
            .and_when(Some(Predicate::contains(Field::Sponsor, "A")))
            .and_when(Some(Predicate::contains(Field::Condition, "B")));

        let fields: Vec<Field> = query.predicates.iter().map(|p| p.field).collect();
        assert_eq!(fields, vec![Field::StudyType, Field::Sponsor, Field::Condition]);
    }
}
