use deadpool_postgres::Pool;
use tokio_postgres::types::ToSql;

use trials_core::{Comparator, CountQuery, Field, QueryError, TrialCounts};

/// The clinical-trials table the skill counts over.
const TABLE: &str = "clinical_trials_dataset";

/// Postgres-backed implementation of [`TrialCounts`].
///
/// Predicates are rendered to a `WHERE` clause of `$n` placeholders and
/// the slot values are bound as statement parameters; user-supplied text
/// is never interpolated into the SQL.
#[derive(Clone)]
pub struct TrialsRepository {
    pool: Pool,
}

impl TrialsRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

impl TrialCounts for TrialsRepository {
    async fn count(&self, query: &CountQuery) -> Result<i64, QueryError> {
        let (sql, params) = render(query);

        let client = self
            .pool
            .get()
            .await
            .map_err(|e| QueryError::Unavailable(e.to_string()))?;

        let refs: Vec<&(dyn ToSql + Sync)> =
            params.iter().map(|p| p as &(dyn ToSql + Sync)).collect();
        let row = client
            .query_one(&sql, &refs)
            .await
            .map_err(|e| QueryError::Execution(e.to_string()))?;

        Ok(row.get(0))
    }

    async fn ping(&self) -> Result<(), QueryError> {
        let client = self
            .pool
            .get()
            .await
            .map_err(|e| QueryError::Unavailable(e.to_string()))?;
        client
            .query_one("SELECT 1", &[])
            .await
            .map_err(|e| QueryError::Execution(e.to_string()))?;
        Ok(())
    }
}

/// Map query fields to dataset columns
fn column(field: Field) -> &'static str {
    match field {
        Field::Sponsor => "sponsor_or_collaborators",
        Field::State => "state",
        Field::Condition => "conditions",
        Field::StudyType => "study_types",
        Field::Phase => "phases",
        Field::Gender => "gender",
        Field::Recruitment => "recruitment",
    }
}

/// Escape special characters for LIKE patterns
fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Render a count query to parameterized SQL plus its bound values.
fn render(query: &CountQuery) -> (String, Vec<String>) {
    use std::fmt::Write;

    let mut sql = format!("SELECT count(*) FROM {TABLE}");
    let mut params = Vec::with_capacity(query.predicates.len());

    for (i, predicate) in query.predicates.iter().enumerate() {
        sql.push_str(if i == 0 { " WHERE " } else { " AND " });
        let n = i + 1;
        match predicate.comparator {
            Comparator::Equals => {
                let _ = write!(sql, "{} = ${n}", column(predicate.field));
                params.push(predicate.value.clone());
            }
            Comparator::Contains => {
                let _ = write!(sql, "{} LIKE ${n} ESCAPE '\\'", column(predicate.field));
                params.push(format!("%{}%", escape_like(&predicate.value)));
            }
            Comparator::StartsWith => {
                let _ = write!(sql, "{} LIKE ${n} ESCAPE '\\'", column(predicate.field));
                params.push(format!("{}%", escape_like(&predicate.value)));
            }
        }
    }

    (sql, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trials_core::Predicate;

    #[test]
    fn equals_renders_a_placeholder() {
        let query = CountQuery::new(Predicate::equals(Field::Gender, "Female"));
        let (sql, params) = render(&query);
        assert_eq!(
            sql,
            "SELECT count(*) FROM clinical_trials_dataset WHERE gender = $1"
        );
        assert_eq!(params, vec!["Female"]);
    }

    #[test]
    fn contains_wraps_and_escapes_the_pattern() {
        let query = CountQuery::new(Predicate::contains(Field::Sponsor, "50%_\\ Ltd"));
        let (sql, params) = render(&query);
        assert_eq!(
            sql,
            "SELECT count(*) FROM clinical_trials_dataset WHERE sponsor_or_collaborators LIKE $1 ESCAPE '\\'"
        );
        assert_eq!(params, vec!["%50\\%\\_\\\\ Ltd%"]);
    }

    #[test]
    fn starts_with_only_appends_the_wildcard() {
        let query = CountQuery::new(Predicate::starts_with(Field::Recruitment, "Recruit"));
        let (_, params) = render(&query);
        assert_eq!(params, vec!["Recruit%"]);
    }

    #[test]
    fn predicates_join_with_and_in_order() {
        let query = CountQuery::new(Predicate::equals(Field::Phase, "Phase 1"))
            .and_when(Some(Predicate::contains(Field::Sponsor, "Otsuka")));
        let (sql, params) = render(&query);
        assert_eq!(
            sql,
            "SELECT count(*) FROM clinical_trials_dataset WHERE phases = $1 AND sponsor_or_collaborators LIKE $2 ESCAPE '\\'"
        );
        assert_eq!(params, vec!["Phase 1", "%Otsuka%"]);
    }

    #[test]
    fn sql_text_never_contains_slot_values() {
        let hostile = "x' OR '1'='1";
        let query = CountQuery::new(Predicate::contains(Field::Condition, hostile));
        let (sql, params) = render(&query);
        assert!(!sql.contains(hostile));
        assert_eq!(params, vec!["%x' OR '1'='1%"]);
    }
}
