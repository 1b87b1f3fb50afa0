//! trials-core: domain model for the clinical-trials voice skill
//!
//! This crate provides the pure logic of the skill: intent names and slot
//! values, the structured count-query model handed to the data-access
//! layer, per-intent query planning and answer phrasing, and the spoken /
//! visual response objects returned to the voice platform.

pub mod error;
pub mod intent;
pub mod plan;
pub mod prompts;
pub mod query;
pub mod response;

// Re-export the types the server works with
pub use error::QueryError;
pub use intent::{IntentKind, Slots};
pub use plan::CountPlan;
pub use query::{Comparator, CountQuery, Field, Predicate, TrialCounts};
pub use response::{Card, SkillResponse, Speech};
