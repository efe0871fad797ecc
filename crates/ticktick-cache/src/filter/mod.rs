//! Saved-filter evaluation.
//!
//! A saved filter carries a JSON rule tree produced by the server. This
//! module parses that tree and evaluates it locally against the snapshot, so
//! switching to a filter view never needs a round-trip.
//!
//! # Supported Conditions
//!
//! - `dueDate` - `not: ["nodue"]` keeps tasks with a due date; otherwise
//!   keeps tasks without one
//! - `listOrGroup` - drops tasks whose list appears in a nested
//!   `{"conditionName": "list", "or": [...]}` clause
//!
//! Any other condition name is accepted and treated as always satisfied.
//!
//! # Example
//!
//! ```
//! use ticktick_cache_rs::filter::FilterRule;
//!
//! let rule = FilterRule::parse(r#"{"and":[{"conditionName":"dueDate","not":["nodue"]}]}"#).unwrap();
//! assert_eq!(rule.and[0].condition_name, "dueDate");
//! assert!(rule.and[0].excludes_literal("nodue"));
//! ```

mod error;
mod evaluator;
mod rule;

pub use error::{FilterError, FilterResult};
pub use evaluator::{parse_rules, tasks_for_filter, ConditionHandler, FilterEvaluator, NO_DUE};
pub use rule::{Condition, FilterRule, NotEntry, OrClause};

#[cfg(test)]
mod tests;
