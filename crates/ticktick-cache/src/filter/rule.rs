//! The rule tree stored on a saved filter.
//!
//! The server keeps the rule as a JSON string:
//!
//! ```json
//! {"type": 0, "version": 1, "and": [
//!     {"conditionName": "listOrGroup", "conditionType": 1,
//!      "not": [{"conditionName": "list", "or": ["p1", "p2"]}]},
//!     {"conditionName": "dueDate", "conditionType": 1, "not": ["nodue"]}
//! ]}
//! ```
//!
//! Fields that are not needed for evaluation (`type`, `version`,
//! `conditionType`) are accepted and ignored, so the schema can grow on the
//! server side without breaking parsing.

use serde::Deserialize;

use super::error::{FilterError, FilterResult};

/// A conjunction of named conditions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct FilterRule {
    /// Every condition must hold for a task to match.
    #[serde(default)]
    pub and: Vec<Condition>,
}

impl FilterRule {
    /// Parses a rule from its stored JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidRule`] if the string is not a rule tree.
    pub fn parse(rule: &str) -> FilterResult<Self> {
        serde_json::from_str(rule).map_err(FilterError::invalid_rule)
    }
}

/// One named condition with its exclusion list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Selects the handler that evaluates this condition.
    pub condition_name: String,
    /// Values or sub-clauses the task must not match.
    #[serde(default)]
    pub not: Vec<NotEntry>,
}

impl Condition {
    /// Returns true if the exclusion list holds the literal `value`.
    pub fn excludes_literal(&self, value: &str) -> bool {
        self.not
            .iter()
            .any(|entry| matches!(entry, NotEntry::Literal(literal) if literal == value))
    }

    /// Iterates over the values of every `or` sub-clause named `name`.
    pub fn sub_clause_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.not
            .iter()
            .filter_map(move |entry| match entry {
                NotEntry::Clause(clause) if clause.condition_name == name => Some(&clause.or),
                _ => None,
            })
            .flatten()
            .map(String::as_str)
    }
}

/// An entry of a condition's `not` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NotEntry {
    /// A bare value such as `"nodue"`.
    Literal(String),
    /// A nested `{conditionName, or: [...]}` clause.
    Clause(OrClause),
}

/// A disjunction of values for one nested condition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrClause {
    /// What the values refer to, e.g. `list`.
    pub condition_name: String,
    /// The values.
    #[serde(default)]
    pub or: Vec<String>,
}
