//! Filter evaluation against snapshot tasks.
//!
//! Conditions are evaluated through a dispatch table keyed by condition name.
//! Names without a registered handler always pass, so filter types the
//! client does not understand show more tasks rather than fewer.
//!
//! # Example
//!
//! ```
//! use ticktick_cache_rs::filter::{FilterEvaluator, FilterRule};
//! use ticktick_api_rs::models::{Filter, Task};
//!
//! let rule = FilterRule::parse(
//!     r#"{"and":[{"conditionName":"listOrGroup","not":[{"conditionName":"list","or":["p1"]}]}]}"#,
//! )
//! .unwrap();
//!
//! let evaluator = FilterEvaluator::new();
//! let task: Task = serde_json::from_value(serde_json::json!({"id": "t1", "projectId": "p2"})).unwrap();
//! assert!(evaluator.matches(&rule, &task));
//! ```

use std::collections::HashMap;

use ticktick_api_rs::models::{Filter, Task};
use tracing::{debug, warn};

use super::rule::{Condition, FilterRule};
use crate::snapshot::Snapshot;

/// Decides whether a task satisfies one condition.
pub type ConditionHandler = fn(&Condition, &Task) -> bool;

/// Exclusion value that means "has no due date".
pub const NO_DUE: &str = "nodue";

/// Evaluates rule trees with a table of condition handlers.
#[derive(Debug, Clone)]
pub struct FilterEvaluator {
    handlers: HashMap<String, ConditionHandler>,
}

impl Default for FilterEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterEvaluator {
    /// Creates an evaluator with the built-in `dueDate` and `listOrGroup`
    /// handlers.
    pub fn new() -> Self {
        let mut evaluator = Self {
            handlers: HashMap::new(),
        };
        evaluator.register("dueDate", due_date);
        evaluator.register("listOrGroup", list_or_group);
        evaluator
    }

    /// Registers (or replaces) the handler for a condition name.
    pub fn register(&mut self, name: impl Into<String>, handler: ConditionHandler) {
        self.handlers.insert(name.into(), handler);
    }

    /// Returns true if a handler exists for `name`.
    pub fn handles(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Returns true if `task` satisfies every condition of `rule`.
    pub fn matches(&self, rule: &FilterRule, task: &Task) -> bool {
        rule.and.iter().all(|condition| {
            self.handlers
                .get(condition.condition_name.as_str())
                .map_or(true, |handler| handler(condition, task))
        })
    }

    /// Returns the tasks that satisfy `rule`, in input order.
    pub fn filter_tasks<'a>(&self, rule: &FilterRule, tasks: &'a [Task]) -> Vec<&'a Task> {
        for condition in &rule.and {
            if !self.handles(&condition.condition_name) {
                debug!(condition = %condition.condition_name, "ignoring unsupported filter condition");
            }
        }
        tasks.iter().filter(|task| self.matches(rule, task)).collect()
    }

    /// Returns the snapshot tasks shown by the saved filter `filter_id`.
    ///
    /// Falls back to every task when the filter does not exist, has no rule,
    /// or its rule could not be parsed when the snapshot was built.
    pub fn tasks_for_filter<'a>(&self, filter_id: &str, snapshot: &'a Snapshot) -> Vec<&'a Task> {
        if snapshot.filter(filter_id).is_none() {
            debug!(filter_id, "filter not found, showing all tasks");
        }
        match snapshot.filter_rule(filter_id) {
            Some(rule) => self.filter_tasks(rule, &snapshot.tasks),
            None => snapshot.tasks.iter().collect(),
        }
    }
}

/// Parses the rule of every filter once, keyed by filter id.
///
/// Filters without a rule are skipped. Unparsable rules are logged here and
/// skipped, so lookups against the result never log again.
pub fn parse_rules(filters: &[Filter]) -> HashMap<String, FilterRule> {
    let mut rules = HashMap::with_capacity(filters.len());
    for filter in filters {
        let Some(raw) = filter.rule.as_deref().filter(|raw| !raw.trim().is_empty()) else {
            continue;
        };
        match FilterRule::parse(raw) {
            Ok(rule) => {
                rules.insert(filter.id.clone(), rule);
            }
            Err(err) => {
                warn!(filter_id = %filter.id, filter = %filter.name, error = %err, "could not parse filter rule");
            }
        }
    }
    rules
}

/// Convenience wrapper over a default [`FilterEvaluator`].
pub fn tasks_for_filter<'a>(filter_id: &str, snapshot: &'a Snapshot) -> Vec<&'a Task> {
    FilterEvaluator::new().tasks_for_filter(filter_id, snapshot)
}

/// `dueDate`: excluding `nodue` keeps dated tasks; otherwise keeps undated
/// ones.
fn due_date(condition: &Condition, task: &Task) -> bool {
    task.has_due_date() == condition.excludes_literal(NO_DUE)
}

/// `listOrGroup`: drops tasks whose list appears in an excluded `list` clause.
fn list_or_group(condition: &Condition, task: &Task) -> bool {
    !condition
        .sub_clause_values("list")
        .any(|list_id| list_id == task.project_id)
}
