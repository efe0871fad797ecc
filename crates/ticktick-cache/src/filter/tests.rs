//! Tests for filter rules and evaluation.

use chrono::Utc;
use pretty_assertions::assert_eq;
use ticktick_api_rs::models::{Filter, MainResponse, Task};

use super::*;
use crate::snapshot::Snapshot;

fn task(id: &str, project_id: &str, due: Option<&str>) -> Task {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "projectId": project_id,
        "title": id,
        "dueDate": due,
    }))
    .unwrap()
}

fn snapshot_with_rule(rule: Option<&str>) -> Snapshot {
    let response: MainResponse = serde_json::from_value(serde_json::json!({
        "inboxId": "inbox1",
        "syncTaskBean": {"update": [
            {"id": "a", "projectId": "P1", "sortOrder": 1},
            {"id": "b", "projectId": "P2", "sortOrder": 2, "dueDate": "2025-05-26T04:00:00.000+0000"},
            {"id": "c", "projectId": "inbox1", "sortOrder": 3},
            {"id": "d", "projectId": "P1", "sortOrder": 4, "dueDate": "2025-05-27T04:00:00.000+0000"}
        ]},
        "projectProfiles": [{"id": "P1", "name": "Work"}, {"id": "P2", "name": "Home"}],
        "filters": [{"id": "f1", "name": "Filtered", "rule": rule}]
    }))
    .unwrap();
    Snapshot::from_response(response, "UTC", 1, Utc::now()).unwrap()
}

fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.id.clone()).collect()
}

// ==================== Rule Parsing ====================

#[test]
fn test_parse_full_server_rule() {
    let rule = FilterRule::parse(
        r#"{"type":0,"version":1,"and":[
            {"conditionType":1,"conditionName":"listOrGroup","not":[{"conditionName":"list","or":["P1","P2"]}]},
            {"conditionType":1,"conditionName":"dueDate","not":["nodue"]}
        ]}"#,
    )
    .unwrap();

    assert_eq!(rule.and.len(), 2);
    assert_eq!(
        rule.and[0].not,
        vec![NotEntry::Clause(OrClause {
            condition_name: "list".to_string(),
            or: vec!["P1".to_string(), "P2".to_string()],
        })]
    );
    assert_eq!(rule.and[1].not, vec![NotEntry::Literal("nodue".to_string())]);
}

#[test]
fn test_parse_rejects_garbage() {
    let err = FilterRule::parse("{not json").unwrap_err();
    assert!(matches!(err, FilterError::InvalidRule { .. }));
    assert!(err.to_string().starts_with("invalid filter rule"));
}

#[test]
fn test_parse_missing_and_is_empty_rule() {
    let rule = FilterRule::parse("{}").unwrap();
    assert!(rule.and.is_empty());
}

#[test]
fn test_sub_clause_values_only_named_clauses() {
    let rule = FilterRule::parse(
        r#"{"and":[{"conditionName":"listOrGroup","not":[
            "x",
            {"conditionName":"group","or":["G1"]},
            {"conditionName":"list","or":["P1"]}
        ]}]}"#,
    )
    .unwrap();

    let values: Vec<&str> = rule.and[0].sub_clause_values("list").collect();
    assert_eq!(values, vec!["P1"]);
    assert!(rule.and[0].excludes_literal("x"));
    assert!(!rule.and[0].excludes_literal("P1"));
}

// ==================== Condition Handlers ====================

#[test]
fn test_list_or_group_excludes_listed_project() {
    let snapshot = snapshot_with_rule(Some(
        r#"{"and":[{"conditionName":"listOrGroup","not":[{"conditionName":"list","or":["P1"]}]}]}"#,
    ));

    let result = tasks_for_filter("f1", &snapshot);
    assert_eq!(ids(&result), vec!["b", "c"]);
    assert!(result.iter().all(|t| t.project_id != "P1"));
}

#[test]
fn test_due_date_excluding_nodue_keeps_dated_tasks() {
    let snapshot = snapshot_with_rule(Some(r#"{"and":[{"conditionName":"dueDate","not":["nodue"]}]}"#));
    assert_eq!(ids(&tasks_for_filter("f1", &snapshot)), vec!["b", "d"]);
}

#[test]
fn test_due_date_without_nodue_keeps_undated_tasks() {
    let snapshot = snapshot_with_rule(Some(r#"{"and":[{"conditionName":"dueDate","not":["today"]}]}"#));
    assert_eq!(ids(&tasks_for_filter("f1", &snapshot)), vec!["a", "c"]);
}

#[test]
fn test_conditions_are_conjunctive() {
    let snapshot = snapshot_with_rule(Some(
        r#"{"and":[
            {"conditionName":"listOrGroup","not":[{"conditionName":"list","or":["P2"]}]},
            {"conditionName":"dueDate","not":["nodue"]}
        ]}"#,
    ));
    assert_eq!(ids(&tasks_for_filter("f1", &snapshot)), vec!["d"]);
}

#[test]
fn test_unknown_condition_is_permissive() {
    let evaluator = FilterEvaluator::new();
    let rule = FilterRule::parse(r#"{"and":[{"conditionName":"priority","not":["5"]}]}"#).unwrap();

    assert!(!evaluator.handles("priority"));
    assert!(evaluator.matches(&rule, &task("t", "P1", None)));
}

#[test]
fn test_registered_handler_is_used() {
    fn never(_: &Condition, _: &Task) -> bool {
        false
    }

    let mut evaluator = FilterEvaluator::new();
    evaluator.register("priority", never);
    let rule = FilterRule::parse(r#"{"and":[{"conditionName":"priority"}]}"#).unwrap();

    let tasks = vec![task("t", "P1", None)];
    assert!(evaluator.filter_tasks(&rule, &tasks).is_empty());
}

// ==================== Fallbacks ====================

#[test]
fn test_unparsable_rule_returns_all_tasks() {
    let snapshot = snapshot_with_rule(Some("this is not json"));
    assert_eq!(ids(&tasks_for_filter("f1", &snapshot)), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_rules_are_parsed_once_per_snapshot() {
    let mut snapshot = snapshot_with_rule(Some(r#"{"and":[{"conditionName":"dueDate","not":["nodue"]}]}"#));
    assert!(snapshot.filter_rule("f1").is_some());

    // Lookups use the rule parsed at build time, not the raw string.
    snapshot.filters[0].rule = Some("{not json".to_string());
    assert_eq!(ids(&tasks_for_filter("f1", &snapshot)), vec!["b", "d"]);
    assert_eq!(ids(&tasks_for_filter("f1", &snapshot)), vec!["b", "d"]);
}

#[test]
fn test_parse_rules_skips_missing_and_invalid() {
    let filter = |id: &str, rule: Option<&str>| Filter {
        id: id.to_string(),
        name: id.to_string(),
        rule: rule.map(str::to_string),
        sort_order: 0,
    };
    let rules = parse_rules(&[
        filter("ok", Some(r#"{"and":[]}"#)),
        filter("bad", Some("{not json")),
        filter("blank", Some("  ")),
        filter("none", None),
    ]);

    assert_eq!(rules.len(), 1);
    assert_eq!(rules.get("ok"), Some(&FilterRule::default()));
}

#[test]
fn test_missing_rule_returns_all_tasks() {
    let snapshot = snapshot_with_rule(None);
    assert_eq!(tasks_for_filter("f1", &snapshot).len(), 4);
}

#[test]
fn test_unknown_filter_returns_all_tasks() {
    let snapshot = snapshot_with_rule(Some(r#"{"and":[]}"#));
    assert_eq!(tasks_for_filter("nope", &snapshot).len(), 4);
}

#[test]
fn test_filter_model_rule_round_trip() {
    let filter = Filter {
        id: "f".to_string(),
        name: "n".to_string(),
        rule: Some(r#"{"and":[]}"#.to_string()),
        sort_order: 0,
    };
    let rule = FilterRule::parse(filter.rule.as_deref().unwrap()).unwrap();
    assert_eq!(rule, FilterRule::default());
}
