//! Sort and search over a list of tasks.
//!
//! [`project_tasks`] turns the tasks of the selected list into the rows to
//! render. Sorting is stable, so equal keys keep snapshot order and the
//! projection is idempotent.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ticktick_api_rs::models::Task;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// How the task column is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Snapshot order (`sortOrder` ascending).
    #[default]
    Default,
    /// Start date ascending; undated tasks first.
    Date,
    /// Title ascending, case- and accent-insensitive.
    Title,
}

impl SortMode {
    /// Cycles `default → date → title → default`.
    pub fn next(self) -> Self {
        match self {
            SortMode::Default => SortMode::Date,
            SortMode::Date => SortMode::Title,
            SortMode::Title => SortMode::Default,
        }
    }

    /// Returns the lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::Date => "date",
            SortMode::Title => "title",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(SortMode::Default),
            "date" => Ok(SortMode::Date),
            "title" => Ok(SortMode::Title),
            other => Err(format!(
                "unknown sort mode '{other}' (expected default, date or title)"
            )),
        }
    }
}

/// Returns true if the title, content or any tag contains `query`,
/// ignoring case and accents.
pub fn matches_search(task: &Task, query: &str) -> bool {
    let query = collation_key(query);
    collation_key(&task.title).contains(&query)
        || collation_key(&task.content).contains(&query)
        || task.tags.iter().any(|tag| collation_key(tag).contains(&query))
}

/// Comparison key for titles: lowercase with accents stripped.
fn collation_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn compare_titles(a: &Task, b: &Task) -> Ordering {
    collation_key(&a.title)
        .cmp(&collation_key(&b.title))
        .then_with(|| a.title.cmp(&b.title))
}

/// Produces the rows to render.
///
/// A non-empty `search` first keeps only matching tasks. The remaining tasks
/// are ordered by `sort`, and `reversed` flips the final order.
///
/// # Arguments
///
/// * `tasks` - Tasks of the selected list, in snapshot order
/// * `sort` - Sort mode
/// * `reversed` - Reverse the sorted result
/// * `search` - Optional case-insensitive search string
pub fn project_tasks<'a>(
    tasks: Vec<&'a Task>,
    sort: SortMode,
    reversed: bool,
    search: Option<&str>,
) -> Vec<&'a Task> {
    let mut rows: Vec<&Task> = match search.filter(|query| !query.is_empty()) {
        Some(query) => tasks
            .into_iter()
            .filter(|task| matches_search(task, query))
            .collect(),
        None => tasks,
    };

    match sort {
        SortMode::Default => {}
        SortMode::Date => rows.sort_by_key(|task| {
            task.start_instant()
                .map(|instant| instant.timestamp_millis())
                .unwrap_or(0)
        }),
        SortMode::Title => rows.sort_by(|a, b| compare_titles(a, b)),
    }

    if reversed {
        rows.reverse();
    }
    rows
}
