//! Lists (projects) and saved filters.

use serde::{Deserialize, Serialize};

/// A TickTick list. The service calls them projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// The unique identifier for the list.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Position in the sidebar.
    #[serde(default)]
    pub sort_order: i64,
    /// Closed (archived) lists are hidden from the sidebar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
}

impl Project {
    /// Creates a project with just an id and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sort_order: 0,
            closed: None,
        }
    }

    /// Returns true if the list is archived.
    pub fn is_closed(&self) -> bool {
        self.closed.unwrap_or(false)
    }
}

/// A saved filter.
///
/// `rule` is a JSON document encoded as a string; it is decoded lazily by the
/// filter engine so that a malformed rule never fails a sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// The unique identifier for the filter.
    pub id: String,
    /// Display name.
    pub name: String,
    /// String-encoded rule tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    /// Position in the sidebar.
    #[serde(default)]
    pub sort_order: i64,
}
