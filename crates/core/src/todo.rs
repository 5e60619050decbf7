//! Todo status values, list filters, and field validation.
//!
//! Status strings must match the `CHECK` constraint on `todos.status`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The todo has not been done yet. New todos start here.
pub const STATUS_PENDING: &str = "pending";

/// The todo has been done.
pub const STATUS_COMPLETED: &str = "completed";

/// Query value meaning "no status filter".
pub const FILTER_ALL: &str = "all";

/// Lifecycle state of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    #[default]
    Pending,
    Completed,
}

impl TodoStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TodoStatus::Pending => STATUS_PENDING,
            TodoStatus::Completed => STATUS_COMPLETED,
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TodoStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(TodoStatus::Pending),
            STATUS_COMPLETED => Ok(TodoStatus::Completed),
            other => Err(CoreError::Validation(format!(
                "Unknown status '{other}'. Expected '{STATUS_PENDING}' or '{STATUS_COMPLETED}'"
            ))),
        }
    }
}

/// Status filter for list queries. `None` (or `?status=all`) lists everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusFilter(pub Option<TodoStatus>);

impl StatusFilter {
    /// Parse the optional `status` query parameter.
    ///
    /// A missing or empty value and `"all"` mean no filtering.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw.map(str::trim) {
            None | Some("") | Some(FILTER_ALL) => Ok(StatusFilter(None)),
            Some(s) => s.parse().map(|status| StatusFilter(Some(status))),
        }
    }
}

/// Reject titles that are empty after trimming.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title is required".into()));
    }
    Ok(())
}
