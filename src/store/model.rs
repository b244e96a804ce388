//! Task data model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority, ordered `Low < Medium < High`.
///
/// The derived ordering is ordinal, not lexicographic, so sorting by
/// priority means sorting by urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Parse priority from text
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Get the label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A task record as it is persisted in the tasks file.
///
/// The JSON field names (`task`, `priority`, `deadline`) are the on-disk
/// contract; `deadline` serializes as an ISO-8601 date (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task name
    #[serde(rename = "task")]
    pub name: String,

    /// Priority level
    pub priority: Priority,

    /// Due date
    pub deadline: NaiveDate,
}

impl Task {
    /// Create a new task
    pub fn new(name: impl Into<String>, priority: Priority, deadline: NaiveDate) -> Self {
        Self {
            name: name.into(),
            priority,
            deadline,
        }
    }

    /// One-line rendering for list output and confirmations. Always derived
    /// from the record, never parsed back into fields.
    pub fn display_line(&self) -> String {
        format!(
            "{} | priority: {} | deadline: {}",
            self.name,
            self.priority.label(),
            self.deadline.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("low"), Some(Priority::Low));
        assert_eq!(Priority::parse("  High "), Some(Priority::High));
        assert_eq!(Priority::parse("med"), Some(Priority::Medium));
        assert_eq!(Priority::parse("urgent"), None);
        assert_eq!(Priority::parse(""), None);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::Low.label(), "Low");
        assert_eq!(Priority::High.to_string(), "High");
    }

    #[test]
    fn test_display_line() {
        let task = Task::new("Write report", Priority::High, date("2024-12-31"));
        let line = task.display_line();
        assert_eq!(line, "Write report | priority: High | deadline: 2024-12-31");
    }

    #[test]
    fn test_serde_field_names() {
        let task = Task::new("Buy milk", Priority::Low, date("2024-06-15"));
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["task"], "Buy milk");
        assert_eq!(json["priority"], "Low");
        assert_eq!(json["deadline"], "2024-06-15");
    }

    #[test]
    fn test_serde_roundtrip() {
        let task = Task::new("Call dentist", Priority::Medium, date("2025-01-02"));
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
