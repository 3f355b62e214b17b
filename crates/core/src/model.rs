use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;
use ulid::Ulid;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    Normal,
    High,
}

impl Importance {
    pub const ALL: [Importance; 3] = [Importance::Low, Importance::Normal, Importance::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Low => "low",
            Importance::Normal => "normal",
            Importance::High => "high",
        }
    }

    /// Step through the levels in form order, wrapping at either end.
    pub fn cycle(self, delta: i32) -> Self {
        let len = Self::ALL.len() as i32;
        let current = Self::ALL.iter().position(|level| *level == self).unwrap_or(0) as i32;
        let next = (current + delta).rem_euclid(len);
        Self::ALL[next as usize]
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Importance {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Importance::Low),
            "normal" => Ok(Importance::Normal),
            "high" => Ok(Importance::High),
            other => Err(anyhow!(
                "Unknown importance '{}': expected low|normal|high",
                other
            )),
        }
    }
}

impl ValueEnum for Importance {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

/// One of the two completion groups a task lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Pending,
    Completed,
}

impl Partition {
    pub const ALL: [Partition; 2] = [Partition::Pending, Partition::Completed];

    pub fn from_done(done: bool) -> Self {
        if done {
            Partition::Completed
        } else {
            Partition::Pending
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, Partition::Completed)
    }

    pub fn other(self) -> Self {
        match self {
            Partition::Pending => Partition::Completed,
            Partition::Completed => Partition::Pending,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Partition::Pending => "Pending Tasks",
            Partition::Completed => "Completed Tasks",
        }
    }

    pub fn contains(self, task: &Task) -> bool {
        task.done == self.is_done()
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Pending => write!(f, "pending"),
            Partition::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub category: String,
    pub importance: Importance,
    pub done: bool,
}

impl Task {
    pub fn partition(&self) -> Partition {
        Partition::from_done(self.done)
    }

    /// Merge the populated fields of `patch` into this task. The id is never touched.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(importance) = patch.importance {
            self.importance = importance;
        }
        if let Some(done) = patch.done {
            self.done = done;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskInputError {
    #[error("Task title cannot be empty")]
    EmptyTitle,
    #[error("Task category cannot be empty")]
    EmptyCategory,
    #[error("Select an importance (low, normal or high)")]
    MissingImportance,
}

/// Caller-supplied fields for a task that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub category: String,
    pub importance: Importance,
}

impl NewTask {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        importance: Importance,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            importance,
        }
    }

    /// Trim the text fields and reject blanks.
    pub fn validate(self) -> Result<Self, TaskInputError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskInputError::EmptyTitle);
        }
        let category = self.category.trim();
        if category.is_empty() {
            return Err(TaskInputError::EmptyCategory);
        }
        Ok(Self {
            title: title.to_string(),
            category: category.to_string(),
            importance: self.importance,
        })
    }

    pub fn into_task(self) -> Task {
        Task {
            id: new_task_id(),
            title: self.title,
            category: self.category,
            importance: self.importance,
            done: false,
        }
    }
}

/// Partial update merged onto an existing task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub importance: Option<Importance>,
    pub done: Option<bool>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.importance.is_none()
            && self.done.is_none()
    }

    /// True when applying the patch would leave `task` as it is.
    pub fn is_noop_for(&self, task: &Task) -> bool {
        let mut patched = task.clone();
        patched.apply(self);
        patched == *task
    }
}

impl From<NewTask> for TaskPatch {
    fn from(fields: NewTask) -> Self {
        Self {
            title: Some(fields.title),
            category: Some(fields.category),
            importance: Some(fields.importance),
            done: None,
        }
    }
}

/// ULIDs sort by creation time and carry 80 random bits, so collisions within a
/// session are not a practical concern.
pub fn new_task_id() -> String {
    Ulid::new().to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    fn sample_task() -> Task {
        Task {
            id: "task-1".into(),
            title: "Buy groceries".into(),
            category: "Home".into(),
            importance: Importance::High,
            done: false,
        }
    }

    #[rstest]
    #[case("low", Importance::Low)]
    #[case("Normal", Importance::Normal)]
    #[case(" HIGH ", Importance::High)]
    fn importance_parses_case_insensitively(#[case] raw: &str, #[case] expected: Importance) {
        assert_eq!(raw.parse::<Importance>().unwrap(), expected);
    }

    #[rstest]
    #[case("urgent")]
    #[case("medium")]
    #[case("med")]
    fn importance_rejects_unknown_levels(#[case] raw: &str) {
        let err = raw.parse::<Importance>().unwrap_err();
        assert!(err.to_string().contains(raw));
        assert!(err.to_string().contains("low|normal|high"));
    }

    #[test]
    fn importance_cycle_wraps() {
        assert_eq!(Importance::High.cycle(1), Importance::Low);
        assert_eq!(Importance::Low.cycle(-1), Importance::High);
        assert_eq!(Importance::Low.cycle(1), Importance::Normal);
    }

    #[test]
    fn new_task_validation_trims_and_rejects_blanks() {
        let draft = NewTask::new("  Call the doctor ", " Health", Importance::High);
        let valid = draft.validate().unwrap();
        assert_eq!(valid.title, "Call the doctor");
        assert_eq!(valid.category, "Health");

        let empty_title = NewTask::new("   ", "Health", Importance::Low);
        assert_eq!(empty_title.validate(), Err(TaskInputError::EmptyTitle));

        let empty_category = NewTask::new("Walk", "", Importance::Low);
        assert_eq!(empty_category.validate(), Err(TaskInputError::EmptyCategory));
    }

    #[test]
    fn new_tasks_start_pending_with_distinct_ids() {
        let ids: HashSet<String> = (0..500)
            .map(|n| {
                NewTask::new(format!("Task {n}"), "Misc", Importance::Normal)
                    .into_task()
                    .id
            })
            .collect();
        assert_eq!(ids.len(), 500);

        let task = NewTask::new("Read a book", "Leisure", Importance::Low).into_task();
        assert!(!task.done);
        assert_eq!(task.partition(), Partition::Pending);
    }

    #[test]
    fn apply_merges_only_populated_fields() {
        let mut task = sample_task();
        let patch = TaskPatch {
            title: Some("Buy vegetables".into()),
            done: Some(true),
            ..TaskPatch::default()
        };
        task.apply(&patch);
        assert_eq!(task.id, "task-1");
        assert_eq!(task.title, "Buy vegetables");
        assert_eq!(task.category, "Home");
        assert!(task.done);
    }

    #[test]
    fn patch_noop_detection() {
        let task = sample_task();
        assert!(TaskPatch::default().is_noop_for(&task));
        let same_title = TaskPatch {
            title: Some(task.title.clone()),
            ..TaskPatch::default()
        };
        assert!(same_title.is_noop_for(&task));
        let flip = TaskPatch {
            done: Some(true),
            ..TaskPatch::default()
        };
        assert!(!flip.is_noop_for(&task));
    }

    #[test]
    fn partition_membership_is_exclusive() {
        let task = sample_task();
        assert!(Partition::Pending.contains(&task));
        assert!(!Partition::Completed.contains(&task));
        assert_eq!(Partition::Pending.other(), Partition::Completed);
    }

    #[test]
    fn task_serializes_lowercase_importance() {
        let value = serde_json::to_value(sample_task()).unwrap();
        assert_eq!(value["importance"], "high");
        assert_eq!(value["done"], false);
    }
}
