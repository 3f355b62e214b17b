//! Board state and the pure transition function that every mutation flows through.

use std::collections::HashSet;
use std::sync::Arc;

use crate::model::{Task, TaskPatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateTask(Task),
    DeleteTask(String),
    UpdateTask { id: String, patch: TaskPatch },
    SelectTask(Task),
    DeselectTask,
    UpdateTaskCompletion { id: String, done: bool },
    /// Move `id` to the index `target` currently holds inside their shared partition.
    ReorderTask { id: String, target: String },
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::CreateTask(_) => "create task",
            Action::DeleteTask(_) => "delete task",
            Action::UpdateTask { .. } => "update task",
            Action::SelectTask(_) => "select task",
            Action::DeselectTask => "deselect task",
            Action::UpdateTaskCompletion { .. } => "update completion",
            Action::ReorderTask { .. } => "reorder task",
        }
    }
}

/// Immutable snapshot of the board. Cloning is cheap and a clone never observes
/// later transitions.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    tasks: Arc<Vec<Task>>,
    selected: Option<Task>,
    version: u64,
}

impl BoardState {
    /// Build the initial state, keeping the first occurrence of any repeated id.
    pub fn new(tasks: Vec<Task>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(tasks.len());
        for task in tasks {
            if seen.insert(task.id.clone()) {
                unique.push(task);
            } else {
                tracing::warn!(task_id = task.id.as_str(), "dropping duplicate task id");
            }
        }
        Self {
            tasks: Arc::new(unique),
            selected: None,
            version: 0,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn selected(&self) -> Option<&Task> {
        self.selected.as_ref()
    }

    /// Incremented once per collection change; selection changes leave it alone.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.task(id).is_some()
    }

    /// True when both snapshots point at the same collection allocation.
    pub fn shares_tasks_with(&self, other: &BoardState) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }

    pub fn reduce(&self, action: Action) -> BoardState {
        match action {
            Action::CreateTask(task) => {
                if self.contains(&task.id) {
                    return self.clone();
                }
                self.with_tasks(|tasks| tasks.push(task))
            }
            Action::DeleteTask(id) => match self.position(&id) {
                Some(index) => self.with_tasks(|tasks| {
                    tasks.remove(index);
                }),
                None => self.clone(),
            },
            Action::UpdateTask { id, patch } => match self.position(&id) {
                Some(index) if !patch.is_noop_for(&self.tasks[index]) => {
                    self.with_tasks(|tasks| tasks[index].apply(&patch))
                }
                _ => self.clone(),
            },
            Action::SelectTask(task) => BoardState {
                selected: Some(task),
                ..self.clone()
            },
            Action::DeselectTask => BoardState {
                selected: None,
                ..self.clone()
            },
            Action::UpdateTaskCompletion { id, done } => match self.position(&id) {
                Some(index) if self.tasks[index].done != done => {
                    self.with_tasks(|tasks| tasks[index].done = done)
                }
                _ => self.clone(),
            },
            Action::ReorderTask { id, target } => self.reorder(&id, &target),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn with_tasks(&self, mutate: impl FnOnce(&mut Vec<Task>)) -> BoardState {
        let mut tasks = self.tasks.as_ref().clone();
        mutate(&mut tasks);
        BoardState {
            tasks: Arc::new(tasks),
            selected: self.selected.clone(),
            version: self.version.wrapping_add(1),
        }
    }

    /// Splice within one partition. The partition keeps the collection slots it
    /// already occupies, so tasks of the other partition never move.
    fn reorder(&self, id: &str, target: &str) -> BoardState {
        let Some(source) = self.task(id) else {
            return self.clone();
        };
        let partition = source.partition();
        let slots: Vec<usize> = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| partition.contains(task))
            .map(|(slot, _)| slot)
            .collect();
        let mut ordered: Vec<Task> = slots.iter().map(|slot| self.tasks[*slot].clone()).collect();

        let from = ordered.iter().position(|task| task.id == id);
        let to = ordered.iter().position(|task| task.id == target);
        let (Some(from), Some(to)) = (from, to) else {
            return self.clone();
        };
        if from == to {
            return self.clone();
        }

        let moved = ordered.remove(from);
        ordered.insert(to, moved);
        self.with_tasks(|tasks| {
            for (slot, task) in slots.into_iter().zip(ordered) {
                tasks[slot] = task;
            }
        })
    }
}
