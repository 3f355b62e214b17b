//! Derived views over the task collection. Nothing here is stored; callers
//! recompute from the current snapshot (or cache by `BoardState::version`).

use serde::Serialize;

use crate::model::{Partition, Task};

/// Ordered sub-sequence of `tasks` belonging to `partition`.
pub fn partition(tasks: &[Task], partition: Partition) -> Vec<&Task> {
    tasks.iter().filter(|task| partition.contains(task)).collect()
}

pub fn tasks_by_completion(tasks: &[Task], done: bool) -> Vec<&Task> {
    partition(tasks, Partition::from_done(done))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub not_started: usize,
    pub completed: usize,
    pub total: usize,
    /// Percentage of completed tasks, rounded half up. Zero for an empty board.
    pub progress: u8,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.done).count();
        let total = tasks.len();
        Self {
            not_started: total - completed,
            completed,
            total,
            progress: progress_percent(completed, total),
        }
    }

    pub fn count(&self, partition: Partition) -> usize {
        match partition {
            Partition::Pending => self.not_started,
            Partition::Completed => self.completed,
        }
    }

    pub fn progress_label(&self) -> String {
        format!("{}%", self.progress)
    }
}

fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (completed * 200 + total) / (total * 2);
    rounded.min(100) as u8
}
