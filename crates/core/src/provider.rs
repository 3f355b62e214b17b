//! The task board: owns the current [`BoardState`] and exposes the operations
//! presentation code is allowed to perform. It is constructed once at the
//! application root and handed to whoever needs it.

use crate::config::AppConfig;
use crate::drag::{resolve_drop, DropOutcome, DropResolution, DropTarget};
use crate::model::{NewTask, Partition, Task, TaskInputError, TaskPatch};
use crate::query::{self, TaskStats};
use crate::seeds::seed_tasks;
use crate::store::{Action, BoardState};
use crate::telemetry::{self, Event as TelemetryEvent};

#[derive(Debug)]
pub struct TaskBoard {
    state: BoardState,
    telemetry: telemetry::Handle,
}

impl TaskBoard {
    pub fn new(tasks: Vec<Task>) -> Self {
        let state = BoardState::new(tasks);
        let telemetry = telemetry::Handle::new();
        telemetry.record(TelemetryEvent::BoardLoaded {
            tasks: state.tasks().len(),
        });
        Self { state, telemetry }
    }

    pub fn seeded() -> Self {
        Self::new(seed_tasks())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        if config.seed() {
            Self::seeded()
        } else {
            Self::new(Vec::new())
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.state.tasks()
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.state.task(id)
    }

    pub fn selected(&self) -> Option<&Task> {
        self.state.selected()
    }

    /// Cheap copy of the current state that later operations will not affect.
    pub fn snapshot(&self) -> BoardState {
        self.state.clone()
    }

    pub fn version(&self) -> u64 {
        self.state.version()
    }

    pub fn telemetry(&self) -> &telemetry::Handle {
        &self.telemetry
    }

    pub fn partition(&self, partition: Partition) -> Vec<&Task> {
        query::partition(self.state.tasks(), partition)
    }

    pub fn tasks_by_completion(&self, done: bool) -> Vec<&Task> {
        query::tasks_by_completion(self.state.tasks(), done)
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(self.state.tasks())
    }

    /// Validate the fields, append a new pending task and return its id.
    pub fn create_task(&mut self, fields: NewTask) -> Result<String, TaskInputError> {
        let fields = match fields.validate() {
            Ok(fields) => fields,
            Err(err) => {
                tracing::warn!(error = %err, "rejected new task");
                self.telemetry
                    .record(TelemetryEvent::InputRejected(err.to_string()));
                return Err(err);
            }
        };
        let task = fields.into_task();
        let id = task.id.clone();
        self.dispatch(Action::CreateTask(task));
        Ok(id)
    }

    pub fn delete_task(&mut self, id: &str) -> bool {
        self.dispatch(Action::DeleteTask(id.to_string()))
    }

    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> bool {
        self.dispatch(Action::UpdateTask {
            id: id.to_string(),
            patch,
        })
    }

    /// Mark the task with `id` as being edited. Unknown ids leave the selection alone.
    pub fn select_task(&mut self, id: &str) -> bool {
        let Some(task) = self.state.task(id).cloned() else {
            return false;
        };
        self.dispatch(Action::SelectTask(task));
        true
    }

    pub fn deselect_task(&mut self) {
        self.dispatch(Action::DeselectTask);
    }

    /// Nothing is dispatched when the task is missing or already at `done`.
    pub fn update_task_completion(&mut self, id: &str, done: bool) -> bool {
        match self.state.task(id) {
            Some(task) if task.done != done => self.dispatch(Action::UpdateTaskCompletion {
                id: id.to_string(),
                done,
            }),
            _ => false,
        }
    }

    /// Resolve a drop of `source` onto `target_id` (or the placeholder when
    /// `None`) inside `partition`, and apply the resulting move or reorder.
    pub fn move_task(
        &mut self,
        source: &str,
        target_id: Option<&str>,
        partition: Partition,
    ) -> DropOutcome {
        let target = DropTarget {
            partition,
            task_id: target_id.map(str::to_string),
        };
        self.apply_drop(source, &target)
    }

    pub fn apply_drop(&mut self, source: &str, target: &DropTarget) -> DropOutcome {
        let resolution = resolve_drop(self.state.tasks(), source, target);
        let outcome = match &resolution {
            DropResolution::Move { .. } => DropOutcome::Moved,
            DropResolution::Reorder { .. } => DropOutcome::Reordered,
            DropResolution::Unchanged => DropOutcome::Unchanged,
        };
        if let Some(action) = resolution.into_action() {
            self.dispatch(action);
        }
        self.telemetry.record(TelemetryEvent::DropResolved {
            task_id: source.to_string(),
            outcome,
        });
        outcome
    }

    /// Run one transition and report whether the collection or selection changed.
    fn dispatch(&mut self, action: Action) -> bool {
        let label = action.label();
        let next = self.state.reduce(action);
        let changed = !next.shares_tasks_with(&self.state)
            || next.selected().map(|task| &task.id) != self.state.selected().map(|task| &task.id);
        tracing::debug!(action = label, changed, version = next.version(), "dispatched");
        self.telemetry.record(TelemetryEvent::ActionApplied {
            action: label,
            changed,
        });
        self.state = next;
        changed
    }
}
