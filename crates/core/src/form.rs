//! Form state for creating a task or editing the selected one.

use crate::model::{Importance, NewTask, Task, TaskInputError, TaskPatch};
use crate::provider::TaskBoard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Category,
    Importance,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Category, FormField::Importance];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Category => "Category",
            FormField::Importance => "Importance",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Category,
            FormField::Category => FormField::Importance,
            FormField::Importance => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Importance,
            FormField::Category => FormField::Title,
            FormField::Importance => FormField::Category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Created(String),
    /// `changed` is false when the fields matched the task or it no longer exists.
    Updated { id: String, changed: bool },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub category: String,
    pub importance: Option<Importance>,
    editing: Option<String>,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill from the board's selected task, or start blank.
    pub fn for_board(board: &TaskBoard) -> Self {
        match board.selected() {
            Some(task) => Self::editing(task),
            None => Self::new(),
        }
    }

    pub fn editing(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            category: task.category.clone(),
            importance: Some(task.importance),
            editing: Some(task.id.clone()),
        }
    }

    pub fn is_updating(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_updating() {
            "Update"
        } else {
            "Save"
        }
    }

    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Title => self.title.clone(),
            FormField::Category => self.category.clone(),
            FormField::Importance => self
                .importance
                .map(|level| level.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Title => Some(&mut self.title),
            FormField::Category => Some(&mut self.category),
            FormField::Importance => None,
        }
    }

    pub fn cycle_importance(&mut self, delta: i32) {
        self.importance = Some(match self.importance {
            Some(level) => level.cycle(delta),
            None if delta < 0 => Importance::High,
            None => Importance::Low,
        });
    }

    /// Create or update through the board. Fields are cleared only on success.
    pub fn submit(&mut self, board: &mut TaskBoard) -> Result<FormOutcome, TaskInputError> {
        let importance = self.importance.ok_or(TaskInputError::MissingImportance)?;
        let fields = NewTask::new(self.title.clone(), self.category.clone(), importance);

        let outcome = match self.editing.clone() {
            Some(id) => {
                let patch = TaskPatch::from(fields.validate()?);
                let changed = board.update_task(&id, patch);
                board.deselect_task();
                FormOutcome::Updated { id, changed }
            }
            None => FormOutcome::Created(board.create_task(fields)?),
        };
        self.reset();
        Ok(outcome)
    }

    /// Abandon the form; an edit in progress releases the selection.
    pub fn cancel(&mut self, board: &mut TaskBoard) {
        if self.is_updating() {
            board.deselect_task();
        }
        self.reset();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
