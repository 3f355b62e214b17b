use std::time::Instant;

use ratatui::style::{Color, Style};

use super::constants::*;
use crate::core::{
    DragSession, DropOutcome, DropTarget, FormField, FormOutcome, TaskBoard, TaskForm,
};
use crate::model::{Partition, Task};

mod input;
mod render;
#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    Dragging,
    Form,
    Help,
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmChoice {
    Yes,
    No,
}

impl ConfirmChoice {
    fn toggle(self) -> Self {
        match self {
            ConfirmChoice::Yes => ConfirmChoice::No,
            ConfirmChoice::No => ConfirmChoice::Yes,
        }
    }
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    kind: StatusKind,
    created_at: Instant,
}

impl StatusMessage {
    fn new<T: Into<String>>(text: T, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    fn style(&self) -> Style {
        match self.kind {
            StatusKind::Info => Style::default().fg(Color::Cyan),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Info,
    Error,
}

fn column_slot(partition: Partition) -> usize {
    match partition {
        Partition::Pending => 0,
        Partition::Completed => 1,
    }
}

pub(crate) struct App {
    board: TaskBoard,
    drag: DragSession,
    form: TaskForm,
    form_field: FormField,
    focus: Partition,
    cursors: [usize; 2],
    input_mode: InputMode,
    status: Option<StatusMessage>,
    confirm_choice: ConfirmChoice,
    pending_delete: Option<String>,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(board: TaskBoard) -> Self {
        Self {
            board,
            drag: DragSession::new(),
            form: TaskForm::new(),
            form_field: FormField::Title,
            focus: Partition::Pending,
            cursors: [0; 2],
            input_mode: InputMode::Normal,
            status: None,
            confirm_choice: ConfirmChoice::No,
            pending_delete: None,
            should_quit: false,
        }
    }

    pub(crate) fn board(&self) -> &TaskBoard {
        &self.board
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn on_tick(&mut self, now: Instant) {
        self.drag.tick(now);
        if let Some(status) = &self.status {
            if now.saturating_duration_since(status.created_at) > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub(crate) fn set_status_info<T: Into<String>>(&mut self, text: T) {
        self.status = Some(StatusMessage::new(text, StatusKind::Info));
    }

    pub(crate) fn set_status_error<T: Into<String>>(&mut self, text: T) {
        self.status = Some(StatusMessage::new(text, StatusKind::Error));
    }

    fn cursor(&self, partition: Partition) -> usize {
        self.cursors[column_slot(partition)]
    }

    fn set_cursor(&mut self, partition: Partition, index: usize) {
        self.cursors[column_slot(partition)] = index;
    }

    fn current_task(&self) -> Option<&Task> {
        self.board
            .partition(self.focus)
            .get(self.cursor(self.focus))
            .copied()
    }

    fn clamp_cursors(&mut self) {
        for partition in Partition::ALL {
            let len = self.board.partition(partition).len();
            let index = self.cursor(partition).min(len.saturating_sub(1));
            self.set_cursor(partition, index);
        }
    }

    /// Put the cursor on `id` wherever it currently lives.
    fn focus_task(&mut self, id: &str) {
        let Some(partition) = self.board.task(id).map(Task::partition) else {
            self.clamp_cursors();
            return;
        };
        if let Some(index) = self
            .board
            .partition(partition)
            .iter()
            .position(|task| task.id == id)
        {
            self.focus = partition;
            self.set_cursor(partition, index);
        }
        self.clamp_cursors();
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.board.partition(self.focus).len();
        if len == 0 {
            return;
        }
        let current = self.cursor(self.focus) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.set_cursor(self.focus, next);
    }

    fn cursor_to_edge(&mut self, last: bool) {
        let len = self.board.partition(self.focus).len();
        let index = if last { len.saturating_sub(1) } else { 0 };
        self.set_cursor(self.focus, index);
    }

    fn switch_column(&mut self, partition: Partition) {
        self.focus = partition;
        self.clamp_cursors();
    }

    /// The spot under the cursor: a task, or the placeholder of an empty column.
    fn hover_target(&self) -> DropTarget {
        let column = self.board.partition(self.focus);
        match column.get(self.cursor(self.focus).min(column.len().saturating_sub(1))) {
            Some(task) => DropTarget::task(self.focus, task.id.clone()),
            None => DropTarget::placeholder(self.focus),
        }
    }

    fn begin_drag(&mut self) {
        let Some(task) = self.current_task().cloned() else {
            self.set_status_info("Nothing to drag");
            return;
        };
        self.drag.press(&task.id);
        if let Err(err) = self.drag.start(&task) {
            self.set_status_error(err.to_string());
            return;
        }
        let target = self.hover_target();
        self.drag.enter(target.clone());
        self.drag.over(target);
        self.input_mode = InputMode::Dragging;
        self.set_status_info(STATUS_DRAGGING);
    }

    /// Move the pointer, emitting leave/enter when the hovered spot changes.
    fn move_hover(&mut self, step: impl FnOnce(&mut Self)) {
        let previous = self.hover_target();
        step(self);
        let next = self.hover_target();
        if previous != next {
            self.drag.leave(&previous);
            self.drag.enter(next.clone());
        }
        self.drag.over(next);
    }

    fn drop_on_hover(&mut self) {
        let target = self.hover_target();
        let handling = self.drag.drop(target);
        if let Some(request) = handling.request {
            let title = self
                .board
                .task(&request.source)
                .map(|task| task.title.clone())
                .unwrap_or_default();
            let outcome = self.board.apply_drop(&request.source, &request.target);
            self.focus_task(&request.source);
            match outcome {
                DropOutcome::Moved => self.set_status_info(format!(
                    "Moved '{}' to {}",
                    title,
                    request.target.partition.title()
                )),
                DropOutcome::Reordered => self.set_status_info(format!("Reordered '{}'", title)),
                DropOutcome::Unchanged => self.set_status_info("Task stayed where it was"),
            }
        }
        self.drag.end(Instant::now());
        self.input_mode = InputMode::Normal;
    }

    fn cancel_drag(&mut self) {
        let source = self.drag.source().map(str::to_string);
        self.drag.end(Instant::now());
        if let Some(id) = source {
            self.focus_task(&id);
        }
        self.input_mode = InputMode::Normal;
        self.set_status_info("Drag released without a drop");
    }

    fn toggle_completion(&mut self) {
        let Some(task) = self.current_task().cloned() else {
            self.set_status_info("Nothing to mark");
            return;
        };
        if self.board.update_task_completion(&task.id, !task.done) {
            self.focus_task(&task.id);
            let verb = if task.done { "Reopened" } else { "Completed" };
            self.set_status_info(format!("{} '{}'", verb, task.title));
        }
    }

    fn open_create_form(&mut self) {
        if self.board.selected().is_some() {
            self.board.deselect_task();
        }
        self.form = TaskForm::for_board(&self.board);
        self.form_field = FormField::Title;
        self.input_mode = InputMode::Form;
        self.set_status_info(STATUS_FORM_CREATE);
    }

    fn open_edit_form(&mut self) {
        let Some(id) = self.current_task().map(|task| task.id.clone()) else {
            self.set_status_info("Nothing to edit");
            return;
        };
        self.board.select_task(&id);
        self.form = TaskForm::for_board(&self.board);
        self.form_field = FormField::Title;
        self.input_mode = InputMode::Form;
        self.set_status_info(STATUS_FORM_UPDATE);
    }

    fn submit_form(&mut self) {
        match self.form.submit(&mut self.board) {
            Ok(FormOutcome::Created(id)) => {
                self.focus_task(&id);
                self.input_mode = InputMode::Normal;
                self.set_status_info("Task added to Pending Tasks");
            }
            Ok(FormOutcome::Updated { id, changed }) => {
                self.focus_task(&id);
                self.input_mode = InputMode::Normal;
                if changed {
                    self.set_status_info("Task updated");
                } else {
                    self.set_status_info("No changes to save");
                }
            }
            Err(err) => self.set_status_error(err.to_string()),
        }
    }

    fn cancel_form(&mut self) {
        self.form.cancel(&mut self.board);
        self.input_mode = InputMode::Normal;
        self.set_status_info("Form closed");
    }

    fn show_help_overlay(&mut self) {
        self.input_mode = InputMode::Help;
        self.set_status_info(STATUS_HELP);
    }

    fn prompt_delete(&mut self) {
        let Some(id) = self.current_task().map(|task| task.id.clone()) else {
            self.set_status_info("Nothing to delete");
            return;
        };
        self.pending_delete = Some(id);
        self.confirm_choice = ConfirmChoice::No;
        self.input_mode = InputMode::ConfirmDelete;
        self.set_status_info(STATUS_CONFIRM_DELETE);
    }

    fn perform_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        let title = self
            .board
            .task(&id)
            .map(|task| task.title.clone())
            .unwrap_or_default();
        if self.board.delete_task(&id) {
            self.set_status_info(format!("Deleted '{}'", title));
        } else {
            self.set_status_error("Task no longer exists");
        }
        self.clamp_cursors();
    }
}
