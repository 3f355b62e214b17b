use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::FormField;
use crate::model::Partition;

use super::{App, ConfirmChoice, InputMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NormalAction {
    Quit,
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    FocusPending,
    FocusCompleted,
    SwitchColumn,
    Grab,
    ToggleDone,
    EnterAdd,
    EnterEdit,
    Delete,
    ShowHelp,
}

impl NormalAction {
    fn from_event(key: &KeyEvent) -> Option<Self> {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Self::Quit);
        }

        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Self::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Self::SelectPrev),
            KeyCode::Home => Some(Self::SelectFirst),
            KeyCode::End => Some(Self::SelectLast),
            KeyCode::Char('h') | KeyCode::Left => Some(Self::FocusPending),
            KeyCode::Char('l') | KeyCode::Right => Some(Self::FocusCompleted),
            KeyCode::Tab | KeyCode::BackTab => Some(Self::SwitchColumn),
            KeyCode::Char(' ') => Some(Self::Grab),
            KeyCode::Char('c') => Some(Self::ToggleDone),
            KeyCode::Char('a') => Some(Self::EnterAdd),
            KeyCode::Char('e') | KeyCode::Enter => Some(Self::EnterEdit),
            KeyCode::Char('x') | KeyCode::Delete => Some(Self::Delete),
            KeyCode::Char('?') => Some(Self::ShowHelp),
            _ => None,
        }
    }
}

impl App {
    pub(crate) fn on_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode(key),
            InputMode::Dragging => self.handle_drag_mode(key),
            InputMode::Form => self.handle_form_mode(key),
            InputMode::Help => self.handle_help_mode(key),
            InputMode::ConfirmDelete => self.handle_confirm_delete_mode(key),
        }
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) {
        if let Some(action) = NormalAction::from_event(&key) {
            self.execute_normal_action(action);
        }
    }

    fn execute_normal_action(&mut self, action: NormalAction) {
        match action {
            NormalAction::Quit => self.should_quit = true,
            NormalAction::SelectNext => self.move_cursor(1),
            NormalAction::SelectPrev => self.move_cursor(-1),
            NormalAction::SelectFirst => self.cursor_to_edge(false),
            NormalAction::SelectLast => self.cursor_to_edge(true),
            NormalAction::FocusPending => self.switch_column(Partition::Pending),
            NormalAction::FocusCompleted => self.switch_column(Partition::Completed),
            NormalAction::SwitchColumn => self.switch_column(self.focus.other()),
            NormalAction::Grab => self.begin_drag(),
            NormalAction::ToggleDone => self.toggle_completion(),
            NormalAction::EnterAdd => self.open_create_form(),
            NormalAction::EnterEdit => self.open_edit_form(),
            NormalAction::Delete => self.prompt_delete(),
            NormalAction::ShowHelp => self.show_help_overlay(),
        }
    }

    fn handle_drag_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.cancel_drag(),
            KeyCode::Enter | KeyCode::Char(' ') => self.drop_on_hover(),
            KeyCode::Char('j') | KeyCode::Down => self.move_hover(|app| app.move_cursor(1)),
            KeyCode::Char('k') | KeyCode::Up => self.move_hover(|app| app.move_cursor(-1)),
            KeyCode::Char('h') | KeyCode::Left => {
                self.move_hover(|app| app.switch_column(Partition::Pending))
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.move_hover(|app| app.switch_column(Partition::Completed))
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.move_hover(|app| app.switch_column(app.focus.other()))
            }
            _ => {}
        }
    }

    fn handle_form_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.cancel_form(),
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::Down => self.form_field = self.form_field.next(),
            KeyCode::BackTab | KeyCode::Up => self.form_field = self.form_field.prev(),
            KeyCode::Left if self.form_field == FormField::Importance => {
                self.form.cycle_importance(-1)
            }
            KeyCode::Right | KeyCode::Char(' ') if self.form_field == FormField::Importance => {
                self.form.cycle_importance(1)
            }
            KeyCode::Backspace => {
                if let Some(text) = self.form.text_mut(self.form_field) {
                    text.pop();
                }
            }
            KeyCode::Char(ch) => {
                if let Some(text) = self.form.text_mut(self.form_field) {
                    text.push(ch);
                }
            }
            _ => {}
        }
    }

    fn handle_help_mode(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?')) {
            self.input_mode = InputMode::Normal;
            self.status = None;
        }
    }

    fn handle_confirm_delete_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.pending_delete = None;
                self.input_mode = InputMode::Normal;
                self.set_status_info("Deletion cancelled");
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                self.confirm_choice = self.confirm_choice.toggle();
            }
            KeyCode::Enter => {
                if self.confirm_choice == ConfirmChoice::Yes {
                    self.perform_delete();
                } else {
                    self.pending_delete = None;
                    self.set_status_info("Deletion cancelled");
                }
                self.input_mode = InputMode::Normal;
            }
            _ => {}
        }
    }
}
