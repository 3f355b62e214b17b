use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use super::{App, InputMode};
use crate::core::drag::{DragStatus, HandleState};
use crate::core::TaskBoard;
use crate::model::{Importance, Partition, Task};
use crate::tui::helpers::centered_rect;

fn task(id: &str, done: bool) -> Task {
    Task {
        id: id.into(),
        title: format!("Task {id}"),
        category: "Misc".into(),
        importance: Importance::Normal,
        done,
    }
}

fn app_with(tasks: Vec<Task>) -> App {
    App::new(TaskBoard::new(tasks))
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn column(app: &App, partition: Partition) -> Vec<String> {
    app.board()
        .partition(partition)
        .iter()
        .map(|task| task.id.clone())
        .collect()
}

#[test]
fn centered_rect_keeps_within_bounds() {
    let area = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };
    let rect = centered_rect(40, 10, area);
    assert!(rect.x >= area.x);
    assert!(rect.y >= area.y);
    assert_eq!(rect.width, 40);
    assert_eq!(rect.height, 10);
}

#[test]
fn keyboard_drag_reorders_within_column() {
    let mut app = app_with(vec![task("A", false), task("B", false), task("C", true)]);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.input_mode, InputMode::Dragging);
    assert_eq!(app.drag.source(), Some("A"));
    assert_eq!(app.drag.status(), DragStatus::DropAvailable);

    press(&mut app, KeyCode::Down);
    assert_eq!(app.drag.status(), DragStatus::DropAvailable);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.drag.status(), DragStatus::Dropped);
    assert_eq!(column(&app, Partition::Pending), vec!["B", "A"]);
    assert_eq!(app.current_task().map(|task| task.id.as_str()), Some("A"));
}

#[test]
fn keyboard_drag_across_columns_flips_completion() {
    let mut app = app_with(vec![task("A", false), task("B", false), task("C", true)]);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    assert_eq!(column(&app, Partition::Pending), vec!["B"]);
    assert_eq!(column(&app, Partition::Completed), vec!["A", "C"]);
    assert_eq!(app.focus, Partition::Completed);
    assert_eq!(app.board().stats().progress, 67);
}

#[test]
fn drop_on_empty_column_placeholder() {
    let mut app = app_with(vec![task("A", false)]);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('l'));
    assert!(app.drag.is_hovering(&crate::core::DropTarget::placeholder(
        Partition::Completed
    )));
    press(&mut app, KeyCode::Char(' '));

    assert!(column(&app, Partition::Pending).is_empty());
    assert_eq!(column(&app, Partition::Completed), vec!["A"]);
}

#[test]
fn leaving_a_target_reports_previous_availability() {
    let mut app = app_with(vec![task("A", false), task("B", false)]);
    press(&mut app, KeyCode::Char(' '));
    let previous = app.hover_target();
    app.move_cursor(1);
    app.drag.leave(&previous);
    assert_eq!(app.drag.status(), DragStatus::LeftTarget);
}

#[test]
fn escape_cancels_without_mutation() {
    let mut app = app_with(vec![task("A", false), task("B", false)]);
    let version = app.board().version();
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.board().version(), version);
    assert_eq!(column(&app, Partition::Pending), vec!["A", "B"]);
    assert_eq!(app.current_task().map(|task| task.id.as_str()), Some("A"));

    app.on_tick(Instant::now() + Duration::from_millis(200));
    assert_eq!(app.drag.status(), DragStatus::Canceled);
}

#[test]
fn grab_never_leaves_an_armed_handle() {
    let mut app = app_with(vec![task("A", false), task("B", false)]);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.drag.handle_state("A"), HandleState::Dragging);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.drag.handle_state("A"), HandleState::Idle);

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.drag.handle_state("A"), HandleState::Idle);
    assert_eq!(app.drag.handle_state("B"), HandleState::Idle);
}

#[test]
fn toggle_completion_follows_task() {
    let mut app = app_with(vec![task("A", false), task("B", true)]);
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(column(&app, Partition::Completed), vec!["A", "B"]);
    assert_eq!(app.focus, Partition::Completed);
    assert_eq!(app.current_task().map(|task| task.id.as_str()), Some("A"));
}

#[test]
fn add_form_creates_pending_task() {
    let mut app = app_with(vec![task("A", false)]);
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.input_mode, InputMode::Form);

    type_text(&mut app, "Buy milk");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Home");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode, InputMode::Normal);
    let created = app.current_task().cloned().unwrap();
    assert_eq!(created.title, "Buy milk");
    assert_eq!(created.category, "Home");
    assert_eq!(created.importance, Importance::Low);
    assert!(!created.done);
    assert_eq!(app.board().tasks().len(), 2);
}

#[test]
fn incomplete_form_stays_open() {
    let mut app = app_with(Vec::new());
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Nap");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode, InputMode::Form);
    assert_eq!(app.form.title, "Nap");
    assert!(app.board().tasks().is_empty());
}

#[test]
fn edit_form_updates_and_clears_selection() {
    let mut app = app_with(vec![task("A", false)]);
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.board().selected().map(|task| task.id.as_str()), Some("A"));
    assert_eq!(app.form.submit_label(), "Update");

    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "Z");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.board().task("A").unwrap().title, "Task Z");
    assert!(app.board().selected().is_none());
}

#[test]
fn escape_from_edit_releases_selection() {
    let mut app = app_with(vec![task("A", false)]);
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Esc);
    assert!(app.board().selected().is_none());
    assert_eq!(app.board().task("A").unwrap().title, "Task A");
}

#[test]
fn delete_requires_confirmation() {
    let mut app = app_with(vec![task("A", false), task("B", false)]);
    press(&mut app, KeyCode::Char('x'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.board().tasks().len(), 2);

    press(&mut app, KeyCode::Char('x'));
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Enter);
    assert_eq!(column(&app, Partition::Pending), vec!["B"]);
    assert_eq!(app.current_task().map(|task| task.id.as_str()), Some("B"));
}

#[test]
fn quit_key_stops_loop() {
    let mut app = app_with(Vec::new());
    app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn draw_renders_columns_and_stats() {
    let mut app = App::new(TaskBoard::seeded());
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();

    let rendered: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(rendered.contains("Pending Tasks (15)"));
    assert!(rendered.contains("Completed Tasks (15)"));
    assert!(rendered.contains("Total: 30"));
    assert!(rendered.contains("50%"));
    assert!(rendered.contains("Drag to start"));
}

#[test]
fn draw_shows_placeholder_for_empty_board() {
    let mut app = app_with(Vec::new());
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();

    let rendered: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(rendered.contains("No tasks here yet."));
    assert!(rendered.contains("0%"));
}
