use std::cmp::min;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::drag::HandleState;
use crate::core::{DropTarget, FormField};
use crate::model::{Partition, Task};
use crate::tui::constants::{APP_VERSION, DRAG_HANDLE, PLACEHOLDER_LABEL};
use crate::tui::helpers::{
    accent_title, build_help_lines, centered_rect, importance_style, inset_rect, BG_ACCENT,
    BG_BASE, BG_DROP, BG_PANEL, FG_ACCENT,
};

use super::{App, ConfirmChoice, InputMode};

impl App {
    pub(crate) fn draw(&mut self, f: &mut Frame<'_>) {
        let size = f.size();
        f.render_widget(Clear, size);
        f.render_widget(Block::default().style(Style::default().bg(BG_BASE)), size);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(2),
            ])
            .split(size);

        self.draw_header(f, chunks[0]);
        self.draw_progress(f, chunks[1]);
        self.draw_columns(f, chunks[2]);
        self.draw_footer(f, chunks[3]);

        match self.input_mode {
            InputMode::Form => self.draw_form_overlay(f, size),
            InputMode::Help => self.draw_help_overlay(f, size),
            InputMode::ConfirmDelete => self.draw_confirm_overlay(f, size),
            InputMode::Normal | InputMode::Dragging => {}
        }
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        let stats = self.board.stats();
        let line = Line::from(vec![
            Span::styled(
                format!(" taskboard v{} ", APP_VERSION),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("Total: {}", stats.total)),
            Span::raw("  "),
            Span::styled(
                format!("Completed: {}", stats.completed),
                Style::default().fg(Color::Green),
            ),
            Span::raw("  "),
            Span::styled(
                format!("Not started: {}", stats.not_started),
                Style::default().fg(Color::Yellow),
            ),
        ]);
        f.render_widget(
            Paragraph::new(line).style(Style::default().bg(BG_BASE)),
            area,
        );
    }

    fn draw_progress(&self, f: &mut Frame<'_>, area: Rect) {
        let stats = self.board.stats();
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(accent_title("Progress"))
                    .border_style(Style::default().fg(Color::DarkGray))
                    .style(Style::default().bg(BG_PANEL)),
            )
            .gauge_style(Style::default().fg(Color::Green).bg(BG_ACCENT))
            .percent(u16::from(stats.progress))
            .label(stats.progress_label());
        f.render_widget(gauge, area);
    }

    fn draw_columns(&self, f: &mut Frame<'_>, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        for (partition, col) in Partition::ALL.into_iter().zip(cols.iter()) {
            self.draw_column(f, *col, partition);
        }
    }

    fn draw_column(&self, f: &mut Frame<'_>, area: Rect, partition: Partition) {
        let tasks = self.board.partition(partition);
        let focused = self.focus == partition;
        let hovered = self
            .drag
            .hovering()
            .is_some_and(|target| target.partition == partition);

        let border = if hovered {
            Color::Yellow
        } else if focused {
            FG_ACCENT
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title(&format!(
                "{} ({})",
                partition.title(),
                tasks.len()
            )))
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(BG_PANEL));

        if tasks.is_empty() {
            let style = if self.drag.is_hovering(&DropTarget::placeholder(partition)) {
                Style::default()
                    .fg(Color::White)
                    .bg(BG_DROP)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            };
            let inner = block.inner(area);
            f.render_widget(block, area);
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(PLACEHOLDER_LABEL, style)))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                inset_rect(inner, 1),
            );
            return;
        }

        let items: Vec<ListItem> = tasks
            .iter()
            .map(|task| self.task_item(task, partition))
            .collect();

        let symbol = if self.input_mode == InputMode::Dragging {
            "⇢ "
        } else {
            "▶ "
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .bg(BG_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(symbol);

        let mut state = ListState::default();
        if focused {
            state.select(Some(min(self.cursor(partition), tasks.len() - 1)));
        }
        f.render_stateful_widget(list, area, &mut state);
    }

    fn task_item(&self, task: &Task, partition: Partition) -> ListItem<'static> {
        let handle_style = match self.drag.handle_state(&task.id) {
            HandleState::Idle => Style::default().fg(Color::DarkGray),
            HandleState::Armed | HandleState::Dragging => Style::default().fg(Color::Yellow),
        };
        let check = if task.done { "[x]" } else { "[ ]" };
        let line = Line::from(vec![
            Span::styled(DRAG_HANDLE, handle_style),
            Span::raw(" "),
            Span::raw(check),
            Span::raw(" "),
            Span::raw(task.title.clone()),
            Span::raw("  "),
            Span::styled(task.category.clone(), Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            Span::styled(task.importance.as_str(), importance_style(task.importance)),
        ]);

        let mut style = Style::default();
        if self.drag.source() == Some(task.id.as_str()) {
            style = style.add_modifier(Modifier::DIM | Modifier::ITALIC);
        }
        if self
            .drag
            .is_hovering(&DropTarget::task(partition, task.id.clone()))
        {
            style = style.bg(BG_DROP);
        }
        ListItem::new(line).style(style)
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let mut spans = match &self.status {
            Some(status) => vec![Span::styled(status.text.clone(), status.style())],
            None => vec![Span::raw("Ready")],
        };
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            self.drag.status().label(),
            Style::default().fg(Color::Magenta),
        ));
        f.render_widget(Paragraph::new(Line::from(spans)), lines[0]);

        let help = match self.input_mode {
            InputMode::Normal => {
                "j/k move | h/l column | space grab ⠿ | c done ✅ | a add ✚ | e edit ✏️ | x delete 🗑️ | ? help | q quit"
            }
            InputMode::Dragging => "↑/↓ spot | ←/→ column | Enter/Space drop | Esc cancel",
            InputMode::Form => "Tab/↑/↓ field | ←/→ importance | Enter submit | Esc cancel",
            InputMode::Help => "Enter/Esc to close ❔",
            InputMode::ConfirmDelete => "←/→ choose • Space toggle • Enter confirm • Esc cancel",
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                help,
                Style::default().fg(Color::DarkGray),
            ))),
            lines[1],
        );
    }

    fn draw_form_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let width = min(area.width.saturating_sub(10), 70);
        let height = 9u16;
        let popup_area = centered_rect(width, height, area);
        f.render_widget(Clear, popup_area);

        let title = if self.form.is_updating() {
            "✏️ Edit Task"
        } else {
            "✚ New Task"
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title(title))
            .border_style(Style::default().fg(FG_ACCENT))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let mut lines = Vec::new();
        for field in FormField::ALL {
            let active = field == self.form_field;
            let value = match field {
                FormField::Importance => match self.form.importance {
                    Some(_) => format!("< {} >", self.form.value(field)),
                    None => String::from("< choose >"),
                },
                _ if active => format!("{}▏", self.form.value(field)),
                _ => self.form.value(field),
            };
            let label_style = if active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(vec![
                Span::styled(if active { "▶ " } else { "  " }, label_style),
                Span::styled(format!("{:<12}", field.label()), label_style),
                Span::raw(value),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", self.form.submit_label()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));

        f.render_widget(
            Paragraph::new(lines).style(Style::default().bg(BG_PANEL)),
            inset_rect(inner, 1),
        );
    }

    fn draw_help_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = build_help_lines();
        let width = min(area.width.saturating_sub(10), 90);
        let height = min(lines.len() as u16 + 4, area.height.saturating_sub(2)).max(10);
        let popup_area = centered_rect(width, height, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("⌨️ Keyboard Reference"))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        if inner.width < 3 || inner.height < 3 {
            return;
        }

        let help_lines: Vec<Line> = lines
            .into_iter()
            .map(|(combo, desc)| {
                Line::from(vec![
                    Span::styled(combo, Style::default().fg(Color::Cyan)),
                    Span::raw("  "),
                    Span::raw(desc),
                ])
            })
            .collect();
        f.render_widget(
            Paragraph::new(help_lines)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(BG_PANEL)),
            inset_rect(inner, 1),
        );
    }

    fn draw_confirm_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let width = min(area.width.saturating_sub(20), 60).max(40);
        let height = 8u16;
        let popup_area = centered_rect(width, height, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("🗑 Confirm Deletion"))
            .border_style(Style::default().fg(Color::Red))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let task_title = self
            .pending_delete
            .as_deref()
            .and_then(|id| self.board.task(id))
            .map(|task| task.title.as_str())
            .unwrap_or("selected task");

        let choice_style = |choice: ConfirmChoice, color: Color| {
            if self.confirm_choice == choice {
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            }
        };

        let lines = vec![
            Line::from(Span::styled(
                "This action cannot be undone.",
                Style::default().fg(Color::Red),
            )),
            Line::from(Span::styled(
                format!("Delete '{}'?", task_title),
                Style::default().fg(Color::White),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("  Yes  ", choice_style(ConfirmChoice::Yes, Color::Red)),
                Span::raw("    "),
                Span::styled("  No  ", choice_style(ConfirmChoice::No, Color::Gray)),
            ]),
        ];

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Center)
                .style(Style::default().bg(BG_PANEL)),
            inset_rect(inner, 1),
        );
    }
}
