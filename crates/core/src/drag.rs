//! Drag-and-drop protocol for moving tasks between and within partitions.
//!
//! Presentation code forwards raw gestures (handle press, drag start, enter,
//! over, leave, drop, end) to a [`DragSession`]. The session tracks which item
//! may be dragged and what is being hovered. It never touches the board
//! itself: a completed drop yields a [`DropRequest`] that the board resolves
//! against its current tasks with [`resolve_drop`].

use std::collections::HashMap;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::model::{Partition, Task};
use crate::query;
use crate::store::Action;

/// Delay before a drag that ended without a drop reports itself as canceled.
pub const CANCEL_FEEDBACK_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HandleState {
    #[default]
    Idle,
    Armed,
    Dragging,
}

/// Gate for a single draggable item. Only a press on the item's handle arms it,
/// so clicks on the title or buttons never start a drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragHandle {
    state: HandleState,
}

impl DragHandle {
    pub fn state(&self) -> HandleState {
        self.state
    }

    pub fn is_draggable(&self) -> bool {
        matches!(self.state, HandleState::Armed | HandleState::Dragging)
    }

    pub fn press(&mut self) {
        if self.state == HandleState::Idle {
            self.state = HandleState::Armed;
        }
    }

    /// Pointer left the handle or the handle lost focus. An in-flight drag is unaffected.
    pub fn disarm(&mut self) {
        if self.state == HandleState::Armed {
            self.state = HandleState::Idle;
        }
    }

    pub fn drag_start(&mut self) -> Result<(), DragError> {
        match self.state {
            HandleState::Armed => {
                self.state = HandleState::Dragging;
                Ok(())
            }
            HandleState::Idle => Err(DragError::NotArmed),
            HandleState::Dragging => Err(DragError::AlreadyDragging),
        }
    }

    pub fn drag_end(&mut self) {
        self.state = HandleState::Idle;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragError {
    #[error("Press the drag handle before dragging")]
    NotArmed,
    #[error("A drag is already in progress")]
    AlreadyDragging,
}

/// A partition's drop zone: either a specific task or the placeholder shown
/// when the partition is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropTarget {
    pub partition: Partition,
    pub task_id: Option<String>,
}

impl DropTarget {
    pub fn task(partition: Partition, id: impl Into<String>) -> Self {
        Self {
            partition,
            task_id: Some(id.into()),
        }
    }

    pub fn placeholder(partition: Partition) -> Self {
        Self {
            partition,
            task_id: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.task_id.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    None,
    Move,
}

/// What the presentation layer must do with the native event it forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDisposition {
    pub prevent_default: bool,
    pub stop_propagation: bool,
    pub drop_effect: DropEffect,
}

impl EventDisposition {
    /// The event belongs to an active drag; suppress the default and stop bubbling.
    pub const CONSUMED: Self = Self {
        prevent_default: true,
        stop_propagation: true,
        drop_effect: DropEffect::Move,
    };
    /// A drag start that is not allowed; the default action must be cancelled.
    pub const REJECTED: Self = Self {
        prevent_default: true,
        stop_propagation: false,
        drop_effect: DropEffect::None,
    };
    pub const IGNORED: Self = Self {
        prevent_default: false,
        stop_propagation: false,
        drop_effect: DropEffect::None,
    };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragStatus {
    #[default]
    Idle,
    InProgress,
    DropAvailable,
    LeftTarget,
    Dropped,
    Canceled,
}

impl DragStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DragStatus::Idle => "Drag to start",
            DragStatus::InProgress => "Drag in process",
            DragStatus::DropAvailable => "Drop available",
            DragStatus::LeftTarget => "Drag in process (drop was available)",
            DragStatus::Dropped => "Drop done",
            DragStatus::Canceled => "Drag canceled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropRequest {
    pub source: String,
    pub target: DropTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropHandling {
    pub disposition: EventDisposition,
    pub request: Option<DropRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveDrag {
    source: String,
    origin: Partition,
}

/// Interaction state for one board: per-item handles plus the gesture in flight.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    handles: HashMap<String, DragHandle>,
    active: Option<ActiveDrag>,
    hover: Option<DropTarget>,
    status: DragStatus,
    dropped: bool,
    cancel_at: Option<Instant>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_state(&self, id: &str) -> HandleState {
        self.handles
            .get(id)
            .map(DragHandle::state)
            .unwrap_or_default()
    }

    pub fn press(&mut self, id: &str) {
        self.handles.entry(id.to_string()).or_default().press();
    }

    pub fn mouse_out(&mut self, id: &str) {
        self.disarm(id);
    }

    pub fn blur(&mut self, id: &str) {
        self.disarm(id);
    }

    fn disarm(&mut self, id: &str) {
        if let Some(handle) = self.handles.get_mut(id) {
            handle.disarm();
            if handle.state() == HandleState::Idle {
                self.handles.remove(id);
            }
        }
    }

    pub fn start(&mut self, task: &Task) -> Result<(), DragError> {
        if self.active.is_some() {
            return Err(DragError::AlreadyDragging);
        }
        let handle = self.handles.entry(task.id.clone()).or_default();
        if let Err(err) = handle.drag_start() {
            self.handles.remove(&task.id);
            return Err(err);
        }

        self.active = Some(ActiveDrag {
            source: task.id.clone(),
            origin: task.partition(),
        });
        self.hover = None;
        self.dropped = false;
        self.cancel_at = None;
        self.status = DragStatus::InProgress;
        tracing::debug!(task_id = task.id.as_str(), "drag started");
        Ok(())
    }

    pub fn enter(&mut self, target: DropTarget) -> EventDisposition {
        if self.active.is_none() {
            return EventDisposition::IGNORED;
        }
        self.hover = Some(target);
        EventDisposition::CONSUMED
    }

    pub fn over(&mut self, target: DropTarget) -> EventDisposition {
        if self.active.is_none() {
            return EventDisposition::IGNORED;
        }
        self.hover = Some(target);
        self.status = DragStatus::DropAvailable;
        EventDisposition::CONSUMED
    }

    pub fn leave(&mut self, target: &DropTarget) -> EventDisposition {
        if self.active.is_none() {
            return EventDisposition::IGNORED;
        }
        if self.hover.as_ref() == Some(target) {
            self.hover = None;
            self.status = DragStatus::LeftTarget;
        }
        EventDisposition {
            prevent_default: false,
            ..EventDisposition::CONSUMED
        }
    }

    /// Consumes the gesture, so a second delivery of the same drop (e.g. a
    /// bubbled one from a nested target) produces no request.
    pub fn drop(&mut self, target: DropTarget) -> DropHandling {
        let Some(active) = self.active.take() else {
            return DropHandling {
                disposition: EventDisposition::CONSUMED,
                request: None,
            };
        };
        self.hover = None;
        self.dropped = true;
        self.status = DragStatus::Dropped;
        tracing::debug!(
            task_id = active.source.as_str(),
            origin = %active.origin,
            target = %target.partition,
            "drop received"
        );
        DropHandling {
            disposition: EventDisposition::CONSUMED,
            request: Some(DropRequest {
                source: active.source,
                target,
            }),
        }
    }

    /// Gesture finished. Without a prior drop nothing is mutated; the canceled
    /// status appears after [`CANCEL_FEEDBACK_DELAY`]. Ignored when no gesture
    /// is in flight.
    pub fn end(&mut self, now: Instant) {
        let source = match self.active.take() {
            Some(active) => Some(active.source),
            None => self
                .handles
                .iter()
                .find(|(_, handle)| handle.state() == HandleState::Dragging)
                .map(|(id, _)| id.clone()),
        };
        let Some(id) = source else {
            return;
        };
        self.handles.remove(&id);
        self.hover = None;
        if !self.dropped {
            self.cancel_at = Some(now + CANCEL_FEEDBACK_DELAY);
            tracing::debug!("drag ended without a drop");
        }
        self.dropped = false;
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.cancel_at {
            if now >= at {
                self.cancel_at = None;
                self.status = DragStatus::Canceled;
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn source(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.source.as_str())
    }

    pub fn origin(&self) -> Option<Partition> {
        self.active.as_ref().map(|active| active.origin)
    }

    pub fn hovering(&self) -> Option<&DropTarget> {
        self.hover.as_ref()
    }

    pub fn is_hovering(&self, target: &DropTarget) -> bool {
        self.hover.as_ref() == Some(target)
    }

    pub fn status(&self) -> DragStatus {
        self.status
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropResolution {
    /// Source lives in the other partition: flip completion, keep its slot.
    Move { id: String, done: bool },
    /// Source and target share a partition at different indices.
    Reorder { id: String, target: String },
    Unchanged,
}

impl DropResolution {
    pub fn into_action(self) -> Option<Action> {
        match self {
            DropResolution::Move { id, done } => Some(Action::UpdateTaskCompletion { id, done }),
            DropResolution::Reorder { id, target } => Some(Action::ReorderTask { id, target }),
            DropResolution::Unchanged => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Moved,
    Reordered,
    Unchanged,
}

pub fn resolve_drop(tasks: &[Task], source: &str, target: &DropTarget) -> DropResolution {
    if !tasks.iter().any(|task| task.id == source) {
        return DropResolution::Unchanged;
    }

    let group = query::partition(tasks, target.partition);
    let Some(from) = group.iter().position(|task| task.id == source) else {
        return DropResolution::Move {
            id: source.to_string(),
            done: target.partition.is_done(),
        };
    };

    let Some(target_id) = target.task_id.as_deref() else {
        return DropResolution::Unchanged;
    };
    match group.iter().position(|task| task.id == target_id) {
        Some(to) if to != from => DropResolution::Reorder {
            id: source.to_string(),
            target: target_id.to_string(),
        },
        _ => DropResolution::Unchanged,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Importance;

    fn task(id: &str, done: bool) -> Task {
        Task {
            id: id.into(),
            title: id.into(),
            category: "Misc".into(),
            importance: Importance::Normal,
            done,
        }
    }

    fn board() -> Vec<Task> {
        vec![task("A", false), task("B", false), task("C", true)]
    }

    #[test]
    fn handle_requires_press_before_drag() {
        let mut handle = DragHandle::default();
        assert_eq!(handle.drag_start(), Err(DragError::NotArmed));

        handle.press();
        assert!(handle.is_draggable());
        handle.disarm();
        assert_eq!(handle.state(), HandleState::Idle);

        handle.press();
        assert_eq!(handle.drag_start(), Ok(()));
        handle.disarm();
        assert_eq!(handle.state(), HandleState::Dragging);
        handle.drag_end();
        assert_eq!(handle.state(), HandleState::Idle);
    }

    #[test]
    fn session_rejects_unarmed_start() {
        let mut session = DragSession::new();
        let a = task("A", false);
        assert_eq!(session.start(&a), Err(DragError::NotArmed));
        assert!(!session.is_dragging());
        assert_eq!(session.handle_state("A"), HandleState::Idle);

        session.press("A");
        session.blur("A");
        assert_eq!(session.start(&a), Err(DragError::NotArmed));

        session.press("A");
        assert_eq!(session.handle_state("A"), HandleState::Armed);
        session.mouse_out("A");
        assert_eq!(session.handle_state("A"), HandleState::Idle);
        assert_eq!(session.start(&a), Err(DragError::NotArmed));
    }

    #[test]
    fn second_start_while_dragging_is_rejected() {
        let mut session = DragSession::new();
        let a = task("A", false);
        let b = task("B", false);
        session.press("A");
        session.start(&a).unwrap();
        session.press("B");
        assert_eq!(session.start(&b), Err(DragError::AlreadyDragging));
        assert_eq!(session.source(), Some("A"));
    }

    #[test]
    fn hover_tracks_enter_over_and_leave() {
        let mut session = DragSession::new();
        let target = DropTarget::task(Partition::Completed, "C");
        assert_eq!(session.over(target.clone()), EventDisposition::IGNORED);

        session.press("A");
        session.start(&task("A", false)).unwrap();
        assert_eq!(session.enter(target.clone()), EventDisposition::CONSUMED);
        let over = session.over(target.clone());
        assert!(over.prevent_default && over.stop_propagation);
        assert_eq!(over.drop_effect, DropEffect::Move);
        assert!(session.is_hovering(&target));
        assert_eq!(session.status(), DragStatus::DropAvailable);

        let other = DropTarget::task(Partition::Completed, "B");
        session.leave(&other);
        assert!(session.is_hovering(&target));

        let leave = session.leave(&target);
        assert!(!leave.prevent_default);
        assert!(session.hovering().is_none());
        assert_eq!(session.status(), DragStatus::LeftTarget);
    }

    #[test]
    fn drop_is_consumed_once() {
        let mut session = DragSession::new();
        session.press("B");
        session.start(&task("B", false)).unwrap();
        let target = DropTarget::task(Partition::Pending, "A");
        let first = session.drop(target.clone());
        assert_eq!(first.disposition, EventDisposition::CONSUMED);
        assert_eq!(
            first.request,
            Some(DropRequest {
                source: "B".into(),
                target: target.clone(),
            })
        );
        let bubbled = session.drop(DropTarget::placeholder(Partition::Pending));
        assert!(bubbled.request.is_none());

        let now = Instant::now();
        session.end(now);
        session.tick(now + CANCEL_FEEDBACK_DELAY * 2);
        assert_eq!(session.status(), DragStatus::Dropped);
        assert_eq!(session.handle_state("B"), HandleState::Idle);
    }

    #[test]
    fn repeated_end_after_drop_keeps_drop_status() {
        let mut session = DragSession::new();
        session.press("A");
        session.start(&task("A", false)).unwrap();
        session.drop(DropTarget::task(Partition::Pending, "A"));

        let now = Instant::now();
        session.end(now);
        session.end(now);
        session.tick(now + CANCEL_FEEDBACK_DELAY);
        assert_eq!(session.status(), DragStatus::Dropped);
    }

    #[test]
    fn end_without_any_gesture_is_ignored() {
        let mut session = DragSession::new();
        let now = Instant::now();
        session.end(now);
        session.tick(now + CANCEL_FEEDBACK_DELAY);
        assert_eq!(session.status(), DragStatus::Idle);

        session.press("A");
        session.end(now);
        session.tick(now + CANCEL_FEEDBACK_DELAY);
        assert_eq!(session.status(), DragStatus::Idle);
        assert_eq!(session.handle_state("A"), HandleState::Armed);
    }

    #[test]
    fn end_without_drop_reports_cancel_after_delay() {
        let mut session = DragSession::new();
        session.press("A");
        session.start(&task("A", false)).unwrap();
        session.over(DropTarget::placeholder(Partition::Completed));

        let now = Instant::now();
        session.end(now);
        assert!(!session.is_dragging());
        assert!(session.hovering().is_none());
        assert_eq!(session.handle_state("A"), HandleState::Idle);

        session.tick(now + Duration::from_millis(10));
        assert_ne!(session.status(), DragStatus::Canceled);
        session.tick(now + CANCEL_FEEDBACK_DELAY);
        assert_eq!(session.status(), DragStatus::Canceled);
    }

    #[test]
    fn resolve_cross_partition_is_a_move() {
        let tasks = board();
        let resolution = resolve_drop(&tasks, "A", &DropTarget::task(Partition::Completed, "C"));
        assert_eq!(
            resolution,
            DropResolution::Move {
                id: "A".into(),
                done: true,
            }
        );
    }

    #[test]
    fn resolve_placeholder_of_empty_partition_is_a_move() {
        let tasks = vec![task("A", false), task("B", false)];
        let resolution = resolve_drop(&tasks, "B", &DropTarget::placeholder(Partition::Completed));
        assert_eq!(
            resolution.into_action(),
            Some(Action::UpdateTaskCompletion {
                id: "B".into(),
                done: true,
            })
        );
    }

    #[test]
    fn resolve_within_partition() {
        let tasks = board();
        assert_eq!(
            resolve_drop(&tasks, "B", &DropTarget::task(Partition::Pending, "A")),
            DropResolution::Reorder {
                id: "B".into(),
                target: "A".into(),
            }
        );
        assert_eq!(
            resolve_drop(&tasks, "A", &DropTarget::task(Partition::Pending, "A")),
            DropResolution::Unchanged
        );
        assert_eq!(
            resolve_drop(&tasks, "A", &DropTarget::placeholder(Partition::Pending)),
            DropResolution::Unchanged
        );
    }

    #[test]
    fn resolve_unknown_source_or_stale_target_is_unchanged() {
        let tasks = board();
        assert_eq!(
            resolve_drop(&tasks, "Z", &DropTarget::placeholder(Partition::Completed)),
            DropResolution::Unchanged
        );
        assert_eq!(
            resolve_drop(&tasks, "A", &DropTarget::task(Partition::Pending, "gone")),
            DropResolution::Unchanged
        );
    }
}
