//! Lightweight record of board activity, mirrored to `tracing` at debug level.

#[cfg(feature = "telemetry")]
use parking_lot::Mutex;

use crate::drag::DropOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    BoardLoaded { tasks: usize },
    ActionApplied { action: &'static str, changed: bool },
    DropResolved { task_id: String, outcome: DropOutcome },
    InputRejected(String),
}

#[derive(Debug, Default)]
pub struct Handle {
    #[cfg(feature = "telemetry")]
    events: Mutex<Vec<Event>>,
}

impl Handle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: Event) {
        #[cfg(feature = "telemetry")]
        {
            match &event {
                Event::BoardLoaded { tasks } => {
                    tracing::debug!(tasks, "board telemetry loaded")
                }
                Event::ActionApplied { action, changed } => {
                    tracing::debug!(action, changed, "board telemetry action applied")
                }
                Event::DropResolved { task_id, outcome } => tracing::debug!(
                    task_id = task_id.as_str(),
                    outcome = ?outcome,
                    "board telemetry drop resolved"
                ),
                Event::InputRejected(reason) => {
                    tracing::debug!(reason = reason.as_str(), "board telemetry input rejected")
                }
            }
            self.events.lock().push(event);
        }
        #[cfg(not(feature = "telemetry"))]
        {
            let _ = event;
        }
    }

    pub fn is_enabled(&self) -> bool {
        cfg!(feature = "telemetry")
    }

    pub fn events(&self) -> Vec<Event> {
        #[cfg(feature = "telemetry")]
        {
            self.events.lock().clone()
        }
        #[cfg(not(feature = "telemetry"))]
        {
            Vec::new()
        }
    }
}
