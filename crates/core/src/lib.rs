//! Task state management and drag-reordering engine for the taskboard.

pub mod config;
pub mod drag;
pub mod form;
pub mod model;
pub mod provider;
pub mod query;
pub mod seeds;
pub mod store;
pub mod telemetry;

pub use config::AppConfig;
pub use drag::{DragSession, DropOutcome, DropTarget};
pub use form::{FormField, FormOutcome, TaskForm};
pub use model::*;
pub use provider::TaskBoard;
pub use query::TaskStats;
pub use store::{Action, BoardState};
