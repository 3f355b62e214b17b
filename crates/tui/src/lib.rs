pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod tui;

pub use taskboard_core as core;
pub use taskboard_core::drag;
pub use taskboard_core::model;
pub use taskboard_core::query;

pub use taskboard_core::AppConfig;
