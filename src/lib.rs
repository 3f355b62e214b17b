pub use taskboard_tui::cli;
pub use taskboard_tui::commands;
pub use taskboard_tui::config;
pub use taskboard_tui::logging;
pub use taskboard_tui::tui;
pub use taskboard_tui::AppConfig;

pub use taskboard_core as core;
pub use taskboard_core::drag;
pub use taskboard_core::model;
pub use taskboard_core::query;
pub use taskboard_core::TaskBoard;
