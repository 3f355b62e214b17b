use std::time::Duration;

pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) const TICK_RATE: Duration = Duration::from_millis(100);
pub(crate) const STATUS_TTL: Duration = Duration::from_secs(5);

pub(crate) const DRAG_HANDLE: &str = "⠿";
pub(crate) const PLACEHOLDER_LABEL: &str = "No tasks here yet. Drop one to move it.";

pub(crate) const STATUS_FORM_CREATE: &str =
    "New task: Tab/↑/↓ switch field • ←/→ importance • Enter save • Esc cancel";
pub(crate) const STATUS_FORM_UPDATE: &str =
    "Editing task: Tab/↑/↓ switch field • ←/→ importance • Enter update • Esc cancel";
pub(crate) const STATUS_DRAGGING: &str =
    "Dragging: ↑/↓ pick a spot • ←/→ switch column • Enter/Space drop • Esc cancel";
pub(crate) const STATUS_HELP: &str = "Keyboard reference • Enter/Esc to close";
pub(crate) const STATUS_CONFIRM_DELETE: &str =
    "Confirm deletion • arrows choose, Enter confirms, Esc cancels";
