//! HAL function browser.
//!
//! A desktop reference browser for hardware-abstraction-layer notes, laid
//! out as MCU → category → function → detail and stored as one JSON file
//! per category. A floating launcher and a global hotkey summon the main
//! window.
//!
//! Everything outside `ui` is free of windowing code so it can be tested
//! as plain unit and integration tests.

pub mod app;
pub mod events;
pub mod handlers;
pub mod input;
pub mod model;
pub mod storage;
pub mod ui;

// Re-export the types most callers need
pub use app::{AppContext, Startup};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::{Config, HotkeyMode, TreeItem, VisibilityController};
pub use storage::{ConfigStore, FunctionMap, FunctionRepository};

use model::constants::FLOATING_MARGIN;

/// Trim a user-supplied MCU/category name and check that it is usable as a
/// single path component.
///
/// Returns the trimmed name, or the reason it was rejected.
pub fn validate_name(name: &str) -> Result<&str, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("must not be blank");
    }
    if name == "." || name == ".." {
        return Err("must not be a relative path");
    }
    if name.contains(['/', '\\']) {
        return Err("must not contain path separators");
    }
    Ok(name)
}

/// Top-left position of the floating widget: near the bottom-right corner
/// of a monitor, never off-screen to the top/left.
pub fn floating_origin(monitor_width: f32, monitor_height: f32) -> (f32, f32) {
    (
        (monitor_width - FLOATING_MARGIN).max(0.0),
        (monitor_height - FLOATING_MARGIN).max(0.0),
    )
}
