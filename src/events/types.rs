//! Application events for inter-module communication.
//!
//! These events are published by the hotkey callback and the UI and
//! handled by the dispatcher on the UI thread.

use crate::model::VisibilityInput;

/// Application-level events for decoupled communication between modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Input Events ===
    /// Global hotkey pressed (Ctrl+D)
    HotkeyPressed,

    /// Floating widget single-clicked
    FloatingWidgetClicked,

    /// Main window lost keyboard focus
    FocusLost,

    // === UI Events ===
    /// Rebuild the tree from disk
    RefreshRequested,

    /// Open the settings dialog
    OpenSettings,
}

impl AppEvent {
    /// Returns the visibility input carried by this event, if any.
    pub fn visibility_input(&self) -> Option<VisibilityInput> {
        match self {
            AppEvent::HotkeyPressed => Some(VisibilityInput::HotkeyPressed),
            AppEvent::FloatingWidgetClicked => Some(VisibilityInput::FloatingWidgetClicked),
            AppEvent::FocusLost => Some(VisibilityInput::FocusLost),
            AppEvent::RefreshRequested | AppEvent::OpenSettings => None,
        }
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::HotkeyPressed => "Global hotkey pressed",
            AppEvent::FloatingWidgetClicked => "Floating widget clicked",
            AppEvent::FocusLost => "Main window lost focus",
            AppEvent::RefreshRequested => "Refresh tree",
            AppEvent::OpenSettings => "Open settings dialog",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_events_map_to_visibility_inputs() {
        assert_eq!(
            AppEvent::HotkeyPressed.visibility_input(),
            Some(VisibilityInput::HotkeyPressed)
        );
        assert_eq!(
            AppEvent::FloatingWidgetClicked.visibility_input(),
            Some(VisibilityInput::FloatingWidgetClicked)
        );
        assert_eq!(
            AppEvent::FocusLost.visibility_input(),
            Some(VisibilityInput::FocusLost)
        );
    }

    #[test]
    fn test_ui_events_carry_no_visibility_input() {
        assert!(AppEvent::RefreshRequested.visibility_input().is_none());
        assert!(AppEvent::OpenSettings.visibility_input().is_none());
    }

    #[test]
    fn test_event_debug() {
        let event = AppEvent::HotkeyPressed;
        assert_eq!(format!("{:?}", event), "HotkeyPressed");
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            AppEvent::HotkeyPressed,
            AppEvent::FloatingWidgetClicked,
            AppEvent::FocusLost,
            AppEvent::RefreshRequested,
            AppEvent::OpenSettings,
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
