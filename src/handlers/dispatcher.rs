//! Event dispatcher for handling application events.
//!
//! The dispatcher drains the event bus once per frame and turns events into
//! visibility transitions and UI requests.
//!
//! ```text
//! EventBus::drain() → dispatch_events() → VisibilityController → WindowEffect
//! ```
//!
//! It never touches the window itself; the UI applies the outcome.

use tracing::debug;

use crate::app::AppContext;
use crate::events::AppEvent;
use crate::model::WindowEffect;

/// What the UI must do after a dispatch cycle.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Window effects in the order they were decided.
    pub effects: Vec<WindowEffect>,
    /// Rebuild the tree from disk.
    pub refresh: bool,
    /// Open the settings dialog.
    pub open_settings: bool,
}

impl DispatchOutcome {
    /// The effect that leaves the window in its final state, if any.
    pub fn final_effect(&self) -> Option<WindowEffect> {
        self.effects.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && !self.refresh && !self.open_settings
    }
}

/// Dispatch all pending events from the context's bus.
pub fn dispatch_events(context: &mut AppContext) -> DispatchOutcome {
    let events = context.drain_events();
    let mut outcome = DispatchOutcome::default();

    for event in events {
        dispatch_single_event(context, &event, &mut outcome);
    }

    outcome
}

/// Dispatch a single event.
fn dispatch_single_event(context: &mut AppContext, event: &AppEvent, outcome: &mut DispatchOutcome) {
    debug!(event = event.description(), "dispatch");

    if let Some(input) = event.visibility_input() {
        if let Some(effect) = context.visibility_mut().handle(input) {
            outcome.effects.push(effect);
        }
        return;
    }

    match event {
        AppEvent::RefreshRequested => outcome.refresh = true,
        AppEvent::OpenSettings => outcome.open_settings = true,
        AppEvent::HotkeyPressed | AppEvent::FloatingWidgetClicked | AppEvent::FocusLost => {}
    }
}
