//! Focus-loss detection for the main window.
//!
//! Turns the per-frame focus flag of the root viewport into `FocusLost`
//! edges. Focus moving to the floating launcher is not an external click:
//! pressing the launcher would otherwise hide the window just before the
//! click toggles it back on.

/// Remembers the previous frame's focus state.
#[derive(Debug, Default, Clone, Copy)]
pub struct FocusTracker {
    was_focused: bool,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame; returns true when `FocusLost` should be published.
    ///
    /// `launcher_engaged` is true while the floating widget holds focus or
    /// the pointer is on it.
    pub fn observe(&mut self, focused: bool, launcher_engaged: bool) -> bool {
        let lost = self.was_focused && !focused && !launcher_engaged;
        self.was_focused = focused;
        lost
    }

    /// Forget the previous state, e.g. after the window was shown or hidden.
    pub fn reset(&mut self) {
        self.was_focused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_losing_focus_is_reported_once() {
        let mut tracker = FocusTracker::new();
        assert!(!tracker.observe(true, false));
        assert!(tracker.observe(false, false));
        assert!(!tracker.observe(false, false));
    }

    #[test]
    fn test_focus_moving_to_launcher_is_ignored() {
        let mut tracker = FocusTracker::new();
        tracker.observe(true, false);
        assert!(!tracker.observe(false, true));
        // Still unfocused once the launcher is released.
        assert!(!tracker.observe(false, false));
    }

    #[test]
    fn test_reset_forgets_focus() {
        let mut tracker = FocusTracker::new();
        tracker.observe(true, false);
        tracker.reset();
        assert!(!tracker.observe(false, false));
    }
}
