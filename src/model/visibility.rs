//! Main window visibility state machine (pure Rust, no windowing).
//!
//! ```text
//!            HotkeyPressed / FloatingWidgetClicked
//!   Hidden ─────────────────────────────────────────► Visible (summoned)
//!     ▲                                                   │
//!     │  FloatingWidgetClicked (any mode)                 │
//!     │  HotkeyPressed         (HotkeyTogglesHides)       │
//!     │  FocusLost             (ExternalClickHides, summoned)
//!     └───────────────────────────────────────────────────┘
//! ```
//!
//! The controller only decides; the UI applies the returned `WindowEffect`.

use tracing::debug;

use super::config::HotkeyMode;

/// Whether the main window is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// Inputs that can change main window visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityInput {
    /// The global hotkey was pressed.
    HotkeyPressed,
    /// The floating widget received a single click.
    FloatingWidgetClicked,
    /// The main window lost keyboard focus.
    FocusLost,
}

/// What the UI must do to the main window after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEffect {
    /// Show the window and bring it to the foreground.
    ShowAndFocus,
    /// Hide the window.
    Hide,
}

/// Decides main window visibility.
#[derive(Debug, Clone)]
pub struct VisibilityController {
    state: Visibility,
    mode: HotkeyMode,
    /// Set when the window was summoned by hotkey or widget.
    summoned: bool,
}

impl VisibilityController {
    /// Initial state: visible when there is no floating widget to summon it.
    pub fn new(mode: HotkeyMode, enable_floating: bool) -> Self {
        let state = if enable_floating {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
        Self {
            state,
            mode,
            summoned: false,
        }
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn mode(&self) -> HotkeyMode {
        self.mode
    }

    /// True if the current visible period was started by hotkey or widget.
    pub fn is_summoned(&self) -> bool {
        self.summoned
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Visible
    }

    /// Change the hide behaviour; takes effect on the next input.
    pub fn set_mode(&mut self, mode: HotkeyMode) {
        self.mode = mode;
    }

    /// Apply one input and return the effect to perform, if any.
    pub fn handle(&mut self, input: VisibilityInput) -> Option<WindowEffect> {
        use HotkeyMode::*;
        use Visibility::*;
        use VisibilityInput::*;

        let effect = match (self.state, input, self.mode) {
            (Hidden, HotkeyPressed | FloatingWidgetClicked, _) => {
                self.state = Visible;
                self.summoned = true;
                Some(WindowEffect::ShowAndFocus)
            }
            (Visible, HotkeyPressed, ExternalClickHides) => None,
            (Visible, HotkeyPressed, HotkeyTogglesHides) => {
                self.state = Hidden;
                Some(WindowEffect::Hide)
            }
            (Visible, FloatingWidgetClicked, _) => {
                self.state = Hidden;
                Some(WindowEffect::Hide)
            }
            (Visible, FocusLost, ExternalClickHides) if self.summoned => {
                self.state = Hidden;
                self.summoned = false;
                Some(WindowEffect::Hide)
            }
            (Visible, FocusLost, _) | (Hidden, FocusLost, _) => None,
        };

        debug!(?input, mode = ?self.mode, state = ?self.state, ?effect, "visibility input");
        effect
    }
}
