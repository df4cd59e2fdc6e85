//! Global hotkey registration.
//!
//! Binds Ctrl+D for the lifetime of a `HotkeyListener`. The `global-hotkey`
//! event handler runs outside the UI thread, so it only publishes
//! `AppEvent::HotkeyPressed` and wakes the UI; the dispatcher does the rest.
//! Dropping the listener unregisters the hotkey and removes the handler.

use global_hotkey::hotkey::{Code, HotKey, Modifiers};
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::events::{AppEvent, EventPublisher};

/// Human-readable name of the summon hotkey.
pub const HOTKEY_LABEL: &str = "Ctrl+D";

/// Error type for hotkey registration.
#[derive(Debug, Error)]
pub enum HotkeyError {
    /// The platform hotkey manager could not be created.
    #[error("global hotkey manager unavailable: {0}")]
    Manager(#[source] global_hotkey::Error),

    /// The combination is already taken or not supported.
    #[error("failed to register Ctrl+D: {0}")]
    Register(#[source] global_hotkey::Error),
}

/// The fixed summon hotkey.
pub fn summon_hotkey() -> HotKey {
    HotKey::new(Some(Modifiers::CONTROL), Code::KeyD)
}

/// Only presses of our own hotkey count; releases are ignored.
pub fn is_summon_press(hotkey_id: u32, event_id: u32, state: HotKeyState) -> bool {
    event_id == hotkey_id && state == HotKeyState::Pressed
}

/// Keeps the global hotkey registered while alive.
pub struct HotkeyListener {
    manager: GlobalHotKeyManager,
    hotkey: HotKey,
}

impl HotkeyListener {
    /// Register the hotkey and forward presses to `publisher`.
    ///
    /// `wake` is called after each publish so that a hidden, idle UI loop
    /// picks the event up.
    ///
    /// Must be called from the UI thread (required on macOS).
    pub fn install<W>(publisher: EventPublisher, wake: W) -> Result<Self, HotkeyError>
    where
        W: Fn() + Send + Sync + 'static,
    {
        let manager = GlobalHotKeyManager::new().map_err(HotkeyError::Manager)?;
        let hotkey = summon_hotkey();
        manager.register(hotkey).map_err(HotkeyError::Register)?;

        let hotkey_id = hotkey.id();
        GlobalHotKeyEvent::set_event_handler(Some(move |event: GlobalHotKeyEvent| {
            if is_summon_press(hotkey_id, event.id, event.state) {
                publisher.publish(AppEvent::HotkeyPressed);
                wake();
            }
        }));

        info!(hotkey = HOTKEY_LABEL, "global hotkey registered");
        Ok(Self { manager, hotkey })
    }
}

impl Drop for HotkeyListener {
    fn drop(&mut self) {
        GlobalHotKeyEvent::set_event_handler(None::<fn(GlobalHotKeyEvent)>);
        match self.manager.unregister(self.hotkey) {
            Ok(()) => debug!(hotkey = HOTKEY_LABEL, "global hotkey unregistered"),
            Err(e) => warn!(hotkey = HOTKEY_LABEL, error = %e, "failed to unregister hotkey"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summon_hotkey_is_stable() {
        assert_eq!(summon_hotkey().id(), summon_hotkey().id());
    }

    #[test]
    fn press_of_summon_hotkey_counts() {
        let id = summon_hotkey().id();
        assert!(is_summon_press(id, id, HotKeyState::Pressed));
    }

    #[test]
    fn release_is_ignored() {
        let id = summon_hotkey().id();
        assert!(!is_summon_press(id, id, HotKeyState::Released));
    }

    #[test]
    fn other_hotkeys_are_ignored() {
        let id = summon_hotkey().id();
        let other = HotKey::new(Some(Modifiers::CONTROL), Code::KeyA).id();
        assert!(!is_summon_press(id, other, HotKeyState::Pressed));
    }
}
