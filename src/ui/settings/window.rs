//! Settings window.
//!
//! Edits a local copy of the config; the caller persists it only when the
//! user confirms.

use eframe::egui;

use crate::input::HOTKEY_LABEL;
use crate::model::{Config, HotkeyMode};
use crate::ui::dialogs::DialogResult;

#[derive(Debug, Clone)]
pub struct SettingsDialog {
    draft: Config,
}

impl SettingsDialog {
    pub fn new(current: &Config) -> Self {
        Self { draft: *current }
    }

    /// The edited config; only meaningful after `Confirmed`.
    pub fn draft(&self) -> Config {
        self.draft
    }

    pub fn show(&mut self, ctx: &egui::Context) -> DialogResult {
        let mut result = DialogResult::Open;
        egui::Window::new("Settings")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.checkbox(
                    &mut self.draft.enable_floating,
                    "Enable floating widget (applies after restart)",
                );
                ui.add_space(6.0);

                ui.group(|ui| {
                    ui.label(format!("{HOTKEY_LABEL} behaviour"));
                    for mode in [HotkeyMode::ExternalClickHides, HotkeyMode::HotkeyTogglesHides] {
                        ui.radio_value(&mut self.draft.hotkey_mode, mode, mode.label());
                    }
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        result = DialogResult::Confirmed;
                    }
                    if ui.button("Cancel").clicked() {
                        result = DialogResult::Cancelled;
                    }
                });
            });
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_starts_as_copy_of_current() {
        let current = Config {
            enable_floating: false,
            hotkey_mode: HotkeyMode::HotkeyTogglesHides,
        };
        assert_eq!(SettingsDialog::new(&current).draft(), current);
    }
}
