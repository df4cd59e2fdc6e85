//! Main browser window.
//!
//! Toolbar, catalog tree on the left, read-only detail pane on the right.
//! Each frame drains the event bus first and applies the resulting window
//! effects before drawing anything.

use std::time::Duration;

use eframe::egui;
use tracing::{debug, info, warn};

use super::clipboard::ClipboardService;
use super::dialogs::{
    AddFunctionDialog, DialogResult, MessageQueue, NewCategoryDialog, NewMcuDialog,
};
use super::floating::FloatingWidget;
use super::settings::SettingsDialog;
use super::tree_view::{show_tree, TreeAction};
use crate::app::{AppContext, Startup};
use crate::events::AppEvent;
use crate::handlers::{dispatch_events, FocusTracker};
use crate::input::{HotkeyListener, HOTKEY_LABEL};
use crate::model::constants::{HIDDEN_POLL_MS, TREE_PANEL_WIDTH};
use crate::model::{load_detail, CatalogTree, Config, TreeItem, WindowEffect};

enum ActiveDialog {
    NewMcu(NewMcuDialog),
    NewCategory(NewCategoryDialog),
    AddFunction(AddFunctionDialog),
    Settings(SettingsDialog),
}

pub struct BrowserApp {
    context: AppContext,
    tree: CatalogTree,
    selected: Option<TreeItem>,
    detail: String,
    dialog: Option<ActiveDialog>,
    messages: MessageQueue,
    floating: Option<FloatingWidget>,
    clipboard: ClipboardService,
    // Dropped with the app, which unregisters the hotkey.
    _hotkey: Option<HotkeyListener>,
    focus: FocusTracker,
}

impl BrowserApp {
    pub fn new(cc: &eframe::CreationContext<'_>, startup: Startup) -> Self {
        let Startup { context, warnings } = startup;
        let mut messages = MessageQueue::default();
        for warning in warnings {
            messages.warning(warning);
        }

        let egui_ctx = cc.egui_ctx.clone();
        let hotkey = match HotkeyListener::install(context.publisher(), move || {
            egui_ctx.request_repaint()
        }) {
            Ok(listener) => Some(listener),
            Err(e) => {
                warn!(error = %e, "continuing without global hotkey");
                messages.error(format!("{e}. {HOTKEY_LABEL} will not work this session."));
                None
            }
        };

        let floating = context
            .config()
            .enable_floating
            .then(|| FloatingWidget::new(&context.icon_path(), context.publisher()));

        let mut app = Self {
            context,
            tree: CatalogTree::default(),
            selected: None,
            detail: String::new(),
            dialog: None,
            messages,
            floating,
            clipboard: ClipboardService::new(),
            _hotkey: hotkey,
            focus: FocusTracker::new(),
        };
        app.refresh();
        app
    }

    /// Rebuild the tree from disk and re-read the selected detail.
    fn refresh(&mut self) {
        self.tree = CatalogTree::load(self.context.repository());
        for warning in std::mem::take(&mut self.tree.warnings) {
            self.messages.warning(warning);
        }
        debug!(
            mcus = self.tree.mcus.len(),
            functions = self.tree.function_count(),
            "tree refreshed"
        );
        if let Some(item) = self.selected.clone() {
            self.select(item);
        }
    }

    fn select(&mut self, item: TreeItem) {
        match load_detail(self.context.repository(), &item) {
            Ok(detail) => self.detail = detail.unwrap_or_default(),
            Err(e) => {
                self.detail.clear();
                self.messages.warning(e.to_string());
            }
        }
        self.selected = Some(item);
    }

    fn selected_mcu(&self) -> Option<&str> {
        self.selected.as_ref().map(TreeItem::mcu)
    }

    fn selected_category(&self) -> Option<&str> {
        match self.selected.as_ref()? {
            TreeItem::Category { name, .. } => Some(name),
            TreeItem::Function { category, .. } => Some(category),
            TreeItem::Mcu(_) => None,
        }
    }

    // ===================== Events =====================

    fn process_events(&mut self, ctx: &egui::Context) {
        let outcome = dispatch_events(&mut self.context);
        if outcome.is_empty() {
            return;
        }

        if let Some(effect) = outcome.final_effect() {
            apply_window_effect(ctx, effect);
            self.focus.reset();
        }
        if outcome.refresh {
            self.refresh();
        }
        if outcome.open_settings {
            self.open_settings();
        }
    }

    fn track_focus(&mut self, ctx: &egui::Context) {
        let focused = ctx.input(|i| i.viewport().focused).unwrap_or(false);
        let launcher_engaged = self.floating.as_ref().is_some_and(FloatingWidget::is_engaged);
        if self.focus.observe(focused, launcher_engaged) && self.context.visibility().is_visible() {
            self.context.publisher().publish(AppEvent::FocusLost);
            ctx.request_repaint();
        }
    }

    // ===================== Toolbar =====================

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("New MCU").clicked() {
                self.dialog = Some(ActiveDialog::NewMcu(NewMcuDialog::default()));
            }
            if ui.button("New Category").clicked() {
                self.open_new_category();
            }
            if ui.button("Add Function").clicked() {
                self.open_add_function();
            }
            ui.separator();
            if ui.button("Refresh").clicked() {
                self.context
                    .publisher()
                    .publish(AppEvent::RefreshRequested);
            }
            if ui.button("Settings").clicked() {
                self.context
                    .publisher()
                    .publish(AppEvent::OpenSettings);
            }
        });
    }

    fn open_new_category(&mut self) {
        let mcus = self.tree.mcu_names();
        match NewCategoryDialog::new(mcus, self.selected_mcu()) {
            Some(dialog) => self.dialog = Some(ActiveDialog::NewCategory(dialog)),
            None => self.messages.warning("Please create an MCU first."),
        }
    }

    fn open_add_function(&mut self) {
        let mcus = self.tree.mcu_names();
        if self.tree.mcus.iter().all(|m| m.categories.is_empty()) && !mcus.is_empty() {
            self.messages.warning("Please create a category first.");
            return;
        }
        let preselect = self
            .selected_mcu()
            .map(|mcu| (mcu, self.selected_category()));
        match AddFunctionDialog::new(self.context.repository(), mcus, preselect) {
            Some(dialog) => self.dialog = Some(ActiveDialog::AddFunction(dialog)),
            None => self.messages.warning("Please create an MCU first."),
        }
    }

    fn open_settings(&mut self) {
        self.dialog = Some(ActiveDialog::Settings(SettingsDialog::new(self.context.config())));
    }

    // ===================== Dialogs =====================

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(mut dialog) = self.dialog.take() else {
            return;
        };

        let result = match &mut dialog {
            ActiveDialog::NewMcu(d) => d.show(ctx),
            ActiveDialog::NewCategory(d) => d.show(ctx),
            ActiveDialog::AddFunction(d) => d.show(ctx, self.context.repository()),
            ActiveDialog::Settings(d) => d.show(ctx),
        };

        match result {
            DialogResult::Open => self.dialog = Some(dialog),
            DialogResult::Cancelled => debug!("dialog cancelled"),
            DialogResult::Confirmed => self.confirm(dialog),
        }
    }

    fn confirm(&mut self, dialog: ActiveDialog) {
        let repo = self.context.repository();
        let outcome = match &dialog {
            ActiveDialog::NewMcu(d) => d.submit(repo),
            ActiveDialog::NewCategory(d) => d.submit(repo),
            ActiveDialog::AddFunction(d) => d.submit(repo),
            ActiveDialog::Settings(d) => {
                self.save_settings(d.draft());
                return;
            }
        };

        match outcome {
            Ok(text) => {
                self.messages.info(text);
                self.refresh();
            }
            Err(e) if e.is_validation() => {
                self.messages.warning(e.to_string());
                self.dialog = Some(dialog);
            }
            Err(e) => self.messages.error(e.to_string()),
        }
    }

    fn save_settings(&mut self, config: Config) {
        match self.context.update_config(config) {
            Ok(()) => {
                info!(?config, "settings saved");
                self.messages
                    .info("Settings saved. Floating widget changes apply after restart.");
            }
            Err(e) => self.messages.error(e.to_string()),
        }
    }

    // ===================== Panels =====================

    fn tree_panel(&mut self, ui: &mut egui::Ui) {
        let action = egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| show_tree(ui, &self.tree, self.selected.as_ref()))
            .inner;

        match action {
            Some(TreeAction::Select(item)) => self.select(item),
            Some(TreeAction::CopySignature(signature)) => {
                if let Err(e) = self.clipboard.copy_text(&signature) {
                    self.messages.error(format!("Could not copy to clipboard: {e}"));
                }
            }
            None => {}
        }
    }

    fn detail_panel(&mut self, ui: &mut egui::Ui) {
        if let Some(item) = &self.selected {
            ui.heading(item.label());
            ui.separator();
        }
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.detail.as_str())
                        .code_editor()
                        .desired_width(f32::INFINITY),
                );
            });
    }
}

fn apply_window_effect(ctx: &egui::Context, effect: WindowEffect) {
    debug!(?effect, "window effect");
    match effect {
        WindowEffect::ShowAndFocus => {
            ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
            ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(false));
            ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
        }
        WindowEffect::Hide => ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false)),
    }
}

impl eframe::App for BrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events(ctx);

        if let Some(floating) = &mut self.floating {
            floating.show(ctx);
        }

        // Clicks published by the floating widget this frame.
        self.process_events(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar(ui));
        egui::SidePanel::left("tree")
            .default_width(TREE_PANEL_WIDTH)
            .resizable(true)
            .show(ctx, |ui| self.tree_panel(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.detail_panel(ui));

        self.show_dialog(ctx);
        self.messages.show(ctx);

        self.track_focus(ctx);

        if !self.context.visibility().is_visible() {
            ctx.request_repaint_after(Duration::from_millis(HIDDEN_POLL_MS));
        }
    }
}
