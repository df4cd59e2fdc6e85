//! Floating launcher window.
//!
//! A borderless, always-on-top, circular viewport near the bottom-right
//! corner of the monitor. Dragging moves it; a single click publishes
//! `AppEvent::FloatingWidgetClicked`.

use std::path::Path;

use eframe::egui;
use tracing::debug;

use super::drawing::load_icon;
use crate::events::{AppEvent, EventPublisher};
use crate::floating_origin;
use crate::model::constants::FLOATING_SIZE;

pub struct FloatingWidget {
    viewport_id: egui::ViewportId,
    icon: egui::ColorImage,
    texture: Option<egui::TextureHandle>,
    placed: bool,
    engaged: bool,
    publisher: EventPublisher,
}

impl FloatingWidget {
    pub fn new(icon_path: &Path, publisher: EventPublisher) -> Self {
        Self {
            viewport_id: egui::ViewportId::from_hash_of("floating_widget"),
            icon: load_icon(icon_path, FLOATING_SIZE),
            texture: None,
            placed: false,
            engaged: false,
            publisher,
        }
    }

    /// True while the widget has focus or the pointer is on it, as of the
    /// last `show`.
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Draw the widget viewport; call once per frame from the root viewport.
    pub fn show(&mut self, ctx: &egui::Context) {
        let size = FLOATING_SIZE as f32;
        let builder = egui::ViewportBuilder::default()
            .with_title("HAL launcher")
            .with_inner_size([size, size])
            .with_resizable(false)
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top()
            .with_taskbar(false);

        ctx.show_viewport_immediate(self.viewport_id, builder, |ctx, _class| {
            if !self.placed {
                if let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) {
                    let (x, y) = floating_origin(monitor.x, monitor.y);
                    ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(x, y)));
                    self.placed = true;
                }
            }

            let focused = ctx.input(|i| i.viewport().focused).unwrap_or(false);

            let icon = &self.icon;
            let texture = self.texture.get_or_insert_with(|| {
                ctx.load_texture("floating_icon", icon.clone(), egui::TextureOptions::LINEAR)
            });

            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    let rect = ui.max_rect();
                    let response = ui.interact(
                        rect,
                        egui::Id::new("floating_widget_area"),
                        egui::Sense::click_and_drag(),
                    );
                    ui.painter().image(
                        texture.id(),
                        rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );

                    self.engaged = focused
                        || response.contains_pointer()
                        || response.is_pointer_button_down_on();

                    if response.drag_started() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
                    } else if response.clicked() {
                        debug!("floating widget clicked");
                        self.publisher.publish(AppEvent::FloatingWidgetClicked);
                    }
                });
        });
    }
}
