//! Modal message boxes.
//!
//! Messages are queued and shown one at a time, oldest first.

use std::collections::VecDeque;

use eframe::egui;
use tracing::{error, info, warn};

/// Severity of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

impl MessageLevel {
    pub fn title(self) -> &'static str {
        match self {
            MessageLevel::Info => "Done",
            MessageLevel::Warning => "Warning",
            MessageLevel::Error => "Error",
        }
    }
}

/// One message waiting for the user to acknowledge it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: MessageLevel,
    pub text: String,
}

/// FIFO of pending messages.
#[derive(Debug, Default)]
pub struct MessageQueue {
    pending: VecDeque<Message>,
}

impl MessageQueue {
    pub fn push(&mut self, level: MessageLevel, text: impl Into<String>) {
        let text = text.into();
        match level {
            MessageLevel::Info => info!(message = %text, "notify user"),
            MessageLevel::Warning => warn!(message = %text, "notify user"),
            MessageLevel::Error => error!(message = %text, "notify user"),
        }
        self.pending.push_back(Message { level, text });
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(MessageLevel::Info, text);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(MessageLevel::Warning, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(MessageLevel::Error, text);
    }

    pub fn current(&self) -> Option<&Message> {
        self.pending.front()
    }

    /// Dismiss the message currently shown.
    pub fn acknowledge(&mut self) -> Option<Message> {
        self.pending.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Draw the front message; returns true while one is shown.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let Some(message) = self.current() else {
            return false;
        };

        let mut dismissed = false;
        egui::Window::new(message.level.title())
            .id(egui::Id::new("message_box"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message.text.as_str());
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.acknowledge();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_shown_in_order() {
        let mut queue = MessageQueue::default();
        queue.warning("config corrupt");
        queue.info("MCU created");

        assert_eq!(queue.current().unwrap().level, MessageLevel::Warning);
        assert_eq!(queue.acknowledge().unwrap().text, "config corrupt");
        assert_eq!(queue.current().unwrap().text, "MCU created");
        queue.acknowledge();
        assert!(queue.is_empty());
    }

    #[test]
    fn every_level_has_a_title() {
        for level in [MessageLevel::Info, MessageLevel::Warning, MessageLevel::Error] {
            assert!(!level.title().is_empty());
        }
    }
}
