//! User interface module.
//!
//! ## browser.rs
//! - BrowserApp: main window, toolbar, event processing
//!
//! ## dialogs/
//! - entry.rs: new MCU, new category, add function
//! - message_box.rs: queued message boxes
//!
//! ## floating/
//! - drawing.rs: circular icon
//! - widget.rs: always-on-top launcher viewport
//!
//! ## settings/
//! - window.rs: settings dialog
//!
//! ## tree_view.rs, clipboard.rs
//! - catalog tree panel and "Copy function name"

pub mod browser;
pub mod clipboard;
pub mod dialogs;
pub mod floating;
pub mod settings;
pub mod tree_view;

pub use browser::BrowserApp;
