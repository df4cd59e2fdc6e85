//! Dialog windows.
//!
//! - entry.rs: new MCU, new category, add function
//! - message_box.rs: queued info/warning/error boxes

pub mod entry;
pub mod message_box;

pub use entry::{AddFunctionDialog, DialogResult, NewCategoryDialog, NewMcuDialog};
pub use message_box::{Message, MessageLevel, MessageQueue};
