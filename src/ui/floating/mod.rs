//! Floating launcher.
//!
//! - drawing.rs: circular icon from an image file, solid-circle fallback
//! - widget.rs: always-on-top draggable viewport

pub mod drawing;
pub mod widget;

pub use widget::FloatingWidget;
