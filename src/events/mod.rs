//! Event system for decoupled inter-module communication.
//!
//! A small publish/subscribe mechanism on top of `std::sync::mpsc`. The
//! global hotkey fires outside the UI thread; its handler only publishes an
//! event here, and the dispatcher consumes it on the next frame.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Hotkey    │     │  Floating   │     │ Main window │
//! │  callback   │     │   widget    │     │  (focus)    │
//! └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()         │ publish()
//!        ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ drain()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │              Dispatcher (UI thread)                 │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The bus is owned by `AppContext`; there is no global instance.

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::AppEvent;
