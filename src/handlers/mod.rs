//! Event handlers and dispatching.
//!
//! This module contains the event dispatcher that processes events
//! from the event bus and decides what the UI should do, and the focus
//! tracker that produces `FocusLost` events.

pub mod dispatcher;
pub mod focus;

pub use dispatcher::{dispatch_events, DispatchOutcome};
pub use focus::FocusTracker;
