//! Application-wide shared state.
//!
//! `AppContext` is created at startup and handed to the dispatcher and the
//! UI layer; nothing here is global.

pub mod context;

pub use context::{resolve_data_dir, AppContext, Startup};
