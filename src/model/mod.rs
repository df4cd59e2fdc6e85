//! Application domain model.
//!
//! This module contains pure data types (config, catalog tree, visibility
//! state machine) and configuration constants.
//!
//! File persistence is in `storage`.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod visibility;

pub use catalog::{load_detail, CatalogTree, CategoryNode, McuNode, TreeItem};
pub use config::{Config, HotkeyMode};
pub use constants::*;
pub use visibility::{Visibility, VisibilityController, VisibilityInput, WindowEffect};
