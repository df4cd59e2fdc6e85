//! Persistence.
//!
//! - `config`: the `config.json` settings file
//! - `repository`: the `<mcu>/<category>.json` function store

pub mod config;
pub mod repository;

pub use config::{ConfigError, ConfigLoad, ConfigStore};
pub use repository::{FunctionMap, FunctionRepository, RepositoryError};
