//! Application context.
//!
//! Owns everything the UI and the dispatcher share: the config and its
//! store, the function repository, the event bus and the visibility
//! controller. Created once at startup and passed by reference; the config
//! only changes through `update_config`.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::events::{AppEvent, EventBus, EventPublisher};
use crate::model::constants::*;
use crate::model::{Config, VisibilityController};
use crate::storage::{ConfigError, ConfigStore, FunctionRepository, RepositoryError};

/// Data directory: `$HAL_BROWSER_HOME`, or the current directory.
pub fn resolve_data_dir() -> PathBuf {
    std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Shared application state.
pub struct AppContext {
    data_dir: PathBuf,
    config: Config,
    config_store: ConfigStore,
    repository: FunctionRepository,
    bus: EventBus,
    visibility: VisibilityController,
}

/// Result of `AppContext::bootstrap`.
pub struct Startup {
    pub context: AppContext,
    /// Recovered problems to show the user once the window is up.
    pub warnings: Vec<String>,
}

impl AppContext {
    /// Load config, open the repository and seed first-run data.
    ///
    /// Only failing to create the repository root is fatal.
    pub fn bootstrap(data_dir: impl Into<PathBuf>) -> Result<Startup, RepositoryError> {
        let data_dir = data_dir.into();
        let mut warnings = Vec::new();

        let config_store = ConfigStore::new(data_dir.join(CONFIG_FILE_NAME));
        let loaded = config_store.load();
        if let Some(warning) = loaded.warning {
            warnings.push(warning.to_string());
        }
        let config = loaded.config;

        let repository = FunctionRepository::open(data_dir.join(FUNCTIONS_DIR_NAME))?;
        if let Err(e) = repository.seed_defaults() {
            warn!(error = %e, "failed to seed sample data");
            warnings.push(e.to_string());
        }

        info!(data_dir = %data_dir.display(), ?config, "application context ready");

        Ok(Startup {
            context: Self::new(data_dir, config, config_store, repository),
            warnings,
        })
    }

    /// Assemble a context from already-loaded parts.
    pub fn new(
        data_dir: PathBuf,
        config: Config,
        config_store: ConfigStore,
        repository: FunctionRepository,
    ) -> Self {
        let visibility = VisibilityController::new(config.hotkey_mode, config.enable_floating);
        Self {
            data_dir,
            config,
            config_store,
            repository,
            bus: EventBus::new(),
            visibility,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the config and persist it.
    ///
    /// The new value is kept for the session even when saving fails; the
    /// hotkey mode applies immediately, the floating widget on restart.
    pub fn update_config(&mut self, config: Config) -> Result<(), ConfigError> {
        self.config = config;
        self.visibility.set_mode(config.hotkey_mode);
        self.config_store.save(&config)
    }

    pub fn repository(&self) -> &FunctionRepository {
        &self.repository
    }

    pub fn visibility(&self) -> &VisibilityController {
        &self.visibility
    }

    pub fn visibility_mut(&mut self) -> &mut VisibilityController {
        &mut self.visibility
    }

    /// Publisher for the context's event bus.
    pub fn publisher(&self) -> EventPublisher {
        self.bus.publisher()
    }

    /// All events published since the last call.
    pub fn drain_events(&self) -> Vec<AppEvent> {
        self.bus.drain()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Image used for the floating widget.
    pub fn icon_path(&self) -> PathBuf {
        self.data_dir.join(ICON_FILE_NAME)
    }
}
