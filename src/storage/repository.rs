//! Function repository: a two-level directory of JSON files.
//!
//! ```text
//! <root>/
//!   stm32/
//!     GPIO.json      { "<signature>": "<detail>", ... }
//!     UART.json
//!   py32/
//! ```
//!
//! Every operation touches the filesystem directly. Nothing is cached, so
//! the tree shown in the UI is always rebuilt from what is on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::model::constants::*;
use crate::validate_name;

/// Signature → detail, in insertion order.
pub type FunctionMap = IndexMap<String, String>;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A user-supplied name was rejected before any I/O happened.
    #[error("invalid {what}: {reason}")]
    Validation {
        what: &'static str,
        reason: &'static str,
    },

    /// A category file exists but does not hold a string-to-string object.
    #[error("category file {path} is corrupt: {source}")]
    CategoryCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The mapping could not be serialized.
    #[error("failed to serialize category {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl RepositoryError {
    fn io(path: &Path, source: io::Error) -> Self {
        RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns true if this error was raised by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, RepositoryError::Validation { .. })
    }
}

/// CRUD over `<root>/<mcu>/<category>.json`.
#[derive(Debug, Clone)]
pub struct FunctionRepository {
    root: PathBuf,
}

impl FunctionRepository {
    /// Create a repository rooted at `root` without touching the disk.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a repository rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let repo = Self::new(root);
        fs::create_dir_all(&repo.root).map_err(|e| RepositoryError::io(&repo.root, e))?;
        info!(root = %repo.root.display(), "function repository opened");
        Ok(repo)
    }

    /// Repository root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn mcu_dir(&self, mcu: &str) -> PathBuf {
        self.root.join(mcu)
    }

    fn category_path(&self, mcu: &str, category: &str) -> PathBuf {
        self.mcu_dir(mcu)
            .join(format!("{category}.{CATEGORY_EXTENSION}"))
    }

    /// Every immediate subdirectory of the root, in directory-listing order.
    pub fn list_mcus(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(root = %self.root.display(), error = %e, "cannot list MCUs");
                return Vec::new();
            }
        };

        entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect()
    }

    /// Every `*.json` file directly under the MCU directory, extension stripped.
    ///
    /// Returns an empty list when the MCU directory does not exist.
    pub fn list_categories(&self, mcu: &str) -> Vec<String> {
        let dir = self.mcu_dir(mcu);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "cannot list categories");
                return Vec::new();
            }
        };

        entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext == CATEGORY_EXTENSION)
            })
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect()
    }

    /// Parse a category file, reporting corruption.
    ///
    /// A missing file yields an empty mapping.
    pub fn load_functions_checked(
        &self,
        mcu: &str,
        category: &str,
    ) -> Result<FunctionMap, RepositoryError> {
        let path = self.category_path(mcu, category);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(FunctionMap::new()),
            Err(e) => return Err(RepositoryError::io(&path, e)),
        };

        serde_json::from_str(&contents)
            .map_err(|source| RepositoryError::CategoryCorrupt { path, source })
    }

    /// Parse a category file; absent or unreadable files yield an empty mapping.
    pub fn load_functions(&self, mcu: &str, category: &str) -> FunctionMap {
        match self.load_functions_checked(mcu, category) {
            Ok(functions) => functions,
            Err(e) => {
                warn!(mcu, category, error = %e, "treating category as empty");
                FunctionMap::new()
            }
        }
    }

    /// Overwrite a category file with the full mapping.
    ///
    /// Creates the MCU directory if needed. Keys are written in insertion
    /// order, non-ASCII text is written as UTF-8.
    pub fn save_functions(
        &self,
        mcu: &str,
        category: &str,
        functions: &FunctionMap,
    ) -> Result<(), RepositoryError> {
        let dir = self.mcu_dir(mcu);
        fs::create_dir_all(&dir).map_err(|e| RepositoryError::io(&dir, e))?;

        let path = self.category_path(mcu, category);
        let json = to_json_pretty(functions)
            .map_err(|source| RepositoryError::Serialize {
                path: path.clone(),
                source,
            })?;
        fs::write(&path, json).map_err(|e| RepositoryError::io(&path, e))?;

        debug!(mcu, category, entries = functions.len(), "category saved");
        Ok(())
    }

    /// Create an MCU directory.
    ///
    /// Returns `Ok(false)` if it already existed.
    pub fn create_mcu(&self, name: &str) -> Result<bool, RepositoryError> {
        let name = validate_name(name).map_err(|reason| RepositoryError::Validation {
            what: "MCU name",
            reason,
        })?;

        let dir = self.mcu_dir(name);
        if dir.exists() {
            debug!(mcu = name, "MCU already exists");
            return Ok(false);
        }

        fs::create_dir_all(&dir).map_err(|e| RepositoryError::io(&dir, e))?;
        info!(mcu = name, "MCU created");
        Ok(true)
    }

    /// Create (or silently overwrite) a category with an initial mapping.
    pub fn create_category(
        &self,
        mcu: &str,
        name: &str,
        initial: &FunctionMap,
    ) -> Result<(), RepositoryError> {
        let mcu = validate_name(mcu).map_err(|reason| RepositoryError::Validation {
            what: "MCU name",
            reason,
        })?;
        let name = validate_name(name).map_err(|reason| RepositoryError::Validation {
            what: "category name",
            reason,
        })?;

        self.save_functions(mcu, name, initial)?;
        info!(mcu, category = name, "category created");
        Ok(())
    }

    /// Insert or replace one function entry.
    ///
    /// Refuses to touch a corrupt category file, so that its content is not
    /// replaced by a single entry.
    pub fn add_function(
        &self,
        mcu: &str,
        category: &str,
        signature: &str,
        detail: &str,
    ) -> Result<(), RepositoryError> {
        let signature = signature.trim();
        if signature.is_empty() {
            return Err(RepositoryError::Validation {
                what: "function name",
                reason: "must not be blank",
            });
        }

        let mut functions = self.load_functions_checked(mcu, category)?;
        functions.insert(signature.to_string(), detail.to_string());
        self.save_functions(mcu, category, &functions)?;

        info!(mcu, category, signature, "function added");
        Ok(())
    }

    /// Seed the first-run sample tree.
    ///
    /// Existing directories and files are left untouched.
    pub fn seed_defaults(&self) -> Result<(), RepositoryError> {
        let sample = self.category_path(SAMPLE_MCU, SAMPLE_CATEGORY);
        if !sample.exists() {
            let functions: FunctionMap = SAMPLE_FUNCTIONS
                .iter()
                .map(|(signature, detail)| (signature.to_string(), detail.to_string()))
                .collect();
            self.save_functions(SAMPLE_MCU, SAMPLE_CATEGORY, &functions)?;
            info!(mcu = SAMPLE_MCU, category = SAMPLE_CATEGORY, "sample category seeded");
        }

        let empty = self.mcu_dir(SAMPLE_EMPTY_MCU);
        fs::create_dir_all(&empty).map_err(|e| RepositoryError::io(&empty, e))?;
        Ok(())
    }
}

/// Pretty JSON with a 4-space indent and raw UTF-8.
pub(crate) fn to_json_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_path_appends_extension() {
        let repo = FunctionRepository::new("/data");
        assert_eq!(
            repo.category_path("stm32", "GPIO"),
            PathBuf::from("/data/stm32/GPIO.json")
        );
    }

    #[test]
    fn pretty_json_uses_four_space_indent_and_raw_utf8() {
        let mut functions = FunctionMap::new();
        functions.insert("HAL_Delay(uint32_t)".to_string(), "延时".to_string());
        let json = String::from_utf8(to_json_pretty(&functions).unwrap()).unwrap();
        assert_eq!(json, "{\n    \"HAL_Delay(uint32_t)\": \"延时\"\n}");
    }

    #[test]
    fn validation_errors_are_flagged() {
        let repo = FunctionRepository::new("/nonexistent");
        let err = repo.create_mcu("  ").unwrap_err();
        assert!(err.is_validation());
    }
}
