//! File system repository and key-value storage

use crate::error::{HabitError, Result};
use crate::infrastructure::config::DATA_DIR;
use crate::infrastructure::Config;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const ROOT_ENV: &str = "HABITUAL_ROOT";

/// Opaque string storage addressed by key
pub trait KeyValueStore {
    /// Read the value stored under `key`, None if nothing is stored
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Abstract repository for habit workspace operations
pub trait HabitRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .habitual/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .habitual/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .habitual directory exists
    fn is_initialized(&self) -> bool;

    /// Create .habitual directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of HabitRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the workspace root by walking up from current directory.
    /// HABITUAL_ROOT takes precedence when set.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(HabitError::Config(format!(
                    "HABITUAL_ROOT is set to '{}' but no .habitual directory found. \
                    Run 'habitual init' in that directory or unset HABITUAL_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_data_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(HabitError::NotHabitDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    fn store_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR).join("store")
    }

    /// Map a namespaced key to a file name inside the store directory
    fn key_path(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.store_dir().join(format!("{}.json", file_stem))
    }

    /// Write via a temp file and rename so readers never see a partial blob.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.habitual-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("value.json"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl HabitRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let data_dir = self.root.join(DATA_DIR);

        if data_dir.exists() {
            return Err(HabitError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&data_dir)?;
        fs::create_dir(self.store_dir())?;
        Ok(())
    }
}

impl KeyValueStore for FileSystemRepository {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HabitError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::write_atomic(&self.key_path(key), value)
    }
}

/// In-memory store, used when persistence is not wanted
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
