//! File system repository

use crate::domain::{Settings, WeightStore};
use crate::error::{Result, WtrackError};
use crate::infrastructure::config::{self, DATA_DIR};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENTRIES_FILE: &str = "entries.toml";

/// Environment variable pointing at the data root
pub const ROOT_ENV: &str = "WTRACK_ROOT";

/// Abstract repository for tracker state
pub trait TrackerRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load settings from .wtrack/settings.toml
    fn load_settings(&self) -> Result<Settings>;

    /// Save settings to .wtrack/settings.toml
    fn save_settings(&self, settings: &Settings) -> Result<()>;

    /// Load all entries; a missing entries file is an empty store
    fn load_store(&self) -> Result<WeightStore>;

    /// Save all entries, replacing the previous file
    fn save_store(&self, store: &WeightStore) -> Result<()>;

    /// Check if .wtrack directory exists
    fn is_initialized(&self) -> bool;

    /// Create .wtrack directory holding `settings`
    fn initialize(&self, settings: &Settings) -> Result<()>;
}

/// File system implementation of TrackerRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the data root: WTRACK_ROOT first, then walk up from the
    /// current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                debug!("using {} = {}", ROOT_ENV, path.display());
                return Ok(FileSystemRepository::new(path));
            }
            return Err(WtrackError::Config(format!(
                "{} is set to '{}' but no {} directory found. \
                Run 'wtrack init' in that directory or unset {}.",
                ROOT_ENV,
                path.display(),
                DATA_DIR,
                ROOT_ENV
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing .wtrack is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        let found = start.ancestors().find(|dir| Self::has_data_dir(dir));
        match found {
            Some(dir) => {
                debug!("discovered data root at {}", dir.display());
                Ok(FileSystemRepository::new(dir.to_path_buf()))
            }
            None => Err(WtrackError::NotInitialized(start.to_path_buf())),
        }
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    fn data_path(&self, filename: &str) -> PathBuf {
        self.root.join(DATA_DIR).join(filename)
    }

    /// Directory the settings are written to before it is renamed to .wtrack
    fn staging_dir(&self) -> PathBuf {
        self.root.join(format!("{}.init-{}", DATA_DIR, std::process::id()))
    }

    /// Write to a temp file next to the target, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tmp_path = path.with_file_name(format!(
            "{}.wtrack-tmp-{}",
            file_name,
            std::process::id()
        ));

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }

    fn check_entries(store: &WeightStore, path: &Path) -> Result<()> {
        for (i, entry) in store.entries().iter().enumerate() {
            if !entry.weight.is_finite() || entry.weight <= 0.0 {
                return Err(WtrackError::Config(format!(
                    "Invalid weight {} for entry #{} in {}",
                    entry.weight,
                    i + 1,
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

impl TrackerRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_settings(&self) -> Result<Settings> {
        config::load_from_dir(&self.root)
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        let contents = config::to_toml(settings)?;
        Self::write_atomic(&self.data_path(config::SETTINGS_FILE), &contents)
    }

    fn load_store(&self) -> Result<WeightStore> {
        if !self.is_initialized() {
            return Err(WtrackError::NotInitialized(self.root.clone()));
        }

        let path = self.data_path(ENTRIES_FILE);
        if !path.exists() {
            return Ok(WeightStore::new());
        }

        let contents = fs::read_to_string(&path)?;
        let store: WeightStore = toml::from_str(&contents)?;
        Self::check_entries(&store, &path)?;
        debug!("loaded {} entries from {}", store.len(), path.display());
        Ok(store)
    }

    fn save_store(&self, store: &WeightStore) -> Result<()> {
        let contents = toml::to_string_pretty(store)?;
        Self::write_atomic(&self.data_path(ENTRIES_FILE), &contents)?;
        debug!("saved {} entries", store.len());
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    fn initialize(&self, settings: &Settings) -> Result<()> {
        let data_dir = self.root.join(DATA_DIR);

        if data_dir.exists() {
            return Err(WtrackError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        // .wtrack only appears once settings.toml is in it
        let contents = config::to_toml(settings)?;
        let staging = self.staging_dir();
        fs::create_dir_all(&staging)?;

        let result = Self::write_atomic(&staging.join(config::SETTINGS_FILE), &contents)
            .and_then(|_| fs::rename(&staging, &data_dir).map_err(WtrackError::from));
        if result.is_err() {
            let _ = fs::remove_dir_all(&staging);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{UnitSystem, WeightEntry};
    use chrono::NaiveDate;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn initialized() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize(&Settings::default()).unwrap();
        (temp, repo)
    }

    fn entry(day: u32, weight: f64) -> WeightEntry {
        WeightEntry::new(
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            weight,
            UnitSystem::Metric,
        )
    }

    #[test]
    fn test_initialize_creates_data_dir() {
        let (temp, repo) = initialized();
        assert!(temp.path().join(".wtrack").is_dir());
        assert!(temp.path().join(".wtrack/settings.toml").is_file());
        assert!(repo.is_initialized());
        assert!(!repo.staging_dir().exists());
    }

    #[test]
    fn test_initialize_failure_leaves_no_data_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        // A directory in the way of settings.toml makes the final rename fail
        fs::create_dir_all(repo.staging_dir().join("settings.toml").join("blocker")).unwrap();

        assert!(repo.initialize(&Settings::default()).is_err());
        assert!(!repo.is_initialized());
        assert!(!repo.staging_dir().exists());

        // A later init starts clean
        repo.initialize(&Settings::default()).unwrap();
        assert!(repo.load_settings().is_ok());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (_temp, repo) = initialized();
        match repo.initialize(&Settings::default()).unwrap_err() {
            WtrackError::Config(msg) => assert!(msg.contains("already initialized")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let (temp, _repo) = initialized();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = FileSystemRepository::discover_from(&nested).unwrap();
        assert_eq!(found.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_data_dir() {
        let temp = TempDir::new().unwrap();
        match FileSystemRepository::discover_from(temp.path()).unwrap_err() {
            WtrackError::NotInitialized(path) => assert_eq!(path, temp.path()),
            other => panic!("Expected NotInitialized error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_with_root_env() {
        let _lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV);
        let (temp, _repo) = initialized();

        std::env::set_var(ROOT_ENV, temp.path());
        let found = FileSystemRepository::discover().unwrap();
        assert_eq!(found.root, temp.path());
    }

    #[test]
    fn test_discover_with_bad_root_env() {
        let _lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV);
        let temp = TempDir::new().unwrap();

        std::env::set_var(ROOT_ENV, temp.path());
        match FileSystemRepository::discover().unwrap_err() {
            WtrackError::Config(msg) => assert!(msg.contains(ROOT_ENV)),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load_settings() {
        let (_temp, repo) = initialized();
        let mut settings = Settings::new(UnitSystem::Imperial);
        settings.height = 70.0;
        repo.save_settings(&settings).unwrap();

        assert_eq!(repo.load_settings().unwrap(), settings);
    }

    #[test]
    fn test_load_store_without_file_is_empty() {
        let (_temp, repo) = initialized();
        assert!(repo.load_store().unwrap().is_empty());
    }

    #[test]
    fn test_load_store_uninitialized() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        assert!(matches!(
            repo.load_store(),
            Err(WtrackError::NotInitialized(_))
        ));
    }

    #[test]
    fn test_store_round_trip_preserves_list_order() {
        let (temp, repo) = initialized();
        let mut store = WeightStore::new();
        store.add_entry(entry(10, 80.0));
        // Past date added last still comes first
        store.add_entry(entry(2, 82.0));
        repo.save_store(&store).unwrap();

        let loaded = repo.load_store().unwrap();
        assert_eq!(loaded, store);
        assert_eq!(loaded.latest().unwrap().weight, 82.0);

        let text = fs::read_to_string(temp.path().join(".wtrack/entries.toml")).unwrap();
        assert!(text.contains("[[entry]]"));
        assert!(text.contains("date = \"2025-01-02\""));
        assert!(text.contains("unit = \"metric\""));
    }

    #[test]
    fn test_save_store_overwrites_without_leftovers() {
        let (temp, repo) = initialized();
        repo.save_store(&WeightStore::from_entries(vec![entry(1, 80.0)]))
            .unwrap();
        repo.save_store(&WeightStore::new()).unwrap();

        assert!(repo.load_store().unwrap().is_empty());
        let leftovers: Vec<_> = fs::read_dir(temp.path().join(".wtrack"))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("wtrack-tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_load_store_rejects_invalid_weights() {
        let (temp, repo) = initialized();
        let path = temp.path().join(".wtrack/entries.toml");
        for weight in ["-5.0", "0.0", "nan", "inf"] {
            fs::write(
                &path,
                format!(
                    "[[entry]]\ndate = \"2025-01-02\"\nweight = 80.0\nunit = \"metric\"\n\n\
                     [[entry]]\ndate = \"2025-01-01\"\nweight = {}\nunit = \"metric\"\n",
                    weight
                ),
            )
            .unwrap();

            match repo.load_store().unwrap_err() {
                WtrackError::Config(msg) => {
                    assert!(msg.contains("entry #2"), "weight {}: {}", weight, msg)
                }
                other => panic!("Expected Config error for {}, got {:?}", weight, other),
            }
        }
    }

    #[test]
    fn test_load_store_malformed() {
        let (temp, repo) = initialized();
        fs::write(temp.path().join(".wtrack/entries.toml"), "[[entry]]\nweight = \"x\"\n").unwrap();
        assert!(matches!(
            repo.load_store(),
            Err(WtrackError::TomlDeserialize(_))
        ));
    }
}
