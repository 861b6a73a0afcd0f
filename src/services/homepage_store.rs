// Octane Homepage Store
// Persists the home/search-engine URL as a single line of text at the
// platform-specific config path. Read once at startup; rewritten whenever
// the user picks a different default search engine.

use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::errors::HomepageError;

/// Trait defining the homepage store interface.
pub trait HomepageStoreTrait {
    fn load(&mut self) -> Result<String, HomepageError>;
    fn save(&mut self, url: &str) -> Result<(), HomepageError>;
    fn url(&self) -> &str;
    fn file_path(&self) -> &str;
}

/// Homepage store backed by a one-line text file.
pub struct HomepageStore {
    file_path: String,
    url: String,
}

impl HomepageStore {
    /// Creates a new HomepageStore.
    ///
    /// If `path_override` is `Some`, uses that path for the preference file.
    /// Otherwise, uses the platform-specific config directory with
    /// `search_engine.txt`.
    pub fn new(path_override: Option<String>) -> Self {
        let file_path = match path_override {
            Some(p) => p,
            None => {
                let config_dir = platform::get_config_dir();
                config_dir
                    .join("search_engine.txt")
                    .to_string_lossy()
                    .to_string()
            }
        };

        Self {
            file_path,
            url: String::new(),
        }
    }
}

impl HomepageStoreTrait for HomepageStore {
    /// Loads the home URL from the preference file.
    ///
    /// The file must exist and its first line must be non-empty; there is no
    /// fallback, since a shell with no home URL must not start silently.
    fn load(&mut self) -> Result<String, HomepageError> {
        let path = Path::new(&self.file_path);

        if !path.exists() {
            return Err(HomepageError::Missing(self.file_path.clone()));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            HomepageError::IoError(format!("Failed to read preference file: {}", e))
        })?;

        let url = content.lines().next().unwrap_or("").trim().to_string();
        if url.is_empty() {
            return Err(HomepageError::Empty(self.file_path.clone()));
        }

        self.url = url;
        Ok(self.url.clone())
    }

    /// Saves `url` as the sole line of the preference file.
    ///
    /// Creates parent directories if they don't exist. The write goes to a
    /// temp file in the same directory and is renamed over the target, so a
    /// crash mid-write cannot leave a truncated home URL behind.
    fn save(&mut self, url: &str) -> Result<(), HomepageError> {
        let path = Path::new(&self.file_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                HomepageError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let tmp_path = path.with_extension("txt.tmp");
        fs::write(&tmp_path, url).map_err(|e| {
            HomepageError::IoError(format!("Failed to write preference file: {}", e))
        })?;
        fs::rename(&tmp_path, path).map_err(|e| {
            HomepageError::IoError(format!("Failed to replace preference file: {}", e))
        })?;

        self.url = url.to_string();
        Ok(())
    }

    /// Returns the in-memory home URL.
    fn url(&self) -> &str {
        &self.url
    }

    /// Returns the path to the preference file.
    fn file_path(&self) -> &str {
        &self.file_path
    }
}
