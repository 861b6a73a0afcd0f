use std::fmt;

// === TabError ===

/// Errors related to tab strip operations.
#[derive(Debug)]
pub enum TabError {
    /// No slot exists with the given ID.
    NotFound(String),
    /// The provided tab index is out of bounds.
    InvalidIndex(usize),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::NotFound(id) => write!(f, "Tab not found: {}", id),
            TabError::InvalidIndex(index) => write!(f, "Invalid tab index: {}", index),
        }
    }
}

impl std::error::Error for TabError {}

// === HomepageError ===

/// Errors related to the persisted home-URL preference.
#[derive(Debug)]
pub enum HomepageError {
    /// The preference file does not exist. The shell cannot determine a home
    /// URL, so this is a startup error.
    Missing(String),
    /// The preference file exists but its first line is empty.
    Empty(String),
    /// An I/O error occurred while reading or writing the preference file.
    IoError(String),
}

impl fmt::Display for HomepageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomepageError::Missing(path) => {
                write!(f, "Home URL preference file not found: {}", path)
            }
            HomepageError::Empty(path) => {
                write!(f, "Home URL preference file is empty: {}", path)
            }
            HomepageError::IoError(msg) => write!(f, "Home URL preference I/O error: {}", msg),
        }
    }
}

impl std::error::Error for HomepageError {}

// === ShortcutError ===

/// Errors related to keyboard shortcut management.
#[derive(Debug)]
pub enum ShortcutError {
    /// Shortcut for the given action was not found.
    NotFound(String),
    /// The shortcut keys conflict with an existing binding.
    Conflict(String),
    /// The provided key combination is invalid.
    InvalidKeys(String),
}

impl fmt::Display for ShortcutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutError::NotFound(action) => {
                write!(f, "Shortcut not found for action: {}", action)
            }
            ShortcutError::Conflict(msg) => write!(f, "Shortcut conflict: {}", msg),
            ShortcutError::InvalidKeys(keys) => write!(f, "Invalid shortcut keys: {}", keys),
        }
    }
}

impl std::error::Error for ShortcutError {}
