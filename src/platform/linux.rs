// Octane platform paths for Linux
// Config: ~/.config/octane

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Octane on Linux.
/// Uses `$XDG_CONFIG_HOME/octane` if set, otherwise `~/.config/octane`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("octane")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("octane")
    }
}
