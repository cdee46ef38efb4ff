//! Path utilities for mishkat.
//!
//! All data lives under `~/.mishkat/`:
//! - `~/.mishkat/config.toml` - configuration
//! - `~/.mishkat/storage.json` - favorites, notes and the tasbih counter

use std::path::PathBuf;

/// Returns the mishkat home directory (`~/.mishkat/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".mishkat")
}

/// Returns the default config file path (`~/.mishkat/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default storage path (`~/.mishkat/storage.json`).
pub fn default_storage() -> PathBuf {
    home_dir().join("storage.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_mishkat_home() {
        assert!(home_dir().to_string_lossy().contains(".mishkat"));
        assert!(default_config().ends_with(".mishkat/config.toml"));
        assert!(default_storage().ends_with(".mishkat/storage.json"));
    }
}
