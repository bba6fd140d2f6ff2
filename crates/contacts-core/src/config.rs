//! Configuration for the contacts tool
//!
//! Configuration file: ~/.config/contacts/config.toml
//!
//! ```toml
//! book_file = "/home/me/contacts.bin"
//! birthday_window = 7
//! leap_day = "feb28"
//! history = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::paths::Paths;

/// How a 29 February birthday is celebrated in a non-leap year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeapDayPolicy {
    /// Celebrate on 28 February
    #[default]
    Feb28,
    /// Celebrate on 1 March
    Mar1,
}

impl LeapDayPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeapDayPolicy::Feb28 => "feb28",
            LeapDayPolicy::Mar1 => "mar1",
        }
    }
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address book snapshot location (defaults to the data directory)
    #[serde(default)]
    pub book_file: Option<PathBuf>,

    /// Days ahead the `birthdays` command looks
    #[serde(default = "default_birthday_window")]
    pub birthday_window: u32,

    #[serde(default)]
    pub leap_day: LeapDayPolicy,

    /// Keep interactive line history between sessions
    #[serde(default = "default_history")]
    pub history: bool,
}

fn default_birthday_window() -> u32 {
    7
}

fn default_history() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            book_file: None,
            birthday_window: default_birthday_window(),
            leap_day: LeapDayPolicy::default(),
            history: default_history(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load(paths: &Paths) -> Result<Self> {
        Self::load_from(&paths.config_file())
    }

    /// Load configuration from a specific path, falling back to defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// The address book file, honouring an explicit override
    pub fn book_file(&self, paths: &Paths) -> PathBuf {
        self.book_file.clone().unwrap_or_else(|| paths.book_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("nope.toml")).unwrap();
        assert_eq!(config.birthday_window, 7);
        assert_eq!(config.leap_day, LeapDayPolicy::Feb28);
        assert!(config.history);
        assert!(config.book_file.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "leap_day = \"mar1\"\nbirthday_window = 14\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.birthday_window, 14);
        assert_eq!(config.leap_day, LeapDayPolicy::Mar1);
        assert!(config.history);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "leap_day = \"someday\"").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_load_reads_config_dir() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::rooted_at(temp.path());
        assert_eq!(Config::load(&paths).unwrap().birthday_window, 7);

        std::fs::create_dir_all(&paths.config).unwrap();
        std::fs::write(paths.config_file(), "birthday_window = 30\nhistory = false\n").unwrap();

        let config = Config::load(&paths).unwrap();
        assert_eq!(config.birthday_window, 30);
        assert!(!config.history);
    }

    #[test]
    fn test_leap_day_names_match_config_values() {
        for policy in [LeapDayPolicy::Feb28, LeapDayPolicy::Mar1] {
            let text = format!("leap_day = \"{}\"", policy.as_str());
            let config: Config = toml::from_str(&text).unwrap();
            assert_eq!(config.leap_day, policy);
        }
    }

    #[test]
    fn test_book_file_override() {
        let paths = Paths::rooted_at(Path::new("/srv"));
        let mut config = Config::default();
        assert_eq!(config.book_file(&paths), paths.book_file());

        config.book_file = Some(PathBuf::from("/elsewhere/book.bin"));
        assert_eq!(config.book_file(&paths), PathBuf::from("/elsewhere/book.bin"));
    }
}
