//! Standard paths used by the contacts tool

use std::path::{Path, PathBuf};

/// Standard contacts paths
#[derive(Debug, Clone)]
pub struct Paths {
    /// Data directory (~/.local/share/contacts)
    pub data: PathBuf,
    /// Config directory (~/.config/contacts)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let data = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("contacts");

        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("contacts");

        Self { data, config }
    }

    /// Paths rooted at an arbitrary directory (data and config side by side)
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            data: root.join("data"),
            config: root.join("config"),
        }
    }

    /// Default location of the address book snapshot
    pub fn book_file(&self) -> PathBuf {
        self.data.join("addressbook.bin")
    }

    /// Location of the TOML configuration file
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.toml")
    }

    /// Location of the interactive shell's line history
    pub fn history_file(&self) -> PathBuf {
        self.data.join("history.txt")
    }
}
