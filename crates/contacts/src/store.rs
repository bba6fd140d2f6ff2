//! Address book storage
//!
//! The whole book is written as one bincode snapshot:
//! - Default location: ~/.local/share/contacts/addressbook.bin
//!
//! Saves go to a sibling `.tmp` file first and are renamed into place, so an
//! interrupted write leaves the previous snapshot intact.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::book::AddressBook;

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    book: &'a AddressBook,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    book: AddressBook,
}

/// A temporary file that is removed on drop unless marked committed
struct PendingFile<'a> {
    path: &'a Path,
    committed: bool,
}

impl<'a> PendingFile<'a> {
    fn new(path: &'a Path) -> Self {
        Self {
            path,
            committed: false,
        }
    }
}

impl Drop for PendingFile<'_> {
    fn drop(&mut self) {
        if !self.committed && self.path.exists() {
            if let Err(e) = fs::remove_file(self.path) {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to remove temp file");
            }
        }
    }
}

/// File-backed address book store
pub struct BookStore {
    path: PathBuf,
}

impl BookStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Load the book. A missing file is a fresh, empty book.
    pub fn load(&self) -> Result<AddressBook> {
        // Decoding from memory bounds every length prefix by the bytes on disk
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no address book yet, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read address book: {}", self.path.display())
                })
            }
        };

        let snapshot: Snapshot = bincode::deserialize(&bytes)
            .with_context(|| format!("Failed to decode address book: {}", self.path.display()))?;

        if snapshot.version != SNAPSHOT_VERSION {
            bail!(
                "Unsupported address book version {} in {} (expected {})",
                snapshot.version,
                self.path.display(),
                SNAPSHOT_VERSION
            );
        }

        tracing::debug!(
            path = %self.path.display(),
            records = snapshot.book.len(),
            "loaded address book"
        );
        Ok(snapshot.book)
    }

    /// Write the whole book, replacing the previous snapshot
    pub fn save(&self, book: &AddressBook) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }

        let temp = self.temp_path();
        let mut pending = PendingFile::new(&temp);
        let snapshot = SnapshotRef {
            version: SNAPSHOT_VERSION,
            book,
        };

        {
            let file = fs::File::create(&temp)
                .with_context(|| format!("Failed to create {}", temp.display()))?;
            let mut writer = BufWriter::new(file);
            bincode::serialize_into(&mut writer, &snapshot)
                .context("Failed to encode address book")?;
            writer
                .flush()
                .with_context(|| format!("Failed to write {}", temp.display()))?;
            writer
                .get_ref()
                .sync_all()
                .with_context(|| format!("Failed to sync {}", temp.display()))?;
        }

        fs::rename(&temp, &self.path)
            .with_context(|| format!("Failed to replace address book: {}", self.path.display()))?;
        pending.committed = true;

        tracing::debug!(path = %self.path.display(), records = book.len(), "saved address book");
        Ok(())
    }
}
