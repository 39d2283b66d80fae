//! Flat-file JSON store backing the data-entry service.
//!
//! Every document lives as a single JSON file under one data directory:
//! the forwarding settings, one product list per form family, and the
//! last-pushed raw-material inventory snapshot. Reads and writes are
//! whole-file operations; the last writer wins.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

mod inventory;
mod products;
mod settings;

pub use inventory::{InventoryItem, InventorySnapshot};
pub use products::{ProductFamily, ProductKind, UnknownProductKind};
pub use settings::Settings;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Handle to the data directory. Cheap to clone paths from; holds no
/// file descriptors between operations.
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    /// Opens the store, creating the data directory if needed.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;
        Ok(Store { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, filename: &str) -> PathBuf {
        self.data_dir.join(filename)
    }

    /// Reads and deserializes a document, or `None` if the file does not
    /// exist yet.
    fn read_document<T: serde::de::DeserializeOwned>(
        &self,
        filename: &str,
    ) -> Result<Option<T>, StoreError> {
        let file = match File::open(self.path(filename)) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let value = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(value))
    }

    /// Serializes and overwrites a document wholesale.
    fn write_document<T: serde::Serialize>(
        &self,
        filename: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let file = File::create(self.path(filename))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
        tracing::debug!(filename, "stored document");
        Ok(())
    }
}
