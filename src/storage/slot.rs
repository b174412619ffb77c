//! Single-slot storage backends
//!
//! A slot holds at most one serialized payload. Starting a new puzzle simply
//! overwrites it.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Raw storage for one serialized progress payload
pub trait StorageSlot {
    /// Current payload, `None` when the slot is empty
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the slot exists but cannot be read.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the payload
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the payload cannot be stored.
    fn write(&self, payload: &str) -> io::Result<()>;

    /// Empty the slot; clearing an empty slot succeeds
    ///
    /// # Errors
    ///
    /// Returns an I/O error if an existing payload cannot be removed.
    fn clear(&self) -> io::Result<()>;
}

/// Slot backed by a JSON file on disk
///
/// Writes go to a sibling temp file that is synced and renamed over the target,
/// so a crash mid-write leaves the previous payload intact.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, payload: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.temp_path();
        let result =
            write_synced(&tmp_path, payload).and_then(|()| fs::rename(&tmp_path, &self.path));
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

fn write_synced(path: &Path, payload: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(payload.as_bytes())?;
    file.sync_all()
}

/// In-process slot, lost when the process exits
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: Mutex<Option<String>>,
}

impl MemorySlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, Option<String>>> {
        self.payload
            .lock()
            .map_err(|_| io::Error::other("memory slot poisoned"))
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.lock()?.clone())
    }

    fn write(&self, payload: &str) -> io::Result<()> {
        *self.lock()? = Some(payload.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.lock()? = None;
        Ok(())
    }
}

impl<S: StorageSlot + ?Sized> StorageSlot for &S {
    fn read(&self) -> io::Result<Option<String>> {
        (**self).read()
    }

    fn write(&self, payload: &str) -> io::Result<()> {
        (**self).write(payload)
    }

    fn clear(&self) -> io::Result<()> {
        (**self).clear()
    }
}
