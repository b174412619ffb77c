//! Progress persistence
//!
//! One storage slot holds the puzzle in flight; there is no history of past
//! sessions.

mod progress;
mod slot;

pub use progress::{PersistedSession, ProgressStore};
pub use slot::{FileSlot, MemorySlot, StorageSlot};

use std::path::PathBuf;

/// File name of the progress slot inside the data directory
pub const PROGRESS_FILE: &str = "progress.json";

/// Platform data location for saved progress (e.g. `~/.local/share/contexto/progress.json`)
///
/// Returns `None` when the platform has no data directory.
#[must_use]
pub fn default_progress_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("contexto").join(PROGRESS_FILE))
}
