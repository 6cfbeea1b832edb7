//! Scratch directory the test case runs in
//!
//! The directory is created before the run; the files directly inside it are
//! removed afterwards, also when the run fails.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

/// Guard over the scratch directory
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
    armed: bool,
}

impl ScratchDir {
    /// Create the directory (and its parents) if it does not exist yet
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        fs::create_dir_all(&path)?;
        debug!("Using scratch directory \"{}\"", path.display());
        Ok(Self { path, armed: true })
    }

    /// Leave the files in place when the guard goes away
    pub fn keep_files(mut self) -> Self {
        self.armed = false;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove every file directly inside the directory
    ///
    /// Subdirectories are left alone. Returns the number of removed files;
    /// calling it again, or on a guard from [`keep_files`](Self::keep_files),
    /// removes nothing.
    pub fn clean_up(&mut self) -> io::Result<usize> {
        if !self.armed {
            return Ok(0);
        }
        self.armed = false;

        let mut removed = 0;
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                continue;
            }
            fs::remove_file(entry.path())?;
            removed += 1;
        }

        info!(
            "Cleaned up directory \"{}\" ({} files removed)",
            self.path.display(),
            removed
        );
        Ok(removed)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(e) = self.clean_up() {
            warn!(
                "Failed to clean up scratch directory \"{}\": {}",
                self.path.display(),
                e
            );
        }
    }
}
