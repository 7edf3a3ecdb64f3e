//! Staged video: the local temp copy of an uploaded file.
//!
//! A [`StagedVideo`] owns its file: [`StagedVideo::cleanup`] removes it and
//! may be called any number of times, and dropping the guard removes it too.

use std::io;
use std::path::{Path, PathBuf};
use summarizer_domain::VideoFormat;
use tracing::{debug, warn};

/// Remove `path`, treating an already-missing file as success.
pub fn remove_if_exists(path: &Path) -> io::Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// A video written to local disk, waiting to be sent to the provider.
#[derive(Debug)]
pub struct StagedVideo {
    path: PathBuf,
    format: VideoFormat,
    display_name: String,
    removed: bool,
}

impl StagedVideo {
    /// Take ownership of an existing file.
    pub fn new(path: impl Into<PathBuf>, format: VideoFormat, display_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            format,
            display_name: display_name.into(),
            removed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> VideoFormat {
        self.format
    }

    /// Original file name as chosen by the user
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Delete the file. Idempotent.
    pub fn cleanup(&mut self) -> io::Result<()> {
        remove_if_exists(&self.path)?;
        if !self.removed {
            debug!(path = %self.path.display(), "Removed staged video");
        }
        self.removed = true;
        Ok(())
    }
}

impl Drop for StagedVideo {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        if let Err(e) = remove_if_exists(&self.path) {
            warn!(path = %self.path.display(), "Could not remove staged video: {}", e);
        }
    }
}
