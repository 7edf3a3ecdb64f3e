//! Write an incoming video to a uniquely named temp file.
//!
//! The extension is validated before anything touches the disk, so a
//! rejected upload never leaves a file behind. The staged file keeps the
//! original suffix because the provider infers the container from it.

use std::io::Write;
use std::path::{Path, PathBuf};
use summarizer_application::StagedVideo;
use summarizer_domain::{DomainError, VideoFormat};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while staging a video
#[derive(Error, Debug)]
pub enum StagingError {
    #[error(transparent)]
    Unsupported(#[from] DomainError),

    #[error("could not write temp file in {dir}: {source}")]
    Write {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn create_named(dir: &Path, format: VideoFormat) -> Result<tempfile::NamedTempFile, StagingError> {
    tempfile::Builder::new()
        .prefix("video-")
        .suffix(&format.suffix())
        .tempfile_in(dir)
        .map_err(|source| StagingError::Write {
            dir: dir.to_path_buf(),
            source,
        })
}

fn keep(file: tempfile::NamedTempFile, dir: &Path) -> Result<PathBuf, StagingError> {
    file.keep()
        .map(|(_, path)| path)
        .map_err(|e| StagingError::Write {
            dir: dir.to_path_buf(),
            source: e.error,
        })
}

/// Stage `bytes` received under `file_name` into `dir`.
pub fn stage_bytes(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<StagedVideo, StagingError> {
    let format = VideoFormat::from_file_name(file_name)?;

    let mut file = create_named(dir, format)?;
    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|source| StagingError::Write {
            dir: dir.to_path_buf(),
            source,
        })?;
    let path = keep(file, dir)?;

    debug!(path = %path.display(), bytes = bytes.len(), "Staged video");
    Ok(StagedVideo::new(path, format, file_name))
}

/// Stage a copy of the local file at `source`.
///
/// The copy, not the original, is removed after the analysis.
pub fn stage_file(dir: &Path, source: &Path) -> Result<StagedVideo, StagingError> {
    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let format = VideoFormat::from_file_name(&file_name)?;

    let file = create_named(dir, format)?;
    std::fs::copy(source, file.path()).map_err(|e| StagingError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;
    let path = keep(file, dir)?;

    debug!(path = %path.display(), from = %source.display(), "Staged video copy");
    Ok(StagedVideo::new(path, format, file_name))
}
