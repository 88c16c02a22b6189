use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Bookmarklet folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),

    #[error("Failed to list {}: {source}", .path.display())]
    ListFailed {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {}", .0.display())]
    NotUtf8(PathBuf),

    #[error("File too large: {} is {size} bytes (max: {max})", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Invalid file name: {}", .0.display())]
    InvalidFileName(PathBuf),
}

impl LoadError {
    /// File or folder the error is about
    pub fn path(&self) -> &Path {
        match self {
            Self::FolderNotFound(path) | Self::NotUtf8(path) | Self::InvalidFileName(path) => path,
            Self::ListFailed { path, .. }
            | Self::ReadFailed { path, .. }
            | Self::FileTooLarge { path, .. } => path,
        }
    }
}
