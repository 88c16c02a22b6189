use super::LoadError;
use std::path::PathBuf;

/// A script the loader found but could not turn into a bookmarklet
#[derive(Debug)]
pub struct SkippedFile {
    /// Path of the file on disk
    pub path: PathBuf,
    /// Why it was left out
    pub error: LoadError,
}
