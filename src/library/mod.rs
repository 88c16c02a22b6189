mod error;
mod skipped;

#[cfg(test)]
mod tests;

pub use error::LoadError;
pub use skipped::SkippedFile;

use crate::bookmarklet::{Bookmarklet, DEFAULT_EXTENSION};
use crate::metadata::Metadata;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Default per-file size limit (1 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Bookmarklets built from one folder, sorted by file name
#[derive(Debug)]
pub struct Library {
    folder: PathBuf,
    bookmarklets: Vec<Bookmarklet>,
    skipped: Vec<SkippedFile>,
}

impl Library {
    /// Folder the library was loaded from
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn bookmarklets(&self) -> &[Bookmarklet] {
        &self.bookmarklets
    }

    /// Scripts that matched the extension but failed to load
    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.bookmarklets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarklets.is_empty()
    }

    pub fn into_bookmarklets(self) -> Vec<Bookmarklet> {
        self.bookmarklets
    }
}

/// Reads script files from disk and builds bookmarklets from them
#[derive(Debug, Clone)]
pub struct LibraryLoader {
    extension: String,
    max_file_size: u64,
}

impl LibraryLoader {
    /// Create a loader for `.js` files with the default size limit
    pub fn new() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Set the script extension, without the dot (e.g., "js")
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set maximum individual file size
    pub fn max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    /// Load every matching file directly inside `folder`
    ///
    /// Files that fail to load are collected in [`Library::skipped`] so one
    /// bad script never hides the others.
    pub fn load(&self, folder: impl AsRef<Path>) -> Result<Library, LoadError> {
        let folder = folder.as_ref();
        if !folder.is_dir() {
            return Err(LoadError::FolderNotFound(folder.to_path_buf()));
        }

        debug!("Scanning {} for .{} files", folder.display(), self.extension);

        let mut bookmarklets = Vec::new();
        let mut skipped = Vec::new();

        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) if source.depth() > 0 => {
                    let path = source
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| folder.to_path_buf());
                    skip(&mut skipped, LoadError::ListFailed { path, source });
                    continue;
                }
                Err(source) => {
                    return Err(LoadError::ListFailed {
                        path: folder.to_path_buf(),
                        source,
                    });
                }
            };

            if !entry.file_type().is_file() || !self.matches(entry.path()) {
                continue;
            }

            match self.load_file(entry.path()) {
                Ok(bookmarklet) => bookmarklets.push(bookmarklet),
                Err(error) => skip(&mut skipped, error),
            }
        }

        info!(
            "Loaded {} bookmarklets from {} ({} skipped)",
            bookmarklets.len(),
            folder.display(),
            skipped.len()
        );

        Ok(Library {
            folder: folder.to_path_buf(),
            bookmarklets,
            skipped,
        })
    }

    /// Load a single script file
    pub fn load_file(&self, path: &Path) -> Result<Bookmarklet, LoadError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| LoadError::InvalidFileName(path.to_path_buf()))?;

        let read_failed = |source| LoadError::ReadFailed {
            path: path.to_path_buf(),
            source,
        };

        let size = fs::metadata(path).map_err(read_failed)?.len();
        if size > self.max_file_size {
            return Err(LoadError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max: self.max_file_size,
            });
        }

        let bytes = fs::read(path).map_err(read_failed)?;
        let code = String::from_utf8(bytes).map_err(|_| LoadError::NotUtf8(path.to_path_buf()))?;

        let (metadata, warnings) = Metadata::parse_with_warnings(code.lines());
        for warning in &warnings {
            warn!("{}: {}", file_name, warning);
        }

        Ok(Bookmarklet::new(file_name, code, metadata))
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }
}

impl Default for LibraryLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn skip(skipped: &mut Vec<SkippedFile>, error: LoadError) {
    let path = error.path().to_path_buf();
    warn!("Skipping {}: {}", path.display(), error);
    skipped.push(SkippedFile { path, error });
}
