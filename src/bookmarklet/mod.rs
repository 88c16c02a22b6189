mod inject;
mod uri;


pub use inject::{Dependency, dom_id, load_script, load_style, wrap_code};
pub use uri::{URI_PREFIX, URI_SUFFIX, decode_uri, to_uri};

use crate::library::{LibraryLoader, LoadError};
use crate::metadata::{Metadata, comment_safe};
use serde::Serialize;
use std::path::Path;

/// Extension assumed when a file name carries none
pub const DEFAULT_EXTENSION: &str = "js";

/// A script file turned into an installable `javascript:` URI
///
/// The resolved name and the URI are computed once in [`Bookmarklet::new`]
/// and never change afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Bookmarklet {
    file_name: String,
    name: String,
    metadata: Metadata,
    bookmarklet: String,
    #[serde(skip)]
    code: String,
}

impl Bookmarklet {
    /// Build from source whose header was already parsed
    ///
    /// # Arguments
    /// * `file_name` - Base name of the source file (e.g., "confetti.js")
    /// * `code` - Full file content, header block included
    /// * `metadata` - Header parsed from `code`
    pub fn new(file_name: impl Into<String>, code: impl Into<String>, metadata: Metadata) -> Self {
        let file_name = file_name.into();
        let code = code.into();
        let name = resolve_name(&file_name, &metadata);
        let bookmarklet = to_uri(&wrap_code(&code, &metadata.scripts, &metadata.styles));

        Self {
            file_name,
            name,
            metadata,
            bookmarklet,
            code,
        }
    }

    /// Parse the header out of `code`, then build
    pub fn from_source(file_name: impl Into<String>, code: impl Into<String>) -> Self {
        let code = code.into();
        let metadata = Metadata::from_source(&code);
        Self::new(file_name, code, metadata)
    }

    /// Read and build a single `.js` file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        LibraryLoader::new().load_file(path.as_ref())
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Display name: the `@name` directive, or the file name minus its extension
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `javascript:(() => {...})()` URI
    pub fn bookmarklet(&self) -> &str {
        &self.bookmarklet
    }

    /// Code after dependency wrapping, before percent-encoding
    pub fn wrapped_code(&self) -> String {
        wrap_code(&self.code, &self.metadata.scripts, &self.metadata.styles)
    }

    /// Descriptor block embedded ahead of each entry in a bookmarks file
    pub fn html_comment(&self) -> String {
        format!(
            "<!-- {}.{} -->\n{}",
            comment_safe(&self.name),
            comment_safe(self.extension()),
            self.metadata.html_comment()
        )
    }

    fn extension(&self) -> &str {
        Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or(DEFAULT_EXTENSION)
    }
}

fn resolve_name(file_name: &str, metadata: &Metadata) -> String {
    if let Some(name) = metadata.name.as_deref().filter(|n| !n.is_empty()) {
        return name.to_string();
    }

    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name)
        .to_string()
}
