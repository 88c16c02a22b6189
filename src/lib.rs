// Public API exports
pub mod bookmarklet;
pub mod library;
pub mod metadata;
pub mod render;
pub mod server;

// Re-export main types for convenience
pub use metadata::{Metadata, MetadataWarning};

pub use bookmarklet::{Bookmarklet, decode_uri, to_uri, wrap_code};

pub use library::{Library, LibraryLoader, LoadError, SkippedFile};

pub use render::{bookmarks_file, index_page};

pub use server::{ServerConfig, serve};
