mod bookmarks;
mod page;

#[cfg(test)]
mod tests;

pub use bookmarks::{bookmarks_file, entry};
pub use page::{index_page, link};
