mod header;
mod warning;


pub use warning::MetadataWarning;

use serde::Serialize;

/// Placeholder shown in descriptors for fields the header leaves out
pub const MISSING_FIELD: &str = "-";

/// Directives read from the comment block at the top of a bookmarklet
///
/// ```text
/// // @name Confetti
/// // @author Kiril Vatev
/// // @url https://www.npmjs.com/package/canvas-confetti
/// // @script https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.0/dist/confetti.browser.min.js
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Display name, falls back to the file stem when absent
    pub name: Option<String>,
    /// Author display name
    pub author: Option<String>,
    /// Author homepage, only rendered together with `author`
    pub url: Option<String>,
    /// External scripts in declaration order, duplicates kept
    pub scripts: Vec<String>,
    /// External stylesheets in declaration order, duplicates kept
    pub styles: Vec<String>,
}

impl Metadata {
    /// Parse the leading comment block, logging every warning
    pub fn parse<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (metadata, warnings) = Self::parse_with_warnings(lines);
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        metadata
    }

    /// Parse the leading comment block and hand warnings back to the caller
    pub fn parse_with_warnings<I, S>(lines: I) -> (Self, Vec<MetadataWarning>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        header::parse_header(lines)
    }

    /// Parse the header of a whole source file
    pub fn from_source(source: &str) -> Self {
        Self::parse(source.lines())
    }

    /// Three-line HTML comment block describing this header
    pub fn html_comment(&self) -> String {
        format!(
            "<!-- name: {} -->\n<!-- author: {} -->\n<!-- url: {} -->\n",
            display(&self.name),
            display(&self.author),
            display(&self.url)
        )
    }

    /// True when the header declared nothing at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn display(field: &Option<String>) -> String {
    let value = field
        .as_deref()
        .filter(|value| !value.is_empty())
        .unwrap_or(MISSING_FIELD);
    comment_safe(value)
}

/// Break up `--` so a value cannot close the HTML comment it sits in
pub fn comment_safe(value: &str) -> String {
    let mut safe = value.to_string();
    while safe.contains("--") {
        safe = safe.replace("--", "- -");
    }
    safe
}
