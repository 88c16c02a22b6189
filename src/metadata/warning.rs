use std::fmt;

/// Non-fatal problems found while reading a metadata header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataWarning {
    /// `// @key value` with a key the parser does not know
    UnknownKey(String),
}

impl fmt::Display for MetadataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey(key) => write!(f, "Ignoring unknown metadata key: `{}`", key),
        }
    }
}
