use super::{Metadata, MetadataWarning};
use regex::Regex;
use std::sync::OnceLock;

/// Every header line starts with this marker
const COMMENT_MARKER: &str = "//";

/// `// @key value`, where the value starts at the first non-space character
fn directive_regex() -> &'static Regex {
    static DIRECTIVE: OnceLock<Regex> = OnceLock::new();
    DIRECTIVE.get_or_init(|| Regex::new(r"^// @(\w+) +(\S.*)$").expect("Invalid directive regex"))
}

/// Scan lines until the first one that is not a comment
pub(super) fn parse_header<I, S>(lines: I) -> (Metadata, Vec<MetadataWarning>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut metadata = Metadata::default();
    let mut warnings = Vec::new();

    for line in lines {
        let line = strip_line_ending(line.as_ref());
        if !line.starts_with(COMMENT_MARKER) {
            break;
        }

        // Comment lines that are not directives are skipped, they do not end the block
        let Some(captures) = directive_regex().captures(line) else {
            continue;
        };
        let key = &captures[1];
        let value = captures[2].to_string();

        match key {
            "name" => metadata.name = Some(value),
            "author" => metadata.author = Some(value),
            "url" => metadata.url = Some(value),
            "script" => metadata.scripts.push(value),
            "style" => metadata.styles.push(value),
            _ => warnings.push(MetadataWarning::UnknownKey(key.to_string())),
        }
    }

    (metadata, warnings)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
