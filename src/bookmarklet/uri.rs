/// Scheme and self-invoking arrow function surrounding the encoded body
pub const URI_PREFIX: &str = "javascript:(() => {";
pub const URI_SUFFIX: &str = "})()";

/// Percent-encode `code` into a `javascript:` URI
///
/// Everything outside `A-Z a-z 0-9 - _ . ~` is encoded, so quotes,
/// whitespace and reserved characters never reach the browser raw.
pub fn to_uri(code: &str) -> String {
    format!("{}{}{}", URI_PREFIX, urlencoding::encode(code), URI_SUFFIX)
}

/// Recover the wrapped code from a URI produced by [`to_uri`]
pub fn decode_uri(uri: &str) -> Option<String> {
    let body = uri.strip_prefix(URI_PREFIX)?.strip_suffix(URI_SUFFIX)?;
    urlencoding::decode(body).ok().map(|decoded| decoded.into_owned())
}
