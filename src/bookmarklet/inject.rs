use sha2::{Digest, Sha256};

/// Prefix shared by every DOM id the wrappers create
const ID_PREFIX: &str = "bookmarklet__";

/// Kind of external dependency a wrapper injects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    Script,
    Style,
}

impl Dependency {
    fn label(self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Style => "style",
        }
    }
}

/// DOM id guarding a single injected dependency, e.g. `bookmarklet__script_<sha256>`
///
/// The kind is hashed along with the URL, so a script and a stylesheet
/// sharing a URL never share a fingerprint.
pub fn dom_id(kind: Dependency, url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(kind.label().as_bytes());
    hasher.update(b":");
    hasher.update(url.as_bytes());
    format!("{}{}_{}", ID_PREFIX, kind.label(), hex::encode(hasher.finalize()))
}

/// Wrap `code` so every declared script is loaded and every stylesheet
/// attached before it runs, in declaration order
pub fn wrap_code(code: &str, scripts: &[String], styles: &[String]) -> String {
    let mut wrapped = code.to_string();
    for style in styles.iter().rev() {
        wrapped = load_style(&wrapped, style);
    }
    for script in scripts.iter().rev() {
        wrapped = load_script(&wrapped, script);
    }
    wrapped
}

/// Run `code` from the load callback of a `<script>` element
pub fn load_script(code: &str, src: &str) -> String {
    let id = js_string(&dom_id(Dependency::Script, src));
    let src = js_string(src);
    format!(
        r#"
function callback(){{
    {code}
}}

if (!document.getElementById({id})) {{
    var s = document.createElement("script");
    if (s.addEventListener) {{
        s.addEventListener("load", callback, false);
    }} else if (s.readyState) {{
        s.onreadystatechange = callback;
    }}
    s.id = {id};
    s.src = {src};
    document.body.appendChild(s);
}} else {{
    callback();
}}
"#
    )
}

/// Attach a `<link rel="stylesheet">` before `code` runs
///
/// `code` is closed with a newline so a trailing `//` comment cannot
/// swallow whatever follows it.
pub fn load_style(code: &str, href: &str) -> String {
    let id = js_string(&dom_id(Dependency::Style, href));
    let href = js_string(href);
    format!(
        r#"
if (!document.getElementById({id})) {{
    var link = document.createElement("link");
    link.id = {id};
    link.rel = "stylesheet";
    link.href = {href};
    document.body.appendChild(link);
}}
{code}
"#
    )
}

/// Double-quoted JavaScript string literal
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
