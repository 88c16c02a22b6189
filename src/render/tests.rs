use super::*;
use crate::bookmarklet::Bookmarklet;
use pretty_assertions::assert_eq;

fn greeter() -> Bookmarklet {
    Bookmarklet::from_source(
        "greet.js",
        "// @name Greeter\n// @author Jane\n// @url https://jane.example/?a=1&b=2\nalert(\"hi\")\n",
    )
}

// ========================================================================
// Listing page
// ========================================================================

#[test]
fn test_link_with_author_and_url() {
    let bookmarklet = greeter();

    assert_eq!(
        link(&bookmarklet),
        format!(
            r#"<p><a class="bookmarklet" href="{}">Greeter</a> by <a href="https://jane.example/?a=1&amp;b=2">Jane</a></p>"#,
            bookmarklet.bookmarklet()
        )
    );
}

#[test]
fn test_link_with_author_only() {
    let bookmarklet = Bookmarklet::from_source("x.js", "// @author Seth Falco\nx();");
    assert!(link(&bookmarklet).ends_with(">x</a> by Seth Falco</p>"));
}

#[test]
fn test_link_url_without_author_is_not_rendered() {
    let bookmarklet = Bookmarklet::from_source("x.js", "// @url https://lonely.example\nx();");
    let html = link(&bookmarklet);

    assert!(!html.contains(" by "));
    assert!(!html.contains(r#"<a href="https://lonely.example"#));
    assert!(html.ends_with(">x</a></p>"));
}

#[test]
fn test_link_escapes_name() {
    let bookmarklet = Bookmarklet::from_source("x.js", "// @name <b>Bold</b>\nx();");
    assert!(link(&bookmarklet).contains(">&lt;b&gt;Bold&lt;/b&gt;</a>"));
}

#[test]
fn test_index_page_lists_all() {
    let bookmarklets = vec![greeter(), Bookmarklet::from_source("plain.js", "plain();")];
    let html = index_page(&bookmarklets);

    assert!(html.starts_with("<html>"));
    assert!(html.contains("<title>Bookmarklets</title>"));
    assert!(html.contains("<h1>Bookmarklets</h1>"));
    assert_eq!(html.matches(r#"class="bookmarklet""#).count(), 2);
    assert!(html.find(">Greeter</a>").unwrap() < html.find(">plain</a>").unwrap());
}

#[test]
fn test_index_page_empty() {
    let html = index_page(&[]);
    assert!(!html.contains(r#"class="bookmarklet" href"#));
    assert!(html.ends_with("</html>"));
}

// ========================================================================
// Bookmarks file
// ========================================================================

#[test]
fn test_bookmarks_entry() {
    let bookmarklet = Bookmarklet::from_source("greet.js", "// @name Greeter\nalert(1)\n");

    assert_eq!(
        entry(&bookmarklet),
        format!(
            "<!-- Greeter.js -->\n        <!-- name: Greeter -->\n        <!-- author: - -->\n        <!-- url: - -->\n        <DT><A HREF=\"{}\">Greeter</A>",
            bookmarklet.bookmarklet()
        )
    );
}

#[test]
fn test_bookmarks_entry_comment_stays_closed() {
    let bookmarklet = Bookmarklet::from_source(
        "evil.js",
        "// @name x --><b>\n// @author y-->\n// @url z-->\nx();\n",
    );
    let html = entry(&bookmarklet);
    let comments = html.split("<DT>").next().unwrap();

    assert_eq!(comments.matches("-->").count(), 4);
    assert_eq!(comments.matches("<!--").count(), 4);
}

#[test]
fn test_bookmarks_file_structure() {
    let html = bookmarks_file(&[greeter()]);

    assert!(html.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n"));
    assert!(html.contains("<DT><H3>Bookmarklets</H3></DT>"));
    assert!(html.contains(r#"<DT><A HREF="javascript:(() => {"#));
    assert!(html.contains(">Greeter</A>"));
    assert!(html.trim_end().ends_with("</DL>\n</DL>"));
}
