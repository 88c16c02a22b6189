use crate::bookmarklet::Bookmarklet;
use html_escape::encode_text;

/// Netscape bookmark file that browsers can import, with all bookmarklets
/// in a "Bookmarklets" folder
pub fn bookmarks_file(bookmarklets: &[Bookmarklet]) -> String {
    let entries = bookmarklets
        .iter()
        .map(entry)
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL>
    <DT><H3>Bookmarklets</H3></DT>
    <DL>
        {entries}
    </DL>
</DL>
"#
    )
}

/// Descriptor comment followed by the bookmark anchor
pub fn entry(bookmarklet: &Bookmarklet) -> String {
    let comment = bookmarklet
        .html_comment()
        .lines()
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        "{}\n        <DT><A HREF=\"{}\">{}</A>",
        comment,
        bookmarklet.bookmarklet(),
        encode_text(bookmarklet.name())
    )
}
