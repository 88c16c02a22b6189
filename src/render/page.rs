use crate::bookmarklet::Bookmarklet;
use html_escape::{encode_double_quoted_attribute, encode_text};

const PAGE_STYLE: &str = r#"
            html,body,div {
                margin: 0;
                padding: 0;
                font: normal 16px/24px Helvetica Neue, Helvetica, sans-serif;
                color: #333;
            }
            #main {
                max-width: 630px;
                margin: 3em auto;
            }
            .bookmarklet {
                display: inline-block;
                padding: .5em 1em;
                color: #fff;
                background: #33e;
                border-radius: 4px;
                text-decoration: none;
            }
            a {
                color: #33e;
            }"#;

/// HTML page listing every bookmarklet as a draggable link
pub fn index_page(bookmarklets: &[Bookmarklet]) -> String {
    let links = bookmarklets
        .iter()
        .map(link)
        .collect::<Vec<_>>()
        .join("\n            ");

    format!(
        r#"<html>
    <head>
        <title>Bookmarklets</title>
        <style>{PAGE_STYLE}
        </style>
    </head>
    <body>
        <div id="main">
            <h1>Bookmarklets</h1>
            {links}
        </div>
    </body>
</html>"#
    )
}

/// `<p>` entry for one bookmarklet, with the author credited when known
pub fn link(bookmarklet: &Bookmarklet) -> String {
    format!(
        r#"<p><a class="bookmarklet" href="{}">{}</a>{}</p>"#,
        bookmarklet.bookmarklet(),
        encode_text(bookmarklet.name()),
        credit(bookmarklet)
    )
}

fn credit(bookmarklet: &Bookmarklet) -> String {
    let metadata = bookmarklet.metadata();
    let Some(author) = metadata.author.as_deref() else {
        return String::new();
    };

    match metadata.url.as_deref() {
        Some(url) => format!(
            r#" by <a href="{}">{}</a>"#,
            encode_double_quoted_attribute(url),
            encode_text(author)
        ),
        None => format!(" by {}", encode_text(author)),
    }
}
